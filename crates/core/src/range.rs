// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ranges and comparisons.
//!
//! This is the only place two periods meet, and it refuses to let a calendar
//! month meet a pay period. The domain check runs before any boundary is
//! computed.

use crate::calendar::PeriodCalendar;
use crate::error::CoreError;
use paycal_domain::{Domain, DomainError, PeriodId, day_from_date, parse_day};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use time::Date;

/// One side of a comparison: a period identifier or a bare day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A `YYYY-SS` identifier.
    Period(PeriodId),
    /// A `YYYY-MM-DD` day.
    Date(Date),
}

impl From<PeriodId> for Operand {
    fn from(value: PeriodId) -> Self {
        Self::Period(value)
    }
}

impl From<Date> for Operand {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Period(id) => write!(f, "{id}"),
            Self::Date(date) => f.write_str(&day_from_date(*date)),
        }
    }
}

impl FromStr for Operand {
    type Err = DomainError;

    /// `YYYY-MM-DD` parses as a day, anything else as an identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 10 {
            parse_day(s).map(Self::Date)
        } else {
            s.parse().map(Self::Period)
        }
    }
}

/// Two operands after domain matching.
enum Resolved {
    Dates(Date, Date),
    Periods(PeriodId, PeriodId),
}

impl PeriodCalendar {
    /// The domain a bare day is mapped into under the active configuration.
    fn date_domain(&self) -> Domain {
        if self.pay_periods_enabled() {
            Domain::PayPeriod
        } else {
            Domain::CalendarMonth
        }
    }

    fn ensure_same_domain(
        first: &dyn fmt::Display,
        first_domain: Domain,
        second: &dyn fmt::Display,
        second_domain: Domain,
    ) -> Result<(), CoreError> {
        if first_domain == second_domain {
            Ok(())
        } else {
            Err(CoreError::MixedDomain {
                first: first.to_string(),
                first_domain,
                second: second.to_string(),
                second_domain,
            })
        }
    }

    /// Classifies both operands and rejects mixed domains.
    ///
    /// A lone bare day is replaced by its containing period only after the
    /// domains are known to agree.
    fn resolve(&self, a: Operand, b: Operand) -> Result<Resolved, CoreError> {
        match (a, b) {
            (Operand::Date(x), Operand::Date(y)) => Ok(Resolved::Dates(x, y)),
            (Operand::Period(x), Operand::Period(y)) => {
                Self::ensure_same_domain(&x, x.domain(), &y, y.domain())?;
                Ok(Resolved::Periods(x, y))
            }
            (Operand::Date(x), Operand::Period(y)) => {
                Self::ensure_same_domain(&a, self.date_domain(), &y, y.domain())?;
                Ok(Resolved::Periods(self.period_for_date(x)?, y))
            }
            (Operand::Period(x), Operand::Date(y)) => {
                Self::ensure_same_domain(&x, x.domain(), &b, self.date_domain())?;
                Ok(Resolved::Periods(x, self.period_for_date(y)?))
            }
        }
    }

    /// Chronological order of two operands.
    ///
    /// Periods compare by their start dates.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MixedDomain` if the operands resolve to different
    /// domains, or `CoreError::MissingConfig` for pay periods while pay
    /// periods are disabled.
    pub fn compare(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Ordering, CoreError> {
        match self.resolve(a.into(), b.into())? {
            Resolved::Dates(x, y) => Ok(x.cmp(&y)),
            Resolved::Periods(x, y) => Ok(self.start_date(x)?.cmp(&self.start_date(y)?)),
        }
    }

    /// Returns whether `a` starts before `b`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::compare`].
    pub fn is_before(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<bool, CoreError> {
        Ok(self.compare(a, b)? == Ordering::Less)
    }

    /// Returns whether `a` starts after `b`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::compare`].
    pub fn is_after(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<bool, CoreError> {
        Ok(self.compare(a, b)? == Ordering::Greater)
    }

    /// Signed distance `a - b` in periods of the shared domain.
    ///
    /// Bare days count as their containing period.
    ///
    /// # Errors
    ///
    /// Same as [`Self::compare`].
    pub fn difference(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<i64, CoreError> {
        let (x, y): (PeriodId, PeriodId) = match self.resolve(a.into(), b.into())? {
            Resolved::Dates(x, y) => (self.period_for_date(x)?, self.period_for_date(y)?),
            Resolved::Periods(x, y) => (x, y),
        };
        Ok(self.ordinal(x)? - self.ordinal(y)?)
    }

    /// Identifiers from `start` up to but excluding `end`.
    ///
    /// Empty when `start` is not before `end`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MixedDomain` for a calendar month paired with a pay
    /// period, or `CoreError::MissingConfig` for pay periods while pay
    /// periods are disabled.
    pub fn range(&self, start: PeriodId, end: PeriodId) -> Result<Vec<PeriodId>, CoreError> {
        self.enumerate(start, end, false)
    }

    /// Identifiers from `start` through `end`.
    ///
    /// Empty when `start` is after `end`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::range`].
    pub fn range_inclusive(
        &self,
        start: PeriodId,
        end: PeriodId,
    ) -> Result<Vec<PeriodId>, CoreError> {
        self.enumerate(start, end, true)
    }

    fn enumerate(
        &self,
        start: PeriodId,
        end: PeriodId,
        inclusive: bool,
    ) -> Result<Vec<PeriodId>, CoreError> {
        Self::ensure_same_domain(&start, start.domain(), &end, end.domain())?;

        let span: i64 = self.ordinal(end)? - self.ordinal(start)? + i64::from(inclusive);
        (0..span.max(0))
            .map(|step| self.offset(start, step))
            .collect()
    }
}
