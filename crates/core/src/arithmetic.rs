// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain-preserving period arithmetic.
//!
//! Pay periods are counted as `year * max_periods + (index - 1)`, so moving
//! any distance is a single division regardless of how many year boundaries
//! it crosses. Results are rebuilt through `PeriodId::pay_period`, which keeps
//! them in the pay period slot band.

use crate::calendar::PeriodCalendar;
use crate::error::CoreError;
use paycal_domain::{DomainError, PeriodConfig, PeriodId, calendar_month};

impl PeriodCalendar {
    /// Periods elapsed between year 0 and `id`, counted in `id`'s domain.
    ///
    /// # Errors
    ///
    /// For pay periods: `CoreError::MissingConfig` when disabled, or
    /// `InvalidPayPeriodIndex` when the index exceeds the cadence.
    pub(crate) fn ordinal(&self, id: PeriodId) -> Result<i64, CoreError> {
        let (value, _): (i64, i64) = self.ordinal_and_scale(id)?;
        Ok(value)
    }

    fn ordinal_and_scale(&self, id: PeriodId) -> Result<(i64, i64), CoreError> {
        match id {
            PeriodId::Calendar { year, month } => Ok((
                i64::from(year) * 12 + i64::from(u8::from(month)) - 1,
                12,
            )),
            PeriodId::PayPeriod { year, index } => {
                let config: &PeriodConfig = self.require_config(&id)?;
                let max: u8 = config.cadence.max_periods();
                if index > max {
                    return Err(DomainError::InvalidPayPeriodIndex { index, max }.into());
                }
                Ok((
                    i64::from(year) * i64::from(max) + i64::from(index) - 1,
                    i64::from(max),
                ))
            }
        }
    }

    /// Moves `id` by `offset` periods of its own domain.
    ///
    /// # Errors
    ///
    /// Returns `DateArithmeticOverflow` when the result leaves the supported
    /// years, plus the pay period errors of [`Self::ordinal`].
    pub(crate) fn offset(&self, id: PeriodId, offset: i64) -> Result<PeriodId, CoreError> {
        if let PeriodId::Calendar { year, month } = id {
            return Ok(calendar_month::add_months(year, month, offset)?);
        }

        let (ordinal, per_year): (i64, i64) = self.ordinal_and_scale(id)?;
        let overflow = || DomainError::DateArithmeticOverflow {
            operation: format!("moving pay period {id} by {offset}"),
        };
        let target: i64 = ordinal.checked_add(offset).ok_or_else(overflow)?;
        let year: i64 = target.div_euclid(per_year);
        let index: u8 = u8::try_from(target.rem_euclid(per_year) + 1).map_err(|_| overflow())?;
        PeriodId::pay_period(year, index).map_err(|e| match e {
            DomainError::InvalidYear { .. } => CoreError::Domain(overflow()),
            other => CoreError::Domain(other),
        })
    }

    /// Adds `n` periods of the identifier's own domain.
    ///
    /// A calendar month moves by months and never consults the configuration;
    /// a pay period moves by pay periods, rolling over after the cadence's
    /// last period of the year.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingConfig` for a pay period while pay periods
    /// are disabled, or `DateArithmeticOverflow` past the supported years.
    pub fn add_months(&self, id: PeriodId, n: i64) -> Result<PeriodId, CoreError> {
        self.offset(id, n)
    }

    /// Subtracts `n` periods of the identifier's own domain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_months`].
    pub fn sub_months(&self, id: PeriodId, n: i64) -> Result<PeriodId, CoreError> {
        let negated: i64 = n
            .checked_neg()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("subtracting {n} periods from {id}"),
            })?;
        self.offset(id, negated)
    }

    /// The following period of the same domain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_months`].
    pub fn next_month(&self, id: PeriodId) -> Result<PeriodId, CoreError> {
        self.offset(id, 1)
    }

    /// The preceding period of the same domain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_months`].
    pub fn prev_month(&self, id: PeriodId) -> Result<PeriodId, CoreError> {
        self.offset(id, -1)
    }

    /// The pay period after `id`; the last period of a year is followed by
    /// `{year + 1}-13`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a calendar month, and the errors of
    /// [`Self::add_months`].
    pub fn next_pay_period(&self, id: PeriodId) -> Result<PeriodId, CoreError> {
        self.add_pay_periods(id, 1)
    }

    /// The pay period before `id`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::next_pay_period`].
    pub fn prev_pay_period(&self, id: PeriodId) -> Result<PeriodId, CoreError> {
        self.add_pay_periods(id, -1)
    }

    /// Moves a pay period by `n` pay periods.
    ///
    /// # Errors
    ///
    /// Same as [`Self::next_pay_period`].
    pub fn add_pay_periods(&self, id: PeriodId, n: i64) -> Result<PeriodId, CoreError> {
        if !id.is_pay_period() {
            return Err(DomainError::InvalidIdentifier {
                input: id.to_string(),
                reason: String::from("expected a pay period identifier"),
            }
            .into());
        }
        self.offset(id, n)
    }
}
