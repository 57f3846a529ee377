// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date to period lookups.

use crate::calendar::PeriodCalendar;
use crate::error::CoreError;
use paycal_domain::{DomainError, PayPeriod, PeriodId, calendar_month};
use std::sync::Arc;
use time::{Date, Month};

impl PeriodCalendar {
    /// The period containing `date`: its pay period when pay periods are
    /// enabled, otherwise its calendar month.
    ///
    /// # Errors
    ///
    /// Returns an error for dates outside the supported years.
    pub fn period_for_date(&self, date: Date) -> Result<PeriodId, CoreError> {
        if self.pay_periods_enabled() {
            self.pay_period_for_date(date)
        } else {
            Ok(calendar_month::month_from_date(date)?)
        }
    }

    /// The pay period with the latest start on or before `date`.
    ///
    /// Looks in the date's year first, then falls back to the last period of
    /// the previous year. A day in a year-end gap left by the fixed period
    /// count belongs to the most recently started period.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingConfig` when pay periods are disabled.
    pub fn pay_period_for_date(&self, date: Date) -> Result<PeriodId, CoreError> {
        let year: i32 = date.year();
        let periods: Arc<[PayPeriod]> = self.generate_periods(year)?;
        if let Some(period) = periods.iter().rev().find(|p| p.start_date() <= date) {
            return Ok(period.id()?);
        }

        let previous: Arc<[PayPeriod]> = self.generate_periods(year - 1)?;
        previous
            .last()
            .ok_or(CoreError::Domain(DomainError::InvalidYear { year: year - 1 }))?
            .id()
            .map_err(CoreError::from)
    }

    /// Number of pay periods of the month's year that start inside the
    /// calendar month `id`; 0 when pay periods are disabled.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if `id` is a pay period.
    pub fn pay_period_count_for_month(&self, id: PeriodId) -> Result<usize, CoreError> {
        let PeriodId::Calendar { year, month } = id else {
            return Err(not_a_calendar_month(id).into());
        };
        if !self.pay_periods_enabled() {
            return Ok(0);
        }
        let periods: Arc<[PayPeriod]> = self.generate_periods(i32::from(year))?;
        Ok(periods
            .iter()
            .filter(|p| p.start_date().month() == month)
            .count())
    }

    /// 1-based position of pay period `id` among the pay periods that start in
    /// the same calendar month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` if `id` is a calendar month, or
    /// `CoreError::MissingConfig` when pay periods are disabled.
    pub fn pay_period_number_in_month(&self, id: PeriodId) -> Result<usize, CoreError> {
        let PeriodId::PayPeriod { year, index } = id else {
            return Err(DomainError::InvalidIdentifier {
                input: id.to_string(),
                reason: String::from("expected a pay period identifier"),
            }
            .into());
        };
        let period: PayPeriod = self.pay_period(year, index)?;
        let month: Month = period.start_date().month();
        let periods: Arc<[PayPeriod]> = self.generate_periods(i32::from(year))?;
        Ok(periods
            .iter()
            .filter(|p| p.start_date().month() == month && p.index() <= index)
            .count())
    }
}

fn not_a_calendar_month(id: PeriodId) -> DomainError {
    DomainError::InvalidIdentifier {
        input: id.to_string(),
        reason: String::from("expected a calendar month identifier"),
    }
}
