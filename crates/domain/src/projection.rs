// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay period projection.
//!
//! A configuration names one anchor date the pay cycle passes through. The
//! periods of any year are re-derived from that anchor in constant time, so
//! a year decades away from the anchor costs the same as the anchor's own
//! year.

use crate::config::{Cadence, PeriodConfig};
use crate::dates::{DayBounds, MAX_YEAR, MIN_YEAR, add_days, clamped_date};
use crate::error::DomainError;
use crate::identifier::PeriodId;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// A single projected pay period.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    /// The 1-based index of this pay period within its year.
    index: u8,
    /// The year the period belongs to.
    year: u16,
    /// The start date of this pay period (inclusive).
    #[serde(with = "crate::dates::day_serde")]
    start_date: Date,
    /// The end date of this pay period (inclusive).
    #[serde(with = "crate::dates::day_serde")]
    end_date: Date,
    /// Display label, e.g. `"Pay Period 3"`.
    label: String,
}

impl PayPeriod {
    /// Returns the pay period index (1-based).
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the year the period belongs to.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the number of days in this pay period.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Returns whether `date` falls inside this period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// The `YYYY-SS` identifier of this period.
    ///
    /// # Errors
    ///
    /// Returns an error if the index does not fit the identifier band, which
    /// cannot happen for periods produced by [`project`].
    pub fn id(&self) -> Result<PeriodId, DomainError> {
        PeriodId::pay_period(i64::from(self.year), self.index)
    }

    /// Inclusive bounds in `YYYYMMDD` form.
    #[must_use]
    pub fn bounds(&self) -> DayBounds {
        DayBounds::from_dates(self.start_date, self.end_date)
    }
}

/// Display label for a pay period index.
#[must_use]
pub fn pay_period_label(index: u8) -> String {
    format!("Pay Period {index}")
}

/// Projects the `index`-th pay period of `year` under `config`.
///
/// The `enabled` flag is not consulted; callers decide whether pay periods
/// are active.
///
/// # Arguments
///
/// * `index` - The 1-based pay period index
/// * `config` - The pay period configuration
/// * `year` - The target year
///
/// # Errors
///
/// Returns an error if:
/// - The year is outside `1..=9998`
/// - The index exceeds the cadence's periods per year
/// - Date arithmetic overflows
pub fn project(index: u8, config: &PeriodConfig, year: u16) -> Result<PayPeriod, DomainError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(DomainError::InvalidYear {
            year: i32::from(year),
        });
    }
    let max: u8 = config.cadence.max_periods();
    if index < 1 || index > max {
        return Err(DomainError::InvalidPayPeriodIndex { index, max });
    }

    let (start_date, end_date): (Date, Date) = match config.cadence.interval_days() {
        Some(interval) => fixed_interval_bounds(index, config.anchor_date, interval, year)?,
        None if config.cadence == Cadence::Monthly => {
            monthly_bounds(index, config.anchor_date.day(), year)?
        }
        None => semimonthly_bounds(index, year)?,
    };

    Ok(PayPeriod {
        index,
        year,
        start_date,
        end_date,
        label: pay_period_label(index),
    })
}

/// First start of the cycle that lands inside `year`.
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` unless `interval` is at least one
/// day, or `DomainError::DateArithmeticOverflow` if the projection leaves the
/// representable date range.
pub fn first_period_start(anchor: Date, interval: i64, year: u16) -> Result<Date, DomainError> {
    if interval < 1 {
        return Err(DomainError::InvalidInterval { days: interval });
    }
    let target: i32 = i32::from(year);
    let january_first: Date = clamped_date(target, Month::January, 1)?;

    // Whole intervals from the anchor back to the last start on or before Jan 1.
    let offset_days: i64 = (january_first - anchor).whole_days();
    let steps: i64 = offset_days.div_euclid(interval);
    let mut candidate: Date = add_days(anchor, steps * interval, "projecting anchor to year")?;

    while candidate.year() < target {
        candidate = add_days(candidate, interval, "stepping projected start forward")?;
    }
    while candidate.year() > target {
        candidate = add_days(candidate, -interval, "stepping projected start backward")?;
    }
    Ok(candidate)
}

fn fixed_interval_bounds(
    index: u8,
    anchor: Date,
    interval: i64,
    year: u16,
) -> Result<(Date, Date), DomainError> {
    let first: Date = first_period_start(anchor, interval, year)?;
    let start: Date = add_days(
        first,
        i64::from(index - 1) * interval,
        &format!("calculating pay period {index} start date"),
    )?;
    let end: Date = add_days(
        start,
        interval - 1,
        &format!("calculating pay period {index} end date"),
    )?;
    Ok((start, end))
}

/// Pay day `anchor_day` of month `index`, clamped to short months.
fn monthly_start(index: u8, anchor_day: u8, year: u16) -> Result<Date, DomainError> {
    let (start_year, month): (i32, Month) = if index > 12 {
        (i32::from(year) + 1, Month::January)
    } else {
        (i32::from(year), month_of(index))
    };
    clamped_date(start_year, month, anchor_day)
}

fn monthly_bounds(index: u8, anchor_day: u8, year: u16) -> Result<(Date, Date), DomainError> {
    let start: Date = monthly_start(index, anchor_day, year)?;
    let next_start: Date = monthly_start(index + 1, anchor_day, year)?;
    let end: Date = add_days(
        next_start,
        -1,
        &format!("calculating pay period {index} end date"),
    )?;
    Ok((start, end))
}

fn semimonthly_bounds(index: u8, year: u16) -> Result<(Date, Date), DomainError> {
    let month: Month = month_of((index - 1) / 2 + 1);
    let first_half: bool = (index - 1) % 2 == 0;
    let target: i32 = i32::from(year);
    if first_half {
        Ok((
            clamped_date(target, month, 1)?,
            clamped_date(target, month, 15)?,
        ))
    } else {
        Ok((
            clamped_date(target, month, 16)?,
            clamped_date(target, month, time::util::days_in_month(month, target))?,
        ))
    }
}

/// Month number `1..=12` to `Month`; callers keep the number in range.
fn month_of(number: u8) -> Month {
    Month::try_from(number).unwrap_or(Month::December)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn biweekly() -> PeriodConfig {
        PeriodConfig::new(Cadence::Biweekly, date!(2024 - 01 - 05))
    }

    #[test]
    fn test_biweekly_first_periods_of_anchor_year() {
        let first: PayPeriod = project(1, &biweekly(), 2024).unwrap();
        assert_eq!(first.start_date(), date!(2024 - 01 - 05));
        assert_eq!(first.end_date(), date!(2024 - 01 - 18));
        assert_eq!(first.label(), "Pay Period 1");

        let second: PayPeriod = project(2, &biweekly(), 2024).unwrap();
        assert_eq!(second.start_date(), date!(2024 - 01 - 19));
        assert_eq!(second.end_date(), date!(2024 - 02 - 01));
    }

    #[test]
    fn test_first_start_projects_far_backward_and_forward() {
        let anchor: Date = date!(2024 - 01 - 05);
        let past: Date = first_period_start(anchor, 14, 1990).unwrap();
        assert_eq!(past.year(), 1990);
        assert_eq!((anchor - past).whole_days() % 14, 0);
        assert!(past.ordinal() <= 14);

        let future: Date = first_period_start(anchor, 7, 2100).unwrap();
        assert_eq!(future.year(), 2100);
        assert_eq!((future - anchor).whole_days() % 7, 0);
        assert!(future.ordinal() <= 7);
    }

    #[test]
    fn test_first_start_rejects_non_positive_interval() {
        let anchor: Date = date!(2024 - 01 - 05);
        assert_eq!(
            first_period_start(anchor, 0, 2024),
            Err(DomainError::InvalidInterval { days: 0 })
        );
        assert_eq!(
            first_period_start(anchor, -14, 2024),
            Err(DomainError::InvalidInterval { days: -14 })
        );
    }

    #[test]
    fn test_anchor_on_january_first() {
        let start: Date = first_period_start(date!(2023 - 01 - 01), 7, 2023).unwrap();
        assert_eq!(start, date!(2023 - 01 - 01));
    }

    #[test]
    fn test_weekly_period_is_seven_days() {
        let config: PeriodConfig = PeriodConfig::new(Cadence::Weekly, date!(2024 - 01 - 01));
        let period: PayPeriod = project(10, &config, 2024).unwrap();
        assert_eq!(period.start_date(), date!(2024 - 03 - 04));
        assert_eq!(period.duration_days(), 7);
    }

    #[test]
    fn test_monthly_uses_anchor_day() {
        let config: PeriodConfig = PeriodConfig::new(Cadence::Monthly, date!(2024 - 01 - 15));
        let first: PayPeriod = project(1, &config, 2024).unwrap();
        assert_eq!(first.start_date(), date!(2024 - 01 - 15));
        assert_eq!(first.end_date(), date!(2024 - 02 - 14));

        let last: PayPeriod = project(12, &config, 2024).unwrap();
        assert_eq!(last.start_date(), date!(2024 - 12 - 15));
        assert_eq!(last.end_date(), date!(2025 - 01 - 14));
    }

    #[test]
    fn test_monthly_clamps_each_month_independently() {
        let config: PeriodConfig = PeriodConfig::new(Cadence::Monthly, date!(2024 - 01 - 31));
        let january: PayPeriod = project(1, &config, 2024).unwrap();
        assert_eq!(january.start_date(), date!(2024 - 01 - 31));
        assert_eq!(january.end_date(), date!(2024 - 02 - 28));

        let february: PayPeriod = project(2, &config, 2024).unwrap();
        assert_eq!(february.start_date(), date!(2024 - 02 - 29));
        assert_eq!(february.end_date(), date!(2024 - 03 - 30));

        let march: PayPeriod = project(3, &config, 2024).unwrap();
        assert_eq!(march.start_date(), date!(2024 - 03 - 31));
    }

    #[test]
    fn test_semimonthly_halves() {
        let config: PeriodConfig = PeriodConfig::new(Cadence::Semimonthly, date!(2024 - 01 - 01));
        let third: PayPeriod = project(3, &config, 2024).unwrap();
        assert_eq!(third.start_date(), date!(2024 - 02 - 01));
        assert_eq!(third.end_date(), date!(2024 - 02 - 15));

        let fourth: PayPeriod = project(4, &config, 2024).unwrap();
        assert_eq!(fourth.start_date(), date!(2024 - 02 - 16));
        assert_eq!(fourth.end_date(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(
            project(27, &biweekly(), 2024),
            Err(DomainError::InvalidPayPeriodIndex { index: 27, max: 26 })
        );
        assert!(matches!(
            project(0, &biweekly(), 2024),
            Err(DomainError::InvalidPayPeriodIndex { index: 0, .. })
        ));
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(
            project(1, &biweekly(), 0),
            Err(DomainError::InvalidYear { year: 0 })
        );
        assert!(project(1, &biweekly(), 9999).is_err());
    }

    #[test]
    fn test_period_id() {
        let period: PayPeriod = project(2, &biweekly(), 2024).unwrap();
        assert_eq!(period.id().unwrap().to_string(), "2024-14");
        assert_eq!(
            period.bounds(),
            DayBounds {
                start: 20_240_119,
                end: 20_240_201
            }
        );
    }
}
