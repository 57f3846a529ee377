// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar month arithmetic.
//!
//! Everything here works on `(year, month)` pairs taken from
//! [`PeriodId::Calendar`] and never looks at pay period configuration.

use crate::dates::{DayBounds, MAX_YEAR, MIN_YEAR, clamped_date, shift_month};
use crate::error::DomainError;
use crate::identifier::PeriodId;
use time::{Date, Month};

/// Adds `months` (possibly negative) to a calendar month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result leaves the
/// supported year range.
pub fn add_months(year: u16, month: Month, months: i64) -> Result<PeriodId, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("adding {months} months to {year:04}-{:02}", u8::from(month)),
    };
    let (new_year, new_month): (i64, Month) =
        shift_month(i32::from(year), month, months).ok_or_else(overflow)?;
    if new_year < i64::from(MIN_YEAR) || new_year > i64::from(MAX_YEAR) {
        return Err(overflow());
    }
    PeriodId::calendar(new_year, new_month)
}

/// Subtracts `months` from a calendar month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result leaves the
/// supported year range.
pub fn sub_months(year: u16, month: Month, months: i64) -> Result<PeriodId, DomainError> {
    let negated: i64 = months
        .checked_neg()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("subtracting {months} months"),
        })?;
    add_months(year, month, negated)
}

/// The following calendar month.
///
/// # Errors
///
/// Fails only past December 9998.
pub fn next_month(year: u16, month: Month) -> Result<PeriodId, DomainError> {
    add_months(year, month, 1)
}

/// The preceding calendar month.
///
/// # Errors
///
/// Fails only before January 0001.
pub fn prev_month(year: u16, month: Month) -> Result<PeriodId, DomainError> {
    add_months(year, month, -1)
}

/// The calendar month containing `date`.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` for dates outside the supported years.
pub fn month_from_date(date: Date) -> Result<PeriodId, DomainError> {
    PeriodId::calendar(i64::from(date.year()), date.month())
}

/// First day of a calendar month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the date is not
/// representable.
pub fn first_day(year: u16, month: Month) -> Result<Date, DomainError> {
    clamped_date(i32::from(year), month, 1)
}

/// Last day of a calendar month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the date is not
/// representable.
pub fn last_day(year: u16, month: Month) -> Result<Date, DomainError> {
    let year: i32 = i32::from(year);
    clamped_date(year, month, time::util::days_in_month(month, year))
}

/// Inclusive first/last day of a calendar month.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if either day is not
/// representable.
pub fn bounds(year: u16, month: Month) -> Result<DayBounds, DomainError> {
    Ok(DayBounds::from_dates(
        first_day(year, month)?,
        last_day(year, month)?,
    ))
}

/// Formats the first day of a calendar month with a `time` format
/// description such as `"[month repr:long] [year]"`.
///
/// # Errors
///
/// Returns `DomainError::InvalidFormatPattern` if the pattern does not parse
/// or asks for components a date does not have (e.g. `[hour]`).
pub fn format(year: u16, month: Month, pattern: &str) -> Result<String, DomainError> {
    format_date(first_day(year, month)?, pattern)
}

/// Formats a date with a `time` format description.
///
/// # Errors
///
/// Returns `DomainError::InvalidFormatPattern` if the pattern is unusable.
pub fn format_date(date: Date, pattern: &str) -> Result<String, DomainError> {
    let invalid = |reason: String| DomainError::InvalidFormatPattern {
        pattern: pattern.to_string(),
        reason,
    };
    let items = time::format_description::parse(pattern).map_err(|e| invalid(e.to_string()))?;
    date.format(items.as_slice()).map_err(|e| invalid(e.to_string()))
}

/// Display name such as `"January 2024"`.
#[must_use]
pub fn name(year: u16, month: Month) -> String {
    format!("{month} {year}")
}

/// January of `year`.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` for unsupported years.
pub fn year_start(year: u16) -> Result<PeriodId, DomainError> {
    PeriodId::calendar(i64::from(year), Month::January)
}

/// December of `year`.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` for unsupported years.
pub fn year_end(year: u16) -> Result<PeriodId, DomainError> {
    PeriodId::calendar(i64::from(year), Month::December)
}

/// Signed number of calendar months from `(b_year, b_month)` to
/// `(a_year, a_month)`.
#[must_use]
pub fn difference_in_calendar_months(
    a_year: u16,
    a_month: Month,
    b_year: u16,
    b_month: Month,
) -> i64 {
    let a: i64 = i64::from(a_year) * 12 + i64::from(u8::from(a_month));
    let b: i64 = i64::from(b_year) * 12 + i64::from(u8::from(b_month));
    a - b
}
