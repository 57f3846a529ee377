// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-precision date helpers shared by every period computation.
//!
//! All dates are `time::Date` values: calendar days with no time of day and
//! no offset, so daylight-saving transitions can never move a boundary onto
//! the neighbouring day.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

/// `YYYY-MM-DD`
pub const DAY_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Smallest year a period may live in.
pub const MIN_YEAR: u16 = 1;

/// Largest year a period may live in.
///
/// A period of this year can still end in the following January.
pub const MAX_YEAR: u16 = 9998;

/// Parses a loosely-typed day, month or year string into a date.
///
/// Accepted shapes, all zero-padded:
/// - `YYYY-MM-DD` → that day
/// - `YYYY-MM` → the first day of the month
/// - `YYYY` → January 1st of the year
///
/// # Errors
///
/// Returns `DomainError::InvalidDateFormat` if the input has any other shape
/// or names a day that does not exist (e.g. `2023-02-29`).
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidDateFormat {
        input: value.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = value.split('-').collect();
    let widths: Vec<usize> = parts.iter().map(|part| part.len()).collect();
    let all_digits: bool = parts
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if !all_digits {
        return Err(invalid("expected YYYY, YYYY-MM or YYYY-MM-DD"));
    }

    let (year, month, day): (&str, Option<&str>, Option<&str>) = match widths.as_slice() {
        [4] => (parts[0], None, None),
        [4, 2] => (parts[0], Some(parts[1]), None),
        [4, 2, 2] => (parts[0], Some(parts[1]), Some(parts[2])),
        _ => return Err(invalid("expected YYYY, YYYY-MM or YYYY-MM-DD")),
    };

    let year: i32 = year.parse::<i32>().map_err(|e| invalid(&e.to_string()))?;
    let month: u8 = month
        .map_or(Ok(1), str::parse::<u8>)
        .map_err(|e| invalid(&e.to_string()))?;
    let day: u8 = day
        .map_or(Ok(1), str::parse::<u8>)
        .map_err(|e| invalid(&e.to_string()))?;

    let month: Month = Month::try_from(month).map_err(|e| invalid(&e.to_string()))?;
    Date::from_calendar_date(year, month, day).map_err(|e| invalid(&e.to_string()))
}

/// Parses a strict `YYYY-MM-DD` day.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateFormat` if the input is not a real day in
/// that exact shape.
pub fn parse_day(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DAY_FORMAT).map_err(|e| DomainError::InvalidDateFormat {
        input: value.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn day_from_date(date: Date) -> String {
    // A calendar date carries every component the format asks for.
    date.format(DAY_FORMAT).unwrap_or_default()
}

/// Sortable integer form of a date, e.g. `20240105`.
#[must_use]
pub fn day_number(date: Date) -> u32 {
    // Years are validated positive before any boundary is produced.
    let year: u32 = u32::try_from(date.year()).unwrap_or(0);
    year * 10_000 + u32::from(u8::from(date.month())) * 100 + u32::from(date.day())
}

/// An inclusive day range in sortable `YYYYMMDD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayBounds {
    /// First day of the period.
    pub start: u32,
    /// Last day of the period.
    pub end: u32,
}

impl DayBounds {
    /// Builds bounds from inclusive start and end dates.
    #[must_use]
    pub fn from_dates(start: Date, end: Date) -> Self {
        Self {
            start: day_number(start),
            end: day_number(end),
        }
    }
}

/// Serde adapter storing a date as `YYYY-MM-DD`.
pub mod day_serde {
    use super::{day_from_date, parse_day};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&day_from_date(*date))
    }

    /// Deserializes a strict `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Fails if the text is not a real day.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        parse_day(&text).map_err(serde::de::Error::custom)
    }
}

/// Today's date in UTC.
#[must_use]
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Builds a date whose day is clamped to the length of its month.
///
/// # Errors
///
/// Returns an error if the year is outside the representable range.
pub fn clamped_date(year: i32, month: Month, day: u8) -> Result<Date, DomainError> {
    let day: u8 = day.clamp(1, time::util::days_in_month(month, year));
    Date::from_calendar_date(year, month, day).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("building {year}-{:02}-{day:02}", u8::from(month)),
    })
}

/// Splits a signed month offset applied to `(year, month)` into a new
/// `(year, month)` pair.
///
/// Returns `None` if the offset overflows.
#[must_use]
pub fn shift_month(year: i32, month: Month, months: i64) -> Option<(i64, Month)> {
    let zero_based: i64 = i64::from(year)
        .checked_mul(12)?
        .checked_add(i64::from(u8::from(month)) - 1)?
        .checked_add(months)?;
    let new_year: i64 = zero_based.div_euclid(12);
    let steps: u8 = u8::try_from(zero_based.rem_euclid(12)).ok()?;
    Some((new_year, Month::January.nth_next(steps)))
}

/// Adds a whole number of days to a date.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the result is not
/// representable.
pub fn add_days(date: Date, days: i64, operation: &str) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: operation.to_string(),
        })
}
