// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `YYYY-SS` period identifier shared by calendar months and pay periods.
//!
//! Slots `01..=12` are calendar months, slots `13..=99` are pay periods
//! (pay period index = slot - 12). The textual form is parsed exactly once,
//! into [`PeriodId`], and every later decision is made on the enum tag.
//!
//! `PeriodId` intentionally has no `Ord`: ordering across the two domains is
//! meaningless, so comparisons go through the domain-aware functions of the
//! `paycal` crate.

use crate::calendar_month;
use crate::dates::{MAX_YEAR, MIN_YEAR};
use crate::error::DomainError;
use crate::projection::pay_period_label;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::Month;

/// First slot used for pay periods.
pub const FIRST_PAY_PERIOD_SLOT: u8 = 13;

/// Last encodable slot.
pub const LAST_SLOT: u8 = 99;

/// Largest pay period index the identifier format can carry.
pub const MAX_PAY_PERIOD_INDEX: u8 = LAST_SLOT - FIRST_PAY_PERIOD_SLOT + 1;

/// Which indexing scheme an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Slots `01..=12`.
    CalendarMonth,
    /// Slots `13..=99`.
    PayPeriod,
}

impl Domain {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CalendarMonth => "calendar month",
            Self::PayPeriod => "pay period",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed period identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PeriodId {
    /// A Gregorian month.
    Calendar {
        /// The year.
        year: u16,
        /// The month.
        month: Month,
    },
    /// The `index`-th pay period of `year` (1-based).
    PayPeriod {
        /// The year.
        year: u16,
        /// The 1-based period index within the year.
        index: u8,
    },
}

impl PeriodId {
    /// Builds a calendar month identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if the year is out of range.
    pub fn calendar(year: i64, month: Month) -> Result<Self, DomainError> {
        let year: u16 = checked_year(year)?;
        Ok(Self::Calendar { year, month })
    }

    /// Builds a pay period identifier.
    ///
    /// This is the only way arithmetic produces pay period identifiers, so a
    /// result can never fall back into the calendar slot band.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is out of range or the index does not fit
    /// in slots `13..=99`.
    pub fn pay_period(year: i64, index: u8) -> Result<Self, DomainError> {
        let year: u16 = checked_year(year)?;
        if !(1..=MAX_PAY_PERIOD_INDEX).contains(&index) {
            return Err(DomainError::InvalidPayPeriodIndex {
                index,
                max: MAX_PAY_PERIOD_INDEX,
            });
        }
        Ok(Self::PayPeriod { year, index })
    }

    /// The domain this identifier belongs to.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Calendar { .. } => Domain::CalendarMonth,
            Self::PayPeriod { .. } => Domain::PayPeriod,
        }
    }

    /// Returns whether this is a pay period identifier.
    #[must_use]
    pub const fn is_pay_period(&self) -> bool {
        matches!(self, Self::PayPeriod { .. })
    }

    /// The `YYYY` part.
    #[must_use]
    pub const fn year(&self) -> u16 {
        match self {
            Self::Calendar { year, .. } | Self::PayPeriod { year, .. } => *year,
        }
    }

    /// The raw `SS` part as it appears in the textual form.
    #[must_use]
    pub const fn slot(&self) -> u8 {
        match self {
            Self::Calendar { month, .. } => *month as u8,
            Self::PayPeriod { index, .. } => *index + FIRST_PAY_PERIOD_SLOT - 1,
        }
    }

    /// The month number for calendar months, the period index for pay periods.
    #[must_use]
    pub const fn slot_index(&self) -> u8 {
        match self {
            Self::Calendar { month, .. } => *month as u8,
            Self::PayPeriod { index, .. } => *index,
        }
    }

    /// Display label: `"January 2024"` or `"Pay Period 3"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Calendar { year, month } => calendar_month::name(*year, *month),
            Self::PayPeriod { index, .. } => pay_period_label(*index),
        }
    }

    /// Spreadsheet key used by the aggregation engine, e.g. `budget202413`.
    #[must_use]
    pub fn sheet_name(&self) -> String {
        format!("budget{:04}{:02}", self.year(), self.slot())
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.slot())
    }
}

impl FromStr for PeriodId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidIdentifier {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (year, slot): (u16, u8) = split_identifier(s)
            .ok_or_else(|| invalid("expected a zero-padded YYYY-SS identifier"))?;
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(invalid("year must be between 0001 and 9998"));
        }

        match slot {
            0 => Err(invalid("slot 00 does not exist")),
            1..=12 => {
                let month: Month =
                    Month::try_from(slot).map_err(|e| invalid(&e.to_string()))?;
                Ok(Self::Calendar { year, month })
            }
            _ => Ok(Self::PayPeriod {
                year,
                index: slot - FIRST_PAY_PERIOD_SLOT + 1,
            }),
        }
    }
}

impl TryFrom<String> for PeriodId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodId> for String {
    fn from(value: PeriodId) -> Self {
        value.to_string()
    }
}

/// Splits `YYYY-SS` into its numeric parts without judging their ranges.
fn split_identifier(s: &str) -> Option<(u16, u8)> {
    let bytes: &[u8] = s.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return None;
    }
    let digits_ok: bool = bytes[..4]
        .iter()
        .chain(&bytes[5..])
        .all(u8::is_ascii_digit);
    if !digits_ok {
        return None;
    }
    let year: u16 = s[..4].parse().ok()?;
    let slot: u8 = s[5..].parse().ok()?;
    Some((year, slot))
}

fn checked_year(year: i64) -> Result<u16, DomainError> {
    u16::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(|| DomainError::InvalidYear {
            year: i32::try_from(year).unwrap_or(i32::MAX),
        })
}

/// Returns whether `id` is a well-formed pay period identifier.
///
/// True iff the text is exactly `YYYY-SS` with `13 <= SS <= 99`, whatever the
/// year. Never consults configuration.
#[must_use]
pub fn is_pay_period(id: &str) -> bool {
    split_identifier(id)
        .is_some_and(|(_, slot)| (FIRST_PAY_PERIOD_SLOT..=LAST_SLOT).contains(&slot))
}

/// The `YYYY` part of an identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if `id` is malformed.
pub fn year_of(id: &str) -> Result<u16, DomainError> {
    Ok(id.parse::<PeriodId>()?.year())
}

/// The month number (calendar) or period index (pay period) of an identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if `id` is malformed.
pub fn slot_index_of(id: &str) -> Result<u8, DomainError> {
    Ok(id.parse::<PeriodId>()?.slot_index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_both_domains() {
        for text in ["2024-01", "2024-12", "2024-13", "2024-38", "0001-99"] {
            let id: PeriodId = text.parse().unwrap();
            assert_eq!(id.to_string(), text);
        }
    }

    #[test]
    fn test_slot_split_is_the_domain_discriminator() {
        assert_eq!(
            "2024-12".parse::<PeriodId>().unwrap(),
            PeriodId::Calendar {
                year: 2024,
                month: Month::December
            }
        );
        assert_eq!(
            "2024-13".parse::<PeriodId>().unwrap(),
            PeriodId::PayPeriod {
                year: 2024,
                index: 1
            }
        );
    }

    #[test]
    fn test_pay_period_constructor_rejects_out_of_band_index() {
        assert!(PeriodId::pay_period(2024, 0).is_err());
        assert!(PeriodId::pay_period(2024, 88).is_err());
        assert_eq!(PeriodId::pay_period(2024, 87).unwrap().slot(), 99);
    }

    #[test]
    fn test_year_bounds() {
        assert!("0000-05".parse::<PeriodId>().is_err());
        assert!("9999-05".parse::<PeriodId>().is_err());
        assert!(matches!(
            PeriodId::calendar(10_000, Month::May),
            Err(DomainError::InvalidYear { year: 10_000 })
        ));
    }

    #[test]
    fn test_labels() {
        let calendar: PeriodId = "2024-01".parse().unwrap();
        let pay: PeriodId = "2024-15".parse().unwrap();
        assert_eq!(calendar.label(), "January 2024");
        assert_eq!(pay.label(), "Pay Period 3");
    }

    #[test]
    fn test_sheet_name() {
        let id: PeriodId = "2024-13".parse().unwrap();
        assert_eq!(id.sheet_name(), "budget202413");
    }
}
