// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors raised by the pure period algebra.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A day, month or year string could not be turned into a date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDateFormat {
        /// The rejected input, verbatim.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Period generation was asked for a year outside the supported range.
    #[error("Invalid year {year}: expected a positive year no greater than 9998")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },
    /// A string is not a `YYYY-SS` period identifier.
    #[error("Invalid period identifier '{input}': {reason}")]
    InvalidIdentifier {
        /// The rejected input, verbatim.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Invalid pay period index.
    #[error("Invalid pay period index: {index}. Must be between 1 and {max}")]
    InvalidPayPeriodIndex {
        /// The invalid index.
        index: u8,
        /// The maximum valid index.
        max: u8,
    },
    /// A fixed period length that is not a positive number of days.
    #[error("Invalid pay period interval: {days} days. Must be at least 1")]
    InvalidInterval {
        /// The rejected length.
        days: i64,
    },
    /// A cadence name is not one of the supported pay frequencies.
    #[error("Invalid pay frequency '{0}': expected weekly, biweekly, semimonthly or monthly")]
    InvalidCadence(String),
    /// A format description could not be parsed or applied.
    #[error("Invalid format pattern '{pattern}': {reason}")]
    InvalidFormatPattern {
        /// The rejected pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow while {operation}")]
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}
