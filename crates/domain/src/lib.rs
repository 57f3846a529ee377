// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod calendar_month;
mod config;
pub mod dates;
mod error;
mod generator;
mod identifier;
mod projection;

#[cfg(test)]
mod tests;

pub use config::{Cadence, ConfigCorrection, ConfigLoad, PeriodConfig, PreferenceStrings};
pub use dates::{DayBounds, day_from_date, parse_date, parse_day, today};
pub use error::DomainError;
pub use generator::{CACHE_CAPACITY, PeriodCache, generate_periods};
pub use identifier::{
    Domain, FIRST_PAY_PERIOD_SLOT, MAX_PAY_PERIOD_INDEX, PeriodId, is_pay_period, slot_index_of,
    year_of,
};
pub use projection::{PayPeriod, first_period_start, pay_period_label, project};
