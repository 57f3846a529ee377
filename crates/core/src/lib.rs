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

//! Period identifier algebra over calendar months and pay periods.
//!
//! A [`PeriodCalendar`] owns the active pay period configuration. Calendar
//! month operations never consult it; pay period operations fail with
//! [`CoreError::MissingConfig`] while pay periods are disabled, and any
//! operation pairing the two domains fails with [`CoreError::MixedDomain`].

mod arithmetic;
mod calendar;
mod error;
mod lookup;
mod range;

#[cfg(test)]
mod tests;

pub use calendar::PeriodCalendar;
pub use error::CoreError;
pub use range::Operand;
