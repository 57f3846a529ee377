// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{biweekly_calendar, calendar_with, disabled_calendar, id};
use crate::{CoreError, PeriodCalendar};
use paycal_domain::{Cadence, DomainError};
use time::macros::date;

#[test]
fn test_period_for_date_inside_a_period() {
    let calendar: PeriodCalendar = biweekly_calendar();
    assert_eq!(calendar.period_for_date(date!(2024 - 01 - 05)).unwrap(), id("2024-13"));
    assert_eq!(calendar.period_for_date(date!(2024 - 01 - 18)).unwrap(), id("2024-13"));
    assert_eq!(calendar.period_for_date(date!(2024 - 01 - 19)).unwrap(), id("2024-14"));
}

#[test]
fn test_period_for_date_before_first_period_uses_previous_year() {
    let calendar: PeriodCalendar = biweekly_calendar();
    // 2023-38 runs Dec 22 2023 - Jan 4 2024.
    assert_eq!(calendar.period_for_date(date!(2024 - 01 - 03)).unwrap(), id("2023-38"));
}

#[test]
fn test_period_for_date_in_year_end_gap() {
    // Weekly from Monday 2024-01-01: 2024-64 starts Dec 23, and 2025-13 starts
    // Jan 6 2025, leaving Dec 30 - Jan 5 outside both years' 52 periods.
    let calendar: PeriodCalendar = calendar_with(Cadence::Weekly, date!(2024 - 01 - 01));
    assert_eq!(calendar.period_for_date(date!(2024 - 12 - 31)).unwrap(), id("2024-64"));
    assert_eq!(calendar.period_for_date(date!(2025 - 01 - 02)).unwrap(), id("2024-64"));
    assert_eq!(calendar.period_for_date(date!(2025 - 01 - 06)).unwrap(), id("2025-13"));
}

#[test]
fn test_period_for_date_without_pay_periods_is_calendar_month() {
    for calendar in [PeriodCalendar::new(), disabled_calendar()] {
        assert_eq!(calendar.period_for_date(date!(2024 - 07 - 04)).unwrap(), id("2024-07"));
    }
}

#[test]
fn test_pay_period_count_for_month() {
    let calendar: PeriodCalendar = biweekly_calendar();
    assert_eq!(calendar.pay_period_count_for_month(id("2024-01")).unwrap(), 2);
    assert_eq!(calendar.pay_period_count_for_month(id("2024-03")).unwrap(), 3);
    assert_eq!(disabled_calendar().pay_period_count_for_month(id("2024-03")).unwrap(), 0);
    assert!(matches!(
        calendar.pay_period_count_for_month(id("2024-13")),
        Err(CoreError::Domain(DomainError::InvalidIdentifier { .. }))
    ));
}

#[test]
fn test_pay_period_number_in_month() {
    let calendar: PeriodCalendar = biweekly_calendar();
    // March 2024 starts: Mar 1 (2024-17), Mar 15 (2024-18), Mar 29 (2024-19).
    assert_eq!(calendar.pay_period_number_in_month(id("2024-17")).unwrap(), 1);
    assert_eq!(calendar.pay_period_number_in_month(id("2024-19")).unwrap(), 3);
    assert!(matches!(
        calendar.pay_period_number_in_month(id("2024-03")),
        Err(CoreError::Domain(DomainError::InvalidIdentifier { .. }))
    ));
    assert!(matches!(
        disabled_calendar().pay_period_number_in_month(id("2024-17")),
        Err(CoreError::MissingConfig { .. })
    ));
}

#[test]
fn test_semimonthly_months_hold_two_periods() {
    let calendar: PeriodCalendar = calendar_with(Cadence::Semimonthly, date!(2024 - 01 - 01));
    for month in 1..=12 {
        let text: String = format!("2024-{month:02}");
        assert_eq!(calendar.pay_period_count_for_month(id(&text)).unwrap(), 2);
    }
    assert_eq!(calendar.pay_period_number_in_month(id("2024-16")).unwrap(), 2);
}
