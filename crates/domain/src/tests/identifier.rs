// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Domain, DomainError, PeriodId, is_pay_period, slot_index_of, year_of};
use time::Month;

#[test]
fn test_is_pay_period_accepts_only_high_slots() {
    for id in [
        "2024-13", "2024-38", "2024-99", "0001-13", "9999-13", "0000-13",
    ] {
        assert!(is_pay_period(id), "rejected '{id}'");
    }
}

#[test]
fn test_is_pay_period_rejects_calendar_and_malformed() {
    for id in [
        "2024-01", "2024-12", "2024-00", "2024-1", "24-13", "2024-013", "2024_13", "2024-1a",
        "", "abcd-ef", " 2024-13", "2024-13 ", "2024-13-01",
    ] {
        assert!(!is_pay_period(id), "accepted '{id}'");
    }
}

#[test]
fn test_numeric_extraction() {
    assert_eq!(year_of("2024-05").unwrap(), 2024);
    assert_eq!(slot_index_of("2024-05").unwrap(), 5);
    assert_eq!(year_of("2031-20").unwrap(), 2031);
    assert_eq!(slot_index_of("2031-20").unwrap(), 8);
    assert!(matches!(
        slot_index_of("garbage"),
        Err(DomainError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_domain_names() {
    let calendar: PeriodId = "2024-01".parse().unwrap();
    let pay: PeriodId = "2024-13".parse().unwrap();
    assert_eq!(calendar.domain(), Domain::CalendarMonth);
    assert_eq!(pay.domain(), Domain::PayPeriod);
    assert_eq!(calendar.domain().to_string(), "calendar month");
    assert_eq!(pay.domain().to_string(), "pay period");
}

#[test]
fn test_serde_uses_textual_form() {
    let id: PeriodId = PeriodId::pay_period(2024, 2).unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""2024-14""#);

    let back: PeriodId = serde_json::from_str(r#""2024-03""#).unwrap();
    assert_eq!(
        back,
        PeriodId::Calendar {
            year: 2024,
            month: Month::March
        }
    );
    assert!(serde_json::from_str::<PeriodId>(r#""2024-00""#).is_err());
}
