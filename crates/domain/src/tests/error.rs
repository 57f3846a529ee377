// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDateFormat {
        input: String::from("2024-13-01"),
        reason: String::from("bad month"),
    };
    assert_eq!(format!("{err}"), "Invalid date '2024-13-01': bad month");

    let err: DomainError = DomainError::InvalidYear { year: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid year 0: expected a positive year no greater than 9998"
    );

    let err: DomainError = DomainError::InvalidIdentifier {
        input: String::from("2024-1"),
        reason: String::from("expected a zero-padded YYYY-SS identifier"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid period identifier '2024-1': expected a zero-padded YYYY-SS identifier"
    );

    let err: DomainError = DomainError::InvalidPayPeriodIndex { index: 27, max: 26 };
    assert_eq!(
        format!("{err}"),
        "Invalid pay period index: 27. Must be between 1 and 26"
    );

    let err: DomainError = DomainError::InvalidInterval { days: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid pay period interval: 0 days. Must be at least 1"
    );

    let err: DomainError = DomainError::InvalidCadence(String::from("fortnightly"));
    assert_eq!(
        format!("{err}"),
        "Invalid pay frequency 'fortnightly': expected weekly, biweekly, semimonthly or monthly"
    );

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("adding 1 months to 9998-12"),
    };
    assert_eq!(
        format!("{err}"),
        "Date arithmetic overflow while adding 1 months to 9998-12"
    );
}

#[test]
fn test_domain_error_is_comparable() {
    let a: DomainError = DomainError::InvalidYear { year: -4 };
    let b: DomainError = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, DomainError::InvalidYear { year: 4 });
}
