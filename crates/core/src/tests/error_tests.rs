// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CoreError;
use paycal_domain::{Domain, DomainError};

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::MixedDomain {
        first: String::from("2024-01"),
        first_domain: Domain::CalendarMonth,
        second: String::from("2024-13"),
        second_domain: Domain::PayPeriod,
    };
    assert_eq!(
        format!("{err}"),
        "Mixed calendar month and pay period ranges are not allowed: '2024-01' is a calendar \
         month but '2024-13' is a pay period. Use one kind of period consistently"
    );

    let err: CoreError = CoreError::MissingConfig {
        operand: String::from("2024-13"),
    };
    assert_eq!(
        format!("{err}"),
        "Pay period '2024-13' cannot be processed without valid pay period configuration"
    );

    let err: CoreError = CoreError::Domain(DomainError::InvalidYear { year: 0 });
    assert_eq!(
        format!("{err}"),
        "Domain violation: Invalid year 0: expected a positive year no greater than 9998"
    );
}

#[test]
fn test_domain_errors_convert_unchanged() {
    let domain: DomainError = DomainError::InvalidPayPeriodIndex { index: 40, max: 26 };
    let err: CoreError = domain.clone().into();
    assert_eq!(err, CoreError::Domain(domain));
}
