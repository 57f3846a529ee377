// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use paycal_domain::{Domain, DomainError};
use thiserror::Error;

/// Errors raised by calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The two operands of a range or comparison belong to different domains.
    #[error(
        "Mixed calendar month and pay period ranges are not allowed: '{first}' is a {first_domain} \
         but '{second}' is a {second_domain}. Use one kind of period consistently"
    )]
    MixedDomain {
        /// The first operand, verbatim.
        first: String,
        /// The domain the first operand resolved to.
        first_domain: Domain,
        /// The second operand, verbatim.
        second: String,
        /// The domain the second operand resolved to.
        second_domain: Domain,
    },
    /// A pay period was used while pay periods are absent or disabled.
    #[error("Pay period '{operand}' cannot be processed without valid pay period configuration")]
    MissingConfig {
        /// The operand that needed the configuration.
        operand: String,
    },
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),
}
