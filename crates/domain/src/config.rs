// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay period configuration and its translation from stored preferences.

use crate::dates::{day_from_date, day_serde, parse_day};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::{Date, Weekday};
use tracing::warn;

/// How often pay periods recur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
    /// The 1st-15th and the 16th-end of every month.
    Semimonthly,
    /// Once a month on the anchor's day of month.
    Monthly,
}

impl Cadence {
    /// Every supported cadence, in declaration order.
    pub const ALL: [Self; 4] = [Self::Weekly, Self::Biweekly, Self::Semimonthly, Self::Monthly];

    /// Number of pay periods a year holds under this cadence.
    #[must_use]
    pub const fn max_periods(&self) -> u8 {
        match self {
            Self::Weekly => 52,
            Self::Biweekly => 26,
            Self::Semimonthly => 24,
            Self::Monthly => 12,
        }
    }

    /// Fixed period length in days, for the cadences that have one.
    #[must_use]
    pub const fn interval_days(&self) -> Option<i64> {
        match self {
            Self::Weekly => Some(7),
            Self::Biweekly => Some(14),
            Self::Semimonthly | Self::Monthly => None,
        }
    }

    /// The persisted name of this cadence.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Semimonthly => "semimonthly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|cadence| cadence.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidCadence(s.to_string()))
    }
}

/// The active pay period configuration.
///
/// Replaced wholesale whenever the user edits pay period settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodConfig {
    /// Whether pay period identifiers may be used at all.
    pub enabled: bool,
    /// Recurrence rule.
    pub cadence: Cadence,
    /// Any date the real pay cycle passes through.
    #[serde(with = "day_serde")]
    pub anchor_date: Date,
    /// Optional pay-day hint; projection relies on `anchor_date` alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_day_of_week: Option<Weekday>,
    /// Optional pay-day hint; projection relies on `anchor_date` alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_day_of_month: Option<u8>,
}

impl PeriodConfig {
    /// Creates an enabled configuration.
    #[must_use]
    pub const fn new(cadence: Cadence, anchor_date: Date) -> Self {
        Self {
            enabled: true,
            cadence,
            anchor_date,
            pay_day_of_week: None,
            pay_day_of_month: None,
        }
    }

    /// The explicit "pay periods off" baseline.
    #[must_use]
    pub const fn disabled(anchor_date: Date) -> Self {
        Self {
            enabled: false,
            cadence: Cadence::Monthly,
            anchor_date,
            pay_day_of_week: None,
            pay_day_of_month: None,
        }
    }

    /// Translates raw preference strings into a configuration.
    ///
    /// Never fails: malformed values are replaced with safe defaults and
    /// reported in [`ConfigLoad::corrections`]. A correction never flips the
    /// `enabled` flag of `previous`.
    ///
    /// # Arguments
    ///
    /// * `prefs` - The stored preference strings
    /// * `previous` - The configuration currently installed, if any
    /// * `today` - Replacement for an unusable anchor date
    #[must_use]
    pub fn from_preferences(
        prefs: &PreferenceStrings,
        previous: Option<&Self>,
        today: Date,
    ) -> ConfigLoad {
        let mut corrections: Vec<ConfigCorrection> = Vec::new();

        let enabled: bool = match non_empty(prefs.show_pay_periods.as_deref()) {
            None => false,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    let kept: bool = previous.is_some_and(|config| config.enabled);
                    corrections.push(ConfigCorrection::Enabled {
                        value: raw.to_string(),
                        kept,
                    });
                    kept
                }
            },
        };

        let cadence: Cadence = match non_empty(prefs.pay_period_frequency.as_deref()) {
            None if prefs.pay_period_frequency.is_none() => Cadence::Monthly,
            None => {
                corrections.push(ConfigCorrection::Cadence {
                    value: String::new(),
                });
                Cadence::Monthly
            }
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                corrections.push(ConfigCorrection::Cadence {
                    value: raw.to_string(),
                });
                Cadence::Monthly
            }),
        };

        let anchor_date: Date = match non_empty(prefs.pay_period_start_date.as_deref()) {
            None => today,
            Some(raw) => parse_day(raw).unwrap_or_else(|_| {
                corrections.push(ConfigCorrection::AnchorDate {
                    value: raw.to_string(),
                    replaced_with: day_from_date(today),
                });
                today
            }),
        };

        for correction in &corrections {
            warn!(%correction, "Corrected malformed pay period preference");
        }

        ConfigLoad {
            config: Self {
                enabled,
                cadence,
                anchor_date,
                pay_day_of_week: None,
                pay_day_of_month: None,
            },
            corrections,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The three flat preference strings pay period settings are stored as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceStrings {
    /// `"true"` or `"false"`.
    #[serde(default)]
    pub show_pay_periods: Option<String>,
    /// One of the cadence names.
    #[serde(default)]
    pub pay_period_frequency: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub pay_period_start_date: Option<String>,
}

/// Result of translating preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    /// The configuration to install.
    pub config: PeriodConfig,
    /// Every malformed value that was replaced.
    pub corrections: Vec<ConfigCorrection>,
}

impl ConfigLoad {
    /// Returns whether every preference was used as given.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }
}

/// A malformed preference value and what was used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum ConfigCorrection {
    /// `showPayPeriods` was neither `true` nor `false`.
    Enabled {
        /// The rejected value.
        value: String,
        /// The enabled flag that was kept.
        kept: bool,
    },
    /// `payPeriodFrequency` named no known cadence; monthly was used.
    Cadence {
        /// The rejected value.
        value: String,
    },
    /// `payPeriodStartDate` was not a real `YYYY-MM-DD` day.
    AnchorDate {
        /// The rejected value.
        value: String,
        /// The date used instead.
        replaced_with: String,
    },
}

impl fmt::Display for ConfigCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled { value, kept } => {
                write!(f, "showPayPeriods '{value}' is not a boolean; kept {kept}")
            }
            Self::Cadence { value } => {
                write!(f, "payPeriodFrequency '{value}' is unknown; using monthly")
            }
            Self::AnchorDate {
                value,
                replaced_with,
            } => write!(
                f,
                "payPeriodStartDate '{value}' is not a valid date; using {replaced_with}"
            ),
        }
    }
}
