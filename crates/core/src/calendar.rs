// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The caller-owned calendar context.

use crate::error::CoreError;
use paycal_domain::{
    ConfigCorrection, ConfigLoad, DayBounds, DomainError, PayPeriod, PeriodCache, PeriodConfig,
    PeriodId, PreferenceStrings, calendar_month, today,
};
use std::cell::{RefCell, RefMut};
use std::fmt;
use std::sync::Arc;
use time::Date;
use tracing::{debug, info};

/// Holds the active pay period configuration and the generation cache.
///
/// Every operation that needs pay period boundaries goes through a
/// `PeriodCalendar`, so two calendars with different configurations can be
/// used side by side.
#[derive(Debug, Default)]
pub struct PeriodCalendar {
    config: Option<PeriodConfig>,
    cache: RefCell<PeriodCache>,
}

impl PeriodCalendar {
    /// Creates a calendar with no pay period configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar with `config` installed.
    #[must_use]
    pub fn with_config(config: PeriodConfig) -> Self {
        let mut calendar: Self = Self::new();
        calendar.set_config(config);
        calendar
    }

    /// The installed configuration, if any.
    #[must_use]
    pub const fn config(&self) -> Option<&PeriodConfig> {
        self.config.as_ref()
    }

    /// Installs a configuration, replacing the previous one wholesale.
    pub fn set_config(&mut self, config: PeriodConfig) {
        info!(
            enabled = config.enabled,
            cadence = %config.cadence,
            anchor = %config.anchor_date,
            "Installed pay period configuration"
        );
        self.config = Some(config);
        self.clear_cache();
    }

    /// Removes the configuration; pay period operations fail afterwards.
    pub fn clear_config(&mut self) {
        self.config = None;
        self.clear_cache();
    }

    /// Translates stored preferences against today's date and installs the
    /// result.
    ///
    /// Returns the corrections made to malformed values.
    pub fn load_preferences(&mut self, prefs: &PreferenceStrings) -> Vec<ConfigCorrection> {
        self.load_preferences_at(prefs, today())
    }

    /// Like [`Self::load_preferences`] with an explicit replacement date for
    /// an unusable anchor.
    pub fn load_preferences_at(
        &mut self,
        prefs: &PreferenceStrings,
        today: Date,
    ) -> Vec<ConfigCorrection> {
        let load: ConfigLoad = PeriodConfig::from_preferences(prefs, self.config.as_ref(), today);
        self.set_config(load.config);
        load.corrections
    }

    /// Returns whether pay period identifiers may be used.
    #[must_use]
    pub fn pay_periods_enabled(&self) -> bool {
        self.config.as_ref().is_some_and(|config| config.enabled)
    }

    /// The configuration, provided pay periods are enabled.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingConfig` naming `operand` otherwise.
    pub(crate) fn require_config(
        &self,
        operand: &dyn fmt::Display,
    ) -> Result<&PeriodConfig, CoreError> {
        self.config
            .as_ref()
            .filter(|config| config.enabled)
            .ok_or_else(|| CoreError::MissingConfig {
                operand: operand.to_string(),
            })
    }

    fn clear_cache(&self) {
        let mut cache: RefMut<'_, PeriodCache> = self.cache.borrow_mut();
        if !cache.is_empty() {
            debug!(entries = cache.len(), "Cleared pay period cache");
        }
        cache.clear();
    }

    /// Every pay period of `year` under the active configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if pay periods are disabled or the year is invalid.
    pub fn generate_periods(&self, year: i32) -> Result<Arc<[PayPeriod]>, CoreError> {
        let config: &PeriodConfig = self.require_config(&year)?;
        Ok(self.cache.borrow_mut().get_or_generate(year, config)?)
    }

    /// The `index`-th pay period of `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if pay periods are disabled or the index exceeds the
    /// cadence's periods per year.
    pub fn pay_period(&self, year: u16, index: u8) -> Result<PayPeriod, CoreError> {
        let id: PeriodId = PeriodId::pay_period(i64::from(year), index)?;
        let config: &PeriodConfig = self.require_config(&id)?;
        let max: u8 = config.cadence.max_periods();
        let periods: Arc<[PayPeriod]> = self
            .cache
            .borrow_mut()
            .get_or_generate(i32::from(year), config)?;
        usize::from(index)
            .checked_sub(1)
            .and_then(|position| periods.get(position))
            .cloned()
            .ok_or(CoreError::Domain(DomainError::InvalidPayPeriodIndex { index, max }))
    }

    /// First and last day of a period.
    ///
    /// Calendar months never consult the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingConfig` for a pay period while pay periods
    /// are disabled.
    pub fn bounds(&self, id: PeriodId) -> Result<DayBounds, CoreError> {
        match id {
            PeriodId::Calendar { year, month } => Ok(calendar_month::bounds(year, month)?),
            PeriodId::PayPeriod { year, index } => Ok(self.pay_period(year, index)?.bounds()),
        }
    }

    /// First day of a period.
    ///
    /// # Errors
    ///
    /// Same as [`Self::bounds`].
    pub fn start_date(&self, id: PeriodId) -> Result<Date, CoreError> {
        match id {
            PeriodId::Calendar { year, month } => Ok(calendar_month::first_day(year, month)?),
            PeriodId::PayPeriod { year, index } => Ok(self.pay_period(year, index)?.start_date()),
        }
    }

    /// Last day of a period.
    ///
    /// # Errors
    ///
    /// Same as [`Self::bounds`].
    pub fn end_date(&self, id: PeriodId) -> Result<Date, CoreError> {
        match id {
            PeriodId::Calendar { year, month } => Ok(calendar_month::last_day(year, month)?),
            PeriodId::PayPeriod { year, index } => Ok(self.pay_period(year, index)?.end_date()),
        }
    }

    /// Formats the first day of a period with a `time` format description.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid, or for a pay period while
    /// pay periods are disabled.
    pub fn format(&self, id: PeriodId, pattern: &str) -> Result<String, CoreError> {
        match id {
            PeriodId::Calendar { year, month } => Ok(calendar_month::format(year, month, pattern)?),
            PeriodId::PayPeriod { .. } => {
                Ok(calendar_month::format_date(self.start_date(id)?, pattern)?)
            }
        }
    }
}
