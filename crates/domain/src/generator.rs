// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-year period generation and its memo table.

use crate::config::{Cadence, PeriodConfig};
use crate::dates::{MAX_YEAR, MIN_YEAR};
use crate::error::DomainError;
use crate::projection::{PayPeriod, project};
use std::collections::VecDeque;
use std::sync::Arc;
use time::Date;
use tracing::{debug, trace};

/// Number of `(year, cadence, anchor)` entries kept by [`PeriodCache`].
pub const CACHE_CAPACITY: usize = 16;

/// Generates every pay period of `year`, in order.
///
/// Ignores `config.enabled`.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if `year` is not in `1..=9998`, or a
/// projection error.
pub fn generate_periods(year: i32, config: &PeriodConfig) -> Result<Vec<PayPeriod>, DomainError> {
    let year: u16 = u16::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(DomainError::InvalidYear { year })?;

    let max: u8 = config.cadence.max_periods();
    let periods: Vec<PayPeriod> = (1..=max)
        .map(|index| project(index, config, year))
        .collect::<Result<_, _>>()?;

    debug!(
        year,
        cadence = %config.cadence,
        anchor = %config.anchor_date,
        count = periods.len(),
        "Generated pay periods"
    );
    Ok(periods)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    year: i32,
    cadence: Cadence,
    anchor_date: Date,
}

impl CacheKey {
    const fn new(year: i32, config: &PeriodConfig) -> Self {
        Self {
            year,
            cadence: config.cadence,
            anchor_date: config.anchor_date,
        }
    }
}

/// Memoizes [`generate_periods`] by `(year, cadence, anchor)`.
///
/// The `enabled` flag and the pay-day hints are not part of the key. The
/// least recently used entry is evicted once [`CACHE_CAPACITY`] is reached.
#[derive(Debug, Default)]
pub struct PeriodCache {
    // Most recently used first.
    entries: VecDeque<(CacheKey, Arc<[PayPeriod]>)>,
}

impl PeriodCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the periods of `year`, generating them on a miss.
    ///
    /// # Errors
    ///
    /// Propagates [`generate_periods`] failures; failures are not cached.
    pub fn get_or_generate(
        &mut self,
        year: i32,
        config: &PeriodConfig,
    ) -> Result<Arc<[PayPeriod]>, DomainError> {
        let key: CacheKey = CacheKey::new(year, config);

        let hit: Option<(CacheKey, Arc<[PayPeriod]>)> = self
            .entries
            .iter()
            .position(|(k, _)| *k == key)
            .and_then(|position| self.entries.remove(position));
        if let Some(entry) = hit {
            trace!(year, cadence = %config.cadence, "Pay period cache hit");
            let periods: Arc<[PayPeriod]> = Arc::clone(&entry.1);
            self.entries.push_front(entry);
            return Ok(periods);
        }

        let periods: Arc<[PayPeriod]> = generate_periods(year, config)?.into();
        if self.entries.len() == CACHE_CAPACITY {
            self.entries.pop_back();
        }
        self.entries.push_front((key, Arc::clone(&periods)));
        Ok(periods)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
