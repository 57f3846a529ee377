// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PeriodCalendar;
use paycal_domain::{Cadence, PeriodConfig, PeriodId};
use time::Date;
use time::macros::date;

pub fn id(text: &str) -> PeriodId {
    text.parse().expect("valid identifier in test")
}

pub fn ids(texts: &[&str]) -> Vec<PeriodId> {
    texts.iter().map(|text| id(text)).collect()
}

pub fn calendar_with(cadence: Cadence, anchor: Date) -> PeriodCalendar {
    PeriodCalendar::with_config(PeriodConfig::new(cadence, anchor))
}

/// Biweekly, anchored on 2024-01-05.
pub fn biweekly_calendar() -> PeriodCalendar {
    calendar_with(Cadence::Biweekly, date!(2024 - 01 - 05))
}

pub fn disabled_calendar() -> PeriodCalendar {
    PeriodCalendar::with_config(PeriodConfig::disabled(date!(2024 - 01 - 05)))
}
