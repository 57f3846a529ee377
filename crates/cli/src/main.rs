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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use paycal::{Operand, PeriodCalendar};
use paycal_domain::{
    Cadence, ConfigCorrection, DayBounds, PayPeriod, PeriodConfig, PeriodId, PreferenceStrings,
    day_from_date, parse_day, today,
};
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;
use time::Date;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// paycal - inspect calendar months and pay periods
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pay frequency: weekly, biweekly, semimonthly or monthly
    #[arg(short, long, conflicts_with = "prefs")]
    cadence: Option<Cadence>,

    /// Any date the pay cycle passes through (YYYY-MM-DD). Defaults to today.
    #[arg(short, long, value_parser = parse_day, requires = "cadence")]
    anchor: Option<Date>,

    /// Treat pay periods as switched off
    #[arg(long, conflicts_with_all = ["cadence", "prefs"])]
    disabled: bool,

    /// JSON file holding showPayPeriods, payPeriodFrequency and payPeriodStartDate
    #[arg(short, long)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the effective pay period configuration
    Config,
    /// List every pay period of a year
    Periods {
        /// The year to generate
        year: i32,
    },
    /// First and last day of a period
    Bounds {
        /// A YYYY-SS identifier
        id: PeriodId,
    },
    /// Enumerate identifiers between two periods of the same kind
    Range {
        /// First identifier
        start: PeriodId,
        /// Last identifier (excluded unless --inclusive)
        end: PeriodId,
        /// Include the end identifier
        #[arg(short, long)]
        inclusive: bool,
    },
    /// Order two periods or days
    Compare {
        /// A YYYY-SS identifier or YYYY-MM-DD day
        a: Operand,
        /// A YYYY-SS identifier or YYYY-MM-DD day
        b: Operand,
    },
    /// Move a period by a number of periods of its own kind
    Shift {
        /// A YYYY-SS identifier
        id: PeriodId,
        /// Signed number of periods
        #[arg(allow_hyphen_values = true)]
        by: i64,
    },
    /// Find the period containing a day
    Locate {
        /// A YYYY-MM-DD day
        #[arg(value_parser = parse_day)]
        date: Date,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PeriodView {
    id: PeriodId,
    label: String,
    sheet: String,
    #[serde(flatten)]
    bounds: DayBounds,
}

impl PeriodView {
    fn new(calendar: &PeriodCalendar, id: PeriodId) -> Result<Self, paycal::CoreError> {
        Ok(Self {
            id,
            label: id.label(),
            sheet: id.sheet_name(),
            bounds: calendar.bounds(id)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    a: String,
    b: String,
    ordering: &'static str,
    difference: i64,
}

/// Builds the calendar described by the command-line configuration flags.
fn build_calendar(args: &Args) -> Result<PeriodCalendar, Box<dyn std::error::Error>> {
    let mut calendar: PeriodCalendar = PeriodCalendar::new();

    if let Some(path) = &args.prefs {
        info!("Loading pay period preferences from: {}", path.display());
        let text: String = std::fs::read_to_string(path)?;
        let prefs: PreferenceStrings = serde_json::from_str(&text)?;
        let corrections: Vec<ConfigCorrection> = calendar.load_preferences(&prefs);
        if !corrections.is_empty() {
            warn!(
                count = corrections.len(),
                "Pay period preferences contained malformed values"
            );
        }
    } else if let Some(cadence) = args.cadence {
        let anchor: Date = args.anchor.unwrap_or_else(today);
        calendar.set_config(PeriodConfig::new(cadence, anchor));
    } else if args.disabled {
        calendar.set_config(PeriodConfig::disabled(today()));
    }

    Ok(calendar)
}

/// Runs one command and returns its JSON result.
fn run(command: &Command, calendar: &PeriodCalendar) -> Result<Value, Box<dyn std::error::Error>> {
    let value: Value = match command {
        Command::Config => serde_json::to_value(calendar.config())?,
        Command::Periods { year } => {
            let periods: Arc<[PayPeriod]> = calendar.generate_periods(*year)?;
            serde_json::to_value(&*periods)?
        }
        Command::Bounds { id } => serde_json::to_value(PeriodView::new(calendar, *id)?)?,
        Command::Range {
            start,
            end,
            inclusive,
        } => {
            let ids: Vec<PeriodId> = if *inclusive {
                calendar.range_inclusive(*start, *end)?
            } else {
                calendar.range(*start, *end)?
            };
            let views: Vec<PeriodView> = ids
                .into_iter()
                .map(|id| PeriodView::new(calendar, id))
                .collect::<Result<_, _>>()?;
            serde_json::to_value(views)?
        }
        Command::Compare { a, b } => {
            let ordering: &'static str = match calendar.compare(*a, *b)? {
                Ordering::Less => "before",
                Ordering::Equal => "same",
                Ordering::Greater => "after",
            };
            serde_json::to_value(Comparison {
                a: a.to_string(),
                b: b.to_string(),
                ordering,
                difference: calendar.difference(*a, *b)?,
            })?
        }
        Command::Shift { id, by } => {
            serde_json::to_value(PeriodView::new(calendar, calendar.add_months(*id, *by)?)?)?
        }
        Command::Locate { date } => {
            let id: PeriodId = calendar.period_for_date(*date)?;
            let mut view: Value = serde_json::to_value(PeriodView::new(calendar, id)?)?;
            if let Value::Object(fields) = &mut view {
                fields.insert(String::from("date"), Value::from(day_from_date(*date)));
            }
            view
        }
    };
    Ok(value)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let calendar: PeriodCalendar = build_calendar(&args)?;
    let output: Value = run(&args.command, &calendar)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
