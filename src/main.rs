// Calendar Layout
// Command-line entry point: prints the day or week layout of an event snapshot as JSON

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use calendar_layout::services::layout::clock::{today, SystemClock};
use calendar_layout::services::layout::LayoutEngine;
use calendar_layout::services::settings::SettingsService;
use calendar_layout::services::snapshot::SnapshotService;
use calendar_layout::utils::date::CalendarView;

#[derive(Parser, Debug)]
#[command(name = "calendar-layout")]
#[command(about = "Print the day or week layout of an event snapshot as JSON")]
struct Args {
    /// Event snapshot (JSON)
    events: PathBuf,

    /// Date to lay out (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Lay out the whole week containing the date
    #[arg(long)]
    week: bool,

    /// Move this many days (or weeks with --week) from the date
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    offset: i32,

    /// Settings file, defaults to the platform config directory
    #[arg(long)]
    settings: Option<PathBuf>,
}

impl Args {
    fn view(&self) -> CalendarView {
        if self.week {
            CalendarView::Week
        } else {
            CalendarView::Day
        }
    }
}

fn run(args: Args) -> Result<()> {
    let settings_service = match &args.settings {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = settings_service.load()?;
    let events = SnapshotService::new(&args.events).load()?;

    let mut engine = LayoutEngine::new(settings);
    let anchor = args.date.unwrap_or_else(|| today(&SystemClock));
    let date = engine
        .navigate(anchor, args.view(), args.offset)
        .with_context(|| format!("Offset {} from {} is out of range", args.offset, anchor))?;

    log::info!(
        "Laying out {} events from {:?} for {}",
        events.len(),
        args.events,
        date
    );

    let json = match args.view() {
        CalendarView::Week => serde_json::to_string_pretty(engine.week(&events, date))?,
        _ => serde_json::to_string_pretty(engine.day(&events, date))?,
    };
    println!("{}", json);

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
