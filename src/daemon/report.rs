use chrono::{DateTime, Local, TimeZone};
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Operator-facing line printed after every successful cycle.
#[must_use]
pub fn format_report<Tz>(at: &DateTime<Tz>, count: usize) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} - Reported {} stats", at.format(TIMESTAMP_FORMAT), count)
}

pub(super) fn report_cycle(count: usize) {
    println!("{}", format_report(&Local::now(), count));
    info!(stats = count, "Cycle complete");
}
