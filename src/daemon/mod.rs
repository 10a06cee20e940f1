//! The polling loop: fetch, emit, report, sleep, until shut down.
mod cycle;
mod report;


pub use cycle::{run, run_cycle};
pub use report::format_report;
