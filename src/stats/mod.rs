//! Fetching and parsing of the HAProxy CSV statistics feed.
mod fetcher;
mod parse;
mod table;


pub use fetcher::{Credentials, SourceSettings, StatsFetcher, fetch};
pub use parse::{parse_stats, strip_header_marker};
pub use table::{PROXY_COLUMN, SERVER_COLUMN, StatsRow, StatsTable};
