use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClient {
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid basic auth credentials: {source}")]
    InvalidAuthorization {
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Stats source '{url}' answered with HTTP {status}.")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Failed to read response body from '{url}': {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Stats response has no header line.")]
    MissingHeader,
    #[error("Stats header is missing the '{column}' column.")]
    MissingColumn { column: &'static str },
    #[error("Failed to read stats header: {source}")]
    Header {
        #[source]
        source: csv::Error,
    },
    #[error("Malformed stats row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
