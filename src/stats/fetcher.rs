use std::fmt;
use std::time::Duration;

use base64::Engine as _;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{AppError, AppResult, FetchError, ValidationError};

use super::parse::parse_stats;
use super::table::StatsTable;

const USER_AGENT: &str = concat!("ha-stats/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP Basic credentials for the stats page.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    /// Builds credentials from a possibly empty user; an empty user means the
    /// stats page is not protected.
    #[must_use]
    pub fn from_parts(user: &str, password: &str) -> Option<Self> {
        if user.is_empty() {
            return None;
        }
        Some(Self {
            user: user.to_owned(),
            password: password.to_owned(),
        })
    }

    fn header_value(&self) -> String {
        let token = format!("{}:{}", self.user, self.password);
        let encoded = base64::engine::general_purpose::STANDARD.encode(token.as_bytes());
        format!("Basic {}", encoded)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where and how to reach the stats page.
#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub url: Url,
    pub credentials: Option<Credentials>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl SourceSettings {
    #[must_use]
    pub const fn new(url: Url, credentials: Option<Credentials>) -> Self {
        Self {
            url,
            credentials,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

/// Issues one authenticated GET per call against the stats page.
#[derive(Debug, Clone)]
pub struct StatsFetcher {
    client: Client,
    url: Url,
    authorization: Option<HeaderValue>,
}

impl StatsFetcher {
    /// Builds the HTTP client used for every cycle.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built.
    pub fn new(settings: &SourceSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .connect_timeout(settings.connect_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| FetchError::BuildClient { source })?;

        let authorization = match settings.credentials.as_ref() {
            Some(credentials) => {
                let mut value = HeaderValue::from_str(&credentials.header_value())
                    .map_err(|source| FetchError::InvalidAuthorization { source })?;
                value.set_sensitive(true);
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            client,
            url: settings.url.clone(),
            authorization,
        })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches and parses the stats page once.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body that
    /// does not parse as stats CSV.
    pub async fn fetch(&self) -> Result<StatsTable, FetchError> {
        let mut request = self.client.get(self.url.clone());
        if let Some(value) = self.authorization.as_ref() {
            request = request.header(AUTHORIZATION, value.clone());
        }

        let response = request.send().await.map_err(|source| FetchError::Request {
            url: self.url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::ReadBody {
                url: self.url.to_string(),
                source,
            })?;
        debug!("Fetched {} bytes of stats from {}", body.len(), self.url);

        parse_stats(&body)
    }
}

/// One-off fetch with default timeouts.
///
/// # Errors
///
/// Returns an error when the URL is invalid or the fetch fails.
pub async fn fetch(url: &str, credentials: Option<Credentials>) -> AppResult<StatsTable> {
    let parsed = Url::parse(url).map_err(|source| {
        AppError::validation(ValidationError::InvalidUrl {
            url: url.to_owned(),
            source,
        })
    })?;
    let fetcher = StatsFetcher::new(&SourceSettings::new(parsed, credentials))?;
    Ok(fetcher.fetch().await?)
}
