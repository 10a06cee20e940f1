mod app;
mod config;
mod fetch;
mod transport;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use fetch::FetchError;
pub use transport::TransportError;
pub use validation::ValidationError;
