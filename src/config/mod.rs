//! Configuration loading and resolution.
mod apply;
mod hostname;
mod loader;
mod settings;
pub mod types;


pub use apply::apply_config;
pub use hostname::{HOSTNAME_TOKEN, local_hostname, resolve_namespace};
pub use loader::load_config;
pub use settings::Settings;

#[cfg(test)]
pub(crate) use loader::load_config_file;
