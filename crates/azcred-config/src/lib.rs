mod raw;
mod loader;
mod inputs;
pub mod error;

pub use loader::{parse_upstream_bundle, parse_upstream_bundle_str};
pub use inputs::CredentialInputs;
pub use error::ConfigError;
