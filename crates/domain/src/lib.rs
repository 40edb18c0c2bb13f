pub mod config;
pub mod errors;

pub use config::{CliOverrides, Config, ListenConfig, LogFormat, LoggingConfig, ResolverConfig};
pub use errors::DomainError;
