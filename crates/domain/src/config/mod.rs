mod logging;
mod resolvers;
mod root;
mod server;

pub use logging::{LogFormat, LoggingConfig};
pub use resolvers::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ListenConfig;
