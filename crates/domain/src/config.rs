//! Configuration module for dnstrace
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web API binding
//! - `walker`: Iterative resolution settings and root hints
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod walker;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use walker::WalkerConfig;
