pub mod config;
pub mod multihash_b58;
pub mod registry;

pub use config::{ConfigError, InvalidCidPolicy, K6CidConfig, ModuleConfig};

use thiserror::Error;

/// Error returned to the scripting host when a module call fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("module not found: {0}")]
    ModuleNotFound(String),
    #[error("method not found: {0}")]
    MethodNotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}


/// A named capability exposed to the host's scripting layer.
///
/// Every exported callable takes one string and returns one string.
pub trait HostModule: Send + Sync {
    /// Names of the callables this module exports.
    fn methods(&self) -> &'static [&'static str];
    fn call(&self, method: &str, arg: &str) -> Result<String, CallError>;
}
