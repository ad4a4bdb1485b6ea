//! `k6/x/cid`: a scripting-host module that turns a content identifier into
//! the base58 encoding of its multihash.
//!
//! The host creates a [`ModuleRegistry`] at startup and calls [`register`]
//! (or one of the `init_registry*` helpers) before any script runs.

pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::{ExtractError, HashExtractor};
pub use infrastructure::{
    multihash_b58::MultihashB58Extractor,
    registry::{ModuleRegistry, RegistryError},
    CallError, ConfigError, HostModule, InvalidCidPolicy, K6CidConfig, ModuleConfig,
};
pub use presentation::{register, register_default, CidModule, HASH_METHOD, MODULE_NAME};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Base58 multihash of `cid`, or `""` when `cid` is not a content identifier.
pub fn extract_hash(cid: &str) -> String {
    MultihashB58Extractor::new().extract_hash(cid)
}

/// Base58 multihash of `cid`, surfacing the decode error.
pub fn try_extract_hash(cid: &str) -> Result<String, ExtractError> {
    MultihashB58Extractor::new().try_extract_hash(cid)
}

/// Initialize a registry holding the cid module configured by `config`
pub fn init_registry(config: &K6CidConfig) -> Result<ModuleRegistry, RegistryError> {
    let registry = ModuleRegistry::new();
    register(&registry, &config.module)?;
    Ok(registry)
}

/// Initialize a registry from a configuration file
pub fn init_registry_from_file<P: AsRef<std::path::Path>>(
    config_path: P,
) -> Result<ModuleRegistry, InitError> {
    let config = K6CidConfig::from_file(config_path)?;
    Ok(init_registry(&config)?)
}

/// Initialize a registry from a configuration string
pub fn init_registry_from_str(config_str: &str) -> Result<ModuleRegistry, InitError> {
    let config = K6CidConfig::from_toml_str(config_str)?;
    Ok(init_registry(&config)?)
}

/// Initialize a registry with default configuration
pub fn init_registry_default() -> Result<ModuleRegistry, RegistryError> {
    init_registry(&K6CidConfig::default())
}
