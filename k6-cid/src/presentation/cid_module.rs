//! The `k6/x/cid` host module.
//!
//! Scripts import it as `import { hash } from 'k6/x/cid'` and call
//! `hash(cid)` to get the base58 multihash used by indexer lookups
//! (`/multihash/<hash>`).

use crate::domain::HashExtractor;
use crate::infrastructure::multihash_b58::MultihashB58Extractor;
use crate::infrastructure::registry::{ModuleRegistry, RegistryError};
use crate::infrastructure::{CallError, HostModule, InvalidCidPolicy, ModuleConfig};

/// Namespace the module is registered under.
pub const MODULE_NAME: &str = "k6/x/cid";

/// The single callable exported to scripts.
pub const HASH_METHOD: &str = "hash";

pub struct CidModule<E = MultihashB58Extractor> {
    extractor: E,
    on_invalid: InvalidCidPolicy,
}

impl CidModule {
    pub fn from_config(config: &ModuleConfig) -> Self {
        Self::with_extractor(MultihashB58Extractor::new(), config.on_invalid)
    }
}

impl Default for CidModule {
    fn default() -> Self {
        Self::from_config(&ModuleConfig::default())
    }
}

impl<E: HashExtractor> CidModule<E> {
    pub fn with_extractor(extractor: E, on_invalid: InvalidCidPolicy) -> Self {
        Self {
            extractor,
            on_invalid,
        }
    }

    pub fn on_invalid(&self) -> InvalidCidPolicy {
        self.on_invalid
    }

    /// Base58 multihash of `cid`.
    ///
    /// Under [`InvalidCidPolicy::Empty`] this never fails and invalid input
    /// yields `""`.
    pub fn hash(&self, cid: &str) -> Result<String, CallError> {
        match self.on_invalid {
            InvalidCidPolicy::Empty => Ok(self.extractor.extract_hash(cid)),
            InvalidCidPolicy::Error => self
                .extractor
                .try_extract_hash(cid)
                .map_err(|e| CallError::InvalidArgument(e.to_string())),
        }
    }
}

impl<E: HashExtractor + 'static> HostModule for CidModule<E> {
    fn methods(&self) -> &'static [&'static str] {
        &[HASH_METHOD]
    }

    fn call(&self, method: &str, arg: &str) -> Result<String, CallError> {
        match method {
            HASH_METHOD => self.hash(arg),
            other => Err(CallError::MethodNotFound(other.to_string())),
        }
    }
}

/// Register the cid module into `registry`.
///
/// This is the startup step a host runs before any script can import
/// `k6/x/cid`; it fails if the namespace is already taken.
pub fn register(registry: &ModuleRegistry, config: &ModuleConfig) -> Result<(), RegistryError> {
    registry.register(MODULE_NAME, CidModule::from_config(config))?;
    tracing::info!(
        module = MODULE_NAME,
        on_invalid = ?config.on_invalid,
        "registered cid module"
    );
    Ok(())
}

pub fn register_default(registry: &ModuleRegistry) -> Result<(), RegistryError> {
    register(registry, &ModuleConfig::default())
}
