use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use super::{CallError, HostModule};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("module already registered: {0}")]
    AlreadyRegistered(String),
}

/// Process-wide table of host modules keyed by namespace (e.g. `k6/x/cid`).
///
/// Entries are only ever inserted whole, so a lock poisoned by a panicking
/// caller still guards a consistent map and is recovered rather than
/// propagated.
pub struct ModuleRegistry(RwLock<HashMap<&'static str, Arc<dyn HostModule>>>);

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self(RwLock::new(HashMap::new()))
    }

    /// Register `module` under `name`. Names are unique for the registry's lifetime.
    pub fn register(
        &self,
        name: &'static str,
        module: impl HostModule + 'static,
    ) -> Result<(), RegistryError> {
        let mut modules = self.0.write().unwrap_or_else(PoisonError::into_inner);
        if modules.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }
        modules.insert(name, Arc::new(module));
        tracing::debug!(module = name, "module registered");
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn HostModule>> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Registered namespaces, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        names.sort_unstable();
        names
    }

    /// Resolve `name` and invoke `method` on it. The lock is released before the call.
    pub fn call(&self, name: &str, method: &str, arg: &str) -> Result<String, CallError> {
        let module = self
            .resolve(name)
            .ok_or_else(|| CallError::ModuleNotFound(name.to_string()))?;
        module.call(method, arg)
    }
}
