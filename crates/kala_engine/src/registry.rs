//! Engine registry: civilization key to engine instance.
//!
//! Built once at startup through the builder, read-only afterwards. The
//! map is never mutated after `build`, so concurrent lookups need no
//! synchronization.

use std::collections::HashMap;
use std::sync::Arc;

use crate::contract::CalendarEngine;
use crate::error::EngineError;

/// Read-only lookup from case-insensitive civilization key to engine.
pub struct EngineRegistry {
    engines: HashMap<String, Arc<dyn CalendarEngine>>,
}

/// Builder for [`EngineRegistry`].
#[derive(Default)]
pub struct EngineRegistryBuilder {
    engines: HashMap<String, Arc<dyn CalendarEngine>>,
}

impl EngineRegistryBuilder {
    /// Register an engine under its own key. A later registration with the
    /// same key replaces the earlier one.
    pub fn register(mut self, engine: Arc<dyn CalendarEngine>) -> Self {
        let key = engine.key().to_ascii_lowercase();
        tracing::debug!(key = %key, "registering calendar engine");
        self.engines.insert(key, engine);
        self
    }

    /// Freeze the registry.
    pub fn build(self) -> EngineRegistry {
        EngineRegistry {
            engines: self.engines,
        }
    }
}

impl EngineRegistry {
    pub fn builder() -> EngineRegistryBuilder {
        EngineRegistryBuilder::default()
    }

    /// Look up an engine by key, case-insensitive.
    pub fn resolve(&self, key: &str) -> Result<Arc<dyn CalendarEngine>, EngineError> {
        self.engines
            .get(&key.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| EngineError::UnknownCivilization(key.to_string()))
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl std::fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
