//! Noise configuration attached to an execution context
//!
//! Gantree: L1_Backend → NoiseConfig
//!
//! Free-form settings keyed by name ("noise_model", "basis_gates",
//! "coupling_map", ...). Only emptiness matters to the exact-simulation
//! check.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Ordered map of noise settings
/// Gantree: NoiseConfig // 노이즈 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoiseConfig {
    entries: BTreeMap<String, Value>,
}

impl NoiseConfig {
    /// Empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a setting, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a setting
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Look up a setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Setting names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
