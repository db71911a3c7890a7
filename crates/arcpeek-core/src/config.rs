//! Build limit configuration.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Limits applied during tree construction.
///
/// Defaults are generous; the caps exist to fail fast on pathological
/// archives (absurd nesting, millions of entries) instead of risking
/// unbounded recursion or memory.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BuildConfig {
    /// Maximum path depth (number of segments) tolerated.
    #[builder(default = "128")]
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Maximum number of input entries (None = unlimited).
    #[builder(default)]
    #[serde(default)]
    pub max_entries: Option<usize>,
}

fn default_max_depth() -> u32 {
    128
}

impl BuildConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.max_depth {
            return Err("max_depth must be at least 1".to_string());
        }
        if let Some(Some(0)) = self.max_entries {
            return Err("max_entries must be at least 1 when set".to_string());
        }
        Ok(())
    }
}

impl BuildConfig {
    /// Create a new build config builder.
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::default()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_entries: None,
        }
    }
}
