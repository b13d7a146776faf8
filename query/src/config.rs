//! Dashboard configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{QueryError, QueryResult, Reducer};

/// Tunables for the standard dashboard panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Number of departments shown in the top-departments panel.
    pub top_n: usize,
    /// Reduction used by the appointments heatmap.
    pub heatmap_reducer: Reducer,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            heatmap_reducer: Reducer::Sum,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(source: &str) -> QueryResult<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| QueryError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> QueryResult<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            QueryError::invalid_config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&source)
    }

    pub fn validate(&self) -> QueryResult<()> {
        if self.top_n == 0 {
            return Err(QueryError::invalid_config("top_n must be at least 1"));
        }
        Ok(())
    }
}
