//! Configuration loading and management

use crate::core::error::TableError;
use serde::{Deserialize, Serialize};

/// Names of the URL query parameters holding the table selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamKeys {
    /// Selected sort column (lowercased header)
    pub sort_column: String,

    /// Sort direction label
    pub direction: String,

    /// Selected filter column (lowercased header)
    pub filter_column: String,

    /// Filter operator label
    pub operator: String,

    /// Filter query text
    pub query: String,
}

impl Default for ParamKeys {
    fn default() -> Self {
        Self {
            sort_column: "sortByBox".to_string(),
            direction: "orderBy".to_string(),
            filter_column: "filter".to_string(),
            operator: "status".to_string(),
            query: "value".to_string(),
        }
    }
}

/// Complete configuration for the user table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of records requested from the record source
    pub page_size: usize,

    /// Longest filter query kept in the selection state, in characters
    pub max_query_length: usize,

    /// URL query parameter names
    pub params: ParamKeys,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 30,
            max_query_length: 27,
            params: ParamKeys::default(),
        }
    }
}

impl TableConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TableError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
