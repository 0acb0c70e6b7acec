//! Configuration types for box selection

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Boxes requested per page when walking an address
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Covering-box selector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorConfig {
    /// Page size passed to the box source as `limit`
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl SelectorConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("pageSize must be greater than zero".into()));
        }
        Ok(())
    }
}
