// Catalog configuration

use std::path::PathBuf;

use serde::Deserialize;

use crate::{catalog_filter::FilterCriteria, error::CatalogError};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    // JSON array of listings; None uses the built-in sample collection
    pub listings_path: Option<PathBuf>,
    // Ceiling used when the caller leaves the price unbounded
    pub default_max_price: Option<f64>,
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig =
            serde_json::from_str(json).map_err(|e| CatalogError::ConfigError(e.to_string()))?;

        if let Some(price) = config.default_max_price {
            if price < 0.0 {
                return Err(CatalogError::ConfigError(format!(
                    "defaultMaxPrice must be a non-negative number, got {price}"
                )));
            }
        }

        Ok(config)
    }

    // Starting criteria for a fresh page view
    pub fn default_criteria(&self) -> FilterCriteria {
        self.apply_defaults(FilterCriteria::default())
    }

    // Fills in the configured ceiling when the criteria carry none
    pub fn apply_defaults(&self, criteria: FilterCriteria) -> FilterCriteria {
        match self.default_max_price {
            Some(price) if criteria.is_unbounded() => criteria.with_max_price(price),
            _ => criteria,
        }
    }
}
