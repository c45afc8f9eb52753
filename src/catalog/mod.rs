// src/catalog/mod.rs
mod data;
pub mod models;
pub mod view;

pub use models::{Category, Product, Shipment, TimelineStep};
pub use view::{recompute, CategoryFilter, SortKey, ViewState};

use serde::Deserialize;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0}")]
    DuplicateProductId(u32),
    #[error("product {0} must have a positive price")]
    InvalidPrice(u32),
    #[error("tracking ids must not be blank")]
    BlankTrackingId,
}

/// Products and shipments, loaded once at startup and read-only afterwards.
/// Shipments keep their declaration order.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    #[serde(default)]
    shipments: IndexMap<String, Shipment>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            products: data::builtin_products(),
            shipments: data::builtin_shipments(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for p in &self.products {
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateProductId(p.id));
            }
            if p.price == 0 {
                return Err(CatalogError::InvalidPrice(p.id));
            }
        }

        if self.shipments.keys().any(|id| id.trim().is_empty()) {
            return Err(CatalogError::BlankTrackingId);
        }

        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Exact, case-sensitive lookup.
    pub fn shipment(&self, tracking_id: &str) -> Option<&Shipment> {
        self.shipments.get(tracking_id)
    }

    pub fn tracking_ids(&self) -> impl Iterator<Item = &str> {
        self.shipments.keys().map(String::as_str)
    }
}
