//! Catalog provider boundary.

use crate::catalog::{HardwareCategory, HardwareItem};
use crate::error::BuilderError;
use async_trait::async_trait;

/// Read-only hardware lookup, owned by the surrounding application.
///
/// The core consumes this interface and never caches across categories;
/// timeouts and retries are the provider's concern. An empty list is a
/// valid result ("no items in this category"), distinct from an `Err`.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// List all items in a category, in catalog order.
    async fn list_by_category(
        &self,
        category: HardwareCategory,
    ) -> Result<Vec<HardwareItem>, BuilderError>;
}

/// In-memory provider backed by a fixed item list. Used in tests and demos.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    items: Vec<HardwareItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<HardwareItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: HardwareItem) {
        self.items.push(item);
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn list_by_category(
        &self,
        category: HardwareCategory,
    ) -> Result<Vec<HardwareItem>, BuilderError> {
        Ok(self
            .items
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect())
    }
}
