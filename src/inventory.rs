//! Keyed, insertion-ordered product store.

use indexmap::IndexMap;
use tracing::{debug, info, instrument};

use crate::domain::{Describe, Product, ProductId};
use crate::error::InventoryError;

pub const EMPTY_INVENTORY_NOTICE: &str = "No hay productos en el inventario.";

/// Owns every product added to it, keyed by product id.
///
/// Listing follows insertion order. Lookups hand out shared borrows, so a
/// product cannot be changed once it is stored.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: IndexMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `product` and returns the confirmation notice.
    ///
    /// # Errors
    /// [`InventoryError::DuplicateId`] if a product with the same id is
    /// already stored. The stored product is left untouched.
    pub fn add(&mut self, product: impl Into<Product>) -> Result<String, InventoryError> {
        let product = product.into();
        let id = product.id();

        if self.products.contains_key(&id) {
            debug!(product_id = id, "Rejected duplicate product");
            return Err(InventoryError::DuplicateId(id));
        }

        let notice = format!("Producto agregado: {}", product.describe());
        info!(product_id = id, kind = product.kind(), "{notice}");
        self.products.insert(id, product);
        Ok(notice)
    }

    /// Descriptions of every stored product in insertion order, or a single
    /// notice when the inventory is empty.
    pub fn list(&self) -> Vec<String> {
        if self.products.is_empty() {
            return vec![EMPTY_INVENTORY_NOTICE.to_string()];
        }
        self.products.values().map(Describe::describe).collect()
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Removes the product with `id`. Returns `false` when there is none.
    #[instrument(skip(self))]
    pub fn remove_by_id(&mut self, id: ProductId) -> bool {
        // shift_remove keeps the remaining entries in insertion order
        let removed = self.products.shift_remove(&id).is_some();
        if removed {
            info!("Product removed");
        } else {
            debug!("Product not found");
        }
        removed
    }

    /// Sum of `price * quantity` over all stored products.
    pub fn total_value(&self) -> f64 {
        self.products
            .values()
            .map(|product| product.info().stock_value())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}
