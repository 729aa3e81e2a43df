use std::collections::BTreeMap;

use chrono::NaiveDate;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};
use stockroom_products::Product;

/// Keyed collection of every managed product.
///
/// The inventory is the sole owner of its products. Queries hand out shared
/// borrows, so stock can only change through [`Inventory::sell_product`] and
/// [`Inventory::restock_product`]. Entries are kept in identifier order, which
/// makes listings stable.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: BTreeMap<ProductId, Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.products.contains_key(product_id)
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Read-only iteration in identifier order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Take ownership of `product`, keyed by its identifier.
    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        let product_id = product.id().clone();
        if self.products.contains_key(&product_id) {
            tracing::warn!(%product_id, "rejected duplicate product");
            return Err(DomainError::duplicate_id(&product_id));
        }

        tracing::debug!(%product_id, kind = %product.kind(), "product added");
        self.products.insert(product_id, product);
        Ok(())
    }

    /// Add every product, or none of them.
    ///
    /// Fails with `DuplicateId` if any identifier is already managed or
    /// repeats within `products`; the inventory is unchanged in that case.
    pub fn add_products(&mut self, products: impl IntoIterator<Item = Product>) -> DomainResult<()> {
        let mut batch: BTreeMap<ProductId, Product> = BTreeMap::new();
        for product in products {
            let product_id = product.id().clone();
            if self.products.contains_key(&product_id) || batch.contains_key(&product_id) {
                tracing::warn!(%product_id, "rejected duplicate product in batch");
                return Err(DomainError::duplicate_id(&product_id));
            }
            batch.insert(product_id, product);
        }

        tracing::debug!(added = batch.len(), "products added");
        self.products.append(&mut batch);
        Ok(())
    }

    /// Drop the entry for `product_id`. Absent identifiers are a no-op.
    pub fn remove_product(&mut self, product_id: &str) -> Option<Product> {
        let removed = self.products.remove(product_id);
        if removed.is_some() {
            tracing::debug!(product_id, "product removed");
        }
        removed
    }

    /// Products whose name equals `name`, ignoring case.
    pub fn search_by_name(&self, name: &str) -> Vec<&Product> {
        self.products().filter(|p| p.name_matches(name)).collect()
    }

    /// Products whose type tag equals `product_type`, ignoring case.
    pub fn search_by_type(&self, product_type: &str) -> Vec<&Product> {
        self.products()
            .filter(|p| p.kind().matches(product_type))
            .collect()
    }

    /// Rendered form of every product, in identifier order.
    pub fn list_all_products(&self) -> Vec<String> {
        self.products().map(ToString::to_string).collect()
    }

    /// Like [`Inventory::list_all_products`], with the `Expired` flag on groceries.
    pub fn list_all_products_at(&self, today: NaiveDate) -> Vec<String> {
        self.products().map(|p| p.render_at(today)).collect()
    }

    pub fn sell_product(&mut self, product_id: &str, quantity: u32) -> DomainResult<()> {
        let product = self.product_mut(product_id)?;
        product.sell(quantity).inspect_err(|err| {
            tracing::warn!(product_id, quantity, error = %err, "sale rejected");
        })
    }

    pub fn restock_product(&mut self, product_id: &str, quantity: u32) -> DomainResult<()> {
        let product = self.product_mut(product_id)?;
        product.restock(quantity).inspect_err(|err| {
            tracing::warn!(product_id, quantity, error = %err, "restock rejected");
        })
    }

    /// Sum of `price * quantity_in_stock` over every product; `0.0` when empty.
    pub fn total_inventory_value(&self) -> f64 {
        self.products().map(Product::total_value).sum()
    }

    /// Remove every grocery that expired before `today`.
    ///
    /// Expired identifiers are collected before anything is removed. Other
    /// variants are never touched. Returns the removed products.
    pub fn remove_expired_products(&mut self, today: NaiveDate) -> Vec<Product> {
        let expired: Vec<ProductId> = self
            .products()
            .filter(|p| p.is_expired(today))
            .map(|p| p.id().clone())
            .collect();

        let removed: Vec<Product> = expired
            .iter()
            .filter_map(|id| self.products.remove(id))
            .collect();

        tracing::info!(%today, removed = removed.len(), remaining = self.len(), "expiry sweep");
        removed
    }

    /// Owned copy of every product, in identifier order.
    pub fn snapshot(&self) -> Vec<Product> {
        self.products().cloned().collect()
    }

    fn product_mut(&mut self, product_id: &str) -> DomainResult<&mut Product> {
        self.products.get_mut(product_id).ok_or_else(|| {
            tracing::warn!(product_id, "unknown product");
            DomainError::not_found(&ProductId::from(product_id))
        })
    }
}
