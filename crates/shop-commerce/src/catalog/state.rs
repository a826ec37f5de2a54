//! Local mirror of the remote catalog.

use crate::catalog::Product;
use crate::ids::ProductId;

/// The catalog as the UI sees it.
///
/// Loaded once at startup, then patched after each successful remote write.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    loading: bool,
}

impl CatalogState {
    /// An empty catalog that is still loading.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
        }
    }

    /// Install the fetched list and stop loading.
    pub fn finish_loading(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "catalog loaded");
        self.products = products;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Append a newly created product. A product with the same id is
    /// replaced in place.
    pub fn insert(&mut self, product: Product) {
        if !self.replace(product.clone()) {
            self.products.push(product);
        }
    }

    /// Overwrite the product with the same id. Returns false if absent.
    pub fn replace(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Drop a product. Returns false if absent.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() < len_before
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
