//! Product calls with the storefront's failure policy.

use shop_commerce::catalog::{Product, ProductDraft};
use shop_commerce::notify::Notifier;
use shop_commerce::ProductId;

use crate::{FetchError, ProductApi, ReqwestTransport, Transport};

/// Wraps [`ProductApi`] so every failure is logged and shown to the user.
///
/// `list` degrades to an empty catalog. The other calls hand the error back
/// so the caller can skip its local state update.
#[derive(Debug, Clone)]
pub struct ProductService<T = ReqwestTransport, N = shop_commerce::notify::LogNotifier> {
    api: ProductApi<T>,
    notifier: N,
}

impl<T: Transport, N: Notifier> ProductService<T, N> {
    pub fn new(api: ProductApi<T>, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub fn api(&self) -> &ProductApi<T> {
        &self.api
    }

    /// Fetch the catalog. Never fails; errors yield an empty list.
    pub async fn list(&self) -> Vec<Product> {
        match self.api.list().await {
            Ok(products) => products,
            Err(e) => {
                self.report("load products", &e);
                Vec::new()
            }
        }
    }

    pub async fn get(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.api
            .get(id)
            .await
            .inspect_err(|e| self.report("load the product", e))
    }

    /// Create a product under a fresh client-side id.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, FetchError> {
        let product = draft.into_product(ProductId::generate());
        tracing::info!(product = %product.id, name = %product.name, "creating product");
        self.api
            .create(&product)
            .await
            .inspect_err(|e| self.report("create the product", e))
    }

    pub async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, FetchError> {
        let product = draft.into_product(id.clone());
        tracing::info!(product = %id, "updating product");
        self.api
            .update(id, &product)
            .await
            .inspect_err(|e| self.report("update the product", e))
    }

    pub async fn delete(&self, id: &ProductId) -> Result<(), FetchError> {
        tracing::info!(product = %id, "deleting product");
        self.api
            .delete(id)
            .await
            .inspect_err(|e| self.report("delete the product", e))
    }

    fn report(&self, action: &str, error: &FetchError) {
        tracing::error!(action, error = %error, "product request failed");
        self.notifier
            .alert(&format!("Failed to {}: {}", action, error));
    }
}
