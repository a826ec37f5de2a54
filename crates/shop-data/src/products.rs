//! The product resource.

use shop_commerce::catalog::Product;
use shop_commerce::ProductId;

use crate::{FetchClient, FetchError, ReqwestTransport, Transport};

/// Path of the product collection, relative to the base URL.
pub const PRODUCTS_PATH: &str = "/products";

/// The five calls against the product collection.
///
/// Each is one round trip with no retry, timeout or de-duplication.
#[derive(Debug, Clone)]
pub struct ProductApi<T = ReqwestTransport> {
    client: FetchClient<T>,
}

impl ProductApi<ReqwestTransport> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(FetchClient::new().with_base_url(base_url))
    }
}

impl<T: Transport> ProductApi<T> {
    pub fn with_client(client: FetchClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient<T> {
        &self.client
    }

    /// GET the whole collection.
    pub async fn list(&self) -> Result<Vec<Product>, FetchError> {
        let request = self.client.get(PRODUCTS_PATH).accept("application/json");
        self.client.send(request).await?.json()
    }

    /// GET one product.
    pub async fn get(&self, id: &ProductId) -> Result<Product, FetchError> {
        let request = self.client.get(item_path(id)).accept("application/json");
        self.client.send(request).await?.json()
    }

    /// POST a new product; returns the backend's copy.
    pub async fn create(&self, product: &Product) -> Result<Product, FetchError> {
        let request = self.client.post(PRODUCTS_PATH).json(product)?;
        self.client.send(request).await?.json()
    }

    /// PUT a full replacement; returns the backend's copy.
    pub async fn update(&self, id: &ProductId, product: &Product) -> Result<Product, FetchError> {
        let request = self.client.put(item_path(id)).json(product)?;
        self.client.send(request).await?.json()
    }

    /// DELETE one product. Any response body is ignored.
    pub async fn delete(&self, id: &ProductId) -> Result<(), FetchError> {
        let request = self.client.delete(item_path(id));
        self.client.send(request).await?;
        Ok(())
    }
}

fn item_path(id: &ProductId) -> String {
    format!("{}/{}", PRODUCTS_PATH, encode_segment(id.as_str()))
}

/// Percent-encode everything outside the URL path-segment safe set.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
