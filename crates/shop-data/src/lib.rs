//! REST client for the shop product resource.
//!
//! Three layers:
//!
//! - [`FetchClient`]: base URL + default headers over a [`Transport`]
//! - [`ProductApi`]: the five product calls, one round trip each
//! - [`ProductService`]: the storefront's error policy on top (log, alert
//!   the user, then degrade or re-signal)
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::ProductApi;
//!
//! let api = ProductApi::new("https://mock.example.com/api");
//! let products = api.list().await?;
//! let one = api.get(&products[0].id).await?;
//! ```

mod error;
mod products;
mod request;
mod response;
mod service;
mod transport;

use std::collections::HashMap;

pub use error::FetchError;
pub use products::{ProductApi, PRODUCTS_PATH};
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use service::ProductService;
pub use transport::{ReqwestTransport, Transport};

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient<T = ReqwestTransport> {
    transport: T,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient<ReqwestTransport> {
    /// Create a client over `reqwest`.
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::new())
    }
}

impl Default for FetchClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> FetchClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Prepend `base_url` to every relative request URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }

    /// Send a request and fail on non-2xx statuses.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        response.error_for_status()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FetchClient, FetchError, Method, ProductApi, ProductService, RequestBuilder, Response,
        Transport,
    };
}
