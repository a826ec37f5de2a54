//! The network seam.

use async_trait::async_trait;

use crate::{FetchError, Method, RequestBuilder, Response};

/// Executes one request and buffers the response.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// [`Transport`] over `reqwest`. Uses `fetch` in the browser and a native
/// HTTP stack elsewhere.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        (**self).execute(request).await
    }
}
