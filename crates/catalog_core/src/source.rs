use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Product, error::LoadFailure};
use tracing::debug;
use url::Url;

pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, LoadFailure>;
}

/// Catalog fetched with a single GET returning a JSON array of products.
pub struct HttpProductSource {
    http: Client,
    endpoint: Url,
}

impl HttpProductSource {
    pub fn new(endpoint: &str) -> Result<Self, LoadFailure> {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: &str) -> Result<Self, LoadFailure> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| LoadFailure::InvalidEndpoint(endpoint.to_string()))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_all(&self) -> Result<Vec<Product>, LoadFailure> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| LoadFailure::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| LoadFailure::transport(err.to_string()))?;
        let products: Vec<Product> =
            serde_json::from_slice(&body).map_err(|err| LoadFailure::decode(err.to_string()))?;
        debug!(endpoint = %self.endpoint, count = products.len(), "fetched catalog");
        Ok(products)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
