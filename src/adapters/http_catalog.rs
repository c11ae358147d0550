use crate::core::{CatalogProduct, CatalogSource};
use crate::utils::error::{FitmentError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Catalog served as a JSON array by the hosted backend's REST endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl HttpCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<CatalogProduct>> {
        tracing::debug!("Fetching catalog from: {}", self.endpoint);

        let mut request = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json");

        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);

        if !status.is_success() {
            return Err(FitmentError::CatalogError {
                message: format!("catalog endpoint returned {}", status),
            });
        }

        let products: Vec<CatalogProduct> = response.json().await?;
        tracing::info!(
            "Loaded {} catalog products from {}",
            products.len(),
            self.endpoint
        );
        Ok(products)
    }

    fn describe(&self) -> String {
        format!("http:{}", self.endpoint)
    }
}
