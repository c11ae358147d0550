use crate::adapters::HttpCatalog;
use crate::core::catalog::MatchMode;
use crate::core::engine::FitmentEngine;
use crate::core::recommend::MAX_RECOMMENDATIONS;
use crate::utils::error::{FitmentError, Result};
use crate::utils::validation::Validate;
use std::env;

/// Settings for the automated handler, read from the function environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub catalog_endpoint: Option<String>,
    pub catalog_api_key: Option<String>,
    pub catalog_timeout_seconds: u64,
    pub match_mode: MatchMode,
    pub max_products: Option<usize>,
    pub summary_limit: usize,
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map(Some)
                .map_err(|_| FitmentError::InvalidConfigValueError {
                    field: name.to_string(),
                    value: raw.clone(),
                    reason: "Value could not be parsed".to_string(),
                })
        }
        _ => Ok(None),
    }
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog_endpoint: env::var("CATALOG_ENDPOINT").ok().filter(|v| !v.is_empty()),
            catalog_api_key: env::var("CATALOG_API_KEY").ok().filter(|v| !v.is_empty()),
            catalog_timeout_seconds: parse_env("CATALOG_TIMEOUT_SECONDS")?.unwrap_or(10),
            match_mode: parse_env("MATCH_MODE")?.unwrap_or_default(),
            max_products: parse_env("MAX_PRODUCTS")?,
            summary_limit: parse_env("SUMMARY_LIMIT")?.unwrap_or(3),
        })
    }

    pub fn engine(&self) -> FitmentEngine {
        FitmentEngine::new()
            .with_match_mode(self.match_mode)
            .with_max_products(self.max_products)
    }

    pub fn catalog(&self) -> Option<HttpCatalog> {
        self.catalog_endpoint.as_ref().map(|endpoint| {
            HttpCatalog::new(endpoint.clone())
                .with_api_key(self.catalog_api_key.clone())
                .with_timeout_seconds(Some(self.catalog_timeout_seconds))
        })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        if let Some(endpoint) = &self.catalog_endpoint {
            validate_url("CATALOG_ENDPOINT", endpoint)?;
        }

        validate_range(
            "CATALOG_TIMEOUT_SECONDS",
            self.catalog_timeout_seconds,
            1,
            60,
        )?;

        if let Some(max_products) = self.max_products {
            validate_positive_number("MAX_PRODUCTS", max_products, 1)?;
        }

        validate_range("SUMMARY_LIMIT", self.summary_limit, 1, MAX_RECOMMENDATIONS)?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
