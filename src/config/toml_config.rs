use crate::adapters::{FileCatalog, HttpCatalog};
use crate::core::catalog::MatchMode;
use crate::core::engine::FitmentEngine;
use crate::core::recommend::MAX_RECOMMENDATIONS;
use crate::core::CatalogSource;
use crate::utils::error::{FitmentError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitmentConfig {
    pub catalog: Option<CatalogConfig>,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub mode: MatchMode,
    pub max_products: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub summary_limit: Option<usize>,
}

impl FitmentConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FitmentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FitmentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_API_KEY})，未設定者保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn engine(&self) -> FitmentEngine {
        FitmentEngine::new()
            .with_match_mode(self.matching.mode)
            .with_max_products(self.matching.max_products)
    }

    /// How many candidates the text report lists; all of them by default.
    pub fn summary_limit(&self) -> usize {
        self.output.summary_limit.unwrap_or(MAX_RECOMMENDATIONS)
    }

    /// The configured catalog, or `None` when the run should skip matching.
    pub fn catalog_source(&self) -> Option<Box<dyn CatalogSource>> {
        let catalog = self.catalog.as_ref()?;

        if let Some(endpoint) = &catalog.endpoint {
            return Some(Box::new(
                HttpCatalog::new(endpoint.clone())
                    .with_api_key(catalog.api_key.clone())
                    .with_timeout_seconds(catalog.timeout_seconds),
            ));
        }

        catalog
            .path
            .as_ref()
            .map(|path| Box::new(FileCatalog::new(path)) as Box<dyn CatalogSource>)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        match (&self.path, &self.endpoint) {
            (Some(_), Some(_)) => {
                return Err(FitmentError::ConfigError {
                    message: "catalog.path and catalog.endpoint are mutually exclusive"
                        .to_string(),
                })
            }
            (None, None) => {
                return Err(FitmentError::MissingConfigError {
                    field: "catalog.path or catalog.endpoint".to_string(),
                })
            }
            _ => {}
        }

        if let Some(path) = &self.path {
            validate_path("catalog.path", path)?;
            validate_file_extension("catalog.path", path, &["json", "csv"])?;
        }

        if let Some(endpoint) = &self.endpoint {
            validate_url("catalog.endpoint", endpoint)?;
        }

        if let Some(key) = &self.api_key {
            if ENV_VAR_PATTERN.is_match(key) {
                return Err(FitmentError::InvalidConfigValueError {
                    field: "catalog.api_key".to_string(),
                    value: key.clone(),
                    reason: "Environment variable is not set".to_string(),
                });
            }
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("catalog.timeout_seconds", timeout as usize, 1)?;
        }

        Ok(())
    }
}

impl Validate for FitmentConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        if let Some(catalog) = &self.catalog {
            catalog.validate()?;
        }

        if let Some(max_products) = self.matching.max_products {
            validate_positive_number("matching.max_products", max_products, 1)?;
        }

        validate_range(
            "output.summary_limit",
            self.summary_limit(),
            1,
            MAX_RECOMMENDATIONS,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[catalog]
path = "./catalog.json"

[matching]
mode = "strict"
max_products = 5

[output]
format = "json"
summary_limit = 2
"#;

        let config = FitmentConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.matching.mode, MatchMode::Strict);
        assert_eq!(config.matching.max_products, Some(5));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.summary_limit(), 2);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.catalog_source().unwrap().describe(),
            "file:./catalog.json"
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FitmentConfig::from_toml_str("").unwrap();
        assert_eq!(config.matching.mode, MatchMode::Permissive);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.summary_limit(), MAX_RECOMMENDATIONS);
        assert!(config.catalog_source().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_FITMENT_CATALOG_KEY", "secret-key");

        let toml_content = r#"
[catalog]
endpoint = "https://backend.example.com/rest/v1/tire_products"
api_key = "${TEST_FITMENT_CATALOG_KEY}"
"#;

        let config = FitmentConfig::from_toml_str(toml_content).unwrap();
        let catalog = config.catalog.as_ref().unwrap();
        assert_eq!(catalog.api_key.as_deref(), Some("secret-key"));
        assert!(config.validate().is_ok());

        std::env::remove_var("TEST_FITMENT_CATALOG_KEY");
    }

    #[test]
    fn test_unset_env_var_fails_validation() {
        let toml_content = r#"
[catalog]
endpoint = "https://backend.example.com/rest/v1/tire_products"
api_key = "${TEST_FITMENT_UNSET_VARIABLE}"
"#;

        let config = FitmentConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let both = r#"
[catalog]
path = "./catalog.json"
endpoint = "https://backend.example.com"
"#;
        assert!(FitmentConfig::from_toml_str(both).unwrap().validate().is_err());

        let bad_extension = r#"
[catalog]
path = "./catalog.xml"
"#;
        assert!(FitmentConfig::from_toml_str(bad_extension)
            .unwrap()
            .validate()
            .is_err());

        let bad_limit = r#"
[output]
summary_limit = 9
"#;
        assert!(FitmentConfig::from_toml_str(bad_limit)
            .unwrap()
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[matching]
mode = "strict"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FitmentConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.engine().match_mode(), MatchMode::Strict);
    }
}
