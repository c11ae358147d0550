use crate::core::{CatalogProduct, CatalogSource};
use crate::domain::model::{PriceRange, ProductUsageTag};
use crate::utils::error::{FitmentError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const LIST_SEPARATOR: char = '|';

/// Catalog stored on disk as a JSON array or a CSV export.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    brand_id: String,
    name: String,
    #[serde(default)]
    sizes: String,
    #[serde(default)]
    usage_tags: String,
    // blank cells in a CSV export come through as empty strings
    #[serde(default, deserialize_with = "csv::invalid_option")]
    price_min: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    price_max: Option<f64>,
    #[serde(default)]
    features: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating: Option<f64>,
    #[serde(default)]
    warranty: String,
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

impl From<CsvRow> for CatalogProduct {
    fn from(row: CsvRow) -> Self {
        CatalogProduct {
            sizes: split_list(&row.sizes).map(str::to_string).collect(),
            // unknown tags become ProductUsageTag::Other
            usage_tags: split_list(&row.usage_tags)
                .map(|tag| tag.parse().unwrap_or(ProductUsageTag::Other))
                .collect(),
            features: split_list(&row.features).map(str::to_string).collect(),
            price_range: PriceRange {
                min: row.price_min.unwrap_or(0.0),
                max: row.price_max.unwrap_or(0.0),
            },
            id: row.id,
            brand_id: row.brand_id,
            name: row.name,
            rating: row.rating.unwrap_or(0.0),
            warranty: row.warranty,
        }
    }
}

impl FileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse_json(data: &[u8]) -> Result<Vec<CatalogProduct>> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn parse_csv(data: &[u8]) -> Result<Vec<CatalogProduct>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data);

        let mut products = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            products.push(row?.into());
        }
        Ok(products)
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Vec<CatalogProduct>> {
        let data = tokio::fs::read(&self.path).await?;

        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let products = match extension.as_deref() {
            Some("json") => Self::parse_json(&data)?,
            Some("csv") => Self::parse_csv(&data)?,
            _ => {
                return Err(FitmentError::CatalogError {
                    message: format!(
                        "unsupported catalog file '{}', expected .json or .csv",
                        self.path.display()
                    ),
                })
            }
        };

        tracing::info!(
            "Loaded {} catalog products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_lists() {
        let csv_data = "\
id,brand_id,name,sizes,usage_tags,price_min,price_max,features,rating,warranty
p1,b1,City Comfort,205/55R16|215/50R16,city|comfort|winter,75,90,Quiet|Long tread life,4.1,5 years
";
        let products = FileCatalog::parse_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(products.len(), 1);

        let p = &products[0];
        assert_eq!(p.sizes, vec!["205/55R16", "215/50R16"]);
        assert_eq!(
            p.usage_tags,
            vec![
                ProductUsageTag::City,
                ProductUsageTag::Comfort,
                ProductUsageTag::Other
            ]
        );
        assert_eq!(p.features, vec!["Quiet", "Long tread life"]);
        assert_eq!(p.price_range.max, 90.0);
        assert_eq!(p.warranty, "5 years");
    }

    #[test]
    fn test_parse_csv_blank_numeric_cells() {
        let csv_data = "\
id,brand_id,name,sizes,usage_tags,price_min,price_max,features,rating,warranty
p1,b1,Road,205/55R16,city,75,90,,,
p2,b2,Budget,195/65R15,eco,,,,4.0,
";
        let products = FileCatalog::parse_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(products.len(), 2);

        assert_eq!(products[0].rating, 0.0);
        assert_eq!(products[0].price_range.min, 75.0);
        assert!(products[0].features.is_empty());

        assert_eq!(products[1].rating, 4.0);
        assert_eq!(products[1].price_range.min, 0.0);
        assert_eq!(products[1].price_range.max, 0.0);
    }

    #[test]
    fn test_parse_json_empty_array() {
        assert!(FileCatalog::parse_json(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_json_rejects_object() {
        assert!(FileCatalog::parse_json(b"{\"id\": 1}").is_err());
    }
}
