use crate::core::catalog::{self, MatchMode};
use crate::core::geometry::{overall_diameter_mm, round_to};
use crate::core::recommend::{dominant_category, recommend};
use crate::core::size;
use crate::domain::model::{CatalogProduct, FitmentReport, UsageCategory, UsageCondition};
use crate::utils::error::{FitmentError, Result};

/// One entry point shared by the interactive CLI and the automated handler,
/// so both get the same results for the same input.
#[derive(Debug, Clone, Default)]
pub struct FitmentEngine {
    match_mode: MatchMode,
    max_products: Option<usize>,
}

impl FitmentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_max_products(mut self, max_products: Option<usize>) -> Self {
        self.max_products = max_products;
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn analyze(&self, size_text: &str, conditions: &[UsageCondition]) -> Result<FitmentReport> {
        let original = size::parse(size_text).ok_or_else(|| FitmentError::InvalidSize {
            input: size_text.trim().to_string(),
        })?;

        let category = dominant_category(conditions);
        if conditions.len() > 1 {
            tracing::debug!(
                "{} conditions selected, using dominant category '{}'",
                conditions.len(),
                category
            );
        }

        let recommendations = recommend(&original, conditions);
        tracing::debug!(
            "Generated {} recommendations for {}",
            recommendations.len(),
            original
        );

        Ok(FitmentReport {
            original_size: size::format(&original),
            original_diameter_mm: round_to(overall_diameter_mm(&original), 1),
            usage_id: category,
            usage_label: category.label().to_string(),
            recommendations,
        })
    }

    pub fn match_catalog(
        &self,
        size: &str,
        category: UsageCategory,
        products: &[CatalogProduct],
    ) -> Vec<CatalogProduct> {
        let mut matched = catalog::match_products(size, category, products, self.match_mode);
        if let Some(limit) = self.max_products {
            matched.truncate(limit);
        }
        tracing::debug!(
            "Matched {} of {} catalog products for {} ({:?})",
            matched.len(),
            products.len(),
            size,
            self.match_mode
        );
        matched
    }
}
