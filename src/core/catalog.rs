use crate::core::size::{normalize, parse};
use crate::domain::model::{CatalogProduct, TireSize, UsageCategory};
use serde::{Deserialize, Serialize};

/// Widths within this many millimeters count as similar.
pub const SIMILAR_WIDTH_MM: u32 = 10;
/// Aspect ratios within this many points count as similar.
pub const SIMILAR_ASPECT_POINTS: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Size match OR usage match.
    #[default]
    Permissive,
    /// Size match AND usage match.
    Strict,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(MatchMode::Permissive),
            "strict" => Ok(MatchMode::Strict),
            other => Err(format!(
                "unknown match mode '{}', expected permissive or strict",
                other
            )),
        }
    }
}

/// Same rim, width within ±10 mm and aspect ratio within ±5 points.
pub fn is_dimensionally_similar(a: &TireSize, b: &TireSize) -> bool {
    a.rim_diameter() == b.rim_diameter()
        && a.width().abs_diff(b.width()) <= SIMILAR_WIDTH_MM
        && a.aspect_ratio().abs_diff(b.aspect_ratio()) <= SIMILAR_ASPECT_POINTS
}

fn matches_size(product: &CatalogProduct, wanted_text: &str, wanted: Option<&TireSize>) -> bool {
    product.sizes.iter().any(|declared| {
        if normalize(declared) == wanted_text {
            return true;
        }
        match (wanted, parse(declared)) {
            (Some(wanted), Some(declared)) => is_dimensionally_similar(wanted, &declared),
            _ => false,
        }
    })
}

fn matches_usage(product: &CatalogProduct, category: UsageCategory) -> bool {
    let tags = category.catalog_tags();
    product.usage_tags.iter().any(|tag| tags.contains(tag))
}

/// 比對型錄商品
///
/// Returns the matching products by descending rating; equal ratings keep
/// catalog order. A size that does not parse can still match literally or
/// through usage tags.
pub fn match_products(
    size: &str,
    category: UsageCategory,
    products: &[CatalogProduct],
    mode: MatchMode,
) -> Vec<CatalogProduct> {
    let wanted_text = normalize(size);
    let wanted = parse(size);

    let mut matched: Vec<CatalogProduct> = products
        .iter()
        .filter(|product| {
            let by_size = matches_size(product, &wanted_text, wanted.as_ref());
            let by_usage = matches_usage(product, category);
            match mode {
                MatchMode::Permissive => by_size || by_usage,
                MatchMode::Strict => by_size && by_usage,
            }
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PriceRange, ProductUsageTag};

    fn product(id: &str, sizes: &[&str], tags: &[ProductUsageTag], rating: f64) -> CatalogProduct {
        CatalogProduct {
            id: id.to_string(),
            brand_id: "brand".to_string(),
            name: format!("Tire {}", id),
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            usage_tags: tags.to_vec(),
            price_range: PriceRange {
                min: 80.0,
                max: 120.0,
            },
            features: vec![],
            rating,
            warranty: "3 years".to_string(),
        }
    }

    #[test]
    fn test_dimensional_similarity_branch() {
        let products = vec![product("a", &["215/50R16"], &[], 4.0)];
        let matched = match_products("205/55R16", UsageCategory::AllSeason, &products, MatchMode::Permissive);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_literal_match_ignores_case_and_whitespace() {
        let products = vec![product("a", &[" 205/55 r16"], &[], 4.0)];
        let matched = match_products("205/55R16", UsageCategory::AllSeason, &products, MatchMode::Permissive);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_dissimilar_sizes_do_not_match() {
        let products = vec![
            product("rim", &["205/55R17"], &[], 4.0),
            product("width", &["225/55R16"], &[], 4.0),
            product("aspect", &["205/45R16"], &[], 4.0),
            product("garbage", &["n/a"], &[], 4.0),
        ];
        let matched = match_products("205/55R16", UsageCategory::AllSeason, &products, MatchMode::Permissive);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_usage_branch_and_rating_order() {
        let products = vec![
            product("low", &["305/30R20"], &[ProductUsageTag::Sport], 3.1),
            product("none", &["305/30R20"], &[ProductUsageTag::Eco], 5.0),
            product("high", &["205/55R16"], &[], 4.8),
        ];
        let matched = match_products("205/55R16", UsageCategory::Performance, &products, MatchMode::Permissive);
        let ids: Vec<&str> = matched.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "low"]);
    }

    #[test]
    fn test_strict_mode_requires_both() {
        let products = vec![
            product("size-only", &["205/55R16"], &[], 4.0),
            product("usage-only", &["305/30R20"], &[ProductUsageTag::Highway], 4.0),
            product("both", &["215/55R16"], &[ProductUsageTag::Comfort], 4.0),
        ];
        let matched = match_products("205/55R16", UsageCategory::Touring, &products, MatchMode::Strict);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "both");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(match_products("205/55R16", UsageCategory::AllSeason, &[], MatchMode::Permissive).is_empty());
    }

    #[test]
    fn test_equal_ratings_keep_catalog_order() {
        let products = vec![
            product("first", &["205/55R16"], &[], 4.0),
            product("second", &["205/55R16"], &[], 4.0),
        ];
        let matched = match_products("205/55R16", UsageCategory::AllSeason, &products, MatchMode::Permissive);
        assert_eq!(matched[0].id, "first");
        assert_eq!(matched[1].id, "second");
    }
}
