use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 輪胎規格，例如 205/55R16
///
/// Only the size parser and the candidate generator build one, so every
/// instance is fully specified with positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TireSize {
    width: u32,
    aspect_ratio: u32,
    rim_diameter: u32,
}

impl TireSize {
    pub(crate) fn from_parts(width: u32, aspect_ratio: u32, rim_diameter: u32) -> Self {
        Self {
            width,
            aspect_ratio,
            rim_diameter,
        }
    }

    /// Section width in millimeters.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sidewall height as a percentage of the width.
    pub fn aspect_ratio(&self) -> u32 {
        self.aspect_ratio
    }

    /// Rim diameter in inches.
    pub fn rim_diameter(&self) -> u32 {
        self.rim_diameter
    }
}

impl fmt::Display for TireSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}R{}",
            self.width, self.aspect_ratio, self.rim_diameter
        )
    }
}

/// Driving context a user can toggle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageCondition {
    City,
    Highway,
    LightOffRoad,
    FrequentRain,
    Sporty,
}

impl UsageCondition {
    pub const ALL: [UsageCondition; 5] = [
        UsageCondition::City,
        UsageCondition::Highway,
        UsageCondition::LightOffRoad,
        UsageCondition::FrequentRain,
        UsageCondition::Sporty,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            UsageCondition::City => "city",
            UsageCondition::Highway => "highway",
            UsageCondition::LightOffRoad => "light-off-road",
            UsageCondition::FrequentRain => "frequent-rain",
            UsageCondition::Sporty => "sporty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsageCondition::City => "City driving",
            UsageCondition::Highway => "Highway cruising",
            UsageCondition::LightOffRoad => "Light off-road",
            UsageCondition::FrequentRain => "Frequent rain",
            UsageCondition::Sporty => "Sporty driving",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UsageCondition::City => "🏙️",
            UsageCondition::Highway => "🛣️",
            UsageCondition::LightOffRoad => "⛰️",
            UsageCondition::FrequentRain => "🌧️",
            UsageCondition::Sporty => "🏁",
        }
    }
}

impl FromStr for UsageCondition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        UsageCondition::ALL
            .into_iter()
            .find(|condition| condition.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = UsageCondition::ALL.iter().map(|c| c.id()).collect();
                format!(
                    "unknown usage condition '{}', expected one of: {}",
                    s,
                    known.join(", ")
                )
            })
    }
}

impl fmt::Display for UsageCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The single dominant category a recommendation run is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageCategory {
    Performance,
    AllTerrain,
    WetGrip,
    Touring,
    AllSeason,
}

impl UsageCategory {
    pub fn id(&self) -> &'static str {
        match self {
            UsageCategory::Performance => "performance",
            UsageCategory::AllTerrain => "all-terrain",
            UsageCategory::WetGrip => "wet-grip",
            UsageCategory::Touring => "touring",
            UsageCategory::AllSeason => "all-season",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UsageCategory::Performance => "Performance",
            UsageCategory::AllTerrain => "All-Terrain",
            UsageCategory::WetGrip => "Wet Grip",
            UsageCategory::Touring => "Highway Touring",
            UsageCategory::AllSeason => "All-Season",
        }
    }

    /// Product tags that count as a usage match for this category.
    pub fn catalog_tags(&self) -> &'static [ProductUsageTag] {
        match self {
            UsageCategory::Performance => &[ProductUsageTag::Sport, ProductUsageTag::Performance],
            UsageCategory::AllTerrain => &[ProductUsageTag::OffRoad, ProductUsageTag::AllTerrain],
            UsageCategory::WetGrip => &[ProductUsageTag::Rain, ProductUsageTag::AllSeason],
            UsageCategory::Touring => &[ProductUsageTag::Highway, ProductUsageTag::Comfort],
            UsageCategory::AllSeason => &[ProductUsageTag::AllSeason, ProductUsageTag::City],
        }
    }
}

impl fmt::Display for UsageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyTier {
    Safe,
    Moderate,
    Caution,
}

impl SafetyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyTier::Safe => "safe",
            SafetyTier::Moderate => "moderate",
            SafetyTier::Caution => "caution",
        }
    }
}

impl fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TireRecommendation {
    pub size: String,
    pub width: u32,
    pub aspect_ratio: u32,
    pub rim_diameter: u32,
    pub overall_diameter_mm: f64,
    pub diameter_diff_percent: f64,
    pub usage_label: String,
    pub usage_id: UsageCategory,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub safety_tier: SafetyTier,
}

/// Usage tag declared on a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductUsageTag {
    City,
    Highway,
    #[serde(alias = "light-off-road")]
    OffRoad,
    #[serde(alias = "frequent-rain", alias = "wet")]
    Rain,
    #[serde(alias = "sporty")]
    Sport,
    Performance,
    AllTerrain,
    AllSeason,
    Comfort,
    Eco,
    #[serde(other)]
    Other,
}

impl FromStr for ProductUsageTag {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.trim().to_ascii_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: String,
    #[serde(alias = "brand_id")]
    pub brand_id: String,
    pub name: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default, alias = "usage_tags")]
    pub usage_tags: Vec<ProductUsageTag>,
    #[serde(alias = "price_range")]
    pub price_range: PriceRange,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub warranty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitmentReport {
    pub original_size: String,
    pub original_diameter_mm: f64,
    pub usage_id: UsageCategory,
    pub usage_label: String,
    pub recommendations: Vec<TireRecommendation>,
}
