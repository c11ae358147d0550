pub mod catalog;
pub mod engine;
pub mod geometry;
pub mod narrative;
pub mod recommend;
pub mod size;

pub use crate::domain::model::{
    CatalogProduct, FitmentReport, SafetyTier, TireRecommendation, TireSize, UsageCategory,
    UsageCondition,
};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
