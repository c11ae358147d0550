pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{lambda::LambdaConfig, toml_config::FitmentConfig};

pub use adapters::{FileCatalog, HttpCatalog};
pub use core::{catalog::MatchMode, engine::FitmentEngine};
pub use domain::model::{
    CatalogProduct, FitmentReport, SafetyTier, TireRecommendation, TireSize, UsageCategory,
    UsageCondition,
};
pub use utils::error::{FitmentError, Result};
