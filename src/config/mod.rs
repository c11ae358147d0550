pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::catalog::MatchMode;
#[cfg(feature = "cli")]
use crate::core::UsageCondition;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tire-fitment")]
#[command(about = "Suggest replacement tire sizes and matching catalog products")]
pub struct CliConfig {
    /// Original tire size, e.g. 205/55R16 (prompted for when omitted)
    #[arg(short, long)]
    pub size: Option<String>,

    /// Driving conditions: city, highway, light-off-road, frequent-rain, sporty
    #[arg(short, long = "condition", value_delimiter = ',')]
    pub conditions: Vec<UsageCondition>,

    /// Path to TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Catalog file (.json or .csv), overrides the config file
    #[arg(long)]
    pub catalog: Option<String>,

    /// Candidate size to match against the catalog (defaults to the top one)
    #[arg(long)]
    pub pick: Option<String>,

    /// Override the catalog match mode (permissive or strict)
    #[arg(long)]
    pub match_mode: Option<MatchMode>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// List the available driving conditions and exit
    #[arg(long)]
    pub list_conditions: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }

        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
            validate_file_extension("catalog", catalog, &["json", "csv"])?;
        }

        Ok(())
    }
}
