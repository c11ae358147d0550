use clap::Parser;
use tire_fitment::app::interactive;
use tire_fitment::core::CatalogSource;
use tire_fitment::utils::{logger, validation::Validate};
use tire_fitment::{CatalogProduct, CliConfig, FileCatalog, FitmentConfig, FitmentError};

fn fail(e: &FitmentError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn load_catalog(source: &dyn CatalogSource) -> Option<Vec<CatalogProduct>> {
    match source.load().await {
        Ok(products) => Some(products),
        Err(e) => {
            // 型錄失敗不影響尺寸建議
            tracing::warn!("Catalog {} unavailable: {}", source.describe(), e);
            eprintln!("⚠️  {} Continuing without catalog matches.", e.user_friendly_message());
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if config.list_conditions {
        print!("{}", interactive::render_conditions());
        return Ok(());
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            FitmentConfig::from_file(path).unwrap_or_else(|e| fail(&e))
        }
        None => FitmentConfig::default(),
    };

    if let Err(e) = file_config.validate() {
        fail(&e);
    }

    let mut engine = file_config.engine();
    if let Some(mode) = config.match_mode {
        engine = engine.with_match_mode(mode);
    }

    let source: Option<Box<dyn CatalogSource>> = match &config.catalog {
        Some(path) => Some(Box::new(FileCatalog::new(path))),
        None => file_config.catalog_source(),
    };

    let catalog = match &source {
        Some(source) => load_catalog(&**source).await,
        None => None,
    };

    let size_text = match &config.size {
        Some(size) => size.clone(),
        None => {
            let stdin = std::io::stdin();
            interactive::prompt_size(stdin.lock(), std::io::stdout()).unwrap_or_else(|e| fail(&e))
        }
    };

    let view = interactive::build_view(
        &engine,
        &size_text,
        &config.conditions,
        config.pick.as_deref(),
        catalog.as_deref(),
    )
    .unwrap_or_else(|e| fail(&e));

    let json_output = config.json
        || file_config.output.format == tire_fitment::config::toml_config::OutputFormat::Json;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!(
            "{}",
            interactive::render_report(&view, file_config.summary_limit())
        );
    }

    Ok(())
}
