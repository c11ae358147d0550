#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use tire_fitment::app::automated::{self, AgentRequest, AgentResponse};
#[cfg(feature = "lambda")]
use tire_fitment::core::CatalogSource;
#[cfg(feature = "lambda")]
use tire_fitment::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use tire_fitment::LambdaConfig;

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<AgentRequest>) -> Result<AgentResponse, Error> {
    tracing::info!("Fitment request for size '{}'", event.payload.size);

    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let engine = config.engine();

    // 型錄讀取失敗時仍回傳尺寸建議
    let products = match config.catalog() {
        Some(catalog) if event.payload.include_products => match catalog.load().await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("Catalog {} unavailable: {}", catalog.describe(), e);
                Vec::new()
            }
        },
        _ => Vec::new(),
    };

    let response = automated::handle(&engine, &event.payload, &products, config.summary_limit);

    tracing::info!("Fitment request completed with status {:?}", response.status);
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}

