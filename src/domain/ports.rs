use crate::domain::model::CatalogProduct;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the product catalog comes from. The engine never calls this itself;
/// callers load the list and hand it over.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<CatalogProduct>>;

    fn describe(&self) -> String;
}
