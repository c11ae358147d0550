// Adapters layer: concrete catalog sources (local file, hosted REST endpoint).

pub mod file_catalog;
pub mod http_catalog;

pub use file_catalog::FileCatalog;
pub use http_catalog::HttpCatalog;
