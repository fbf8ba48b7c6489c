use crate::{models::Product, Result};

/// Anything that can hand us the full product catalog
///
/// The HTTP-backed implementation lives in `providers`; tests swap in a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}
