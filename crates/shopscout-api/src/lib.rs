// API client for the upstream product catalog
pub mod fakestore;
pub mod retry;

// Re-export common types
pub use fakestore::{
    ApiProduct, ApiRating, CatalogError, FakeStoreClient, DEFAULT_TIMEOUT, FAKESTORE_API_BASE,
};
pub use retry::RetryConfig;
