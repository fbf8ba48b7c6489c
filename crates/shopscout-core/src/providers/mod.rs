// Catalog source implementations
pub mod fakestore;

pub use fakestore::FakeStoreSource;
