// Core listing logic: products, filters, fetch status and the view they produce
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod listing;
pub mod models;
pub mod providers;
pub mod source;
pub mod view;

pub use catalog::{CatalogOptions, CategoryOption, RatingOption, SortOption};
pub use config::Config;
pub use error::Error;
pub use filters::FilterState;
pub use listing::Listing;
pub use models::{FetchStatus, Product};
pub use source::CatalogSource;
pub use view::ListingView;

pub type Result<T> = std::result::Result<T, Error>;
