// Picks what the main pane should show from the fetch status
use crate::models::{FetchStatus, Product};

pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
pub const FAILURE_DESCRIPTION: &str =
    "We are having some trouble processing your request. Please try again.";
pub const NO_PRODUCTS_HEADING: &str = "No Products Found";
pub const NO_PRODUCTS_DESCRIPTION: &str = "We could not find any products. Try other filters.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    /// Nothing fetched yet
    Nothing,
    Loading,
    Failure,
    NoProducts,
    ProductList(Vec<Product>),
}

impl ListingView {
    /// Map a status and the displayed list to a view
    pub fn select(status: FetchStatus, displayed: Vec<Product>) -> Self {
        match status {
            FetchStatus::Initial => ListingView::Nothing,
            FetchStatus::InProgress => ListingView::Loading,
            FetchStatus::Failure => ListingView::Failure,
            FetchStatus::Success if displayed.is_empty() => ListingView::NoProducts,
            FetchStatus::Success => ListingView::ProductList(displayed),
        }
    }

    /// Number of product cards this view renders
    pub fn card_count(&self) -> usize {
        match self {
            ListingView::ProductList(products) => products.len(),
            _ => 0,
        }
    }
}
