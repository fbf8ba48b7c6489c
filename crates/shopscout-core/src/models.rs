use serde::{Deserialize, Serialize};

/// A product as the listing displays it
///
/// Built once from the upstream record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    /// Average star rating, 0.0..=5.0
    pub rating: f64,
}

/// Phase of the catalog fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStatus {
    #[default]
    Initial,
    InProgress,
    Success,
    Failure,
}

impl FetchStatus {
    pub fn is_in_progress(self) -> bool {
        self == FetchStatus::InProgress
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchStatus::Initial => write!(f, "INITIAL"),
            FetchStatus::InProgress => write!(f, "IN_PROGRESS"),
            FetchStatus::Success => write!(f, "SUCCESS"),
            FetchStatus::Failure => write!(f, "FAILURE"),
        }
    }
}
