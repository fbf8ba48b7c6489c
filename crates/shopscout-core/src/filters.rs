// Filter and sort state, plus the pure function that turns it into a displayed list
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::{catalog::CatalogOptions, models::Product};

/// What the user has picked in the filters panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub category_id: Option<String>,
    pub rating_id: Option<String>,
    pub sort_option_id: String,
}

/// Price ordering behind a sort option id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    HighToLow,
    LowToHigh,
}

impl PriceOrder {
    pub fn from_option_id(option_id: &str) -> Option<Self> {
        match option_id {
            "PRICE_HIGH" => Some(PriceOrder::HighToLow),
            "PRICE_LOW" => Some(PriceOrder::LowToHigh),
            _ => None,
        }
    }
}

impl FilterState {
    pub fn new(sort_option_id: impl Into<String>) -> Self {
        Self {
            search_text: String::new(),
            category_id: None,
            rating_id: None,
            sort_option_id: sort_option_id.into(),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category_id: Option<String>) {
        self.category_id = category_id;
    }

    pub fn set_rating(&mut self, rating_id: Option<String>) {
        self.rating_id = rating_id;
    }

    pub fn set_sort_option(&mut self, option_id: impl Into<String>) {
        self.sort_option_id = option_id.into();
    }

    /// Reset search, category and rating. The sort option stays.
    pub fn clear_filters(&mut self) {
        self.search_text.clear();
        self.category_id = None;
        self.rating_id = None;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty() || self.category_id.is_some() || self.rating_id.is_some()
    }

    /// Filter and sort `products` according to the current state
    ///
    /// Search is a fuzzy match on the title, category matches the option
    /// name as a case-insensitive substring of the product category, and
    /// rating keeps products at or above the chosen minimum. Sorting is
    /// stable so equal prices keep their fetch order.
    pub fn apply(&self, products: &[Product], options: &CatalogOptions) -> Vec<Product> {
        let matcher = SkimMatcherV2::default().ignore_case();
        let needle = self.search_text.trim();

        let category_name = self
            .category_id
            .as_deref()
            .map(|id| options.category(id).map(|c| c.name.to_lowercase()));
        let min_rating = self
            .rating_id
            .as_deref()
            .map(|id| id.parse::<f64>().ok());

        let mut visible: Vec<Product> = products
            .iter()
            .filter(|p| needle.is_empty() || matcher.fuzzy_match(&p.title, needle).is_some())
            .filter(|p| match &category_name {
                None => true,
                Some(Some(name)) => p.category.to_lowercase().contains(name.as_str()),
                // Selected id isn't one we know about
                Some(None) => false,
            })
            .filter(|p| match min_rating {
                None => true,
                Some(Some(min)) => p.rating >= min,
                Some(None) => false,
            })
            .cloned()
            .collect();

        match PriceOrder::from_option_id(&self.sort_option_id) {
            Some(PriceOrder::HighToLow) => visible.sort_by(|a, b| b.price.total_cmp(&a.price)),
            Some(PriceOrder::LowToHigh) => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
            None => {}
        }

        visible
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(CatalogOptions::default().default_sort_id())
    }
}
