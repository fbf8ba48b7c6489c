// Catalog options: the category, sort and rating choices offered to the user.
// These are plain configuration data and can be overridden from config.toml.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub name: String,
    pub category_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub option_id: String,
    pub display_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingOption {
    pub rating_id: String,
    pub image_url: String,
}

impl RatingOption {
    /// Minimum rating this option stands for, if the id is numeric
    pub fn min_rating(&self) -> Option<f64> {
        self.rating_id.parse().ok()
    }

    /// Terminal stand-in for the star image, e.g. "★★★☆☆ & up"
    pub fn stars_label(&self) -> String {
        let filled = self.min_rating().unwrap_or(0.0).clamp(0.0, 5.0) as usize;
        format!("{}{} & up", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOptions {
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryOption>,

    #[serde(default = "default_sort_options")]
    pub sort_options: Vec<SortOption>,

    #[serde(default = "default_ratings")]
    pub ratings: Vec<RatingOption>,
}

fn category(name: &str, category_id: &str) -> CategoryOption {
    CategoryOption {
        name: name.to_string(),
        category_id: category_id.to_string(),
    }
}

fn default_categories() -> Vec<CategoryOption> {
    vec![
        category("Clothing", "1"),
        category("electronics", "2"),
        category("Appliances", "3"),
        category("Grocery", "4"),
        category("Toys", "5"),
    ]
}

fn default_sort_options() -> Vec<SortOption> {
    vec![
        SortOption {
            option_id: "PRICE_HIGH".to_string(),
            display_text: "Price (High-Low)".to_string(),
        },
        SortOption {
            option_id: "PRICE_LOW".to_string(),
            display_text: "Price (Low-High)".to_string(),
        },
    ]
}

fn rating(rating_id: &str, image: &str) -> RatingOption {
    RatingOption {
        rating_id: rating_id.to_string(),
        image_url: format!("https://assets.ccbp.in/frontend/react-js/{}", image),
    }
}

fn default_ratings() -> Vec<RatingOption> {
    vec![
        rating("4", "rating-four-stars-img.png"),
        rating("3", "rating-three-stars-img.png"),
        rating("2", "rating-two-stars-img.png"),
        rating("1", "rating-one-star-img.png"),
    ]
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            sort_options: default_sort_options(),
            ratings: default_ratings(),
        }
    }
}

impl CatalogOptions {
    /// Sort option active before the user picks one
    pub fn default_sort_id(&self) -> String {
        self.sort_options
            .first()
            .map(|o| o.option_id.clone())
            .unwrap_or_default()
    }

    pub fn category(&self, category_id: &str) -> Option<&CategoryOption> {
        self.categories.iter().find(|c| c.category_id == category_id)
    }

    pub fn sort_option(&self, option_id: &str) -> Option<&SortOption> {
        self.sort_options.iter().find(|o| o.option_id == option_id)
    }

    pub fn rating(&self, rating_id: &str) -> Option<&RatingOption> {
        self.ratings.iter().find(|r| r.rating_id == rating_id)
    }

    /// Next category in the cycle: none -> first -> ... -> last -> none
    pub fn next_category(&self, current: Option<&str>) -> Option<String> {
        let ids: Vec<&str> = self.categories.iter().map(|c| c.category_id.as_str()).collect();
        cycle_optional(&ids, current)
    }

    /// Next rating in the cycle: none -> first -> ... -> last -> none
    pub fn next_rating(&self, current: Option<&str>) -> Option<String> {
        let ids: Vec<&str> = self.ratings.iter().map(|r| r.rating_id.as_str()).collect();
        cycle_optional(&ids, current)
    }

    /// Next sort option, wrapping around. There is always an active sort option.
    pub fn next_sort_option(&self, current: &str) -> String {
        if self.sort_options.is_empty() {
            return current.to_string();
        }
        let next = match self.sort_options.iter().position(|o| o.option_id == current) {
            Some(i) => (i + 1) % self.sort_options.len(),
            None => 0,
        };
        self.sort_options[next].option_id.clone()
    }
}

fn cycle_optional(ids: &[&str], current: Option<&str>) -> Option<String> {
    let next = match current.and_then(|c| ids.iter().position(|id| *id == c)) {
        None => ids.first(),
        Some(i) => ids.get(i + 1),
    };
    next.map(|id| id.to_string())
}
