// The listing component: fetch status, fetched products and filter state in one place
use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::{
    catalog::CatalogOptions,
    filters::FilterState,
    models::{FetchStatus, Product},
    source::CatalogSource,
    view::ListingView,
    Result,
};

pub struct Listing {
    status: FetchStatus,
    products: Vec<Product>,
    options: CatalogOptions,
    apply_filters: bool,
    fetched_at: Option<DateTime<Local>>,
    pub filters: FilterState,
}

impl Listing {
    /// `apply_filters = false` shows the raw fetch result no matter what is selected
    pub fn new(options: CatalogOptions, apply_filters: bool) -> Self {
        let filters = FilterState::new(options.default_sort_id());
        Self {
            status: FetchStatus::Initial,
            products: Vec::new(),
            options,
            apply_filters,
            fetched_at: None,
            filters,
        }
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Everything the last successful fetch returned, in fetch order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    pub fn applies_filters(&self) -> bool {
        self.apply_filters
    }

    pub fn fetched_at(&self) -> Option<DateTime<Local>> {
        self.fetched_at
    }

    /// Mark a fetch as started. Returns false if one is already running.
    pub fn begin_fetch(&mut self) -> bool {
        if self.status.is_in_progress() {
            return false;
        }
        self.status = FetchStatus::InProgress;
        true
    }

    /// Record the outcome of a fetch
    pub fn finish_fetch(&mut self, result: Result<Vec<Product>>) {
        match result {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                self.products = products;
                self.fetched_at = Some(Local::now());
                self.status = FetchStatus::Success;
            }
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                self.status = FetchStatus::Failure;
            }
        }
    }

    /// Run a complete fetch against `source`
    pub async fn load(&mut self, source: &dyn CatalogSource) {
        if !self.begin_fetch() {
            return;
        }
        let result = source.fetch_products().await;
        self.finish_fetch(result);
    }

    /// The list the view renders
    pub fn displayed_products(&self) -> Vec<Product> {
        if self.apply_filters {
            self.filters.apply(&self.products, &self.options)
        } else {
            self.products.clone()
        }
    }

    pub fn view(&self) -> ListingView {
        ListingView::select(self.status, self.displayed_products())
    }

    pub fn cycle_category(&mut self) {
        let next = self.options.next_category(self.filters.category_id.as_deref());
        self.filters.set_category(next);
    }

    pub fn cycle_rating(&mut self) {
        let next = self.options.next_rating(self.filters.rating_id.as_deref());
        self.filters.set_rating(next);
    }

    pub fn cycle_sort_option(&mut self) {
        let next = self.options.next_sort_option(&self.filters.sort_option_id);
        self.filters.set_sort_option(next);
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::new(CatalogOptions::default(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockCatalogSource;
    use crate::Error;
    use shopscout_api::CatalogError;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            category: "electronics".to_string(),
            description: format!("Description {}", id),
            price,
            image_url: format!("https://example.com/{}.png", id),
            rating: 4.2,
        }
    }

    fn source_returning(products: Vec<Product>) -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_products()
            .times(1)
            .returning(move || Ok(products.clone()));
        source
    }

    fn failing_source() -> MockCatalogSource {
        let mut source = MockCatalogSource::new();
        source.expect_fetch_products().times(1).returning(|| {
            Err(Error::ApiError(CatalogError::RequestFailed("500 Internal Server Error".into())))
        });
        source
    }

    #[test]
    fn test_new_listing_starts_initial() {
        let listing = Listing::default();
        assert_eq!(listing.status(), FetchStatus::Initial);
        assert_eq!(listing.view(), ListingView::Nothing);
        assert_eq!(listing.filters.sort_option_id, "PRICE_HIGH");
    }

    #[tokio::test]
    async fn test_successful_fetch_shows_every_product() {
        let mut listing = Listing::default();
        let source = source_returning(vec![product(1, 5.0), product(2, 50.0), product(3, 15.0)]);

        listing.load(&source).await;

        assert_eq!(listing.status(), FetchStatus::Success);
        assert!(listing.fetched_at().is_some());
        assert_eq!(listing.view().card_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_catalog_shows_no_products_view() {
        let mut listing = Listing::default();
        listing.load(&source_returning(Vec::new())).await;

        assert_eq!(listing.status(), FetchStatus::Success);
        assert_eq!(listing.view(), ListingView::NoProducts);
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_failure_view() {
        let mut listing = Listing::default();
        listing.load(&failing_source()).await;

        assert_eq!(listing.status(), FetchStatus::Failure);
        assert_eq!(listing.view(), ListingView::Failure);
        assert_eq!(listing.view().card_count(), 0);
    }

    #[test]
    fn test_begin_fetch_refuses_while_in_flight() {
        let mut listing = Listing::default();
        assert!(listing.begin_fetch());
        assert_eq!(listing.view(), ListingView::Loading);
        assert!(!listing.begin_fetch());
    }

    #[test]
    fn test_refetch_replaces_list_wholesale() {
        let mut listing = Listing::default();
        listing.begin_fetch();
        listing.finish_fetch(Ok(vec![product(1, 1.0), product(2, 2.0)]));
        listing.begin_fetch();
        listing.finish_fetch(Ok(vec![product(9, 9.0)]));

        let ids: Vec<u64> = listing.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9]);
    }

    #[test]
    fn test_sort_change_reorders_when_filters_apply() {
        let mut listing = Listing::default();
        listing.begin_fetch();
        listing.finish_fetch(Ok(vec![product(1, 5.0), product(2, 50.0), product(3, 15.0)]));

        listing.cycle_sort_option();
        assert_eq!(listing.filters.sort_option_id, "PRICE_LOW");

        let ids: Vec<u64> = listing.displayed_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_raw_mode_ignores_filter_state() {
        let mut listing = Listing::new(CatalogOptions::default(), false);
        listing.begin_fetch();
        listing.finish_fetch(Ok(vec![product(1, 5.0), product(2, 50.0), product(3, 15.0)]));

        listing.filters.set_sort_option("PRICE_LOW");
        listing.filters.set_search_text("nothing matches this");
        listing.cycle_category();

        // The stored state changed...
        assert_eq!(listing.filters.sort_option_id, "PRICE_LOW");
        assert_eq!(listing.filters.category_id.as_deref(), Some("1"));
        // ...but the rendered order is still the fetch order
        let ids: Vec<u64> = listing.displayed_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filters_can_empty_the_list() {
        let mut listing = Listing::default();
        listing.begin_fetch();
        listing.finish_fetch(Ok(vec![product(1, 5.0)]));

        listing.filters.set_search_text("qqqq");
        assert_eq!(listing.view(), ListingView::NoProducts);

        listing.filters.clear_filters();
        assert_eq!(listing.view().card_count(), 1);
    }

    #[test]
    fn test_rating_cycle_goes_back_to_none() {
        let mut listing = Listing::default();
        for _ in 0..4 {
            listing.cycle_rating();
        }
        assert_eq!(listing.filters.rating_id.as_deref(), Some("1"));
        listing.cycle_rating();
        assert_eq!(listing.filters.rating_id, None);
    }
}
