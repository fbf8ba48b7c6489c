use httpmock::prelude::*;
use serde_json::json;
use shopscout_api::RetryConfig;
use shopscout_core::{
    config::ApiConfig, providers::FakeStoreSource, FetchStatus, Listing, ListingView,
};
use std::time::Duration;

fn record(id: u64, title: &str, category: &str, price: f64, rate: f64) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{} description", title),
        "category": category,
        "image": format!("https://fakestoreapi.com/img/{}.jpg", id),
        "rating": { "rate": rate, "count": 10 }
    })
}

fn source_for(server: &MockServer) -> FakeStoreSource {
    FakeStoreSource::new(server.base_url(), RetryConfig::none())
}

#[tokio::test]
async fn test_catalog_with_records_renders_every_card() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([
                record(1, "Fjallraven Backpack", "men's clothing", 109.95, 3.9),
                record(2, "Casual Slim Fit T-Shirt", "men's clothing", 22.3, 4.1),
                record(3, "SanDisk SSD PLUS 1TB", "electronics", 109.0, 2.9),
                record(4, "John Hardy Bracelet", "jewelery", 695.0, 4.6),
            ]));
        })
        .await;

    let mut listing = Listing::default();
    listing.load(&source_for(&server)).await;

    assert_eq!(listing.status(), FetchStatus::Success);
    assert_eq!(listing.view().card_count(), 4);
    assert_eq!(listing.products()[2].image_url, "https://fakestoreapi.com/img/3.jpg");
}

#[tokio::test]
async fn test_empty_catalog_renders_no_products() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([]));
        })
        .await;

    let mut listing = Listing::default();
    listing.load(&source_for(&server)).await;

    assert_eq!(listing.view(), ListingView::NoProducts);
}

#[tokio::test]
async fn test_non_200_renders_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(500);
        })
        .await;

    let mut listing = Listing::default();
    listing.load(&source_for(&server)).await;

    assert_eq!(listing.status(), FetchStatus::Failure);
    assert_eq!(listing.view().card_count(), 0);
}

#[tokio::test]
async fn test_unreachable_host_renders_failure() {
    let source = FakeStoreSource::new("http://127.0.0.1:1".to_string(), RetryConfig::none());

    let mut listing = Listing::default();
    listing.load(&source).await;

    assert_eq!(listing.view(), ListingView::Failure);
}

#[tokio::test]
async fn test_stalled_host_times_out_to_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(json!([record(1, "Late", "electronics", 1.0, 3.0)]));
        })
        .await;

    let api = ApiConfig {
        base_url: server.base_url(),
        max_retries: 0,
        timeout_secs: 1,
        ..ApiConfig::default()
    };
    let source = FakeStoreSource::from_config(&api);

    let mut listing = Listing::default();
    listing.load(&source).await;

    assert_eq!(listing.status(), FetchStatus::Failure);
    assert_eq!(listing.view(), ListingView::Failure);
}

#[tokio::test]
async fn test_sort_in_raw_mode_keeps_fetch_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/products");
            then.status(200).json_body(json!([
                record(2, "Dear", "electronics", 99.0, 3.0),
                record(1, "Cheap", "electronics", 1.0, 3.0),
            ]));
        })
        .await;

    let mut listing = Listing::new(Default::default(), false);
    listing.load(&source_for(&server)).await;
    listing.cycle_sort_option();

    assert_eq!(listing.filters.sort_option_id, "PRICE_LOW");
    let ids: Vec<u64> = listing.displayed_products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
}
