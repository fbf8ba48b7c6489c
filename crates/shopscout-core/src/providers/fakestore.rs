// Fake Store provider - bridges the API client with the CatalogSource trait
use async_trait::async_trait;
use shopscout_api::{ApiProduct, FakeStoreClient, RetryConfig};
use tracing::debug;

use crate::{config::ApiConfig, models::Product, source::CatalogSource, Result};

/// Wrapper around FakeStoreClient that implements CatalogSource
pub struct FakeStoreSource {
    client: FakeStoreClient,
}

impl FakeStoreSource {
    pub fn new(base_url: String, retry_config: RetryConfig) -> Self {
        Self {
            client: FakeStoreClient::with_base_url(base_url).with_retry_config(retry_config),
        }
    }

    /// Host, retry policy and request timeout all come from `[api]`
    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            client: FakeStoreClient::with_base_url(api.base_url.clone())
                .with_timeout(api.timeout())
                .with_retry_config(api.retry_config()),
        }
    }
}

#[async_trait]
impl CatalogSource for FakeStoreSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let records = self.client.get_products().await?;
        let products: Vec<Product> = records.into_iter().map(api_to_product).collect();

        if let Some(first) = products.first() {
            debug!("First mapped product: {:?}", first);
        }

        Ok(products)
    }
}

/// Convert an upstream record to our display shape
fn api_to_product(api: ApiProduct) -> Product {
    Product {
        id: api.id,
        title: api.title,
        category: api.category,
        description: api.description,
        price: api.price,
        image_url: api.image,
        rating: api.rating.rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopscout_api::ApiRating;

    #[test]
    fn test_api_to_product_renames_fields() {
        let api = ApiProduct {
            id: 7,
            title: "White Gold Plated Princess".to_string(),
            price: 9.99,
            description: "Classic Created Wedding Engagement Solitaire Diamond Promise Ring".to_string(),
            category: "jewelery".to_string(),
            image: "https://fakestoreapi.com/img/71YAIFU48IL._AC_UL640_QL65_ML3_.jpg".to_string(),
            rating: ApiRating { rate: 3.0, count: 400 },
        };

        let product = api_to_product(api);

        assert_eq!(product.id, 7);
        assert_eq!(product.category, "jewelery");
        assert_eq!(
            product.image_url,
            "https://fakestoreapi.com/img/71YAIFU48IL._AC_UL640_QL65_ML3_.jpg"
        );
        assert_eq!(product.rating, 3.0);
        assert_eq!(product.price, 9.99);
    }
}
