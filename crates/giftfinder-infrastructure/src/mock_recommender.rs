//! Mock recommendation collaborator.
//!
//! The real recommendation backend is unimplemented; this serves the
//! static fixture catalog the original service shipped with. `search`
//! serves the first page, `search_more` a further fixed page, each sliced
//! to `count`. The profile does not influence the fixtures.

use async_trait::async_trait;

use giftfinder_core::error::Result;
use giftfinder_core::gift::{DemographicProfile, GiftProduct, GiftRecommender, ProductSource};

/// Recommender backed by static fixtures.
#[derive(Debug, Clone, Default)]
pub struct MockGiftRecommender;

fn fixture(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    image_url: &str,
    product_url: &str,
    source: ProductSource,
) -> GiftProduct {
    GiftProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        currency: "$".to_string(),
        image_url: image_url.to_string(),
        product_url: product_url.to_string(),
        source,
    }
}

fn first_page() -> Vec<GiftProduct> {
    vec![
        fixture(
            "1",
            "Wireless Noise Cancelling Headphones",
            "Premium over-ear headphones with active noise cancellation and 30-hour battery life",
            249.99,
            "https://images.unsplash.com/photo-1545127398-14699f92334b",
            "https://www.amazon.com/dp/B0756CYWWD",
            ProductSource::Amazon,
        ),
        fixture(
            "2",
            "Smart Fitness Watch",
            "Track your workouts, heart rate, sleep, and more with this waterproof fitness tracker",
            179.95,
            "https://images.unsplash.com/photo-1579586337278-3befd40fd17a",
            "https://www.amazon.com/dp/B07V5JPVD3",
            ProductSource::Amazon,
        ),
        fixture(
            "3",
            "Portable Bluetooth Speaker",
            "Waterproof, durable speaker with rich sound and 24-hour battery life",
            129.99,
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1",
            "https://www.amazon.com/dp/B07P39MLKH",
            ProductSource::Amazon,
        ),
        fixture(
            "4",
            "Smartphone Photography Kit",
            "Complete kit with lenses, tripod, and remote for professional-quality smartphone photos",
            39.99,
            "https://images.unsplash.com/photo-1526406915894-7bcd65f60845",
            "https://www.aliexpress.com/item/1005001621843079.html",
            ProductSource::Aliexpress,
        ),
        fixture(
            "5",
            "Premium Coffee Sampler",
            "Collection of gourmet single-origin coffee beans from around the world",
            48.00,
            "https://images.unsplash.com/photo-1559056211-efdc528b5d5c",
            "https://www.amazon.com/dp/B07HGRH9ZV",
            ProductSource::Amazon,
        ),
        fixture(
            "6",
            "Handcrafted Leather Wallet",
            "Genuine leather wallet with RFID blocking and multiple card slots",
            29.99,
            "https://images.unsplash.com/photo-1627123424574-724758594e93",
            "https://www.aliexpress.com/item/1005003099362969.html",
            ProductSource::Aliexpress,
        ),
        fixture(
            "7",
            "Smart Home Starter Kit",
            "Voice-controlled smart hub with compatible smart bulbs and plug",
            169.99,
            "https://images.unsplash.com/photo-1558002038-1055e2a8a58a",
            "https://www.amazon.com/dp/B07VRH8Q7T",
            ProductSource::Amazon,
        ),
        fixture(
            "8",
            "Essential Oil Diffuser",
            "Ultrasonic aromatherapy diffuser with LED mood lighting and auto shut-off",
            25.99,
            "https://images.unsplash.com/photo-1608571423539-e951a50e05e4",
            "https://www.aliexpress.com/item/1005004033628125.html",
            ProductSource::Aliexpress,
        ),
    ]
}

fn more_page() -> Vec<GiftProduct> {
    vec![
        fixture(
            "9",
            "Gourmet Cooking Gift Set",
            "Premium spice collection with recipe book for culinary enthusiasts",
            59.99,
            "https://images.unsplash.com/photo-1532635241-17e820acc59f",
            "https://www.amazon.com/dp/B08JVFZ2M7",
            ProductSource::Amazon,
        ),
        fixture(
            "10",
            "Wireless Charging Station",
            "3-in-1 charging dock for smartphone, smartwatch, and earbuds",
            42.99,
            "https://images.unsplash.com/photo-1608156639585-b3a032ef9689",
            "https://www.aliexpress.com/item/1005003172153372.html",
            ProductSource::Aliexpress,
        ),
        fixture(
            "11",
            "Bamboo Bath Caddy",
            "Expandable bath tray with wine holder, book stand, and phone slot",
            36.99,
            "https://images.unsplash.com/photo-1620800845867-0a9d3b0d22fd",
            "https://www.amazon.com/dp/B07MBQML2Z",
            ProductSource::Amazon,
        ),
        fixture(
            "12",
            "Indoor Herb Garden Kit",
            "Self-watering indoor garden with LED grow light and 6 herb pods",
            99.95,
            "https://images.unsplash.com/photo-1617169610136-7e981be476f1",
            "https://www.amazon.com/dp/B07CKK8Z78",
            ProductSource::Amazon,
        ),
        fixture(
            "13",
            "Vintage Vinyl Record Player",
            "Bluetooth-compatible turntable with built-in speakers and USB recording",
            69.99,
            "https://images.unsplash.com/photo-1603867352548-9b34530a4953",
            "https://www.aliexpress.com/item/1005003560832045.html",
            ProductSource::Aliexpress,
        ),
        fixture(
            "14",
            "Personalized Star Map",
            "Custom star map showing the night sky from any location and date",
            39.99,
            "https://images.unsplash.com/photo-1519681393784-d120267933ba",
            "https://www.amazon.com/dp/B07WNLW3P8",
            ProductSource::Amazon,
        ),
        fixture(
            "15",
            "Luxury Scented Candle Set",
            "Set of 4 premium soy wax candles with essential oils and long burn time",
            49.99,
            "https://images.unsplash.com/photo-1608181831718-c9ffd8dff23f",
            "https://www.amazon.com/dp/B074QMFZ3C",
            ProductSource::Amazon,
        ),
        fixture(
            "16",
            "Insulated Tumbler",
            "Vacuum-insulated stainless steel tumbler that keeps drinks hot or cold for hours",
            27.99,
            "https://images.unsplash.com/photo-1575414004048-2f145de2c6c4",
            "https://www.aliexpress.com/item/1005003778026519.html",
            ProductSource::Aliexpress,
        ),
    ]
}

#[async_trait]
impl GiftRecommender for MockGiftRecommender {
    async fn search(
        &self,
        _profile: &DemographicProfile,
        count: usize,
    ) -> Result<Vec<GiftProduct>> {
        Ok(first_page().into_iter().take(count).collect())
    }

    async fn search_more(
        &self,
        _profile: &DemographicProfile,
        count: usize,
    ) -> Result<Vec<GiftProduct>> {
        Ok(more_page().into_iter().take(count).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftfinder_core::gift::{AgeRange, Gender, Relationship};

    fn profile() -> DemographicProfile {
        DemographicProfile {
            gender: Gender::Other,
            relationship: Relationship::Coworker,
            age_range: AgeRange::Senior,
            interests: vec![],
            price_range: None,
            occasion: None,
        }
    }

    #[tokio::test]
    async fn test_search_respects_count() {
        let recommender = MockGiftRecommender;
        let results = recommender.search(&profile(), 3).await.unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "1");
    }

    #[tokio::test]
    async fn test_more_page_is_disjoint_from_first_page() {
        let recommender = MockGiftRecommender;
        let first = recommender.search(&profile(), 8).await.unwrap();
        let more = recommender.search_more(&profile(), 8).await.unwrap();

        assert_eq!(first.len(), 8);
        assert_eq!(more.len(), 8);
        assert!(more.iter().all(|m| first.iter().all(|f| f.id != m.id)));
    }

    #[tokio::test]
    async fn test_count_larger_than_catalog_returns_whole_page() {
        let recommender = MockGiftRecommender;
        let results = recommender.search(&profile(), 50).await.unwrap();
        assert_eq!(results.len(), 8);
    }
}
