use crate::models::coordinates::Coordinates;
use crate::models::hotel::HotelRecord;

/// Hand-authored hotel catalog standing in for a booking provider.
pub struct MockHotelRepo {
    catalog: Vec<HotelRecord>,
}

impl MockHotelRepo {
    pub fn new() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }

    pub fn all_hotels(&self) -> Vec<HotelRecord> {
        self.catalog.clone()
    }

    pub fn search_by_location(
        &self,
        query: &str,
    ) -> Vec<HotelRecord> {
        self.catalog
            .iter()
            .filter(|hotel| hotel.matches(query))
            .cloned()
            .collect()
    }
}

impl Default for MockHotelRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn hotel(
    id: &str,
    name: &str,
    location: &str,
    address: &str,
    price_per_night: u32,
    rating: f64,
    coordinates: Coordinates,
    amenities: &[&str],
) -> HotelRecord {
    HotelRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        address: address.to_string(),
        price_per_night,
        currency: "JPY".to_string(),
        rating,
        image_url: format!("https://picsum.photos/seed/{}/800/600", id),
        coordinates,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

fn default_catalog() -> Vec<HotelRecord> {
    vec![
        hotel(
            "hotel-001",
            "丸の内ステーションホテル",
            "東京都千代田区",
            "東京都千代田区丸の内1-9-1",
            28000,
            4.6,
            Coordinates { lat: 35.6812, lng: 139.7671 },
            &["Wi-Fi", "レストラン", "フィットネス"],
        ),
        hotel(
            "hotel-002",
            "銀座グランドホテル",
            "東京都中央区",
            "東京都中央区銀座8-6-15",
            19500,
            4.3,
            Coordinates { lat: 35.6684, lng: 139.7606 },
            &["Wi-Fi", "朝食付き", "大浴場"],
        ),
        hotel(
            "hotel-003",
            "新宿パークビューホテル",
            "東京都新宿区",
            "東京都新宿区西新宿3-7-1",
            15800,
            4.1,
            Coordinates { lat: 35.6852, lng: 139.6907 },
            &["Wi-Fi", "駐車場", "ラウンジ"],
        ),
    ]
}
