#[cfg(test)]
mod tests {
    use crate::domain::models::{Place, PlaceCategory};

    #[test]
    fn place_deserializes_from_the_api_payload_shape() {
        let payload = r#"{
            "id": "chg-204",
            "name": "Volt Hub Nord",
            "address": "88 Ring Road",
            "category": "charging",
            "rating": 4.6,
            "price": 0.52,
            "distance_m": 1240,
            "open_now": false,
            "updated_at": "2024-06-01T08:30:00Z"
        }"#;

        let place: Place = serde_json::from_str(payload).expect("payload parses");
        assert_eq!(place.category, PlaceCategory::Charging);
        assert_eq!(place.distance_m, 1240);
        assert!(!place.open_now);
    }
}
