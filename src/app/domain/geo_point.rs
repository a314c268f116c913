use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic point marking one end of a project site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_coordinates() {
        let point = GeoPoint { lat: 18.5204, lng: 73.8567 };
        assert!(point.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let point = GeoPoint { lat: 95.0, lng: 73.8567 };
        assert!(point.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        let point = GeoPoint { lat: 18.5204, lng: -200.0 };
        assert!(point.validate().is_err());
    }
}
