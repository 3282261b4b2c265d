// src/models/facility.rs
// DOCUMENTATION: Amenities offered by a place, one record per place

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Facility {
    pub id: i32,
    pub place_id: i32,
    pub free_parking: bool,
    pub non_smoking: bool,
    pub free_wifi: bool,
    pub breakfast: bool,
    pub balcony: bool,
    pub swimming_pool: bool,
}

/// Body of POST /api/places/{place_id}/facilities; missing flags default to false
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FacilityRequest {
    pub free_parking: bool,
    pub non_smoking: bool,
    pub free_wifi: bool,
    pub breakfast: bool,
    pub balcony: bool,
    pub swimming_pool: bool,
}

/// Partial update; absent flags keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFacilityRequest {
    pub free_parking: Option<bool>,
    pub non_smoking: Option<bool>,
    pub free_wifi: Option<bool>,
    pub breakfast: Option<bool>,
    pub balcony: Option<bool>,
    pub swimming_pool: Option<bool>,
}

impl UpdateFacilityRequest {
    pub fn apply_to(self, facility: &mut Facility) {
        if let Some(v) = self.free_parking {
            facility.free_parking = v;
        }
        if let Some(v) = self.non_smoking {
            facility.non_smoking = v;
        }
        if let Some(v) = self.free_wifi {
            facility.free_wifi = v;
        }
        if let Some(v) = self.breakfast {
            facility.breakfast = v;
        }
        if let Some(v) = self.balcony {
            facility.balcony = v;
        }
        if let Some(v) = self.swimming_pool {
            facility.swimming_pool = v;
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FacilityResponse {
    pub id: i32,
    pub place_id: i32,
    pub free_parking: bool,
    pub non_smoking: bool,
    pub free_wifi: bool,
    pub breakfast: bool,
    pub balcony: bool,
    pub swimming_pool: bool,
}

impl Facility {
    pub fn to_response(&self) -> FacilityResponse {
        FacilityResponse {
            id: self.id,
            place_id: self.place_id,
            free_parking: self.free_parking,
            non_smoking: self.non_smoking,
            free_wifi: self.free_wifi,
            breakfast: self.breakfast,
            balcony: self.balcony,
            swimming_pool: self.swimming_pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_default_to_false() {
        let req: FacilityRequest = serde_json::from_str(r#"{"breakfast":true}"#).unwrap();
        assert!(req.breakfast);
        assert!(!req.free_wifi);
        assert!(!req.swimming_pool);
    }

    #[test]
    fn test_partial_update() {
        let mut facility = Facility {
            id: 1,
            place_id: 4,
            free_parking: false,
            non_smoking: true,
            free_wifi: false,
            breakfast: true,
            balcony: false,
            swimming_pool: false,
        };
        let update: UpdateFacilityRequest =
            serde_json::from_str(r#"{"free_wifi":true,"breakfast":false}"#).unwrap();
        update.apply_to(&mut facility);

        assert!(facility.free_wifi);
        assert!(!facility.breakfast);
        assert!(facility.non_smoking);
    }
}
