// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::{FacilityResponse, RegulationResponse, ReviewResponse};

/// Kind of property being rented out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Villa,
    Resort,
    Campsite,
    Apartment,
    Hotel,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Villa => "VILLA",
            PropertyType::Resort => "RESORT",
            PropertyType::Campsite => "CAMPSITE",
            PropertyType::Apartment => "APARTMENT",
            PropertyType::Hotel => "HOTEL",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VILLA" => Ok(PropertyType::Villa),
            "RESORT" => Ok(PropertyType::Resort),
            "CAMPSITE" => Ok(PropertyType::Campsite),
            "APARTMENT" => Ok(PropertyType::Apartment),
            "HOTEL" => Ok(PropertyType::Hotel),
            other => Err(format!("invalid property type: '{other}'")),
        }
    }
}

/// Represents a complete place record from the database
/// DOCUMENTATION: Maps to the places table; `user_id` is the owning account
#[derive(Debug, Clone)]
pub struct Place {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub property_type: PropertyType,
    pub description: String,
    /// File name of the cover picture, if one was set
    pub main_image: Option<String>,
    /// Nightly cost
    pub cost: i32,
    pub country: String,
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Square meters
    pub area: i32,
    /// Maximum number of guests
    pub guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new place
/// DOCUMENTATION: Body of POST /api/places; the owner is the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PlaceRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub name: String,

    pub property_type: PropertyType,

    #[validate(custom = "crate::models::not_blank")]
    pub description: String,

    #[serde(default)]
    pub main_image: Option<String>,

    #[validate(range(min = 0))]
    pub cost: i32,

    #[validate(custom = "crate::models::not_blank")]
    pub country: String,

    #[validate(custom = "crate::models::not_blank")]
    pub city: String,

    #[validate(custom = "crate::models::not_blank")]
    pub address: String,

    pub latitude: f64,

    pub longitude: f64,

    #[validate(range(min = 0))]
    pub area: i32,

    #[validate(range(min = 0))]
    pub guests: i32,

    #[validate(range(min = 0))]
    pub bedrooms: i32,

    #[validate(range(min = 0))]
    pub beds: i32,

    #[validate(range(min = 0))]
    pub bathrooms: i32,
}

/// Request DTO for updating a place
/// DOCUMENTATION: All fields optional for partial updates
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub name: Option<String>,
    pub property_type: Option<PropertyType>,
    #[validate(custom = "crate::models::not_blank")]
    pub description: Option<String>,
    pub main_image: Option<String>,
    #[validate(range(min = 0))]
    pub cost: Option<i32>,
    #[validate(custom = "crate::models::not_blank")]
    pub country: Option<String>,
    #[validate(custom = "crate::models::not_blank")]
    pub city: Option<String>,
    #[validate(custom = "crate::models::not_blank")]
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[validate(range(min = 0))]
    pub area: Option<i32>,
    #[validate(range(min = 0))]
    pub guests: Option<i32>,
    #[validate(range(min = 0))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0))]
    pub beds: Option<i32>,
    #[validate(range(min = 0))]
    pub bathrooms: Option<i32>,
}

impl UpdatePlaceRequest {
    /// Overlay the supplied fields onto an existing place
    pub fn apply_to(self, place: &mut Place) {
        if let Some(v) = self.name {
            place.name = v;
        }
        if let Some(v) = self.property_type {
            place.property_type = v;
        }
        if let Some(v) = self.description {
            place.description = v;
        }
        if let Some(v) = self.main_image {
            place.main_image = Some(v);
        }
        if let Some(v) = self.cost {
            place.cost = v;
        }
        if let Some(v) = self.country {
            place.country = v;
        }
        if let Some(v) = self.city {
            place.city = v;
        }
        if let Some(v) = self.address {
            place.address = v;
        }
        if let Some(v) = self.latitude {
            place.latitude = v;
        }
        if let Some(v) = self.longitude {
            place.longitude = v;
        }
        if let Some(v) = self.area {
            place.area = v;
        }
        if let Some(v) = self.guests {
            place.guests = v;
        }
        if let Some(v) = self.bedrooms {
            place.bedrooms = v;
        }
        if let Some(v) = self.beds {
            place.beds = v;
        }
        if let Some(v) = self.bathrooms {
            place.bathrooms = v;
        }
    }
}

/// Place response DTO for API
#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub property_type: PropertyType,
    pub description: String,
    pub main_image: Option<String>,
    pub cost: i32,
    pub country: String,
    pub city: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area: i32,
    pub guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Condensed listing used for a user's places
#[derive(Debug, Clone, Serialize)]
pub struct PlaceSummary {
    pub id: i32,
    pub name: String,
    pub property_type: PropertyType,
    pub description: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub guests: i32,
    pub cost: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
}

/// Detailed place response with everything attached to it
#[derive(Debug, Clone, Serialize)]
pub struct PlaceDetailResponse {
    #[serde(flatten)]
    pub place: PlaceResponse,
    pub facility: Option<FacilityResponse>,
    pub regulation: Option<RegulationResponse>,
    pub reviews: Vec<ReviewResponse>,
}

/// Path segments of GET /api/places/availability/{city}/{country}/{guests}/{check_in}/{check_out}
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub city: String,
    pub country: String,
    pub guests: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Place {
    /// Convert database Place into API response
    pub fn to_response(&self) -> PlaceResponse {
        PlaceResponse {
            id: self.id,
            owner_id: self.user_id,
            name: self.name.clone(),
            property_type: self.property_type,
            description: self.description.clone(),
            main_image: self.main_image.clone(),
            cost: self.cost,
            country: self.country.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            area: self.area,
            guests: self.guests,
            bedrooms: self.bedrooms,
            beds: self.beds,
            bathrooms: self.bathrooms,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn to_summary(&self) -> PlaceSummary {
        PlaceSummary {
            id: self.id,
            name: self.name.clone(),
            property_type: self.property_type,
            description: self.description.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            guests: self.guests,
            cost: self.cost,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
        }
    }
}
