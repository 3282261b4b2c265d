// src/models/review.rs
// DOCUMENTATION: Guest reviews and the star rating scale
// PURPOSE: Serialization models for /api/reviews and the nested review routes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyRating {
    OneStar,
    TwoStars,
    ThreeStars,
    FourStars,
    FiveStars,
    Unrated,
}

impl PropertyRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyRating::OneStar => "ONE_STAR",
            PropertyRating::TwoStars => "TWO_STARS",
            PropertyRating::ThreeStars => "THREE_STARS",
            PropertyRating::FourStars => "FOUR_STARS",
            PropertyRating::FiveStars => "FIVE_STARS",
            PropertyRating::Unrated => "UNRATED",
        }
    }
}

impl fmt::Display for PropertyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONE_STAR" => Ok(PropertyRating::OneStar),
            "TWO_STARS" => Ok(PropertyRating::TwoStars),
            "THREE_STARS" => Ok(PropertyRating::ThreeStars),
            "FOUR_STARS" => Ok(PropertyRating::FourStars),
            "FIVE_STARS" => Ok(PropertyRating::FiveStars),
            "UNRATED" => Ok(PropertyRating::Unrated),
            other => Err(format!("invalid rating: '{other}'")),
        }
    }
}

/// Guest review of a place, at most one per (user, place)
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub place_id: i32,
    pub rating: PropertyRating,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of POST /api/places/{place_id}/reviews
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub rating: PropertyRating,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Body of PUT /api/users/{user_id}/reviews/{review_id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: Option<PropertyRating>,
    pub comment: Option<String>,
}

/// Review response DTO exposed via API
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: i32,
    pub user_id: i32,
    pub place_id: i32,
    pub rating: PropertyRating,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Convert database Review into API response
    pub fn to_response(&self) -> ReviewResponse {
        ReviewResponse {
            id: self.id,
            user_id: self.user_id,
            place_id: self.place_id,
            rating: self.rating,
            comment: self.comment.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_wire_names() {
        let rating: PropertyRating = serde_json::from_str("\"FIVE_STARS\"").unwrap();
        assert_eq!(rating, PropertyRating::FiveStars);
        assert_eq!(rating.as_str().parse::<PropertyRating>().unwrap(), rating);
        assert_eq!(
            serde_json::to_string(&PropertyRating::OneStar).unwrap(),
            "\"ONE_STAR\""
        );
    }

    #[test]
    fn test_comment_is_optional() {
        let req: ReviewRequest = serde_json::from_str(r#"{"rating":"UNRATED"}"#).unwrap();
        assert_eq!(req.rating, PropertyRating::Unrated);
        assert!(req.comment.is_none());
    }
}
