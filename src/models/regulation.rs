// src/models/regulation.rs
// DOCUMENTATION: House rules of a place, one record per place

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CashOnly,
    CardOnly,
    CashAndCard,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnly => "CASH_ONLY",
            PaymentMethod::CardOnly => "CARD_ONLY",
            PaymentMethod::CashAndCard => "CASH_AND_CARD",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH_ONLY" => Ok(PaymentMethod::CashOnly),
            "CARD_ONLY" => Ok(PaymentMethod::CardOnly),
            "CASH_AND_CARD" => Ok(PaymentMethod::CashAndCard),
            other => Err(format!("invalid payment method: '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Regulation {
    pub id: i32,
    pub place_id: i32,
    /// Free text such as "13:00"
    pub arrival_time: String,
    pub departure_time: String,
    pub cancellation_policy: Option<String>,
    pub payment_method: PaymentMethod,
    pub age_restriction: bool,
    pub pets_allowed: bool,
    pub events_allowed: bool,
    pub smoking_allowed: bool,
    pub quiet_hours: Option<String>,
}

/// Body of POST /api/places/{place_id}/regulations
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegulationRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub arrival_time: String,
    #[validate(custom = "crate::models::not_blank")]
    pub departure_time: String,
    #[serde(default)]
    pub cancellation_policy: Option<String>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub age_restriction: bool,
    #[serde(default)]
    pub pets_allowed: bool,
    #[serde(default)]
    pub events_allowed: bool,
    #[serde(default)]
    pub smoking_allowed: bool,
    #[serde(default)]
    pub quiet_hours: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRegulationRequest {
    #[validate(custom = "crate::models::not_blank")]
    pub arrival_time: Option<String>,
    #[validate(custom = "crate::models::not_blank")]
    pub departure_time: Option<String>,
    pub cancellation_policy: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub age_restriction: Option<bool>,
    pub pets_allowed: Option<bool>,
    pub events_allowed: Option<bool>,
    pub smoking_allowed: Option<bool>,
    pub quiet_hours: Option<String>,
}

impl UpdateRegulationRequest {
    pub fn apply_to(self, regulation: &mut Regulation) {
        if let Some(v) = self.arrival_time {
            regulation.arrival_time = v;
        }
        if let Some(v) = self.departure_time {
            regulation.departure_time = v;
        }
        if let Some(v) = self.cancellation_policy {
            regulation.cancellation_policy = Some(v);
        }
        if let Some(v) = self.payment_method {
            regulation.payment_method = v;
        }
        if let Some(v) = self.age_restriction {
            regulation.age_restriction = v;
        }
        if let Some(v) = self.pets_allowed {
            regulation.pets_allowed = v;
        }
        if let Some(v) = self.events_allowed {
            regulation.events_allowed = v;
        }
        if let Some(v) = self.smoking_allowed {
            regulation.smoking_allowed = v;
        }
        if let Some(v) = self.quiet_hours {
            regulation.quiet_hours = Some(v);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegulationResponse {
    pub id: i32,
    pub place_id: i32,
    pub arrival_time: String,
    pub departure_time: String,
    pub cancellation_policy: Option<String>,
    pub payment_method: PaymentMethod,
    pub age_restriction: bool,
    pub pets_allowed: bool,
    pub events_allowed: bool,
    pub smoking_allowed: bool,
    pub quiet_hours: Option<String>,
}

impl Regulation {
    pub fn to_response(&self) -> RegulationResponse {
        RegulationResponse {
            id: self.id,
            place_id: self.place_id,
            arrival_time: self.arrival_time.clone(),
            departure_time: self.departure_time.clone(),
            cancellation_policy: self.cancellation_policy.clone(),
            payment_method: self.payment_method,
            age_restriction: self.age_restriction,
            pets_allowed: self.pets_allowed,
            events_allowed: self.events_allowed,
            smoking_allowed: self.smoking_allowed,
            quiet_hours: self.quiet_hours.clone(),
        }
    }
}
