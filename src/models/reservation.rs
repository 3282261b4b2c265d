// src/models/reservation.rs
// DOCUMENTATION: Reservations and the stay date range

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A booking of one place by one user
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub user_id: i32,
    pub place_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/places/{place_id}/reservations
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReservationRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Closed date interval [check_in, check_out]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// A stay must end strictly after it starts
    pub fn is_valid(&self) -> bool {
        self.check_in < self.check_out
    }
}

impl From<ReservationRequest> for StayDates {
    fn from(req: ReservationRequest) -> Self {
        StayDates::new(req.check_in, req.check_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stay(a: &str, b: &str) -> StayDates {
        StayDates::new(date(a), date(b))
    }

    #[test]
    fn test_range_validity() {
        assert!(stay("2023-09-10", "2023-09-15").is_valid());
        assert!(!stay("2023-09-15", "2023-09-15").is_valid());
        assert!(!stay("2023-09-15", "2023-09-10").is_valid());
    }

    #[test]
    fn test_request_parses_iso_dates() {
        let req: ReservationRequest =
            serde_json::from_str(r#"{"check_in":"2023-09-10","check_out":"2023-09-15"}"#).unwrap();
        assert_eq!(StayDates::from(req), stay("2023-09-10", "2023-09-15"));
    }
}
