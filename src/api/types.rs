//! Wire types for the booking API
//!
//! Field names follow the remote API's JSON exactly; the fixture file uses
//! the same shape, so one struct covers both.

use serde::{Deserialize, Serialize};

/// A booking record, as sent to and echoed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    /// The API omits this field when a booking has no additional needs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

/// Check-in/check-out dates, kept as strings the way the wire carries them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

/// Credentials sent to `POST /auth`
#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from `POST /auth`
///
/// The API answers HTTP 200 either way: `{"token": "..."}` on success,
/// `{"reason": "Bad credentials"}` on failure.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub reason: Option<String>,
}

/// Response from `POST /booking`: the assigned id plus the echoed record
#[derive(Debug, Deserialize)]
pub struct CreatedBooking {
    pub bookingid: i64,
    pub booking: Booking,
}

/// Raw outcome of `DELETE /booking/{id}`
///
/// The status is part of the scenario expectation (the API answers 201),
/// so the client hands it back untouched.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub status: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Booking {
        Booking {
            firstname: "Jim".to_string(),
            lastname: "Brown".to_string(),
            totalprice: 111,
            depositpaid: true,
            bookingdates: BookingDates {
                checkin: "2025-01-01".to_string(),
                checkout: "2025-01-05".to_string(),
            },
            additionalneeds: Some("Breakfast".to_string()),
        }
    }

    #[test]
    fn booking_serializes_with_api_field_names() {
        let value = serde_json::to_value(fixture()).unwrap();
        assert_eq!(value["firstname"], "Jim");
        assert_eq!(value["totalprice"], 111);
        assert_eq!(value["depositpaid"], true);
        assert_eq!(value["bookingdates"]["checkin"], "2025-01-01");
        assert_eq!(value["additionalneeds"], "Breakfast");
    }

    #[test]
    fn booking_without_needs_omits_the_field() {
        let mut booking = fixture();
        booking.additionalneeds = None;
        let value = serde_json::to_value(booking).unwrap();
        assert!(value.get("additionalneeds").is_none());
    }

    #[test]
    fn auth_response_parses_both_shapes() {
        let ok: AuthResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(ok.token.as_deref(), Some("abc123"));
        assert!(ok.reason.is_none());

        let bad: AuthResponse =
            serde_json::from_str(r#"{"reason":"Bad credentials"}"#).unwrap();
        assert!(bad.token.is_none());
        assert_eq!(bad.reason.as_deref(), Some("Bad credentials"));
    }

    #[test]
    fn created_booking_parses_id_and_record() {
        let raw = r#"{"bookingid":42,"booking":{"firstname":"Jim","lastname":"Brown",
            "totalprice":111,"depositpaid":true,
            "bookingdates":{"checkin":"2025-01-01","checkout":"2025-01-05"},
            "additionalneeds":"Breakfast"}}"#;
        let created: CreatedBooking = serde_json::from_str(raw).unwrap();
        assert_eq!(created.bookingid, 42);
        assert_eq!(created.booking, fixture());
    }
}
