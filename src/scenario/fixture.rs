//! Booking fixture loading

use std::path::Path;

use crate::api::types::Booking;
use crate::common::{Error, Result};

/// Default fixture file, relative to the working directory
pub const DEFAULT_FIXTURE_PATH: &str = "booking_data.json";

/// Load the booking fixture from a JSON file
///
/// An unreadable or unparsable fixture is a configuration error and must
/// abort the run before any request goes out.
pub fn load_fixture(path: &Path) -> Result<Booking> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| Error::FixtureParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE_JSON: &str = r#"{
        "firstname": "Jim",
        "lastname": "Brown",
        "totalprice": 111,
        "depositpaid": true,
        "bookingdates": {
            "checkin": "2025-01-01",
            "checkout": "2025-01-05"
        },
        "additionalneeds": "Breakfast"
    }"#;

    #[test]
    fn loads_a_valid_fixture() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE_JSON.as_bytes()).unwrap();

        let booking = load_fixture(file.path()).unwrap();
        assert_eq!(booking.firstname, "Jim");
        assert_eq!(booking.lastname, "Brown");
        assert_eq!(booking.totalprice, 111);
        assert!(booking.depositpaid);
        assert_eq!(booking.bookingdates.checkin, "2025-01-01");
        assert_eq!(booking.bookingdates.checkout, "2025-01-05");
        assert_eq!(booking.additionalneeds.as_deref(), Some("Breakfast"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_fixture(Path::new("no/such/booking.json")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"firstname\": ").unwrap();

        let err = load_fixture(file.path()).unwrap_err();
        assert!(matches!(err, Error::FixtureParse(_)));
    }

    #[test]
    fn fixture_without_needs_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"firstname":"Ana","lastname":"Gray","totalprice":50,
                "depositpaid":false,
                "bookingdates":{"checkin":"2025-03-01","checkout":"2025-03-02"}}"#,
        )
        .unwrap();

        let booking = load_fixture(file.path()).unwrap();
        assert!(booking.additionalneeds.is_none());
    }
}
