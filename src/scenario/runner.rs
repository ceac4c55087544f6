//! Lifecycle runner
//!
//! Executes the four steps in strict order against the remote API. The
//! auth token from step 1 and the booking id from step 2 are written once
//! into the session state and read by the later steps. The first unmet
//! expectation stops the run.

use colored::Colorize;
use tracing::info;

use crate::api::types::Booking;
use crate::api::BookerClient;
use crate::common::config::Settings;
use crate::common::{Error, Result};

const SCENARIO_NAME: &str = "booking lifecycle";

const STEP_NAMES: [&str; 4] = [
    "authenticate",
    "create booking",
    "retrieve booking",
    "delete booking",
];

/// Result of a lifecycle run
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub error: Option<String>,
}

/// State threaded between steps, each field written once
#[derive(Debug, Default)]
struct SessionState {
    /// Auth token, empty until step 1 completes
    token: String,
    /// Booking id, unset until step 2 completes
    booking_id: Option<i64>,
}

/// Run the four-step lifecycle against the configured API
///
/// Steps are not isolated: step N assumes all prior steps succeeded, so a
/// failed step aborts the run. Configuration and client-construction
/// errors propagate as `Err`; step failures come back as a not-passed
/// `ScenarioResult` recording the failing step.
pub async fn run_lifecycle(
    settings: &Settings,
    fixture: &Booking,
    verbose: bool,
) -> Result<ScenarioResult> {
    let client = BookerClient::new(settings)?;
    let mut state = SessionState::default();
    let steps_total = STEP_NAMES.len();

    println!(
        "\n{} {}",
        "Running:".blue().bold(),
        SCENARIO_NAME.white().bold()
    );

    if verbose {
        println!("  Base URL: {}", settings.base_url.dimmed());
        println!(
            "  Fixture: {} {} ({})",
            fixture.firstname.dimmed(),
            fixture.lastname.dimmed(),
            fixture.bookingdates.checkin.dimmed()
        );
    }

    println!("\n{}", "Steps:".cyan());

    for step_num in 1..=steps_total {
        let outcome = match step_num {
            1 => step_authenticate(&client, settings, &mut state).await,
            2 => step_create(&client, fixture, &mut state).await,
            3 => step_retrieve(&client, fixture, &state).await,
            4 => step_delete(&client, &state).await,
            _ => unreachable!(),
        };

        let step_name = STEP_NAMES[step_num - 1];

        match outcome {
            Ok(detail) => {
                println!(
                    "  {} Step {}: {} ({})",
                    "✓".green(),
                    step_num,
                    step_name,
                    detail.dimmed()
                );
            }
            Err(e) => {
                println!("  {} Step {}: {}: {}", "✗".red(), step_num, step_name, e);

                return Ok(ScenarioResult {
                    name: SCENARIO_NAME.to_string(),
                    passed: false,
                    steps_run: step_num,
                    steps_total,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    println!(
        "\n{} {}\n",
        "✓".green().bold(),
        "Lifecycle Passed".green().bold()
    );

    Ok(ScenarioResult {
        name: SCENARIO_NAME.to_string(),
        passed: true,
        steps_run: steps_total,
        steps_total,
        error: None,
    })
}

/// Step 1: exchange credentials for a token and store it
async fn step_authenticate(
    client: &BookerClient,
    settings: &Settings,
    state: &mut SessionState,
) -> Result<String> {
    let auth = client
        .authenticate(&settings.username, &settings.password)
        .await?;

    let token = match auth.token {
        Some(t) if !t.is_empty() => t,
        _ => {
            let reason = auth.reason.unwrap_or_else(|| "no token in response".to_string());
            return Err(Error::Assertion(format!("authentication failed: {}", reason)));
        }
    };

    // Char-based prefix: the token is opaque and not guaranteed ASCII
    let prefix: String = token.chars().take(10).collect();
    info!(token_prefix = %prefix, "auth token stored");
    let detail = format!("token {}...", prefix);
    state.token = token;

    Ok(detail)
}

/// Step 2: create a booking from the fixture and store the assigned id
async fn step_create(
    client: &BookerClient,
    fixture: &Booking,
    state: &mut SessionState,
) -> Result<String> {
    let created = client.create_booking(fixture).await?;

    assert_booking_matches(&created.booking, fixture)?;

    info!(booking_id = created.bookingid, "booking created");
    state.booking_id = Some(created.bookingid);

    Ok(format!("id {}", created.bookingid))
}

/// Step 3: fetch the booking back and compare it to the fixture
async fn step_retrieve(
    client: &BookerClient,
    fixture: &Booking,
    state: &SessionState,
) -> Result<String> {
    let id = state
        .booking_id
        .ok_or_else(|| Error::Assertion("no booking id from create step".to_string()))?;

    let retrieved = client.get_booking(id).await?;

    assert_booking_matches(&retrieved, fixture)?;

    Ok(format!("id {} matches fixture", id))
}

/// Step 4: delete the booking and expect the API's 201/"Created" answer
async fn step_delete(client: &BookerClient, state: &SessionState) -> Result<String> {
    let id = state
        .booking_id
        .ok_or_else(|| Error::Assertion("no booking id from create step".to_string()))?;

    if state.token.is_empty() {
        return Err(Error::Assertion("no auth token from auth step".to_string()));
    }

    let outcome = client.delete_booking(id, &state.token).await?;

    if outcome.status != 201 {
        return Err(Error::Assertion(format!(
            "delete: expected status 201, got {}",
            outcome.status
        )));
    }

    if outcome.body.trim() != "Created" {
        return Err(Error::Assertion(format!(
            "delete: expected body 'Created', got '{}'",
            outcome.body
        )));
    }

    Ok(format!("id {} deleted", id))
}

/// Compare a returned record to the fixture, field by field
///
/// Field-level messages make API drift readable: the report names the
/// first field that differs rather than dumping both records.
fn assert_booking_matches(actual: &Booking, expected: &Booking) -> Result<()> {
    if actual.firstname != expected.firstname {
        return Err(Error::field_mismatch(
            "firstname",
            &expected.firstname,
            &actual.firstname,
        ));
    }

    if actual.lastname != expected.lastname {
        return Err(Error::field_mismatch(
            "lastname",
            &expected.lastname,
            &actual.lastname,
        ));
    }

    if actual.totalprice != expected.totalprice {
        return Err(Error::field_mismatch(
            "totalprice",
            expected.totalprice,
            actual.totalprice,
        ));
    }

    if actual.depositpaid != expected.depositpaid {
        return Err(Error::field_mismatch(
            "depositpaid",
            expected.depositpaid,
            actual.depositpaid,
        ));
    }

    if actual.bookingdates.checkin != expected.bookingdates.checkin {
        return Err(Error::field_mismatch(
            "bookingdates.checkin",
            &expected.bookingdates.checkin,
            &actual.bookingdates.checkin,
        ));
    }

    if actual.bookingdates.checkout != expected.bookingdates.checkout {
        return Err(Error::field_mismatch(
            "bookingdates.checkout",
            &expected.bookingdates.checkout,
            &actual.bookingdates.checkout,
        ));
    }

    if actual.additionalneeds != expected.additionalneeds {
        return Err(Error::field_mismatch(
            "additionalneeds",
            expected.additionalneeds.as_deref().unwrap_or("<none>"),
            actual.additionalneeds.as_deref().unwrap_or("<none>"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BookingDates;

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
    fn matching_records_pass() {
        assert!(assert_booking_matches(&fixture(), &fixture()).is_ok());
    }

    #[test]
    fn mismatch_names_the_field() {
        let mut actual = fixture();
        actual.totalprice = 999;

        let err = assert_booking_matches(&actual, &fixture()).unwrap_err();
        assert!(err.to_string().contains("totalprice"));
        assert!(err.to_string().contains("111"));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn date_mismatch_names_the_nested_field() {
        let mut actual = fixture();
        actual.bookingdates.checkout = "2025-02-01".to_string();

        let err = assert_booking_matches(&actual, &fixture()).unwrap_err();
        assert!(err.to_string().contains("bookingdates.checkout"));
    }

    #[test]
    fn missing_needs_reads_as_none() {
        let mut actual = fixture();
        actual.additionalneeds = None;

        let err = assert_booking_matches(&actual, &fixture()).unwrap_err();
        assert!(err.to_string().contains("additionalneeds"));
        assert!(err.to_string().contains("<none>"));
    }

    #[test]
    fn session_state_starts_unset() {
        let state = SessionState::default();
        assert!(state.token.is_empty());
        assert!(state.booking_id.is_none());
    }
}
