//! Typed client for the remote booking API

pub mod client;
pub mod types;

pub use client::BookerClient;
pub use types::{AuthResponse, Booking, BookingDates, CreatedBooking, DeleteOutcome};
