// Automated test suite for a restful-booker style booking API

// Export one module per concern of the suite
pub mod booking;
pub mod client;
pub mod fixtures;
pub mod report;
pub mod runner;

// Re-export key types for convenience
pub use booking::{
    BookingDates, BookingDetails, BookingId, BookingReference, CreatedBooking, NewBooking,
    PriceUpdate,
};
pub use client::{ApiError, BookingApi, ClientConfig, RestBookingClient};
pub use fixtures::{load_fixtures, read_fixtures, FixtureError, FixtureRecord};
pub use report::{CheckOutcome, StepReport, SuiteReport};
pub use runner::{BookingSuite, SuiteError};
