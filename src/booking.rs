// Wire types for the booking API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fixtures::FixtureRecord;

// JSON body for POST /booking/
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

// Response payload of a successful creation: the assigned id plus an
// echo of the booking the service stored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBooking {
    pub bookingid: i64,
    pub booking: NewBooking,
}

// One entry of GET /booking/
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct BookingId {
    pub bookingid: i64,
}

// Booking as echoed by PATCH /booking/{id}. The price is read as f64
// since the service may or may not round a fractional update.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingDetails {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: f64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default)]
    pub additionalneeds: Option<String>,
}

// Partial update body for PATCH /booking/{id}
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceUpdate {
    pub totalprice: f64,
}

// A created booking's id paired with the price the update phase
// will patch it to. Held in creation order for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingReference {
    pub booking_id: i64,
    pub new_price: f64,
}

impl From<&FixtureRecord> for NewBooking {
    fn from(record: &FixtureRecord) -> Self {
        Self {
            firstname: record.first_name.clone(),
            lastname: record.last_name.clone(),
            totalprice: record.total_price,
            depositpaid: record.deposit_paid,
            bookingdates: BookingDates {
                checkin: record.check_in,
                checkout: record.check_out,
            },
            additionalneeds: record.additional_needs.clone(),
        }
    }
}

// The service stores totalprice as a number and may truncate a fractional
// update to an integer, so accept either the exact value or its truncation.
pub fn price_matches(echoed: f64, requested: f64) -> bool {
    echoed == requested || echoed == requested.trunc()
}
