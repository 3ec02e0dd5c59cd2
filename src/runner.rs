// Ordered scenario driving the booking API through create, list,
// update and delete, collecting check outcomes along the way.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

use crate::booking::{price_matches, BookingReference, NewBooking};
use crate::client::BookingApi;
use crate::fixtures::{FixtureError, FixtureRecord};
use crate::report::{StepReport, SuiteReport};

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("no bookings were created, nothing to delete")]
    NoBookingsCreated,
}

pub struct BookingSuite<A> {
    api: A,
}

impl<A: BookingApi> BookingSuite<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    // Creates one booking per fixture record and returns the references the
    // later phases consume, in creation order. A failed record is recorded
    // and the remaining records are still processed.
    pub async fn create_bookings(
        &self,
        fixtures: &[FixtureRecord],
    ) -> (Vec<BookingReference>, StepReport) {
        let mut report = StepReport::new("create bookings");
        let mut references = Vec::with_capacity(fixtures.len());

        for (index, record) in fixtures.iter().enumerate() {
            let request = NewBooking::from(record);
            match self.api.create_booking(&request).await {
                Ok(created) => {
                    references.push(BookingReference {
                        booking_id: created.bookingid,
                        new_price: record.new_price,
                    });

                    let id_check = format!("booking {index}: assigned id");
                    if created.bookingid >= 0 {
                        report.pass(id_check);
                    } else {
                        report.fail(id_check, format!("negative id {}", created.bookingid));
                    }

                    let name_check = format!("booking {index}: echoed firstname");
                    if created.booking.firstname == record.first_name {
                        report.pass(name_check);
                    } else {
                        report.fail(
                            name_check,
                            format!(
                                "expected `{}`, got `{}`",
                                record.first_name, created.booking.firstname
                            ),
                        );
                    }
                }
                Err(err) => {
                    warn!(index, error = %err, "booking creation failed");
                    report.fail(format!("booking {index}: create"), err.to_string());
                }
            }
        }

        (references, report)
    }

    // Lists bookings with no filters; only the status code is checked.
    pub async fn list_bookings(&self) -> StepReport {
        let mut report = StepReport::new("list bookings");
        match self.api.list_bookings().await {
            Ok((status, ids)) => {
                info!(count = ids.len(), "booking ids available");
                if status == StatusCode::OK {
                    report.pass("list status 200");
                } else {
                    report.fail("list status 200", format!("got {status}"));
                }
            }
            Err(err) => report.fail("list status 200", err.to_string()),
        }
        report
    }

    // Patches each stored reference with its target price. An empty
    // reference list makes this a no-op.
    pub async fn update_prices(&self, references: &[BookingReference]) -> StepReport {
        let mut report = StepReport::new("update prices");

        for reference in references {
            let check = format!("booking {}: updated totalprice", reference.booking_id);
            match self
                .api
                .update_total_price(reference.booking_id, reference.new_price)
                .await
            {
                Ok(details) => {
                    if price_matches(details.totalprice, reference.new_price) {
                        report.pass(check);
                    } else {
                        report.fail(
                            check,
                            format!(
                                "expected {}, got {}",
                                reference.new_price, details.totalprice
                            ),
                        );
                    }
                }
                Err(err) => report.fail(check, err.to_string()),
            }
        }

        report
    }

    // Deletes the first created booking. Calling this with no references is
    // an explicit error rather than an index panic.
    pub async fn delete_first_booking(
        &self,
        references: &[BookingReference],
    ) -> Result<StepReport, SuiteError> {
        let first = references.first().ok_or(SuiteError::NoBookingsCreated)?;

        let mut report = StepReport::new("delete first booking");
        match self.api.delete_booking(first.booking_id).await {
            Ok(status) => {
                // The service reports successful deletion as 201
                if status == StatusCode::CREATED {
                    report.pass("delete status 201");
                } else {
                    report.fail("delete status 201", format!("got {status}"));
                }
            }
            Err(err) => report.fail("delete status 201", err.to_string()),
        }
        Ok(report)
    }

    // Runs the whole scenario in order. Creation feeds the later phases
    // explicitly; there is no state shared between them otherwise.
    pub async fn run(&self, fixtures: &[FixtureRecord]) -> Result<SuiteReport, SuiteError> {
        let mut suite = SuiteReport::default();

        let (references, create_report) = self.create_bookings(fixtures).await;
        suite.push(create_report);
        suite.push(self.list_bookings().await);
        suite.push(self.update_prices(&references).await);
        suite.push(self.delete_first_booking(&references).await?);

        Ok(suite)
    }
}
