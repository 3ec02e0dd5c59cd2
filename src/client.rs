// HTTP client for the booking API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::info;

use crate::booking::{BookingDetails, BookingId, CreatedBooking, NewBooking, PriceUpdate};

const BODY_SNIPPET_LEN: usize = 300;

// Error types for API calls. Assertion failures are not errors; they are
// recorded in the step reports by the runner.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {actual} (expected {expected}): {body}")]
    UnexpectedStatus {
        expected: &'static str,
        actual: u16,
        body: String,
    },

    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

// Client configuration. Defaults target the public restful-booker instance;
// every field can be overridden through the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://restful-booker.herokuapp.com/booking/".to_string(),
            username: "admin".to_string(),
            password: "password123".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    // Recognized variables: BOOKER_BASE_URL, BOOKER_USERNAME, BOOKER_PASSWORD
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("BOOKER_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(username) = std::env::var("BOOKER_USERNAME") {
            config.username = username;
        }
        if let Ok(password) = std::env::var("BOOKER_PASSWORD") {
            config.password = password;
        }
        config
    }
}

// API surface the runner drives. Kept as a trait so tests can substitute
// an in-memory implementation for the remote service.
#[async_trait]
pub trait BookingApi: Send + Sync {
    // POST /booking/
    async fn create_booking(&self, booking: &NewBooking) -> Result<CreatedBooking, ApiError>;

    // GET /booking/ — returns the raw status so the runner can assert on it;
    // ids are parsed only when the call succeeded.
    async fn list_bookings(&self) -> Result<(StatusCode, Vec<BookingId>), ApiError>;

    // PATCH /booking/{id} with only the price, privileged credential
    async fn update_total_price(
        &self,
        booking_id: i64,
        new_price: f64,
    ) -> Result<BookingDetails, ApiError>;

    // DELETE /booking/{id}, privileged credential — returns the raw status
    async fn delete_booking(&self, booking_id: i64) -> Result<StatusCode, ApiError>;
}

// reqwest-backed client for a live booking service
pub struct RestBookingClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RestBookingClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn booking_url(&self, booking_id: Option<i64>) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match booking_id {
            Some(id) => format!("{base}/{id}"),
            None => format!("{base}/"),
        }
    }
}

#[async_trait]
impl BookingApi for RestBookingClient {
    async fn create_booking(&self, booking: &NewBooking) -> Result<CreatedBooking, ApiError> {
        let response = self
            .http
            .post(self.booking_url(None))
            .json(booking)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!(status = status.as_u16(), body = %body, "booking created");

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                expected: "2xx",
                actual: status.as_u16(),
                body: snippet(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn list_bookings(&self) -> Result<(StatusCode, Vec<BookingId>), ApiError> {
        let response = self.http.get(self.booking_url(None)).send().await?;

        let status = response.status();
        let body = response.text().await?;
        info!(status = status.as_u16(), body = %body, "listed booking ids");

        let ids = if status.is_success() {
            serde_json::from_str(&body)?
        } else {
            Vec::new()
        };
        Ok((status, ids))
    }

    async fn update_total_price(
        &self,
        booking_id: i64,
        new_price: f64,
    ) -> Result<BookingDetails, ApiError> {
        let response = self
            .http
            .patch(self.booking_url(Some(booking_id)))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&PriceUpdate {
                totalprice: new_price,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!(
            booking_id,
            status = status.as_u16(),
            body = %body,
            "updated totalprice"
        );

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                expected: "2xx",
                actual: status.as_u16(),
                body: snippet(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_booking(&self, booking_id: i64) -> Result<StatusCode, ApiError> {
        let response = self
            .http
            .delete(self.booking_url(Some(booking_id)))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!(
            booking_id,
            status = status.as_u16(),
            body = %body,
            "deleted booking"
        );
        Ok(status)
    }
}

fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_LEN {
        body.to_string()
    } else {
        let mut cut = BODY_SNIPPET_LEN;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}…", &body[..cut])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_public_service() {
        let config = ClientConfig::default();
        assert_eq!(
            config.base_url,
            "https://restful-booker.herokuapp.com/booking/"
        );
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "password123");
    }

    #[test]
    fn test_booking_url_formatting() {
        let client = RestBookingClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.booking_url(None),
            "https://restful-booker.herokuapp.com/booking/"
        );
        assert_eq!(
            client.booking_url(Some(42)),
            "https://restful-booker.herokuapp.com/booking/42"
        );
    }

    #[test]
    fn test_booking_url_tolerates_missing_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:3001/booking".to_string(),
            ..ClientConfig::default()
        };
        let client = RestBookingClient::new(config).unwrap();
        assert_eq!(client.booking_url(None), "http://localhost:3001/booking/");
        assert_eq!(client.booking_url(Some(7)), "http://localhost:3001/booking/7");
    }

    #[test]
    fn test_unexpected_status_names_the_accepted_class() {
        let err = ApiError::UnexpectedStatus {
            expected: "2xx",
            actual: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 500 (expected 2xx): Internal Server Error"
        );
    }

    #[test]
    fn test_snippet_truncates_long_bodies() {
        let long = "x".repeat(BODY_SNIPPET_LEN * 2);
        let cut = snippet(&long);
        assert!(cut.chars().count() == BODY_SNIPPET_LEN + 1);
        assert!(cut.ends_with('…'));
        assert_eq!(snippet("short"), "short");
    }
}
