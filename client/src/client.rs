//! Reservation API client

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{ClientError, ClientResult};
use crate::form::ReservationFormData;
use shared::models::{Reservation, ReservationStatus};
use shared::response::ApiResponse;

/// Typed client for the reservation HTTP API.
///
/// One round trip per call, no client-held state, no retries; a
/// failed request is reported to the caller and must be resubmitted.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    base_url: String,
    http: reqwest::Client,
}

impl ReservationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit the intake form. The server assigns id, timestamps and
    /// the initial `pending` status.
    pub async fn create(&self, form: &ReservationFormData) -> ClientResult<Reservation> {
        let response = self
            .http
            .post(self.url("/reservations"))
            .json(form)
            .send()
            .await?;
        unwrap_data(response).await
    }

    /// Fetch reservations, optionally server-filtered by restaurant
    /// and/or exact date. Always ordered by date then time.
    pub async fn list(
        &self,
        restaurant_id: Option<&str>,
        date: Option<&str>,
    ) -> ClientResult<Vec<Reservation>> {
        let mut request = self.http.get(self.url("/reservations"));
        if let Some(rid) = restaurant_id {
            request = request.query(&[("restaurantId", rid)]);
        }
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        unwrap_data(request.send().await?).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Reservation> {
        let response = self
            .http
            .get(self.url(&format!("/reservations/{id}")))
            .send()
            .await?;
        unwrap_data(response).await
    }

    /// Staff action: transition a pending reservation to a terminal
    /// status.
    pub async fn update_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> ClientResult<Reservation> {
        let response = self
            .http
            .put(self.url(&format!("/reservations/{id}")))
            .json(&json!({ "status": status.as_str() }))
            .send()
            .await?;
        unwrap_data(response).await
    }

    pub async fn confirm(&self, id: &str) -> ClientResult<Reservation> {
        self.update_status(id, ReservationStatus::Confirmed).await
    }

    pub async fn cancel(&self, id: &str) -> ClientResult<Reservation> {
        self.update_status(id, ReservationStatus::Cancelled).await
    }

    /// Remove a reservation. Deleting an id that no longer exists is
    /// an error, not a silent success.
    pub async fn delete(&self, id: &str) -> ClientResult<String> {
        let response = self
            .http
            .delete(self.url(&format!("/reservations/{id}")))
            .send()
            .await?;
        let status = response.status();
        let envelope: ApiResponse<()> = response.json().await?;
        if !status.is_success() || !envelope.success {
            return Err(api_error(status.as_u16(), envelope.error));
        }
        envelope
            .message
            .ok_or_else(|| ClientError::MalformedResponse("missing message".into()))
    }
}

fn api_error(status: u16, error: Option<String>) -> ClientError {
    ClientError::Api {
        status,
        message: error.unwrap_or_else(|| "unknown error".into()),
    }
}

async fn unwrap_data<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let envelope: ApiResponse<T> = response.json().await?;
    if !status.is_success() || !envelope.success {
        tracing::debug!(status = status.as_u16(), "API call failed");
        return Err(api_error(status.as_u16(), envelope.error));
    }
    envelope
        .data
        .ok_or_else(|| ClientError::MalformedResponse("missing data".into()))
}
