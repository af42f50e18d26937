use crate::identity::SessionState;
use crate::money::Money;
use crate::payment::OrderDescriptor;
use async_trait::async_trait;
use flix_shared::Masked;
use serde::{Deserialize, Serialize};

/// Error taxonomy for backend calls. Every error is surfaced once at the
/// call site; nothing in the client retries automatically.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (connection refused,
    /// DNS, aborted transfer).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status. `message` carries the
    /// response body verbatim so business-rule rejections (invalid OTP,
    /// already-registered email) reach the caller unchanged.
    #[error("Backend rejected request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The response decoded into something other than the contract type.
    #[error("Unexpected response shape: {0}")]
    Schema(String),

    /// No active session where one was required.
    #[error("Not authenticated")]
    Unauthorized,
}

/// Body of `POST /api/payments/create-order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Total in major units, rounded to two decimals.
    #[serde(with = "crate::money::as_major")]
    pub amount: Money,
    pub currency: String,
    /// Timestamp-derived receipt string. Not a true idempotency key; the
    /// backend owns deduplication of re-submitted orders.
    pub receipt: String,
}

/// Body of `POST /api/payments/verify-payment`: the gateway identifiers
/// plus the full booking context the backend persists on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub movie_id: String,
    pub theater_id: String,
    pub showtime: String,
    pub date: String,
    pub category: String,
    /// Seat ids joined with commas, e.g. `"A1,A2"`.
    pub seats: String,
    pub food_items: serde_json::Value,
    #[serde(with = "crate::money::as_major")]
    pub amount: Money,
    pub email: Masked<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

impl VerifyPaymentResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// The checkout orchestrator's view of the backend. The HTTP client
/// implements this; tests substitute a recording double.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Credentialed session probe (`GET /user/check-session`).
    async fn check_session(&self) -> Result<SessionState, ApiError>;

    /// Ask the backend for a gateway order for the computed total.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderDescriptor, ApiError>;

    /// Forward gateway identifiers and booking context for verification.
    async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_request_uses_major_units() {
        let request = CreateOrderRequest {
            amount: Money::from_minor(40000),
            currency: "INR".to_string(),
            receipt: "rcpt_1700000000000".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], serde_json::json!(400.0));
        assert_eq!(json["currency"], "INR");
    }

    #[test]
    fn verification_status_matching_is_exact() {
        let ok: VerifyPaymentResponse =
            serde_json::from_str(r#"{"status":"success","bookingId":"B123"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.booking_id.as_deref(), Some("B123"));

        let pending: VerifyPaymentResponse =
            serde_json::from_str(r#"{"status":"SUCCESS"}"#).unwrap();
        assert!(!pending.is_success());
    }
}
