use crate::http::MovieflixClient;
use async_trait::async_trait;
use flix_core::api::{
    BackendApi, CreateOrderRequest, VerifyPaymentRequest, VerifyPaymentResponse,
};
use flix_core::identity::SessionState;
use flix_core::payment::OrderDescriptor;
use flix_core::ApiError;

impl MovieflixClient {
    /// Exchange a computed total for a gateway order descriptor
    /// (`POST /api/payments/create-order`). Requires an active session.
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
    ) -> Result<OrderDescriptor, ApiError> {
        self.post_json("/api/payments/create-order", request).await
    }

    /// Forward the gateway identifiers and the booking context for
    /// verification (`POST /api/payments/verify-payment`). Authenticity
    /// checks happen on the backend.
    pub async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, ApiError> {
        self.post_json("/api/payments/verify-payment", request).await
    }
}

#[async_trait]
impl BackendApi for MovieflixClient {
    async fn check_session(&self) -> Result<SessionState, ApiError> {
        MovieflixClient::check_session(self).await
    }

    async fn create_order(&self, request: &CreateOrderRequest) -> Result<OrderDescriptor, ApiError> {
        MovieflixClient::create_order(self, request).await
    }

    async fn verify_payment(
        &self,
        request: &VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse, ApiError> {
        MovieflixClient::verify_payment(self, request).await
    }
}
