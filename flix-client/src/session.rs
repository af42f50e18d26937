use crate::http::MovieflixClient;
use crate::models::{LoginAck, LoginConfirmation, RegistrationForm};
use flix_core::identity::SessionState;
use flix_core::ApiError;
use reqwest::multipart::{Form, Part};
use serde_json::json;

impl MovieflixClient {
    /// Ask the backend whether the current cookie still maps to a live
    /// session. No local token inspection happens anywhere in this crate.
    pub async fn check_session(&self) -> Result<SessionState, ApiError> {
        self.get_json("/user/check-session", &[]).await
    }

    /// Password step of login. On success the backend dispatches an OTP to
    /// the account's email; the session is not established yet.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginAck, ApiError> {
        self.post_json(
            "/user/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    /// OTP step of login. Success establishes the session cookie; callers
    /// that stashed a draft should replay it afterwards via
    /// `CheckoutOrchestrator::resume_after_login`.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<LoginConfirmation, ApiError> {
        self.post_json("/user/verify-otp", &json!({ "email": email, "otp": otp }))
            .await
    }

    /// Register a new account, optionally with a profile photo. The backend
    /// takes multipart form data; the response body is a plain-text message.
    pub async fn register(&self, form: RegistrationForm) -> Result<String, ApiError> {
        let mut multipart = Form::new()
            .text("firstName", form.first_name)
            .text("lastName", form.last_name)
            .text("email", form.email)
            .text("phoneNumber", form.phone_number)
            .text("password", form.password);

        if let Some((file_name, bytes)) = form.photo {
            multipart = multipart.part("userPhotoPath", Part::bytes(bytes).file_name(file_name));
        }

        self.post_multipart_text("/user/register", multipart).await
    }

    /// Invalidate the server-side session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_text("/user/logout", &json!({})).await?;
        Ok(())
    }
}
