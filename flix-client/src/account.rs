use crate::http::MovieflixClient;
use crate::models::{ActionAck, ProfileUpdate};
use flix_core::identity::User;
use flix_core::ApiError;
use reqwest::multipart::{Form, Part};
use serde_json::json;

impl MovieflixClient {
    /// The profile as persisted server-side (`GET /user/details`).
    /// `Unauthorized` when the session has lapsed.
    pub async fn user_details(&self) -> Result<User, ApiError> {
        self.get_json("/user/details", &[]).await
    }

    /// Update profile fields (`PUT /user/update`, multipart). A phone
    /// number change must carry the code obtained via `send_verification`;
    /// the backend rejects the change otherwise.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<ActionAck, ApiError> {
        let mut form = Form::new();
        if let Some(first_name) = update.first_name {
            form = form.text("firstName", first_name);
        }
        if let Some(last_name) = update.last_name {
            form = form.text("lastName", last_name);
        }
        if let Some(phone_number) = update.phone_number {
            form = form.text("phoneNumber", phone_number);
        }
        if let Some(code) = update.verification_code {
            form = form.text("verificationCode", code);
        }
        if let Some((file_name, bytes)) = update.photo {
            form = form.part("userPhotoPath", Part::bytes(bytes).file_name(file_name));
        }

        self.put_multipart_json("/user/update", form).await
    }

    /// Change the account password (`POST /user/change-password`). A wrong
    /// current password comes back as a 400 rejection with the backend's
    /// error body.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<ActionAck, ApiError> {
        self.post_json(
            "/user/change-password",
            &json!({
                "currentPassword": current_password,
                "newPassword": new_password,
            }),
        )
        .await
    }

    /// Email a verification code ahead of a phone number change
    /// (`POST /user/send-verification`).
    pub async fn send_verification(&self) -> Result<ActionAck, ApiError> {
        self.post_json("/user/send-verification", &json!({})).await
    }
}
