//! Typed wrappers around the `/users/*` endpoints.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::common::validation::validate_image_upload;
use crate::common::{safe_email_log, ApiClient, ApiError};

use super::models::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, PictureUploadResponse, RegisterRequest,
    ResetPasswordRequest, UpdateProfileRequest, User,
};

pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST /users/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        info!(email = %safe_email_log(&request.email), "registering new account");
        let url = self.client.endpoints().register();
        let payload: AuthPayload = self.client.post(&url, request).await?.into_data()?;
        debug!(user_id = %payload.user.id, "registration succeeded");
        Ok(payload)
    }

    /// POST /users/login
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthPayload, ApiError> {
        info!(email = %safe_email_log(&credentials.email), "logging in");
        let url = self.client.endpoints().login();
        let payload: AuthPayload = self.client.post(&url, credentials).await?.into_data()?;
        debug!(user_id = %payload.user.id, "login succeeded");
        Ok(payload)
    }

    /// GET /users/profile
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        let url = self.client.endpoints().profile();
        self.client.get(&url, &[]).await?.into_data()
    }

    /// PUT /users/profile
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        let url = self.client.endpoints().profile();
        let user: User = self.client.put(&url, request).await?.into_data()?;
        info!(user_id = %user.id, "profile updated");
        Ok(user)
    }

    /// POST /users/profile/picture (multipart)
    ///
    /// Image type and size are checked before any network call; this is
    /// advisory, the server validates again.
    pub async fn upload_profile_picture(
        &self,
        filename: &str,
        image: Vec<u8>,
    ) -> Result<PictureUploadResponse, ApiError> {
        validate_image_upload(&image).into_result()?;

        let url = self.client.endpoints().profile_picture();
        let response: PictureUploadResponse = self
            .client
            .post_multipart(&url, "image", filename, image)
            .await?
            .into_data()?;
        info!(picture_url = %response.profile_picture, "profile picture uploaded");
        Ok(response)
    }

    /// POST /users/forgot-password
    pub async fn forgot_password(&self, email: &str) -> Result<String, ApiError> {
        let url = self.client.endpoints().forgot_password();
        let request = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        let envelope = self
            .client
            .post::<_, serde_json::Value>(&url, &request)
            .await?;
        Ok(envelope.into_message())
    }

    /// POST /users/reset-password
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<String, ApiError> {
        let url = self.client.endpoints().reset_password();
        let request = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let envelope = self
            .client
            .post::<_, serde_json::Value>(&url, &request)
            .await?;
        if envelope.data.is_none() && envelope.message.is_none() {
            warn!("reset-password response carried neither data nor message");
        }
        Ok(envelope.into_message())
    }
}
