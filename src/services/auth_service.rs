use crate::models::{LoginRequest, LoginResponse, SessionCredential};
use crate::services::{ApiClient, ApiError};

impl ApiClient {
    /// `POST /api/auth/login`; persisting the credential is up to the caller
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionCredential, ApiError> {
        log::info!("🔐 Login as {} ({})", request.email, request.role);
        let response: LoginResponse = self.post_json("/api/auth/login", request).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".to_string()));
        }
        Ok(response.into())
    }
}
