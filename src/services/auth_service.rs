use crate::error::ApiError;
use crate::models::{Credentials, LoginResponse, Registration, UserProfile};
use crate::services::api_client::unwrap_user_envelope;
use crate::services::ApiClient;

/// `/auth` endpoints. These only talk to the service; establishing the
/// session is the auth view model's job.
impl ApiClient {
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Logging in {}", credentials.email);
        self.post("/auth/login", credentials).await
    }

    /// The created account, when the service echoes it back (bare or under `user`)
    pub async fn register(&self, registration: &Registration) -> Result<Option<UserProfile>, ApiError> {
        let body: serde_json::Value = self.post("/auth/register", registration).await?;
        Ok(serde_json::from_value(unwrap_user_envelope(body)).ok())
    }

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/auth/profile").await
    }
}
