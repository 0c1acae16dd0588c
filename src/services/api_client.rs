// ============================================================================
// API CLIENT - JSON over HTTP with bearer auth (no store knowledge)
// ============================================================================
// Every call: attach the session token, send, normalize the outcome.
// A 401 from any endpoint clears the session and sends the user to the
// login page before the caller sees the rejection.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::navigation::{Navigator, Route};
use crate::services::transport::{HttpRequest, HttpTransport, Method};
use crate::state::SessionContext;
use crate::utils::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    session: SessionContext,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        session: SessionContext,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            session,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let body = self.send(Method::Get, path, None).await?;
        decode(&body)
    }

    pub(crate) async fn post<B, R>(&self, path: &str, payload: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::Post, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    pub(crate) async fn put<B, R>(&self, path: &str, payload: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::Put, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    pub(crate) async fn patch<B, R>(&self, path: &str, payload: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.send(Method::Patch, path, Some(encode(payload)?)).await?;
        decode(&body)
    }

    /// The response body of a delete is not used
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = Vec::new();
        if let Some(token) = self.session.token() {
            headers.push((HEADER_AUTHORIZATION.to_string(), format!("Bearer {}", token)));
        }
        if body.is_some() {
            headers.push((HEADER_CONTENT_TYPE.to_string(), CONTENT_TYPE_JSON.to_string()));
        }

        log::debug!("🌐 {} {}", method.as_str(), url);

        let request = HttpRequest { method, url, headers, body };
        let response = self.transport.execute(request).await.map_err(|reason| {
            log::error!("❌ {} {} got no response: {}", method.as_str(), path, reason);
            ApiError::Transport(reason)
        })?;

        if response.status == 401 {
            log::warn!("🔒 {} {} answered 401, ending session", method.as_str(), path);
            self.session.clear();
            self.navigator.redirect(Route::Login);
            return Err(ApiError::Unauthorized { message: remote_message(&response.body) });
        }

        if !response.ok() {
            let message = remote_message(&response.body);
            log::warn!(
                "⚠️ {} {} failed with HTTP {}: {}",
                method.as_str(),
                path,
                response.status,
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Remote { status: response.status, message });
        }

        Ok(response.body)
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Register endpoints answer either the record itself or `{ message, user }`
pub(crate) fn unwrap_user_envelope(mut body: serde_json::Value) -> serde_json::Value {
    match body.get_mut("user").map(serde_json::Value::take) {
        Some(user) if !user.is_null() => user,
        _ => body,
    }
}

/// `message` field of a JSON error body, if any
fn remote_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}
