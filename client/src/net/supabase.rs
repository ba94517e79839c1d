//! GoTrue REST client for the managed auth provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session persisted in
//! `localStorage` under the provider's `sb-<ref>-auth-token` key.
//! Server-side (SSR): inert stubs, since sessions only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! 4xx answers to the password grant are credential rejections; anything else
//! that is not a session is a transport failure. A 401/403 on user lookup
//! means the stored session went stale and is treated as "signed out".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use super::auth::{AuthClient, AuthError};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ProviderErrorBody;
use super::types::{Session, UserIdentity};
use crate::config::AuthConfig;

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base_url: &str) -> String {
    format!("{base_url}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_storage_key(project_ref: &str) -> String {
    format!("sb-{project_ref}-auth-token")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_is_stale(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Classify a non-2xx password-grant response.
#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failure(status: u16, body: &str) -> AuthError {
    if !(400..500).contains(&status) {
        return AuthError::Transport(format!("sign-in failed: {status}"));
    }
    let reason = serde_json::from_str::<ProviderErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.reason().map(str::to_owned))
        .unwrap_or_else(|| format!("request rejected: {status}"));
    AuthError::Rejected { reason }
}

/// [`AuthClient`] backed by the provider's `/auth/v1` endpoints.
#[derive(Clone, Debug)]
pub struct SupabaseAuthClient {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    config: AuthConfig,
}

impl SupabaseAuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

impl AuthClient for SupabaseAuthClient {
    async fn get_current_user(&self) -> Result<Option<UserIdentity>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let key = session_storage_key(self.config.project_ref());
            let Some(session) = session_store::load(&key) else {
                return Ok(None);
            };
            let resp = gloo_net::http::Request::get(&user_endpoint(&self.config.url))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &bearer(&session.access_token))
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if session_is_stale(resp.status()) {
                session_store::clear(&key);
                return Ok(None);
            }
            if !resp.ok() {
                return Err(AuthError::Transport(format!("user lookup failed: {}", resp.status())));
            }
            let user = resp
                .json::<UserIdentity>()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            Ok(Some(user))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = gloo_net::http::Request::post(&token_endpoint(&self.config.url))
                .header("apikey", &self.config.anon_key)
                .json(&payload)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(sign_in_failure(status, &body));
            }
            let session = resp
                .json::<Session>()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            session_store::save(&session_storage_key(self.config.project_ref()), &session);
            Ok(session)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(AuthError::Transport("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
mod session_store {
    use super::Session;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub(super) fn load(key: &str) -> Option<Session> {
        let raw = storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub(super) fn save(key: &str, session: &Session) {
        let Some(storage) = storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(session) {
            let _ = storage.set_item(key, &raw);
        }
    }

    pub(super) fn clear(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}
