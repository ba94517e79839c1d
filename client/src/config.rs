//! Auth provider configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the provider URL and the
//! public anon key are captured with `option_env!` when the client is
//! compiled. Both values are public; the service-role key never belongs here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SUPABASE_URL: &str = "http://127.0.0.1:54321";

/// Errors raised while building [`AuthConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `SUPABASE_ANON_KEY` was absent or blank when the client was built.
    #[error("missing auth anon key: SUPABASE_ANON_KEY not set at build time")]
    MissingAnonKey,

    /// `SUPABASE_URL` is not an http(s) URL.
    #[error("invalid auth provider url: {0}")]
    InvalidUrl(String),
}

/// Connection settings for the managed auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Provider base URL without a trailing slash.
    pub url: String,
    /// Public anon key sent as the `apikey` header.
    pub anon_key: String,
    project_ref: String,
}

impl AuthConfig {
    /// Build config from `SUPABASE_URL` / `SUPABASE_ANON_KEY` captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if the anon key is missing or the URL is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Build config from raw optional values.
    ///
    /// # Errors
    ///
    /// Returns an error if the anon key is missing or the URL is malformed.
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let (url, project_ref) = parse_url(url.unwrap_or(DEFAULT_SUPABASE_URL))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingAnonKey)?
            .to_owned();
        Ok(Self { url, anon_key, project_ref })
    }

    /// Provider project reference: the URL host up to its first dot.
    ///
    /// `https://abcd.supabase.co` yields `abcd`; `http://127.0.0.1:54321` yields `127`.
    pub fn project_ref(&self) -> &str {
        &self.project_ref
    }
}

/// Validate an http(s) base URL, returning it without a trailing slash plus its project ref.
fn parse_url(raw: &str) -> Result<(String, String), ConfigError> {
    let invalid = || ConfigError::InvalidUrl(raw.to_owned());
    let parsed = url::Url::parse(raw.trim()).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    let host = parsed.host_str().filter(|host| !host.is_empty()).ok_or_else(invalid)?;
    let project_ref = host.split('.').next().unwrap_or(host).to_owned();
    Ok((parsed.as_str().trim_end_matches('/').to_owned(), project_ref))
}
