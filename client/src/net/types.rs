//! Auth provider DTOs for the client/provider boundary.
//!
//! DESIGN
//! ======
//! Fields mirror the provider's JSON bodies. Unknown fields are ignored so
//! provider upgrades that add metadata do not break deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Provider user identifier (UUID string).
    pub id: String,
    /// Primary email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Provider role (e.g. `"authenticated"`).
    #[serde(default)]
    pub role: Option<String>,
}

/// A session issued by a successful password grant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: i64,
    /// Absolute expiry in seconds since the Unix epoch, when the provider reports it.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: UserIdentity,
}

/// Error body returned by the provider on non-2xx responses.
///
/// Different provider versions use different field names; every field is
/// optional and [`ProviderErrorBody::reason`] picks the most descriptive one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ProviderErrorBody {
    /// Most descriptive non-empty message in the body, if any.
    pub fn reason(&self) -> Option<&str> {
        [&self.error_description, &self.msg, &self.message, &self.error]
            .into_iter()
            .filter_map(Option::as_deref)
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}
