// SPDX-License-Identifier: MPL-2.0

pub const DEFAULT_TOKEN_URL: &str = "https://cloudsso.cisco.com/as/token.oauth2";
pub const DEFAULT_API_URL: &str = "https://api.cisco.com/supporttools/eox/rest/5";

/// Client credentials registered with the vendor's API console.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

// Never print the secret.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Where the token and lookup requests go. Unset fields use the vendor's
/// production URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: Option<String>,
    pub api_url: Option<String>,
}

impl Endpoints {
    pub fn token_url(&self) -> &str {
        self.token_url.as_deref().unwrap_or(DEFAULT_TOKEN_URL)
    }

    /// Base of the EOX REST API, without a trailing slash requirement.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
