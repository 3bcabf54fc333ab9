// SPDX-License-Identifier: MPL-2.0

//! Blocking client for the vendor's EOX (end-of-life / end-of-support) API.
//!
//! A session is two calls: [`Client::acquire_token`] once, then
//! [`Client::lookup`] per query with the returned bearer token.

use log::{debug, trace};
use reqwest::{
    blocking::Response,
    header::{ACCEPT, CACHE_CONTROL},
    StatusCode, Url,
};

mod conf;
mod error;
mod record;

pub use conf::{Credentials, Endpoints, DEFAULT_API_URL, DEFAULT_TOKEN_URL};
pub use error::{ApiError, Error};
pub use record::{EoxDate, EoxError, EoxRecord, EoxResponse, Lookup, MigrationDetails};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchKind {
    ProductId,
    SerialNumber,
}

impl SearchKind {
    /// Keyword used for this kind on the console.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::ProductId => "pid",
            Self::SerialNumber => "serial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pid" => Some(Self::ProductId),
            "serial" => Some(Self::SerialNumber),
            _ => None,
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            Self::ProductId => "EOXByProductID",
            Self::SerialNumber => "EOXBySerialNumber",
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

pub struct Client {
    http: reqwest::blocking::Client,
    endpoints: Endpoints,
}

impl Client {
    pub fn new(endpoints: Endpoints) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { http, endpoints })
    }

    /// OAuth2 client-credentials grant. Returns the bearer token.
    pub fn acquire_token(&self, credentials: &Credentials) -> Result<String, Error> {
        let url = self.endpoints.token_url();
        debug!("requesting token from {}", url);

        let res = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .form(&[
                ("client_id", credentials.client_id.as_str()),
                ("grant_type", "client_credentials"),
                ("client_secret", credentials.client_secret.as_str()),
            ])
            .send()?;
        let body = check_status(url, res)?.text()?;

        let token: TokenResponse = serde_json::from_str(&body)?;
        debug!(
            "token acquired (type {:?}, expires in {:?}s)",
            token.token_type, token.expires_in
        );
        Ok(token.access_token)
    }

    /// Looks up a product ID or serial number. An empty result is
    /// `Lookup::NotFound`, not an error.
    pub fn lookup(&self, token: &str, value: &str, kind: SearchKind) -> Result<Lookup, Error> {
        let url = self.lookup_url(kind, value)?;
        debug!("looking up {}", url);

        let res = self
            .http
            .post(url.clone())
            .bearer_auth(token)
            .header(ACCEPT, "application/json")
            .send()?;
        let body = check_status(url.as_str(), res)?.text()?;
        trace!("{}", body);

        let response: EoxResponse = serde_json::from_str(&body)?;
        Ok(response.into_lookup())
    }

    pub fn lookup_url(&self, kind: SearchKind, value: &str) -> Result<Url, Error> {
        let base = self.endpoints.api_url();
        let invalid = || Error::InvalidUrl(base.to_string());

        let mut url = Url::parse(base).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend([kind.endpoint(), "1", value]);
        url.query_pairs_mut().append_pair("responseencoding", "json");
        Ok(url)
    }
}

fn check_status(endpoint: &str, res: Response) -> Result<Response, Error> {
    let status = res.status();
    if status == StatusCode::OK {
        return Ok(res);
    }
    let message = res.text().ok().filter(|text| !text.is_empty());
    Err(ApiError {
        endpoint: endpoint.to_string(),
        code: status.as_u16(),
        canonical_reason: status.canonical_reason().map(str::to_string),
        message,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: Option<&str>) -> Client {
        Client::new(Endpoints {
            token_url: None,
            api_url: api_url.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn search_kind_keywords() {
        for kind in [SearchKind::ProductId, SearchKind::SerialNumber] {
            assert_eq!(SearchKind::from_str(kind.to_str()), Some(kind));
        }
        assert_eq!(SearchKind::from_str("PID"), None);
        assert_eq!(SearchKind::from_str("quit"), None);
    }

    #[test]
    fn lookup_url_by_kind() {
        let client = client(None);

        let url = client.lookup_url(SearchKind::ProductId, "ABC-1").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.cisco.com/supporttools/eox/rest/5/EOXByProductID/1/ABC-1?responseencoding=json"
        );

        let url = client
            .lookup_url(SearchKind::SerialNumber, "ABC-1")
            .unwrap();
        assert!(url.path().ends_with("EOXBySerialNumber/1/ABC-1"));
    }

    #[test]
    fn lookup_url_escapes_value() {
        let client = client(Some("http://localhost:8080/eox/"));
        let url = client.lookup_url(SearchKind::SerialNumber, "SN 42/7").unwrap();
        assert_eq!(url.path(), "/eox/EOXBySerialNumber/1/SN%2042%2F7");
        assert_eq!(url.query(), Some("responseencoding=json"));
    }

    #[test]
    fn lookup_url_rejects_bad_base() {
        let client = client(Some("not a url"));
        match client.lookup_url(SearchKind::ProductId, "X") {
            Err(Error::InvalidUrl(url)) => assert_eq!(url, "not a url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }
}
