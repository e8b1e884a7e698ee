//! Upload client for the hosted calculator
//!
//! Thin synchronous glue: cookie-authenticated POSTs against desmos.com.
//! Credentials travel in an explicit [`Session`] value; there is no
//! process-wide token. A failed request aborts the run, no retries.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::Rng;
use reqwest::header;
use tracing::debug;

use crate::errors::UploadError;
use crate::graph::GraphDocument;

/// Production service root.
pub const DESMOS_URL: &str = "https://www.desmos.com";

const SAVE_ENDPOINT: &str = "/api/v1/calculator/save";
const SESSION_COOKIE: &str = "sid.prod2";
/// Calc-state wire version sent alongside the graph JSON.
const CALC_STATE_VERSION: &str = "h3";
const HASH_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const HASH_LEN: usize = 10;

/// Where to upload and who we are.
#[derive(Debug, Clone)]
pub struct Session {
    pub base_url: String,
    pub token: String,
}

impl Session {
    /// A session against the production service.
    pub fn new(token: impl Into<String>) -> Self {
        Session {
            base_url: DESMOS_URL.to_string(),
            token: token.into(),
        }
    }

    /// A session against a different service root (tests, staging).
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Session {
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

/// Cookie-authenticated client for the calculator API.
pub struct Client {
    http: reqwest::blocking::Client,
    session: Session,
}

impl Client {
    pub fn new(session: Session) -> Self {
        Client {
            http: reqwest::blocking::Client::new(),
            session,
        }
    }

    /// Save a graph under a fresh random hash. Returns the service's
    /// response body.
    pub fn save(
        &self,
        graph: &GraphDocument,
        thumbnail_png: &[u8],
        title: &str,
    ) -> Result<String, UploadError> {
        let calc_state = graph.to_json()?;
        let body = save_form(&calc_state, thumbnail_png, &random_hash(), title);
        self.post(SAVE_ENDPOINT, body)
    }

    fn post(&self, endpoint: &str, body: String) -> Result<String, UploadError> {
        debug!(endpoint, "posting to calculator service");
        let response = self
            .http
            .post(format!("{}{}", self.session.base_url, endpoint))
            .header(
                header::COOKIE,
                format!("{SESSION_COOKIE}={}", self.session.token),
            )
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(UploadError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

/// Build the urlencoded save form.
fn save_form(calc_state: &str, thumbnail_png: &[u8], graph_hash: &str, title: &str) -> String {
    let thumb_data = format!("data:image/png;base64,{}", BASE64.encode(thumbnail_png));
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("thumb_data", &thumb_data)
        .append_pair("graph_hash", graph_hash)
        .append_pair("version", CALC_STATE_VERSION)
        .append_pair("my_graphs", "true")
        .append_pair("is_update", "false")
        .append_pair("title", title)
        .append_pair("calc_state", calc_state)
        .finish()
}

/// A 10-character lowercase-alphanumeric graph identifier.
fn random_hash() -> String {
    let mut rng = rand::thread_rng();
    (0..HASH_LEN)
        .map(|_| HASH_CHARS[rng.gen_range(0..HASH_CHARS.len())] as char)
        .collect()
}
