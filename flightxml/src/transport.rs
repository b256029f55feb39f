//! HTTP transport seam.
//!
//! [`Transport`] is the narrow contract the client core depends on: send one
//! form-encoded POST, get back a raw body or a failure. The production
//! implementation wraps a blocking reqwest client; tests substitute a
//! recording double. Request timeouts are configured here, at the transport
//! layer; the core never retries or cancels.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

use crate::error::{Error, Result};
use crate::params::Params;

/// Basic-auth credentials, held unchanged for the lifetime of a client.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keep the API key out of debug output and logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// One outbound request, one raw response body.
pub trait Transport {
    /// Issue a form-encoded POST with Basic auth and return the response
    /// body. Transport failures and auth rejections surface as errors;
    /// other HTTP statuses are not interpreted here.
    fn post_form(&self, url: &str, credentials: &Credentials, params: &Params) -> Result<String>;
}

/// Production transport over a blocking reqwest client.
///
/// Safe to share across threads; each call maps to exactly one request.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Transport with a per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, credentials: &Credentials, params: &Params) -> Result<String> {
        // .form() sets Content-Type: application/x-www-form-urlencoded.
        let response = self
            .client
            .post(url)
            .basic_auth(credentials.username(), Some(credentials.api_key()))
            .form(params.pairs())
            .send()?;

        check_auth(response.status())?;
        Ok(response.text()?)
    }
}

// Auth rejections must stay identifiable as such; every other status
// passes through, since the service reports failures inside 200 responses.
fn check_auth(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Auth {
            status: status.as_u16(),
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Transport double for exercising the client without a network.

    use std::cell::RefCell;

    use super::*;

    /// A request the double observed.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub url: String,
        pub pairs: Vec<(String, String)>,
    }

    /// Replays a canned body and records every request it receives.
    #[derive(Debug)]
    pub struct MockTransport {
        body: String,
        log: RefCell<Vec<RecordedRequest>>,
    }

    impl MockTransport {
        pub fn replying(body: impl Into<String>) -> Self {
            Self {
                body: body.into(),
                log: RefCell::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.log.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.log.borrow().len()
        }
    }

    impl Transport for MockTransport {
        fn post_form(
            &self,
            url: &str,
            _credentials: &Credentials,
            params: &Params,
        ) -> Result<String> {
            self.log.borrow_mut().push(RecordedRequest {
                url: url.to_string(),
                pairs: params
                    .pairs()
                    .iter()
                    .map(|(f, v)| ((*f).to_string(), v.clone()))
                    .collect(),
            });
            Ok(self.body.clone())
        }
    }
}
