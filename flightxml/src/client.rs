//! FlightXML2 client core.
//!
//! One request/response exchange per call: join the base URL with the
//! remote method name, POST the form-encoded parameters with Basic auth,
//! parse the JSON body, and unwrap the response envelope. Construction
//! performs no I/O; credential validity is only checked server-side, on
//! first use.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::params::Params;
use crate::transport::{Credentials, HttpTransport, Transport};

/// Root of the FlightXML2 service.
pub const DEFAULT_BASE_URL: &str = "http://flightxml.flightaware.com/json/FlightXML2/";

/// Client for the FlightXML2 JSON-over-HTTP API.
///
/// Holds immutable credentials and a transport; otherwise stateless.
/// Concurrent calls against one instance are safe as long as the transport
/// is, which [`HttpTransport`] is.
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    credentials: Credentials,
    base_url: String,
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a client against the default service root.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_transport(username, api_key, DEFAULT_BASE_URL, HttpTransport::new())
    }
}

impl<T: Transport> Client<T> {
    /// Create a client with an explicit service root and transport.
    pub fn with_transport(
        username: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, api_key),
            base_url: base_url.into(),
            transport,
        }
    }

    /// The transport this client issues requests through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invoke a remote method with already wire-shaped parameters.
    ///
    /// Returns the envelope-unwrapped result. No retries; HTTP statuses are
    /// not interpreted beyond transport failure and auth rejection, and
    /// application-level error values are passed through unmodified (see
    /// [`Error::remote_in`]).
    pub fn invoke(&self, method: &str, params: Params) -> Result<Value> {
        let url = self.method_url(method);
        debug!(%url, ?params, "POST");

        let body = self.transport.post_form(&url, &self.credentials, &params)?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Protocol(format!("response body is not JSON: {e}")))?;
        Ok(unwrap_envelope(method, value))
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), method)
    }
}

/// Apply the two envelope de-nesting rules, in order.
///
/// 1. A top-level `"{method}Result"` key replaces the result with its value.
/// 2. If the result is then an object with a `"data"` key, that value
///    replaces the result.
///
/// Rule 2 is inapplicable when the result is a list at that point; such
/// results are returned as the service shaped them.
fn unwrap_envelope(method: &str, mut value: Value) -> Value {
    let key = format!("{method}Result");
    if let Value::Object(map) = &mut value {
        if let Some(inner) = map.remove(&key) {
            value = inner;
        }
    }
    if let Value::Object(map) = &mut value {
        if let Some(inner) = map.remove("data") {
            value = inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::MockTransport;
    use serde_json::json;
    use test_case::test_case;

    fn client(body: &str) -> Client<MockTransport> {
        Client::with_transport(
            "user",
            "key",
            "http://fx.test/json/FlightXML2/",
            MockTransport::replying(body),
        )
    }

    #[test_case(r#"{"FooResult": {"data": [1, 2, 3]}}"#, json!([1, 2, 3]); "both rules")]
    #[test_case(r#"{"FooResult": 42}"#, json!(42); "rule two needs an object")]
    #[test_case(r#"{"unexpectedKey": "value"}"#, json!({"unexpectedKey": "value"}); "no rule matches")]
    #[test_case(r#"{"FooResult": [4, 5]}"#, json!([4, 5]); "list result stays a list")]
    #[test_case(r#"{"data": "bare"}"#, json!("bare"); "rule two without rule one")]
    #[test_case(r#"[7, 8]"#, json!([7, 8]); "non object body")]
    fn envelope_unwrapping(body: &str, expected: Value) {
        let client = client(body);
        let result = client.invoke("Foo", Params::new()).unwrap();
        assert_eq!(result, expected);
    }

    #[test]
    fn result_key_is_method_specific() {
        // A BarResult key does not match method Foo.
        let client = client(r#"{"BarResult": 1}"#);
        let result = client.invoke("Foo", Params::new()).unwrap();
        assert_eq!(result, json!({"BarResult": 1}));
    }

    #[test]
    fn url_joins_base_and_method() {
        let client = client("{}");
        client.invoke("AirportInfo", Params::new()).unwrap();
        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://fx.test/json/FlightXML2/AirportInfo");
    }

    #[test]
    fn parameters_pass_through_unmodified() {
        let client = client("{}");
        client
            .invoke("AircraftType", Params::new().push("type", "GALX"))
            .unwrap();
        let requests = client.transport().requests();
        assert_eq!(requests[0].pairs, [("type".to_string(), "GALX".to_string())]);
    }

    #[test]
    fn non_json_body_is_a_protocol_error() {
        let client = client("<html>Bad Gateway</html>");
        let err = client.invoke("Foo", Params::new()).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn remote_error_values_pass_through() {
        // The core hands the value back; the caller inspects it.
        let client = client(r#"{"SetAlertResult": "OVERLIMIT: limit reached"}"#);
        let result = client.invoke("SetAlert", Params::new()).unwrap();
        assert_eq!(result, json!("OVERLIMIT: limit reached"));
        assert!(Error::remote_in(&result).is_some());
    }
}
