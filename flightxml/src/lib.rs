//! Client for the FlightAware FlightXML2 JSON API.
//!
//! FlightXML2 is a JSON-over-HTTP RPC service: every operation is a
//! form-encoded POST of named parameters to `{base}/{Method}`,
//! authenticated with HTTP Basic credentials and answered with a JSON
//! envelope. This crate binds that surface: [`Client`] carries the
//! credentials and transport, [`Client::invoke`] performs one exchange and
//! unwraps the envelope, and the per-method functions map typed arguments
//! onto wire fields.
//!
//! ```rust,ignore
//! use flightxml::{Client, TrafficFilter, MAX_RECORD_LENGTH};
//!
//! let client = Client::new("username", "api key");
//! let arrivals = client.arrived("KSFO", MAX_RECORD_LENGTH, TrafficFilter::Airline, 0)?;
//! ```
//!
//! Results are generic [`serde_json::Value`] structures, shaped as the
//! service returns them. A handful of operations convert timestamps between
//! wire epoch seconds and calendar datetimes; see [`to_wire_timestamp`] and
//! [`from_wire_timestamp`].

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod timestamp;
pub mod transport;
pub mod types;

mod methods;

pub use client::{Client, DEFAULT_BASE_URL};
pub use config::Config;
pub use error::{Error, Result, REMOTE_ERROR_PREFIXES};
pub use params::Params;
pub use timestamp::{from_wire_timestamp, to_wire_timestamp};
pub use transport::{Credentials, HttpTransport, Transport};
pub use types::{AirlineInsightReportType, FilterValue, TrafficFilter, MAX_RECORD_LENGTH};
