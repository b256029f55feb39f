//! Enumerations and constants of the FlightXML2 interface.

use std::fmt;

/// Maximum number of records most list operations return per request,
/// unless a larger size has been negotiated via SetMaximumResultSize.
pub const MAX_RECORD_LENGTH: u32 = 15;

/// Constrains returned flight records by traffic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrafficFilter {
    /// All traffic; no filter value is sent.
    #[default]
    All,
    /// General aviation traffic only.
    GeneralAviation,
    /// Airline traffic only.
    Airline,
}

impl TrafficFilter {
    /// Wire value of the filter; `None` when unrestricted, in which case
    /// the filter parameter is omitted from the request.
    pub fn as_wire(self) -> Option<&'static str> {
        match self {
            TrafficFilter::All => None,
            TrafficFilter::GeneralAviation => Some("ga"),
            TrafficFilter::Airline => Some("airline"),
        }
    }
}

/// Report kinds for the AirlineInsight operation. The four kinds are
/// mutually exclusive and integer-coded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i64)]
pub enum AirlineInsightReportType {
    /// Alternate route popularity with fares.
    AlternateRoutePopularity = 1,
    /// Percentage of scheduled flights that are actually flown.
    #[default]
    PercentageScheduledActuallyFlown = 2,
    /// Passenger load factor of flights that are actually flown.
    PassengerLoadFactorActuallyFlown = 3,
    /// Carriers by most cargo weight.
    CarriersByCargoWeight = 4,
}

impl AirlineInsightReportType {
    pub fn as_wire(self) -> i64 {
        self as i64
    }
}

/// One search-filter value: text (possibly wildcarded) or an integer
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Number(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Number(value.into())
    }
}
