//! The FlightXML2 method surface.
//!
//! Every operation here reduces to [`Client::invoke`]: build the ordered
//! parameter mapping for one remote method and return the unwrapped result.
//! Pure pass-through operations are declared through macros rather than
//! hand-written per field; only the timestamp-bearing and query-building
//! operations carry bodies of their own. Local argument names map onto the
//! remote field names, which sometimes differ in case or spelling (e.g.
//! `fa_flight_id` becomes the wire field `faFlightID`).

use std::fmt::Write as _;

use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::timestamp::{from_wire_timestamp, to_wire_timestamp};
use crate::transport::Transport;
use crate::types::{AirlineInsightReportType, FilterValue, TrafficFilter};

/// Declare pass-through operations: named string arguments map one-to-one
/// onto wire fields of a single remote method.
macro_rules! passthrough {
    ($($(#[$meta:meta])* $name:ident => $remote:literal { $($arg:ident : $field:literal),* $(,)? })*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self $(, $arg: &str)*) -> Result<Value> {
                self.invoke($remote, Params::new()$(.push($field, $arg))*)
            }
        )*
    };
}

/// Declare airport-board operations: an airport plus pagination and the
/// traffic filter. The filter key is omitted entirely for unrestricted
/// traffic.
macro_rules! airport_board {
    ($($(#[$meta:meta])* $name:ident => $remote:literal)*) => {
        $(
            $(#[$meta])*
            pub fn $name(
                &self,
                airport: &str,
                how_many: u32,
                filter: TrafficFilter,
                offset: u32,
            ) -> Result<Value> {
                self.invoke(
                    $remote,
                    Params::new()
                        .push("airport", airport)
                        .push("howMany", how_many)
                        .push_opt("filter", filter.as_wire())
                        .push("offset", offset),
                )
            }
        )*
    };
}

/// Declare documented remote methods this client deliberately does not
/// implement. Calling one fails before any network activity.
macro_rules! not_implemented {
    ($($(#[$meta:meta])* $name:ident => $remote:literal)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Result<Value> {
                Err(Error::NotImplemented($remote))
            }
        )*
    };
}

impl<T: Transport> Client<T> {
    passthrough! {
        /// Information about an aircraft type ID such as `GALX`:
        /// manufacturer, type, and description.
        aircraft_type => "AircraftType" { aircraft_type: "type" }

        /// Additional information about a commercial airline flight, such
        /// as gate, baggage claim, and meal service. Only available for
        /// some carriers and flights.
        airline_flight_info => "AirlineFlightInfo" { fa_flight_id: "faFlightID" }

        /// Information about a commercial airline/carrier given an ICAO
        /// airline code such as `UAL` or `ASA`.
        airline_info => "AirlineInfo" { airline: "airlineCode" }

        /// Information about an airport given an ICAO code such as `KLAX`:
        /// name, location, latitude/longitude, and an IANA-compatible
        /// timezone identifier (possibly with a leading colon).
        airport_info => "AirportInfo" { airport: "airportCode" }

        /// ICAO identifiers of all known commercial airlines/carriers.
        all_airlines => "AllAirlines" {}

        /// ICAO identifiers of all known airports; airports without one are
        /// listed under their FAA LID identifier.
        all_airports => "AllAirports" {}

        /// Whether an aircraft is blocked from public tracking: 1 if
        /// blocked, 0 if not.
        block_ident_check => "BlockIdentCheck" { ident: "ident" }

        /// Counts of aircraft scheduled, en route, or departing for an
        /// airport.
        count_airport_operations => "CountAirportOperations" { airport: "airport" }

        /// Airlines and how many flights each currently has enroute.
        count_all_enroute_airline_operations => "CountAllEnrouteAirlineOperations" {}

        /// A "cracked" list of noteworthy navigation points along a
        /// flight's planned route. Only navaids within continental U.S.
        /// airspace can be decoded.
        decode_flight_route => "DecodeFlightRoute" { fa_flight_id: "faFlightID" }

        /// Track log of the current IFR flight, or the most recent one when
        /// the aircraft is not airborne. Recent flights only; see
        /// GetHistoricalTrack for older flights.
        get_last_track => "GetLastTrack" { ident: "ident" }

        /// Current position, direction, and speed for an airborne aircraft.
        in_flight_info => "InFlightInfo" { ident: "ident" }

        /// Current raw METAR weather for an airport. A nearby airport's
        /// report may be substituted when none is available.
        metar => "Metar" { airport: "airport" }

        /// METAR weather in parsed, human-readable, and raw formats.
        metar_ex => "MetarEx" { airport: "airport" }

        /// Terminal area forecast for an airport. See `taf` for a simpler
        /// interface.
        ntaf => "NTaf" { airport: "airport" }

        /// Terminal area forecast for an airport.
        taf => "Taf" { airport: "airport" }

        /// Assigned IFR routings between two airports, with assignment
        /// counts and filed altitudes.
        routes_between_airports => "RoutesBetweenAirports" { origin: "origin", destination: "destination" }

        /// Owner of an aircraft given a flight number or N-number.
        tail_owner => "TailOwner" { ident: "ident" }

        /// Information about a five-digit U.S. zipcode, notably latitude
        /// and longitude.
        zipcode_info => "ZipcodeInfo" { zipcode: "zipcode" }

        /// All flight alerts currently scheduled for the user, including
        /// alerts defined on the FlightAware website or mobile app.
        get_alerts => "GetAlerts" {}

        /// Register the endpoint pushed flight alerts are delivered to.
        /// Calling this a second time overwrites the previous endpoint.
        /// `format_type` must currently be `json/post`.
        register_alert_endpoint => "RegisterAlertEndpoint" { address: "address", format_type: "format_type" }
    }

    airport_board! {
        /// Flights that arrived at an airport within the last 24 hours,
        /// most recent first.
        arrived => "Arrived"

        /// Flights that departed an airport within the last 24 hours, most
        /// recently departed first.
        departed => "Departed"

        /// Airborne flights bound for an airport, soonest estimated
        /// arrival first.
        enroute => "Enroute"

        /// Filed IFR flights for an airport that have not yet departed,
        /// with scheduled departure between 2 hours past and 24 hours
        /// ahead.
        scheduled => "Scheduled"
    }

    /// Flight schedules published by airlines, for the recent past and up
    /// to one year ahead. Codeshare flights are included.
    ///
    /// Each returned record gains `departure_time` and `arrival_time`
    /// fields: local-time renderings of the wire `departuretime` and
    /// `arrivaltime` epoch seconds, alongside the originals.
    #[allow(clippy::too_many_arguments)]
    pub fn airline_flight_schedules(
        &self,
        start_date: OffsetDateTime,
        end_date: OffsetDateTime,
        origin: Option<&str>,
        destination: Option<&str>,
        airline: Option<&str>,
        flight_number: Option<&str>,
        how_many: u32,
        offset: u32,
    ) -> Result<Value> {
        let params = Params::new()
            .push_opt("startDate", to_wire_timestamp(Some(start_date)))
            .push_opt("endDate", to_wire_timestamp(Some(end_date)))
            .push_opt("origin", origin)
            .push_opt("destination", destination)
            .push_opt("airline", airline)
            .push_opt("flightno", flight_number)
            .push("howMany", how_many)
            .push("offset", offset);

        let mut result = self.invoke("AirlineFlightSchedules", params)?;
        let records = result.as_array_mut().ok_or_else(|| {
            Error::Protocol("AirlineFlightSchedules result is not a list".into())
        })?;
        for record in records.iter_mut() {
            annotate_local_time(record, "departuretime", "departure_time")?;
            annotate_local_time(record, "arrivaltime", "arrival_time")?;
        }
        Ok(result)
    }

    /// Historical booking and airfare information published by airlines,
    /// aggregated over the prior 12 months. U.S. airports only; amounts
    /// may be estimated or extrapolated.
    pub fn airline_insight(
        &self,
        origin: &str,
        destination: &str,
        report_type: AirlineInsightReportType,
    ) -> Result<Value> {
        self.invoke(
            "AirlineInsight",
            Params::new()
                .push("origin", origin)
                .push("destination", destination)
                .push("reportType", report_type.as_wire()),
        )
    }

    /// Look up the `faFlightID` for an ident and departure time. The
    /// departure must exactly match the flight's actual or scheduled
    /// departure; when several flights match, the first `faFlightID` is
    /// returned.
    pub fn get_flight_id(&self, ident: &str, departure: OffsetDateTime) -> Result<Value> {
        self.invoke(
            "GetFlightID",
            Params::new()
                .push("ident", ident)
                .push_opt("departureTime", to_wire_timestamp(Some(departure))),
        )
    }

    /// Query all airborne aircraft for ones matching the given filters.
    ///
    /// Filters serialize to a single query string of `-key value ` clauses
    /// in the order given. Keys include `prefix`, `type`, `suffix`,
    /// `idents`, `origin`, `destination`, `originOrDestination`,
    /// `aboveAltitude`, `belowAltitude`, `aboveGroundspeed`,
    /// `belowGroundspeed`, `latlong`, `filter`, and `inAir`. Codeshares
    /// and alternate idents are NOT searched by the `idents` clause.
    pub fn search(
        &self,
        filters: &[(&str, FilterValue)],
        how_many: u32,
        offset: u32,
    ) -> Result<Value> {
        let mut query = String::new();
        for (key, value) in filters {
            // Trailing space after each clause, including the last.
            let _ = write!(query, "-{key} {value} ");
        }
        self.invoke(
            "Search",
            Params::new()
                .push("query", query)
                .push("howMany", how_many)
                .push("offset", offset),
        )
    }

    /// Create or update a flight alert.
    ///
    /// `alert_id` 0 creates a new alert; -1 upserts the most recently
    /// modified alert for the same `ident`; any other value updates that
    /// existing alert. For a single-day alert give `date_start` and
    /// `date_end` the same epoch value; for a recurring alert give both as
    /// 0. Each channel entry is a Tcl-style list of the channel ID
    /// (currently always 16) and triggering event types, e.g.
    /// `"{16 e_filed e_departure e_arrival e_diverted e_cancelled}"`.
    ///
    /// Returns a non-zero alert_id on success. Rejections come back as
    /// strings with an `OVERLIMIT` or `FLOODWARN` prefix, passed through
    /// for the caller to inspect (see [`Error::remote_in`]).
    #[allow(clippy::too_many_arguments)]
    pub fn set_alert(
        &self,
        alert_id: i64,
        ident: Option<&str>,
        origin: Option<&str>,
        destination: Option<&str>,
        aircraft_type: Option<&str>,
        date_start: Option<i64>,
        date_end: Option<i64>,
        channels: &[&str],
        enabled: bool,
        max_weekly: u32,
    ) -> Result<Value> {
        self.invoke(
            "SetAlert",
            Params::new()
                .push("alert_id", alert_id)
                .push("enabled", enabled)
                .push("max_weekly", max_weekly)
                .push_opt("ident", ident)
                .push_opt("origin", origin)
                .push_opt("destination", destination)
                .push_opt("aircrafttype", aircraft_type)
                .push_opt("date_start", date_start)
                .push_opt("date_end", date_end)
                .push_list("channels", channels),
        )
    }

    /// Delete a flight alert. The identifier is required; there is no
    /// delete-nothing no-op. Returns 1 on success.
    pub fn delete_alert(&self, alert_id: u64) -> Result<Value> {
        self.invoke("DeleteAlert", Params::new().push("alert_id", alert_id))
    }

    not_implemented! {
        decode_route => "DecodeRoute"
        fleet_arrived => "FleetArrived"
        fleet_scheduled => "FleetScheduled"

        /// Flights for a tail number or airline flight number, newest
        /// first. Not implemented; see `in_flight_info` for current
        /// positions.
        flight_info => "FlightInfo"

        /// Flights for a tail number, ident, or `faFlightID`, newest
        /// first. Not implemented.
        flight_info_ex => "FlightInfoEx"

        get_historical_track => "GetHistoricalTrack"
        inbound_flight_info => "InboundFlightInfo"
        lat_lng_to_distance => "LatLongsToDistance"
        lat_lng_to_heading => "LatLongsToHeading"
        map_flight => "MapFlight"
        map_flight_ex => "MapFlightEx"
        routes_between_airports_ex => "RoutesBetweenAirportsEx"
        search_birdseye_in_flight => "SearchBirdseyeInFlight"
        search_birdseye_positions => "SearchBirdseyePositions"
        search_count => "SearchCount"
        set_maximum_result_sizes => "SetMaximumResultSize"
    }
}

/// Add `target` to a record: the local-time rendering of the epoch seconds
/// found at `source`. The original integer field is kept.
fn annotate_local_time(record: &mut Value, source: &str, target: &str) -> Result<()> {
    let seconds = record
        .get(source)
        .and_then(Value::as_i64)
        .ok_or_else(|| Error::Protocol(format!("record field {source} is not an integer")))?;
    let rendered = from_wire_timestamp(seconds)?
        .format(&Rfc3339)
        .map_err(|e| Error::Validation(format!("cannot render timestamp: {e}")))?;
    let map = record
        .as_object_mut()
        .ok_or_else(|| Error::Protocol("schedule record is not an object".into()))?;
    map.insert(target.to_string(), Value::String(rendered));
    Ok(())
}
