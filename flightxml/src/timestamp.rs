//! Wire-timestamp conversion.
//!
//! The service represents instants as integer seconds since the UNIX epoch.
//! Outbound conversion is epoch-referenced; inbound conversion renders the
//! instant in the caller environment's local UTC offset (UTC when the local
//! offset is indeterminate). The two directions are deliberately asymmetric:
//! round-tripping preserves the absolute instant, not its rendering.

use time::{OffsetDateTime, UtcOffset};

use crate::error::{Error, Result};

/// Convert an optional datetime to wire seconds.
///
/// Absent input yields absent output; the parameter is then omitted from
/// the request entirely. Fractional seconds are truncated.
pub fn to_wire_timestamp(value: Option<OffsetDateTime>) -> Option<i64> {
    value.map(|dt| {
        let seconds = dt.unix_timestamp();
        // unix_timestamp floors; pre-epoch instants with a fractional part
        // need one second back to truncate toward zero instead.
        if seconds < 0 && dt.nanosecond() != 0 {
            seconds + 1
        } else {
            seconds
        }
    })
}

/// Convert wire seconds to a datetime in the local UTC offset.
pub fn from_wire_timestamp(seconds: i64) -> Result<OffsetDateTime> {
    let instant = OffsetDateTime::from_unix_timestamp(seconds)
        .map_err(|e| Error::Validation(format!("wire timestamp out of range: {e}")))?;
    Ok(instant.to_offset(local_offset()))
}

// The local offset is indeterminate in some environments (notably
// multi-threaded unix processes); fall back to UTC rather than fail.
fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn absent_input_bypasses_conversion() {
        assert_eq!(to_wire_timestamp(None), None);
    }

    #[test]
    fn epoch_referenced_outbound() {
        let dt = datetime!(1970-01-01 00:00:00 UTC);
        assert_eq!(to_wire_timestamp(Some(dt)), Some(0));

        let dt = datetime!(2009-02-13 23:31:30 UTC);
        assert_eq!(to_wire_timestamp(Some(dt)), Some(1_234_567_890));
    }

    #[test]
    fn outbound_truncates_fractional_seconds() {
        let dt = datetime!(1970-01-01 00:00:01.999 UTC);
        assert_eq!(to_wire_timestamp(Some(dt)), Some(1));
    }

    #[test]
    fn pre_epoch_fractions_truncate_toward_zero() {
        let dt = datetime!(1969-12-31 23:59:59.5 UTC);
        assert_eq!(to_wire_timestamp(Some(dt)), Some(0));

        let dt = datetime!(1969-12-31 23:59:58.5 UTC);
        assert_eq!(to_wire_timestamp(Some(dt)), Some(-1));

        // Whole pre-epoch seconds are unaffected.
        let dt = datetime!(1969-12-31 23:59:58 UTC);
        assert_eq!(to_wire_timestamp(Some(dt)), Some(-2));
    }

    #[test]
    fn offset_renderings_convert_to_the_same_instant() {
        let utc = datetime!(2020-06-01 12:00:00 UTC);
        let cst = datetime!(2020-06-01 06:00:00 -06:00);
        assert_eq!(to_wire_timestamp(Some(utc)), to_wire_timestamp(Some(cst)));
    }

    #[test]
    fn round_trip_preserves_the_instant() {
        let dt = datetime!(2021-03-14 15:09:26 UTC);
        let wire = to_wire_timestamp(Some(dt)).unwrap();
        let back = from_wire_timestamp(wire).unwrap();
        // The rendering offset may differ; the instant may not.
        assert_eq!(back.unix_timestamp(), dt.unix_timestamp());
    }

    #[test]
    fn out_of_range_wire_value_is_a_validation_error() {
        let err = from_wire_timestamp(i64::MAX).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
