//! Timestamp parsing for XML geodata formats.

use chrono::{DateTime, Utc};

use crate::{WmError, WmResult};

/// Parse an XML timestamp (`2008-01-01T12:00:00Z`, offset and
/// fractional-second forms included) into a UTC time.
///
/// Sub-second precision is preserved in the returned `DateTime` — callers
/// needing the fractional part read it with `timestamp_subsec_micros()`.
///
/// # Errors
///
/// Returns [`WmError::Parse`] for anything RFC 3339 rejects.  Readers treat
/// this as a recoverable condition: log a warning and leave the creation
/// time unset.
pub fn parse_xml_time(text: &str) -> WmResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WmError::Parse(format!("bad timestamp {text:?}: {e}")))
}
