//! Single geographic point record.
//!
//! A `Waypoint` is built up incrementally by a format reader (attributes
//! first, then metadata tags) and is immutable once handed to a
//! [`DocumentSink`][crate::DocumentSink].  Readers that support routes embed
//! independent *copies* of previously finalized waypoints, never aliases, so
//! multiple routes can reference the same source point without interference.

use chrono::{DateTime, Utc};

/// A single geographic point with optional display metadata.
///
/// `latitude`/`longitude` are WGS-84 degrees.  Coordinates default to 0.0
/// when the source omits them; absence of optional metadata is represented
/// by `None`, never by sentinel strings.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Identifier of this point in the source file, if the format has one.
    pub source_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Short display name.
    pub shortname: Option<String>,
    /// Longer description, typically derived from the source identifier.
    pub description: Option<String>,
    /// Free-text notes, already sanitized by the reader.
    pub notes: Option<String>,
    /// Display icon or category descriptor (e.g. `"Restaurant"`).
    pub icon_descr: Option<String>,
    /// Point creation time from the source file.
    pub creation_time: Option<DateTime<Utc>>,
    /// Whether this point should be emitted to the document sink.
    ///
    /// Readers leave this `false` for points that only exist to be
    /// referenced (or that lost an identifier collision) and set it when the
    /// point stands on its own.
    pub retained: bool,
}

impl Waypoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the short name only if no name has been assigned yet.
    ///
    /// This is the semantics of a plain `name` tag: the first one wins and
    /// later `name` tags are ignored.
    pub fn set_shortname_if_absent(&mut self, name: String) {
        if self.shortname.is_none() {
            self.shortname = Some(name);
        }
    }

    /// Unconditionally replace the short name.
    ///
    /// This is the semantics of a language-preferred tag (`name:en`): it
    /// overrides whatever was set before, regardless of tag order.
    pub fn override_shortname(&mut self, name: String) {
        self.shortname = Some(name);
    }

    /// Append to the free-text notes, separating entries with `"; "`.
    pub fn append_note(&mut self, note: &str) {
        match &mut self.notes {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(note);
            }
            None => self.notes = Some(note.to_string()),
        }
    }
}
