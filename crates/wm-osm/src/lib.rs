//! `wm-osm` — streaming OpenStreetMap XML reader.
//!
//! Reads an OSM export (`.osm` XML) and reconstructs its flat event stream
//! into the `wm-core` waypoint/route model: top-level `<node>` elements
//! become standalone waypoints, `<way>` elements become routes embedding
//! independent copies of the nodes they reference.  This reader is read-only
//! and ignores `<relation>` elements entirely.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`taxonomy`] | `Feature` categories, icon table, `TaxonomyIndex`      |
//! | [`classify`] | `TagEffect`, `classify_tag` — tag → semantic role      |
//! | [`reader`]   | `read_osm` / `read_osm_from` — the event state machine |
//! | [`error`]    | `OsmError`, `OsmResult<T>`                             |
//!
//! Data-integrity problems in the input (duplicate node ids, way references
//! to unknown nodes) are reported through `log::warn!` and recovered from;
//! only malformed XML or I/O failure aborts a read pass.

pub mod classify;
pub mod error;
pub mod reader;
pub mod taxonomy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use classify::{TagEffect, classify_tag};
pub use error::{OsmError, OsmResult};
pub use reader::{read_osm, read_osm_from};
pub use taxonomy::{Feature, TaxonomyIndex};
