//! `wm-core` — foundational types for the `waymark` GPS-data interchange tool.
//!
//! This crate is a dependency of every format reader.  It intentionally has
//! no `wm-*` dependencies and minimal external ones (only `chrono` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`waypoint`] | `Waypoint` — a single geographic point record        |
//! | [`route`]    | `Route` — an ordered sequence of waypoint copies     |
//! | [`document`] | `DocumentSink` trait, `Document` collecting sink     |
//! | [`text`]     | `strip_html` — HTML tag/entity stripping             |
//! | [`time`]     | `parse_xml_time` — ISO-8601 timestamp parsing        |
//! | [`error`]    | `WmError`, `WmResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod document;
pub mod error;
pub mod route;
pub mod text;
pub mod time;
pub mod waypoint;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use document::{Document, DocumentSink};
pub use error::{WmError, WmResult};
pub use route::Route;
pub use text::strip_html;
pub use time::parse_xml_time;
pub use waypoint::Waypoint;
