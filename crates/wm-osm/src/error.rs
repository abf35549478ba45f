//! OSM-reader error type.

use thiserror::Error;

/// Errors that abort an OSM read pass.
///
/// Recoverable data problems (duplicate ids, dangling way references) never
/// surface here — they are logged as warnings and the pass continues.
#[derive(Debug, Error)]
pub enum OsmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
}

pub type OsmResult<T> = Result<T, OsmError>;
