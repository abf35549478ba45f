//! Tag classification: deciding what a `k`/`v` pair means for an entity.

use wm_core::strip_html;

use crate::taxonomy::{Feature, TaxonomyIndex};

/// The semantic role of one metadata tag.
///
/// Free-text payloads (`SetNameIfAbsent`, `SetNameOverride`, `AppendNote`)
/// arrive already HTML-sanitized.  `SetCategory` carries the *raw* tag value
/// because icon-table keys are raw OSM values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagEffect {
    /// `name` — set the short name unless one is already present.
    SetNameIfAbsent(String),
    /// `name:en` — replace the short name unconditionally.
    SetNameOverride(String),
    /// A recognized feature-category key, e.g. `amenity=restaurant`.
    SetCategory { feature: Feature, value: String },
    /// `note` — append to the entity's notes.
    AppendNote(String),
    /// Anything else.
    Ignore,
}

/// Classify one tag, first match wins, in this priority order:
/// `name`, `name:en`, recognized category key, `note`, ignore.
///
/// The ordering matters: a hypothetical category named `note` would shadow
/// note handling, and `name`/`name:en` always beat category keys.
pub fn classify_tag(taxonomy: &TaxonomyIndex, key: &str, value: &str) -> TagEffect {
    if key == "name" {
        return TagEffect::SetNameIfAbsent(strip_html(value));
    }
    if key == "name:en" {
        return TagEffect::SetNameOverride(strip_html(value));
    }
    if let Some(feature) = taxonomy.feature(key) {
        return TagEffect::SetCategory {
            feature,
            value: value.to_string(),
        };
    }
    if key == "note" {
        return TagEffect::AppendNote(strip_html(value));
    }
    TagEffect::Ignore
}
