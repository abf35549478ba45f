//! OSM feature taxonomy: category keys and the curated icon table.
//!
//! OSM classifies map features with well-known tag keys (`amenity=…`,
//! `tourism=…`, see <https://wiki.openstreetmap.org/wiki/Map_features>).
//! This module fixes the set of recognized keys as the [`Feature`] enum and
//! maps a curated subset of (feature, value) pairs onto display icon names.
//! Pairs outside the curated table fall back to a synthesized
//! `"<feature>:<value>"` label so no classified point loses information.
//!
//! Lookups are case-sensitive exact matches; OSM tag keys and values are
//! lowercase by convention and anything else is simply not recognized.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

// ── Feature categories ────────────────────────────────────────────────────────

/// A recognized OSM feature-category tag key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Aerialway,
    Aeroway,
    Amenity,
    Building,
    Cycleway,
    Highway,
    Historic,
    Landuse,
    Leisure,
    ManMade,
    Military,
    Natural,
    Place,
    Power,
    Railway,
    Shop,
    Sport,
    Tourism,
    Waterway,
}

impl Feature {
    pub const ALL: [Feature; 19] = [
        Feature::Aerialway,
        Feature::Aeroway,
        Feature::Amenity,
        Feature::Building,
        Feature::Cycleway,
        Feature::Highway,
        Feature::Historic,
        Feature::Landuse,
        Feature::Leisure,
        Feature::ManMade,
        Feature::Military,
        Feature::Natural,
        Feature::Place,
        Feature::Power,
        Feature::Railway,
        Feature::Shop,
        Feature::Sport,
        Feature::Tourism,
        Feature::Waterway,
    ];

    /// The OSM tag key this feature is recognized by.
    pub fn key(self) -> &'static str {
        match self {
            Feature::Aerialway => "aerialway",
            Feature::Aeroway => "aeroway",
            Feature::Amenity => "amenity",
            Feature::Building => "building",
            Feature::Cycleway => "cycleway",
            Feature::Highway => "highway",
            Feature::Historic => "historic",
            Feature::Landuse => "landuse",
            Feature::Leisure => "leisure",
            Feature::ManMade => "man_made",
            Feature::Military => "military",
            Feature::Natural => "natural",
            Feature::Place => "place",
            Feature::Power => "power",
            Feature::Railway => "railway",
            Feature::Shop => "shop",
            Feature::Sport => "sport",
            Feature::Tourism => "tourism",
            Feature::Waterway => "waterway",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ── Curated icon table ────────────────────────────────────────────────────────

/// (feature, raw tag value, display icon), based on the OSM map-features list.
///
/// Values deliberately stay raw tag text — the reader looks them up before
/// any HTML sanitizing.
static ICON_TABLE: &[(Feature, &str, &str)] = &[
    // waterway
    (Feature::Waterway, "dock", "Dock"),
    // railway
    (Feature::Railway, "crossing", "Crossing"),
    // aeroway
    (Feature::Aeroway, "aerodrome", "Airport"),
    (Feature::Aeroway, "terminal", "Airport"),
    (Feature::Aeroway, "helipad", "Heliport"),
    // building
    (Feature::Building, "yes", "Building"),
    // leisure
    (Feature::Leisure, "golf_course", "Golf Course"),
    (Feature::Leisure, "stadium", "Stadium"),
    (Feature::Leisure, "marina", "Marina"),
    (Feature::Leisure, "fishing", "Fishing Area"),
    (Feature::Leisure, "park", "Park"),
    // amenity
    (Feature::Amenity, "pub", "Bar"),
    (Feature::Amenity, "nightclub", "Bar"),
    (Feature::Amenity, "restaurant", "Restaurant"),
    (Feature::Amenity, "fast_food", "Fast Food"),
    (Feature::Amenity, "parking", "Parking Area"),
    (Feature::Amenity, "car_rental", "Car Rental"),
    (Feature::Amenity, "fuel", "Gas Station"),
    (Feature::Amenity, "telephone", "Telephone"),
    (Feature::Amenity, "toilets", "Restroom"),
    (Feature::Amenity, "townhall", "City Hall"),
    (Feature::Amenity, "post_office", "Post Office"),
    (Feature::Amenity, "school", "School"),
    (Feature::Amenity, "pharmacy", "Pharmacy"),
    (Feature::Amenity, "hospital", "Medical Facility"),
    (Feature::Amenity, "police", "Police Station"),
    (Feature::Amenity, "bank", "Bank"),
    // shop
    (Feature::Shop, "convenience", "Convenience Store"),
    // tourism
    (Feature::Tourism, "information", "Information"),
    (Feature::Tourism, "hotel", "Hotel"),
    (Feature::Tourism, "motel", "Lodging"),
    (Feature::Tourism, "guest_house", "Lodging"),
    (Feature::Tourism, "hostel", "Lodging"),
    (Feature::Tourism, "camp_site", "Campground"),
    (Feature::Tourism, "caravan_site", "RV Park"),
    (Feature::Tourism, "picnic_site", "Picnic Area"),
    (Feature::Tourism, "viewpoint", "Scenic Area"),
    (Feature::Tourism, "zoo", "Zoo"),
    (Feature::Tourism, "museum", "Museum"),
    // landuse
    (Feature::Landuse, "forest", "Forest"),
    (Feature::Landuse, "military", "Military"),
    (Feature::Landuse, "cemetery", "Cemetery"),
    // natural
    (Feature::Natural, "beach", "Beach"),
    // sport
    (Feature::Sport, "swimming", "Swimming Area"),
    (Feature::Sport, "skiing", "Skiing Area"),
    // place
    (Feature::Place, "city", "City (Large)"),
    (Feature::Place, "town", "City (Medium)"),
    (Feature::Place, "village", "City (Small)"),
];

// ── Taxonomy index ────────────────────────────────────────────────────────────

/// Lookup structures over the feature keys and the icon table.
///
/// Immutable once built.  A multi-file batch run builds this once (see
/// [`TaxonomyIndex::global`]) and injects the same `&TaxonomyIndex` into
/// every read pass; per-pass state (the node reference table) lives in the
/// reader, not here.
#[derive(Debug)]
pub struct TaxonomyIndex {
    features: FxHashMap<&'static str, Feature>,
    icons: FxHashMap<Feature, FxHashMap<&'static str, &'static str>>,
}

impl TaxonomyIndex {
    pub fn new() -> Self {
        let features = Feature::ALL.iter().map(|&f| (f.key(), f)).collect();

        let mut icons: FxHashMap<Feature, FxHashMap<&'static str, &'static str>> =
            FxHashMap::default();
        for &(feature, value, icon) in ICON_TABLE {
            icons.entry(feature).or_default().insert(value, icon);
        }

        Self { features, icons }
    }

    /// The process-wide shared index, built on first use and kept alive
    /// until process exit.  Repeated calls return the same instance.
    pub fn global() -> &'static TaxonomyIndex {
        static INDEX: OnceLock<TaxonomyIndex> = OnceLock::new();
        INDEX.get_or_init(TaxonomyIndex::new)
    }

    /// Resolve a tag key to its feature category (exact, case-sensitive).
    pub fn feature(&self, key: &str) -> Option<Feature> {
        self.features.get(key).copied()
    }

    /// Resolve a (feature, raw value) pair to a display icon.
    ///
    /// Returns the curated icon when the pair is in the table, otherwise the
    /// synthesized `"<feature>:<value>"` fallback.
    pub fn icon(&self, feature: Feature, value: &str) -> String {
        match self.icons.get(&feature).and_then(|m| m.get(value)) {
            Some(icon) => (*icon).to_string(),
            None => format!("{}:{}", feature.key(), value),
        }
    }
}

impl Default for TaxonomyIndex {
    fn default() -> Self {
        Self::new()
    }
}
