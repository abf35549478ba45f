//! Unit tests for wm-osm.
//!
//! All tests feed hand-written XML through `read_osm_from`, so they run
//! without any OSM file on disk.

#[cfg(test)]
mod helpers {
    use wm_core::Document;

    use crate::{TaxonomyIndex, read_osm_from};

    /// Read `xml` into a fresh in-memory document, panicking on read errors.
    pub fn parse(xml: &str) -> Document {
        let mut doc = Document::new();
        read_osm_from(xml.as_bytes(), TaxonomyIndex::global(), &mut doc)
            .expect("test input should parse");
        doc
    }
}

// ── Taxonomy index ────────────────────────────────────────────────────────────

#[cfg(test)]
mod taxonomy {
    use crate::{Feature, TaxonomyIndex};

    #[test]
    fn recognizes_all_feature_keys() {
        let idx = TaxonomyIndex::new();
        for f in Feature::ALL {
            assert_eq!(idx.feature(f.key()), Some(f), "key {}", f.key());
        }
    }

    #[test]
    fn unknown_and_wrong_case_keys_miss() {
        let idx = TaxonomyIndex::new();
        assert_eq!(idx.feature("name"), None);
        assert_eq!(idx.feature("surface"), None);
        // matching is case-sensitive, no normalization
        assert_eq!(idx.feature("Amenity"), None);
    }

    #[test]
    fn curated_icon_hit() {
        let idx = TaxonomyIndex::new();
        assert_eq!(idx.icon(Feature::Amenity, "restaurant"), "Restaurant");
        assert_eq!(idx.icon(Feature::Place, "city"), "City (Large)");
        assert_eq!(idx.icon(Feature::Building, "yes"), "Building");
    }

    #[test]
    fn unknown_value_synthesizes_fallback() {
        let idx = TaxonomyIndex::new();
        assert_eq!(idx.icon(Feature::Amenity, "spaceport"), "amenity:spaceport");
        // a feature with no curated entries at all still falls back
        assert_eq!(idx.icon(Feature::Power, "tower"), "power:tower");
    }

    #[test]
    fn global_is_shared_and_idempotent() {
        let a = TaxonomyIndex::global();
        let b = TaxonomyIndex::global();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.feature("amenity"), Some(Feature::Amenity));
    }
}

// ── Tag classifier ────────────────────────────────────────────────────────────

#[cfg(test)]
mod classify {
    use crate::{Feature, TagEffect, TaxonomyIndex, classify_tag};

    fn idx() -> &'static TaxonomyIndex {
        TaxonomyIndex::global()
    }

    #[test]
    fn name_and_name_en() {
        assert_eq!(
            classify_tag(idx(), "name", "Foo"),
            TagEffect::SetNameIfAbsent("Foo".into())
        );
        assert_eq!(
            classify_tag(idx(), "name:en", "Bar"),
            TagEffect::SetNameOverride("Bar".into())
        );
    }

    #[test]
    fn name_text_is_sanitized() {
        assert_eq!(
            classify_tag(idx(), "name", "<b>Main St</b>"),
            TagEffect::SetNameIfAbsent("Main St".into())
        );
        assert_eq!(
            classify_tag(idx(), "note", "fish &amp; chips"),
            TagEffect::AppendNote("fish & chips".into())
        );
    }

    #[test]
    fn category_value_stays_raw() {
        // category values are icon-table keys and must not be sanitized
        assert_eq!(
            classify_tag(idx(), "amenity", "fish &amp; chips"),
            TagEffect::SetCategory {
                feature: Feature::Amenity,
                value: "fish &amp; chips".into()
            }
        );
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(classify_tag(idx(), "created_by", "JOSM"), TagEffect::Ignore);
        assert_eq!(classify_tag(idx(), "name:de", "Strasse"), TagEffect::Ignore);
    }
}

// ── Node assembly ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod node {
    use super::helpers::parse;

    #[test]
    fn basic_node_is_retained() {
        let doc = parse(
            r#"<osm><node id="42" lat="48.137" lon="11.575" user="alice"/></osm>"#,
        );
        assert_eq!(doc.waypoints.len(), 1);
        let wpt = &doc.waypoints[0];
        assert!(wpt.retained);
        assert_eq!(wpt.description.as_deref(), Some("osm-id 42"));
        assert_eq!(wpt.source_id.as_deref(), Some("42"));
        assert!((wpt.latitude - 48.137).abs() < 1e-9);
        assert!((wpt.longitude - 11.575).abs() < 1e-9);
    }

    #[test]
    fn duplicate_id_keeps_first() {
        let doc = parse(
            r#"<osm>
                 <node id="7" lat="1.0" lon="2.0"/>
                 <node id="7" lat="9.0" lon="9.0"/>
               </osm>"#,
        );
        // the second insertion fails and the second point is discarded
        assert_eq!(doc.waypoints.len(), 1);
        assert!((doc.waypoints[0].latitude - 1.0).abs() < 1e-9);
    }

    #[test]
    fn node_without_id_is_discarded() {
        let doc = parse(r#"<osm><node lat="1.0" lon="2.0"/></osm>"#);
        assert!(doc.waypoints.is_empty());
    }

    #[test]
    fn name_then_name_en() {
        let doc = parse(
            r#"<osm><node id="1" lat="0" lon="0">
                 <tag k="name" v="Foo"/>
                 <tag k="name:en" v="Bar"/>
               </node></osm>"#,
        );
        assert_eq!(doc.waypoints[0].shortname.as_deref(), Some("Bar"));
    }

    #[test]
    fn name_en_then_name() {
        // the override is order-independent: a later plain name can't win
        let doc = parse(
            r#"<osm><node id="1" lat="0" lon="0">
                 <tag k="name:en" v="Bar"/>
                 <tag k="name" v="Foo"/>
                 <tag k="name" v="Baz"/>
               </node></osm>"#,
        );
        assert_eq!(doc.waypoints[0].shortname.as_deref(), Some("Bar"));
    }

    #[test]
    fn html_in_name_is_stripped() {
        let doc = parse(
            r#"<osm><node id="1" lat="0" lon="0">
                 <tag k="name" v="&lt;b&gt;Caf&amp;#233;&lt;/b&gt;"/>
               </node></osm>"#,
        );
        assert_eq!(doc.waypoints[0].shortname.as_deref(), Some("Café"));
    }

    #[test]
    fn curated_and_fallback_icons() {
        let doc = parse(
            r#"<osm>
                 <node id="1" lat="0" lon="0"><tag k="amenity" v="restaurant"/></node>
                 <node id="2" lat="0" lon="0"><tag k="amenity" v="spaceport"/></node>
               </osm>"#,
        );
        assert_eq!(doc.waypoints[0].icon_descr.as_deref(), Some("Restaurant"));
        assert_eq!(
            doc.waypoints[1].icon_descr.as_deref(),
            Some("amenity:spaceport")
        );
    }

    #[test]
    fn category_is_last_match_wins_unlike_names() {
        // second recognized category tag silently overwrites the icon,
        // while the name field keeps its first value — asymmetric on purpose
        let doc = parse(
            r#"<osm><node id="1" lat="0" lon="0">
                 <tag k="name" v="Foo"/>
                 <tag k="amenity" v="restaurant"/>
                 <tag k="tourism" v="hotel"/>
                 <tag k="name" v="Ignored"/>
               </node></osm>"#,
        );
        let wpt = &doc.waypoints[0];
        assert_eq!(wpt.icon_descr.as_deref(), Some("Hotel"));
        assert_eq!(wpt.shortname.as_deref(), Some("Foo"));
    }

    #[test]
    fn notes_accumulate() {
        let doc = parse(
            r#"<osm><node id="1" lat="0" lon="0">
                 <tag k="note" v="first"/>
                 <tag k="note" v="second"/>
               </node></osm>"#,
        );
        assert_eq!(doc.waypoints[0].notes.as_deref(), Some("first; second"));
    }

    #[test]
    fn timestamp_parsed() {
        use chrono::{Datelike, Timelike};

        let doc = parse(
            r#"<osm><node id="1" lat="0" lon="0" timestamp="2008-01-01T12:00:00Z"/></osm>"#,
        );
        let t = doc.waypoints[0].creation_time.expect("time should be set");
        assert_eq!((t.year(), t.month(), t.day()), (2008, 1, 1));
        assert_eq!(t.hour(), 12);
    }

    #[test]
    fn bad_timestamp_leaves_time_unset() {
        let doc = parse(r#"<osm><node id="1" lat="0" lon="0" timestamp="yesterday"/></osm>"#);
        assert_eq!(doc.waypoints.len(), 1);
        assert!(doc.waypoints[0].creation_time.is_none());
    }
}

// ── Way assembly ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod way {
    use super::helpers::parse;

    #[test]
    fn unresolved_reference_is_skipped() {
        let doc = parse(
            r#"<osm>
                 <node id="A" lat="1" lon="1"/>
                 <node id="C" lat="3" lon="3"/>
                 <way id="100">
                   <nd ref="A"/><nd ref="B"/><nd ref="C"/>
                 </way>
               </osm>"#,
        );
        assert_eq!(doc.routes.len(), 1);
        let rte = &doc.routes[0];
        assert_eq!(rte.description.as_deref(), Some("osm-id 100"));
        // B was never defined: the sequence is [A, C], no placeholder
        assert_eq!(rte.waypoints.len(), 2);
        assert_eq!(rte.waypoints[0].source_id.as_deref(), Some("A"));
        assert_eq!(rte.waypoints[1].source_id.as_deref(), Some("C"));
    }

    #[test]
    fn empty_way_is_still_emitted() {
        let doc = parse(r#"<osm><way id="5"></way></osm>"#);
        assert_eq!(doc.routes.len(), 1);
        assert!(doc.routes[0].waypoints.is_empty());
        assert!(doc.routes[0].name.is_none());
    }

    #[test]
    fn way_name_rules() {
        let doc = parse(
            r#"<osm>
                 <way id="1"><tag k="name" v="First"/><tag k="name" v="Second"/></way>
                 <way id="2"><tag k="name:en" v="Bar"/><tag k="name" v="Foo"/></way>
               </osm>"#,
        );
        assert_eq!(doc.routes[0].name.as_deref(), Some("First"));
        assert_eq!(doc.routes[1].name.as_deref(), Some("Bar"));
    }

    #[test]
    fn ways_get_no_category_classification() {
        let doc = parse(
            r#"<osm><way id="1">
                 <tag k="highway" v="residential"/>
                 <tag k="note" v="ignored on ways"/>
               </way></osm>"#,
        );
        assert!(doc.routes[0].name.is_none());
    }

    #[test]
    fn route_copies_are_independent() {
        let mut doc = parse(
            r#"<osm>
                 <node id="N" lat="1" lon="1"><tag k="name" v="Shared"/></node>
                 <way id="1"><nd ref="N"/></way>
                 <way id="2"><nd ref="N"/></way>
               </osm>"#,
        );
        // mutating one route's copy must not leak anywhere else
        doc.routes[0].waypoints[0].shortname = Some("mutated".into());
        assert_eq!(
            doc.routes[1].waypoints[0].shortname.as_deref(),
            Some("Shared")
        );
        assert_eq!(doc.waypoints[0].shortname.as_deref(), Some("Shared"));
    }

    #[test]
    fn node_copies_carry_full_metadata() {
        let doc = parse(
            r#"<osm>
                 <node id="N" lat="2.5" lon="-3.5">
                   <tag k="amenity" v="fuel"/>
                 </node>
                 <way id="1"><nd ref="N"/></way>
               </osm>"#,
        );
        let copy = &doc.routes[0].waypoints[0];
        assert_eq!(copy.icon_descr.as_deref(), Some("Gas Station"));
        assert!((copy.latitude - 2.5).abs() < 1e-9);
        assert!((copy.longitude + 3.5).abs() < 1e-9);
    }

    #[test]
    fn discarded_duplicate_is_not_referenceable_twice() {
        // the surviving first definition is what ways resolve against
        let doc = parse(
            r#"<osm>
                 <node id="D" lat="1" lon="1"/>
                 <node id="D" lat="9" lon="9"/>
                 <way id="1"><nd ref="D"/></way>
               </osm>"#,
        );
        assert_eq!(doc.routes[0].waypoints.len(), 1);
        assert!((doc.routes[0].waypoints[0].latitude - 1.0).abs() < 1e-9);
    }

    #[test]
    fn nd_without_ref_is_a_noop() {
        let doc = parse(r#"<osm><way id="1"><nd/></way></osm>"#);
        assert!(doc.routes[0].waypoints.is_empty());
    }
}

// ── Read driver ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver {
    use wm_core::Document;

    use super::helpers::parse;
    use crate::{TaxonomyIndex, read_osm_from};

    #[test]
    fn records_arrive_in_document_order() {
        let doc = parse(
            r#"<osm>
                 <node id="1" lat="0" lon="0"/>
                 <node id="2" lat="0" lon="0"/>
                 <way id="10"/>
                 <way id="11"/>
               </osm>"#,
        );
        let ids: Vec<_> = doc
            .waypoints
            .iter()
            .map(|w| w.source_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, ["1", "2"]);
        let descs: Vec<_> = doc
            .routes
            .iter()
            .map(|r| r.description.as_deref().unwrap())
            .collect();
        assert_eq!(descs, ["osm-id 10", "osm-id 11"]);
    }

    #[test]
    fn relation_content_is_ignored() {
        let doc = parse(
            r#"<osm>
                 <node id="1" lat="0" lon="0"/>
                 <relation id="99">
                   <member type="node" ref="1" role=""/>
                   <tag k="name" v="Relation name"/>
                 </relation>
               </osm>"#,
        );
        assert_eq!(doc.waypoints.len(), 1);
        assert!(doc.routes.is_empty());
        // the relation's name tag must not bleed into the closed node
        assert!(doc.waypoints[0].shortname.is_none());
    }

    #[test]
    fn malformed_xml_is_fatal() {
        let mut doc = Document::new();
        let res = read_osm_from(
            r#"<osm><node id="1" lat="0" lon="0"></osm>"#.as_bytes(),
            TaxonomyIndex::global(),
            &mut doc,
        );
        assert!(res.is_err());
    }

    #[test]
    fn empty_document_is_fine() {
        let doc = parse("<osm/>");
        assert!(doc.waypoints.is_empty());
        assert!(doc.routes.is_empty());
    }
}
