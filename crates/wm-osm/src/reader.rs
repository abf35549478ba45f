//! The OSM read pass: event dispatch and entity assembly.
//!
//! # How assembly works
//!
//! quick-xml delivers a flat stream of start/end events in document order.
//! Two one-slot state machines reconstruct entities from it:
//!
//! - the **node** machine opens a [`Waypoint`] on `<node>`, applies child
//!   `<tag>` effects to it, and finalizes on `</node>` — emitting the point
//!   only if it earned the retained flag (unique `id` attribute);
//! - the **way** machine opens a [`Route`] on `<way>`, resolves child
//!   `<nd ref=…>` references through the node table, applies name tags, and
//!   always emits on `</way>`.
//!
//! OSM exports list all nodes before any way that references them, so the
//! node reference table is complete by the time ways are resolved.  Each
//! resolved reference appends an independent *copy* of the finalized
//! waypoint — two routes through the same node never share storage.
//!
//! The reference table lives for exactly one pass.  The [`TaxonomyIndex`] is
//! injected so batch tools can share one across passes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rustc_hash::FxHashMap;

use wm_core::{DocumentSink, Route, Waypoint, parse_xml_time};

use crate::OsmResult;
use crate::classify::{TagEffect, classify_tag};
use crate::taxonomy::TaxonomyIndex;

// ── Public entry points ───────────────────────────────────────────────────────

/// Read one OSM XML file, emitting waypoints and routes to `sink`.
///
/// # Errors
///
/// Returns [`OsmError::Io`][crate::OsmError::Io] if the file cannot be
/// opened and [`OsmError::Xml`][crate::OsmError::Xml] on malformed XML.
/// Data-integrity problems (duplicate node ids, dangling `<nd>` references)
/// are logged as warnings and do not abort the pass.
pub fn read_osm<S: DocumentSink>(
    path: &Path,
    taxonomy: &TaxonomyIndex,
    sink: &mut S,
) -> OsmResult<()> {
    let file = File::open(path)?;
    read_osm_from(BufReader::new(file), taxonomy, sink)
}

/// Like [`read_osm`] but accepts any buffered source.
///
/// Useful for testing (pass a byte slice) or reading decompression streams.
pub fn read_osm_from<R: BufRead, S: DocumentSink>(
    source: R,
    taxonomy: &TaxonomyIndex,
    sink: &mut S,
) -> OsmResult<()> {
    let mut reader = Reader::from_reader(source);
    reader.trim_text(true);

    let mut pass = ReadPass::new(taxonomy, sink);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(el) => pass.element_start(&el)?,
            // Self-closing elements (<node …/>, <tag …/>) are start + end.
            Event::Empty(el) => {
                pass.element_start(&el)?;
                pass.element_end(el.name().as_ref());
            }
            Event::End(el) => pass.element_end(el.name().as_ref()),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

// ── Read pass state ───────────────────────────────────────────────────────────

struct ReadPass<'a, S: DocumentSink> {
    taxonomy: &'a TaxonomyIndex,
    sink: &'a mut S,
    /// Reference table: node id → finalized waypoint.  First insertion wins;
    /// ways resolve their `<nd>` references against this.
    nodes: FxHashMap<String, Waypoint>,
    /// The currently open node, if any.
    wpt: Option<Waypoint>,
    /// The currently open way, if any.
    rte: Option<Route>,
}

impl<'a, S: DocumentSink> ReadPass<'a, S> {
    fn new(taxonomy: &'a TaxonomyIndex, sink: &'a mut S) -> Self {
        Self {
            taxonomy,
            sink,
            nodes: FxHashMap::default(),
            wpt: None,
            rte: None,
        }
    }

    fn element_start(&mut self, el: &BytesStart) -> OsmResult<()> {
        match el.name().as_ref() {
            b"node" => self.node_start(el),
            b"way" => self.way_start(el),
            b"tag" => self.tag(el),
            b"nd" => self.way_nd(el),
            // bounds, relation, member, … — not our concern
            _ => Ok(()),
        }
    }

    fn element_end(&mut self, name: &[u8]) {
        match name {
            b"node" => self.node_end(),
            b"way" => self.way_end(),
            _ => {}
        }
    }

    // ── Node assembly ─────────────────────────────────────────────────────

    fn node_start(&mut self, el: &BytesStart) -> OsmResult<()> {
        let mut wpt = Waypoint::new();

        for attr in el.attributes() {
            let attr = attr?;
            let value = attr.unescape_value()?;
            match attr.key.as_ref() {
                b"id" => {
                    wpt.description = Some(format!("osm-id {value}"));
                    if self.nodes.contains_key(value.as_ref()) {
                        warn!("duplicate osm-id {value}");
                    } else {
                        wpt.retained = true;
                    }
                    wpt.source_id = Some(value.into_owned());
                }
                b"user" => {}
                b"lat" => match value.parse() {
                    Ok(lat) => wpt.latitude = lat,
                    Err(_) => warn!("unparseable node latitude {value:?}"),
                },
                b"lon" => match value.parse() {
                    Ok(lon) => wpt.longitude = lon,
                    Err(_) => warn!("unparseable node longitude {value:?}"),
                },
                b"timestamp" => match parse_xml_time(&value) {
                    Ok(t) => wpt.creation_time = Some(t),
                    Err(e) => warn!("{e}"),
                },
                _ => {}
            }
        }

        self.wpt = Some(wpt);
        Ok(())
    }

    fn node_end(&mut self) {
        // A stray </node> with nothing open is a no-op.
        let Some(wpt) = self.wpt.take() else { return };
        if !wpt.retained {
            return;
        }
        if let Some(id) = wpt.source_id.clone() {
            self.nodes.insert(id, wpt.clone());
        }
        self.sink.add_waypoint(wpt);
    }

    // ── Way assembly ──────────────────────────────────────────────────────

    fn way_start(&mut self, el: &BytesStart) -> OsmResult<()> {
        let mut rte = Route::new();

        for attr in el.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"id" {
                let value = attr.unescape_value()?;
                rte.description = Some(format!("osm-id {value}"));
            }
        }

        self.rte = Some(rte);
        Ok(())
    }

    fn way_nd(&mut self, el: &BytesStart) -> OsmResult<()> {
        if self.rte.is_none() {
            return Ok(());
        }

        for attr in el.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"ref" {
                let id = attr.unescape_value()?;
                match self.nodes.get(id.as_ref()) {
                    Some(wpt) => {
                        let copy = wpt.clone();
                        if let Some(rte) = self.rte.as_mut() {
                            rte.add_waypoint(copy);
                        }
                    }
                    // Unresolvable reference: skip it, no placeholder.
                    None => warn!("way reference id {id:?} wasn't listed under nodes"),
                }
            }
        }

        Ok(())
    }

    fn way_end(&mut self) {
        // Ways are always emitted, even with an empty point sequence.
        if let Some(rte) = self.rte.take() {
            self.sink.add_route(rte);
        }
    }

    // ── Tag handling ──────────────────────────────────────────────────────

    fn tag(&mut self, el: &BytesStart) -> OsmResult<()> {
        let mut key = String::new();
        let mut value = String::new();

        for attr in el.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"k" => key = attr.unescape_value()?.into_owned(),
                b"v" => value = attr.unescape_value()?.into_owned(),
                _ => {}
            }
        }

        if self.wpt.is_some() {
            self.node_tag(&key, &value);
        } else if self.rte.is_some() {
            self.way_tag(&key, &value);
        }
        // Tags outside an open node/way (e.g. under <relation>) are ignored.
        Ok(())
    }

    fn node_tag(&mut self, key: &str, value: &str) {
        let Some(wpt) = self.wpt.as_mut() else { return };
        match classify_tag(self.taxonomy, key, value) {
            TagEffect::SetNameIfAbsent(name) => wpt.set_shortname_if_absent(name),
            TagEffect::SetNameOverride(name) => wpt.override_shortname(name),
            // Last recognized category tag wins: an earlier icon is
            // silently overwritten (unlike the name field, where the first
            // plain `name` wins).
            TagEffect::SetCategory { feature, value } => {
                wpt.icon_descr = Some(self.taxonomy.icon(feature, &value));
            }
            TagEffect::AppendNote(note) => wpt.append_note(&note),
            TagEffect::Ignore => {}
        }
    }

    fn way_tag(&mut self, key: &str, value: &str) {
        let Some(rte) = self.rte.as_mut() else { return };
        // Ways only take names; category and note tags don't apply here.
        match classify_tag(self.taxonomy, key, value) {
            TagEffect::SetNameIfAbsent(name) => rte.set_name_if_absent(name),
            TagEffect::SetNameOverride(name) => rte.override_name(name),
            _ => {}
        }
    }
}
