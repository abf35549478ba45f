//! osm2csv — convert OpenStreetMap XML exports to flat CSV tables.
//!
//! ```text
//! osm2csv FILE.osm [FILE.osm ...]
//! ```
//!
//! Writes `waypoints.csv` (one row per standalone node) and `routes.csv`
//! (one row per route point, in sequence order) to the current directory.
//! Each input file is one read pass; the feature taxonomy is built once and
//! shared across all passes.  Data-integrity warnings (duplicate node ids,
//! dangling way references) go to stderr — run with `RUST_LOG=warn` to see
//! them.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use wm_core::{Document, Waypoint};
use wm_osm::{TaxonomyIndex, read_osm};

const WAYPOINTS_CSV: &str = "waypoints.csv";
const ROUTES_CSV: &str = "routes.csv";

// ── CSV rows ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct WaypointRow<'a> {
    source_id: Option<&'a str>,
    latitude: f64,
    longitude: f64,
    name: Option<&'a str>,
    description: Option<&'a str>,
    icon: Option<&'a str>,
    notes: Option<&'a str>,
    timestamp: Option<String>,
}

impl<'a> WaypointRow<'a> {
    fn from_waypoint(wpt: &'a Waypoint) -> Self {
        Self {
            source_id: wpt.source_id.as_deref(),
            latitude: wpt.latitude,
            longitude: wpt.longitude,
            name: wpt.shortname.as_deref(),
            description: wpt.description.as_deref(),
            icon: wpt.icon_descr.as_deref(),
            notes: wpt.notes.as_deref(),
            timestamp: wpt.creation_time.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
struct RoutePointRow<'a> {
    route: Option<&'a str>,
    route_name: Option<&'a str>,
    seq: usize,
    source_id: Option<&'a str>,
    latitude: f64,
    longitude: f64,
    point_name: Option<&'a str>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        bail!("usage: osm2csv FILE.osm [FILE.osm ...]");
    }

    let taxonomy = TaxonomyIndex::global();
    let mut doc = Document::new();
    for path in &files {
        read_osm(path, taxonomy, &mut doc)
            .with_context(|| format!("reading {}", path.display()))?;
    }

    write_waypoints(&doc).context("writing waypoints.csv")?;
    write_routes(&doc).context("writing routes.csv")?;

    println!(
        "{} waypoints, {} routes from {} file(s)",
        doc.waypoints.len(),
        doc.routes.len(),
        files.len()
    );
    Ok(())
}

fn write_waypoints(doc: &Document) -> Result<()> {
    let mut writer = csv::Writer::from_path(WAYPOINTS_CSV)?;
    for wpt in &doc.waypoints {
        writer.serialize(WaypointRow::from_waypoint(wpt))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_routes(doc: &Document) -> Result<()> {
    let mut writer = csv::Writer::from_path(ROUTES_CSV)?;
    for rte in &doc.routes {
        for (seq, wpt) in rte.waypoints.iter().enumerate() {
            writer.serialize(RoutePointRow {
                route: rte.description.as_deref(),
                route_name: rte.name.as_deref(),
                seq,
                source_id: wpt.source_id.as_deref(),
                latitude: wpt.latitude,
                longitude: wpt.longitude,
                point_name: wpt.shortname.as_deref(),
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
