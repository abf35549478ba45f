//! Document sink — where finalized waypoints and routes go.

use crate::route::Route;
use crate::waypoint::Waypoint;

/// Receiver for finalized records produced by a format reader.
///
/// Readers call these methods in document order and hand over ownership;
/// a record is never touched by the reader again after emission.  Implement
/// this to stream records into whatever backend the application uses
/// (in-memory document, CSV writer, database, …).
///
/// # Example — counting sink
///
/// ```rust,ignore
/// struct Counter { waypoints: usize, routes: usize }
///
/// impl DocumentSink for Counter {
///     fn add_waypoint(&mut self, _wpt: Waypoint) { self.waypoints += 1; }
///     fn add_route(&mut self, _rte: Route) { self.routes += 1; }
/// }
/// ```
pub trait DocumentSink {
    /// Accept one finalized standalone waypoint.
    fn add_waypoint(&mut self, wpt: Waypoint);

    /// Accept one finalized route.
    fn add_route(&mut self, rte: Route);
}

/// An in-memory [`DocumentSink`] that simply collects everything.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub waypoints: Vec<Waypoint>,
    pub routes: Vec<Route>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty() && self.routes.is_empty()
    }
}

impl DocumentSink for Document {
    fn add_waypoint(&mut self, wpt: Waypoint) {
        self.waypoints.push(wpt);
    }

    fn add_route(&mut self, rte: Route) {
        self.routes.push(rte);
    }
}
