//! Ordered route record.

use crate::waypoint::Waypoint;

/// An ordered route over waypoint *copies*.
///
/// The `waypoints` sequence preserves the order in which the source file
/// referenced its points.  Each element is an independent copy — mutating a
/// route's copy never affects another route's copy of the same source point.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Short display name.
    pub name: Option<String>,
    /// Longer description, typically derived from the source identifier.
    pub description: Option<String>,
    /// Ordered point sequence, in source-file reference order.
    pub waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route name only if no name has been assigned yet (`name` tag).
    pub fn set_name_if_absent(&mut self, name: String) {
        if self.name.is_none() {
            self.name = Some(name);
        }
    }

    /// Unconditionally replace the route name (`name:en` tag).
    pub fn override_name(&mut self, name: String) {
        self.name = Some(name);
    }

    /// Append a waypoint copy to the end of the sequence.
    pub fn add_waypoint(&mut self, wpt: Waypoint) {
        self.waypoints.push(wpt);
    }
}
