//! # Waypoints
//!
//! Author-placed navigation nodes and the handles that identify them.
//!
//! Waypoints and links live in dense arenas owned by
//! [`NavGraph`](crate::NavGraph); the handle types here are indices into
//! those arenas. Handles are never reused after removal, so a stale handle
//! fails with a typed error instead of silently aliasing a new node.

use crate::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to a waypoint in a [`NavGraph`](crate::NavGraph).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WaypointId(pub(crate) u32);

impl std::fmt::Display for WaypointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "waypoint#{}", self.0)
    }
}

/// Handle to a link in a [`NavGraph`](crate::NavGraph).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LinkId(pub(crate) u32);

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "link#{}", self.0)
    }
}

/// A positioned node in the navigation graph.
///
/// A waypoint carries a world position, an arrival tolerance (the radius
/// within which an agent counts as having reached it), and the set of links
/// incident on it. Position is fixed at creation; repositioning a live graph
/// is not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    position: Vec2,
    tolerance: f32,
    links: Vec<LinkId>,
}

impl Waypoint {
    pub(crate) fn new(position: Vec2, tolerance: f32) -> Self {
        debug_assert!(tolerance >= 0.0, "arrival tolerance must be non-negative");
        Self {
            position,
            tolerance,
            links: Vec::new(),
        }
    }

    /// World position of this waypoint.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Arrival tolerance radius.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Links incident on this waypoint, in attachment order.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    pub(crate) fn attach_link(&mut self, link: LinkId) {
        self.links.push(link);
    }

    pub(crate) fn detach_link(&mut self, link: LinkId) {
        self.links.retain(|&l| l != link);
    }
}
