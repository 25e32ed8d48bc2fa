//! # Links
//!
//! Weighted undirected edges between pairs of waypoints.

use crate::{LinkId, NavError, NavResult, WaypointId};
use serde::{Deserialize, Serialize};

/// An undirected weighted edge between two distinct waypoints.
///
/// Traversal cost is the Euclidean distance between the endpoints multiplied
/// by `weight`, so cost is symmetric regardless of travel direction. The
/// default weight is [`config::DEFAULT_LINK_WEIGHT`](crate::config::DEFAULT_LINK_WEIGHT).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    id: LinkId,
    a: WaypointId,
    b: WaypointId,
    weight: f32,
}

impl Link {
    pub(crate) fn new(id: LinkId, a: WaypointId, b: WaypointId, weight: f32) -> Self {
        debug_assert!(a != b, "link endpoints must be distinct");
        debug_assert!(weight > 0.0, "link weight must be positive");
        Self { id, a, b, weight }
    }

    /// Handle of this link.
    pub fn id(&self) -> LinkId {
        self.id
    }

    /// Both endpoints, in binding order.
    pub fn endpoints(&self) -> (WaypointId, WaypointId) {
        (self.a, self.b)
    }

    /// Weight multiplier applied to the link's Euclidean length.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the endpoint that is not `waypoint`.
    ///
    /// Asking with a waypoint that is not an endpoint of this link is a
    /// misuse and fails with [`NavError::NotAnEndpoint`].
    pub fn other(&self, waypoint: WaypointId) -> NavResult<WaypointId> {
        if waypoint == self.a {
            Ok(self.b)
        } else if waypoint == self.b {
            Ok(self.a)
        } else {
            Err(NavError::NotAnEndpoint {
                link: self.id,
                waypoint,
            })
        }
    }

    /// Whether `waypoint` is one of this link's endpoints.
    pub fn connects(&self, waypoint: WaypointId) -> bool {
        waypoint == self.a || waypoint == self.b
    }
}
