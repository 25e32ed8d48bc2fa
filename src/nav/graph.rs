//! # Navigation Graph
//!
//! Central owner of the waypoint and link arenas and the entry point for
//! every navigation query.
//!
//! The graph stores waypoints and links in dense slot arenas. Slots are never
//! reused, so iteration order is insertion order — nearest/farthest ties
//! resolve deterministically to the earliest-added waypoint. The structural
//! invariant is that every live link's endpoints are live waypoints; the
//! mutation API preserves it by refusing to remove a waypoint that still has
//! incident links.

use crate::{
    config, AStarSearch, Link, LinkId, NavError, NavResult, SearchOutcome, Vec2, Waypoint,
    WaypointId,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// The navigation graph: author-placed waypoints joined by weighted links.
///
/// # Examples
///
/// ```
/// use waygraph::{NavGraph, Vec2};
///
/// let mut graph = NavGraph::new();
/// let a = graph.add_waypoint(Vec2::new(0.0, 0.0), 1.0);
/// let b = graph.add_waypoint(Vec2::new(10.0, 0.0), 1.0);
/// graph.link(a, b, 1.0).unwrap();
///
/// let outcome = graph.find_path_between(a, b).unwrap();
/// let plan = outcome.route().expect("a and b are connected");
/// assert_eq!(plan.waypoints(), vec![a, b]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavGraph {
    waypoints: Vec<Option<Waypoint>>,
    links: Vec<Option<Link>>,
}

impl NavGraph {
    /// Creates an empty navigation graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a waypoint at `position` with the given arrival tolerance and
    /// returns its handle.
    pub fn add_waypoint(&mut self, position: Vec2, tolerance: f32) -> WaypointId {
        let id = WaypointId(self.waypoints.len() as u32);
        self.waypoints.push(Some(Waypoint::new(position, tolerance)));
        id
    }

    /// Whether `id` refers to a live waypoint.
    pub fn contains(&self, id: WaypointId) -> bool {
        self.get_waypoint(id).is_ok()
    }

    /// Looks up a live waypoint.
    pub fn get_waypoint(&self, id: WaypointId) -> NavResult<&Waypoint> {
        self.waypoints
            .get(id.0 as usize)
            .and_then(|slot| slot.as_ref())
            .ok_or(NavError::UnknownWaypoint(id))
    }

    /// Looks up a live link.
    pub fn get_link(&self, id: LinkId) -> NavResult<&Link> {
        self.links
            .get(id.0 as usize)
            .and_then(|slot| slot.as_ref())
            .ok_or(NavError::UnknownLink(id))
    }

    /// Number of live waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.iter().flatten().count()
    }

    /// Whether the graph has no live waypoints.
    pub fn is_empty(&self) -> bool {
        self.waypoints.iter().all(|slot| slot.is_none())
    }

    /// Number of live links.
    pub fn link_count(&self) -> usize {
        self.links.iter().flatten().count()
    }

    /// Handles of all live waypoints, in insertion order.
    pub fn waypoint_ids(&self) -> impl Iterator<Item = WaypointId> + '_ {
        self.waypoints
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| WaypointId(i as u32))
    }

    /// Removes a waypoint from the graph.
    ///
    /// Fails with [`NavError::LinkedWaypoint`] if any links are still
    /// incident on it; detach them with [`NavGraph::remove_link`] first.
    /// Removing while links dangle would leave the search walking edges into
    /// a dead slot, so this is surfaced at the point of misuse.
    pub fn remove_waypoint(&mut self, id: WaypointId) -> NavResult<Waypoint> {
        let waypoint = self.get_waypoint(id)?;
        if !waypoint.links().is_empty() {
            return Err(NavError::LinkedWaypoint(id));
        }
        // Slot checked live above.
        Ok(self.waypoints[id.0 as usize].take().unwrap())
    }

    /// Creates a link between two distinct waypoints with the given weight
    /// multiplier and registers it on both endpoints.
    pub fn link(&mut self, a: WaypointId, b: WaypointId, weight: f32) -> NavResult<LinkId> {
        if a == b {
            return Err(NavError::SelfLink(a));
        }
        if !(weight > 0.0) {
            return Err(NavError::InvalidWeight(weight));
        }
        self.get_waypoint(a)?;
        self.get_waypoint(b)?;

        let id = LinkId(self.links.len() as u32);
        self.links.push(Some(Link::new(id, a, b, weight)));
        // Both slots verified live above.
        self.waypoints[a.0 as usize].as_mut().unwrap().attach_link(id);
        self.waypoints[b.0 as usize].as_mut().unwrap().attach_link(id);
        Ok(id)
    }

    /// Creates a link with the default weight multiplier
    /// ([`config::DEFAULT_LINK_WEIGHT`]).
    pub fn link_default(&mut self, a: WaypointId, b: WaypointId) -> NavResult<LinkId> {
        self.link(a, b, config::DEFAULT_LINK_WEIGHT)
    }

    /// Removes a link, detaching it from both endpoints.
    pub fn remove_link(&mut self, id: LinkId) -> NavResult<Link> {
        let (a, b) = self.get_link(id)?.endpoints();
        if let Some(Some(wp)) = self.waypoints.get_mut(a.0 as usize) {
            wp.detach_link(id);
        }
        if let Some(Some(wp)) = self.waypoints.get_mut(b.0 as usize) {
            wp.detach_link(id);
        }
        // Slot checked live above.
        Ok(self.links[id.0 as usize].take().unwrap())
    }

    /// Finds the waypoint closest to `position`.
    ///
    /// Brute-force scan by squared distance; ties go to the
    /// earliest-added waypoint. Fails on an empty graph.
    pub fn find_closest(&self, position: Vec2) -> NavResult<WaypointId> {
        self.scan_by_distance(position, |candidate, best| candidate < best)
    }

    /// Finds the waypoint farthest from `position`.
    ///
    /// Same contract as [`NavGraph::find_closest`] with the comparison
    /// reversed.
    pub fn find_furthest(&self, position: Vec2) -> NavResult<WaypointId> {
        self.scan_by_distance(position, |candidate, best| candidate > best)
    }

    fn scan_by_distance(
        &self,
        position: Vec2,
        better: impl Fn(f32, f32) -> bool,
    ) -> NavResult<WaypointId> {
        let mut best: Option<(WaypointId, f32)> = None;
        for id in self.waypoint_ids() {
            let d = self.get_waypoint(id)?.position().distance_squared(position);
            match best {
                Some((_, best_d)) if !better(d, best_d) => {}
                _ => best = Some((id, d)),
            }
        }
        best.map(|(id, _)| id).ok_or(NavError::EmptyGraph)
    }

    /// Enumerates the neighbors of `waypoint`: for each incident link, the
    /// waypoint at the other end, paired with the link that reaches it.
    pub fn neighbors(&self, waypoint: WaypointId) -> NavResult<Vec<(WaypointId, LinkId)>> {
        let wp = self.get_waypoint(waypoint)?;
        let mut out = Vec::with_capacity(wp.links().len());
        for &link_id in wp.links() {
            let other = self.get_link(link_id)?.other(waypoint)?;
            out.push((other, link_id));
        }
        Ok(out)
    }

    /// Traversal cost of a link: its weight multiplier times the Euclidean
    /// distance between its endpoints. Symmetric in travel direction.
    pub fn link_cost(&self, id: LinkId) -> NavResult<f32> {
        let link = self.get_link(id)?;
        let (a, b) = link.endpoints();
        let pa = self.get_waypoint(a)?.position();
        let pb = self.get_waypoint(b)?.position();
        Ok(link.weight() * pa.distance(pb))
    }

    /// Finds a route between two world positions.
    ///
    /// Both positions snap to their nearest waypoints before searching.
    pub fn find_path(&self, from: Vec2, to: Vec2) -> NavResult<SearchOutcome> {
        let start = self.find_closest(from)?;
        let goal = self.find_closest(to)?;
        self.find_path_between(start, goal)
    }

    /// Finds a route from a waypoint to the waypoint nearest `to`.
    pub fn find_path_from(&self, start: WaypointId, to: Vec2) -> NavResult<SearchOutcome> {
        let goal = self.find_closest(to)?;
        self.find_path_between(start, goal)
    }

    /// Finds a route from the waypoint nearest `from` to a waypoint.
    pub fn find_path_to(&self, from: Vec2, goal: WaypointId) -> NavResult<SearchOutcome> {
        let start = self.find_closest(from)?;
        self.find_path_between(start, goal)
    }

    /// Finds a route between two waypoints.
    ///
    /// Runs a fresh A* search per call; an unreachable goal is reported as
    /// [`SearchOutcome::NoPath`], not an error.
    pub fn find_path_between(
        &self,
        start: WaypointId,
        goal: WaypointId,
    ) -> NavResult<SearchOutcome> {
        debug!("routing {start} -> {goal}");
        let mut search = AStarSearch::new(self);
        search.search(start, goal)
    }

    /// Checks the structural invariant that every live link connects two
    /// live waypoints. Intended for graphs loaded from external data.
    pub fn validate(&self) -> NavResult<()> {
        for slot in self.links.iter().flatten() {
            let (a, b) = slot.endpoints();
            self.get_waypoint(a)?;
            self.get_waypoint(b)?;
        }
        Ok(())
    }

    /// Serializes the graph to JSON for storage alongside level data.
    pub fn to_json(&self) -> NavResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a graph from JSON, validating the link invariant.
    pub fn from_json(json: &str) -> NavResult<Self> {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }
}
