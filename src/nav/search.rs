//! # A* Search
//!
//! The route search engine over a [`NavGraph`].
//!
//! A search runs over per-query state only: a record arena holding one
//! [`SearchRecord`] per discovered waypoint, a waypoint-to-record index, and
//! a binary-heap open list ordered by fitness. The engine borrows the graph
//! immutably; structural data is read-only for the duration of a query.
//!
//! [`NavGraph::find_path`](crate::NavGraph::find_path) constructs a fresh
//! engine per call. The type is public for callers that want to run several
//! sequential queries against one graph borrow; every `search` call clears
//! the per-query state before touching the open list, so no state leaks
//! between queries either way.

use crate::{NavGraph, NavResult, PlanStep, RoutePlan, Vec2, WaypointId};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Per-waypoint bookkeeping for one query.
///
/// `g` is the accumulated weighted cost from the start along the best known
/// route, `h` the straight-line distance to the goal (admissible while every
/// link weight is at least 1), and `f = g + h` the priority key. The
/// predecessor is an index into the query's record arena; only the start
/// record has none.
#[derive(Debug, Clone)]
struct SearchRecord {
    waypoint: WaypointId,
    predecessor: Option<usize>,
    g: f32,
    h: f32,
    f: f32,
    closed: bool,
}

/// Entry in the open list.
///
/// Ordered so that `BinaryHeap` pops the lowest fitness first, with the
/// insertion sequence number breaking ties first-in-first-out. Entries are
/// not removed on improvement; superseded ones are recognized and skipped at
/// pop time by comparing against the record's current fitness.
#[derive(Debug, Clone)]
struct OpenEntry {
    f: f32,
    seq: u64,
    record: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Result of a route query.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// A minimum-cost route was found.
    Route(RoutePlan),
    /// Start and goal are the same waypoint; the agent is already there.
    AlreadyThere,
    /// The goal is not reachable from the start (or the expansion limit was
    /// hit). An expected outcome on graphs with disconnected components.
    NoPath,
}

impl SearchOutcome {
    /// Extracts the route plan, if one was found.
    pub fn route(self) -> Option<RoutePlan> {
        match self {
            SearchOutcome::Route(plan) => Some(plan),
            _ => None,
        }
    }

    /// Whether the query found no route.
    pub fn is_no_path(&self) -> bool {
        matches!(self, SearchOutcome::NoPath)
    }

    /// Whether the query was trivial (start equals goal).
    pub fn is_already_there(&self) -> bool {
        matches!(self, SearchOutcome::AlreadyThere)
    }
}

/// A* search engine over a navigation graph.
pub struct AStarSearch<'g> {
    graph: &'g NavGraph,
    records: Vec<SearchRecord>,
    by_waypoint: HashMap<WaypointId, usize>,
    open: BinaryHeap<OpenEntry>,
    seq: u64,
    goal_position: Vec2,
    expansion_limit: Option<usize>,
}

impl<'g> AStarSearch<'g> {
    /// Creates a search engine over `graph` with no expansion limit.
    pub fn new(graph: &'g NavGraph) -> Self {
        Self {
            graph,
            records: Vec::new(),
            by_waypoint: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
            goal_position: Vec2::origin(),
            expansion_limit: None,
        }
    }

    /// Creates a search engine that gives up after expanding `limit`
    /// waypoints, reporting [`SearchOutcome::NoPath`] when the cap is hit.
    /// Bounds worst-case query time on large or adversarial graphs.
    pub fn with_expansion_limit(graph: &'g NavGraph, limit: usize) -> Self {
        let mut search = Self::new(graph);
        search.expansion_limit = Some(limit);
        search
    }

    /// Computes a minimum-cost route from `start` to `goal`.
    ///
    /// Fails only on structural misuse (handles that are not live waypoints
    /// of this graph). Unreachable goals and trivial queries are values of
    /// [`SearchOutcome`], not errors.
    pub fn search(&mut self, start: WaypointId, goal: WaypointId) -> NavResult<SearchOutcome> {
        self.graph.get_waypoint(start)?;
        let goal_position = self.graph.get_waypoint(goal)?.position();

        if start == goal {
            debug!("search {start} -> {goal}: already there");
            return Ok(SearchOutcome::AlreadyThere);
        }

        self.reset(goal_position);

        let start_idx = self.discover(start, None, 0.0)?;
        self.push_open(start_idx);

        let mut expansions = 0usize;
        while let Some(entry) = self.open.pop() {
            let idx = entry.record;
            // Superseded or finalized entries are skipped, not removed.
            if self.records[idx].closed || entry.f > self.records[idx].f {
                continue;
            }

            if let Some(limit) = self.expansion_limit {
                if expansions >= limit {
                    debug!("search {start} -> {goal}: expansion limit {limit} hit");
                    return Ok(SearchOutcome::NoPath);
                }
            }
            expansions += 1;

            if self.records[idx].waypoint == goal {
                let plan = self.reconstruct(idx)?;
                debug!(
                    "search {start} -> {goal}: route with {} waypoints, cost {:.3}",
                    plan.len(),
                    plan.cost()
                );
                return Ok(SearchOutcome::Route(plan));
            }

            self.records[idx].closed = true;
            let current = self.records[idx].waypoint;
            let current_g = self.records[idx].g;
            trace!("expanding {current} (g = {current_g:.3})");

            for (neighbor, link) in self.graph.neighbors(current)? {
                let tentative_g = current_g + self.graph.link_cost(link)?;

                match self.by_waypoint.get(&neighbor).copied() {
                    None => {
                        // First discovery: always the best route so far.
                        let neighbor_idx = self.discover(neighbor, Some(idx), tentative_g)?;
                        self.push_open(neighbor_idx);
                    }
                    Some(neighbor_idx) => {
                        if self.records[neighbor_idx].closed {
                            continue;
                        }
                        if tentative_g < self.records[neighbor_idx].g {
                            self.relax(neighbor_idx, idx, tentative_g);
                            self.push_open(neighbor_idx);
                        }
                    }
                }
            }
        }

        debug!("search {start} -> {goal}: open list exhausted, no path");
        Ok(SearchOutcome::NoPath)
    }

    /// Clears all per-query state. Called at the start of every search.
    fn reset(&mut self, goal_position: Vec2) {
        self.records.clear();
        self.by_waypoint.clear();
        self.open.clear();
        self.seq = 0;
        self.goal_position = goal_position;
    }

    /// Creates the single record for a newly discovered waypoint.
    fn discover(
        &mut self,
        waypoint: WaypointId,
        predecessor: Option<usize>,
        g: f32,
    ) -> NavResult<usize> {
        debug_assert!(
            !self.by_waypoint.contains_key(&waypoint),
            "waypoint discovered twice in one query"
        );
        let h = self
            .graph
            .get_waypoint(waypoint)?
            .position()
            .distance(self.goal_position);
        let idx = self.records.len();
        self.records.push(SearchRecord {
            waypoint,
            predecessor,
            g,
            h,
            f: g + h,
            closed: false,
        });
        self.by_waypoint.insert(waypoint, idx);
        Ok(idx)
    }

    /// Re-routes a record through a cheaper predecessor, recomputing its
    /// cost-so-far and fitness. The heuristic is fixed per waypoint per
    /// query and does not change.
    fn relax(&mut self, idx: usize, new_predecessor: usize, tentative_g: f32) {
        let record = &mut self.records[idx];
        debug_assert!(tentative_g < record.g, "relax must improve cost-so-far");
        record.predecessor = Some(new_predecessor);
        record.g = tentative_g;
        record.f = tentative_g + record.h;
    }

    fn push_open(&mut self, idx: usize) {
        let entry = OpenEntry {
            f: self.records[idx].f,
            seq: self.seq,
            record: idx,
        };
        self.seq += 1;
        self.open.push(entry);
    }

    /// Walks the predecessor chain from the goal record back to the start
    /// and emits the plan in start-first order.
    fn reconstruct(&self, goal_idx: usize) -> NavResult<RoutePlan> {
        let mut steps = Vec::new();
        let mut cursor = Some(goal_idx);
        while let Some(idx) = cursor {
            let record = &self.records[idx];
            let waypoint = self.graph.get_waypoint(record.waypoint)?;
            steps.push(PlanStep {
                waypoint: record.waypoint,
                position: waypoint.position(),
                tolerance: waypoint.tolerance(),
            });
            cursor = record.predecessor;
        }
        steps.reverse();
        Ok(RoutePlan::new(steps, self.records[goal_idx].g))
    }
}
