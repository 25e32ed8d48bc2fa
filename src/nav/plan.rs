//! # Route Plans
//!
//! The ordered result of a successful search, consumed by a moving agent.
//!
//! A plan snapshots each waypoint's position and tolerance at reconstruction
//! time, so the agent can follow it without holding a borrow of the graph.
//! Waypoint positions are immutable after creation, so the snapshot cannot
//! go stale.

use crate::{Vec2, WaypointId};
use serde::{Deserialize, Serialize};

/// One stop along a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Waypoint this step passes through
    pub waypoint: WaypointId,
    /// Snapshotted world position of that waypoint
    pub position: Vec2,
    /// Snapshotted arrival tolerance
    pub tolerance: f32,
}

/// An ordered start-to-goal route with a consumption cursor.
///
/// The controller drives an agent toward
/// [`current_position`](RoutePlan::current_position) and polls
/// [`check_for_next_node`](RoutePlan::check_for_next_node) every tick; the
/// cursor advances one step each time the agent comes within the current
/// waypoint's tolerance. Polling is the sole advancement mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    steps: Vec<PlanStep>,
    cursor: usize,
    cost: f32,
}

impl RoutePlan {
    pub(crate) fn new(steps: Vec<PlanStep>, cost: f32) -> Self {
        debug_assert!(!steps.is_empty(), "a route plan has at least one step");
        Self {
            steps,
            cursor: 0,
            cost,
        }
    }

    /// Waypoints along the route, start first.
    pub fn waypoints(&self) -> Vec<WaypointId> {
        self.steps.iter().map(|step| step.waypoint).collect()
    }

    /// All steps, start first.
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Number of waypoints in the route.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the route has no steps. Never true for plans built by a
    /// search, which always contain at least start and goal.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total weighted cost of the route.
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Waypoint at the cursor, or `None` once the plan is exhausted.
    pub fn current_waypoint(&self) -> Option<WaypointId> {
        self.steps.get(self.cursor).map(|step| step.waypoint)
    }

    /// Position of the waypoint at the cursor, or `None` once exhausted.
    pub fn current_position(&self) -> Option<Vec2> {
        self.steps.get(self.cursor).map(|step| step.position)
    }

    /// Advances the cursor if the agent has arrived at the current waypoint.
    ///
    /// Returns `true` and moves to the next step when `agent_position` is
    /// within the current waypoint's tolerance; returns `false` otherwise,
    /// including once the plan is exhausted.
    pub fn check_for_next_node(&mut self, agent_position: Vec2) -> bool {
        let Some(step) = self.steps.get(self.cursor) else {
            return false;
        };
        if agent_position.distance(step.position) <= step.tolerance {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Whether the cursor has advanced past the final waypoint.
    pub fn at_end(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Rewinds the cursor to the first waypoint.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
