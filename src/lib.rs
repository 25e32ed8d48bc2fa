//! # Waygraph
//!
//! A waypoint navigation graph with an A* route planner for game agents.
//!
//! ## Architecture Overview
//!
//! Waygraph is built around a handful of small, composable pieces:
//!
//! - **NavGraph**: owns the waypoint and link arenas and answers all queries
//! - **Waypoint / Link**: author-placed nodes and weighted undirected edges
//! - **AStarSearch**: a per-query A* engine over the graph
//! - **RoutePlan**: the ordered, cursor-consumable result a moving agent follows
//!
//! Graphs are author-placed, not auto-generated: level setup adds waypoints,
//! links them, and hands the graph to agents. A query snaps arbitrary world
//! positions to their nearest waypoints and runs A* between them. An
//! unreachable goal is a normal outcome ([`SearchOutcome::NoPath`]), never an
//! error.
//!
//! ## Concurrency
//!
//! Searches are single-threaded, synchronous, and run to completion. Each
//! `find_path` call constructs a fresh search context, so sequential queries
//! never see stale state. Overlapping queries against one graph must be
//! serialized by the caller.

pub mod nav;
pub mod utils;

// Core module re-exports
pub use nav::*;
pub use utils::*;

// Explicit re-exports for commonly used types
pub use nav::{
    AStarSearch, Link, LinkId, NavGraph, RoutePlan, SearchOutcome, Waypoint, WaypointId,
};
pub use utils::Vec2;

/// Core error type for the waygraph crate.
#[derive(thiserror::Error, Debug)]
pub enum NavError {
    /// A query that needs at least one waypoint hit an empty graph
    #[error("navigation graph is empty")]
    EmptyGraph,

    /// A waypoint handle does not refer to a live waypoint
    #[error("unknown waypoint {0}")]
    UnknownWaypoint(WaypointId),

    /// A link handle does not refer to a live link
    #[error("unknown link {0}")]
    UnknownLink(LinkId),

    /// A link was asked for the neighbor of a waypoint it does not connect
    #[error("waypoint {waypoint} is not an endpoint of link {link}")]
    NotAnEndpoint { link: LinkId, waypoint: WaypointId },

    /// A link must connect two distinct waypoints
    #[error("cannot link waypoint {0} to itself")]
    SelfLink(WaypointId),

    /// Link weights must be positive
    #[error("link weight must be positive, got {0}")]
    InvalidWeight(f32),

    /// A waypoint with incident links cannot be removed
    #[error("waypoint {0} still has incident links; remove them first")]
    LinkedWaypoint(WaypointId),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type used throughout the waygraph codebase.
pub type NavResult<T> = Result<T, NavError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Navigation configuration constants.
pub mod config {
    /// Default weight multiplier applied to a link's Euclidean length
    pub const DEFAULT_LINK_WEIGHT: f32 = 5.0;
}
