//! # Navigation Module
//!
//! The navigation graph and its route planner.
//!
//! This module contains the building blocks of the pathfinding subsystem:
//! - Waypoints and the weighted links that connect them
//! - The graph that owns them and answers nearest/farthest and path queries
//! - The A* search engine that computes minimum-cost routes
//! - The route plan a moving agent consumes waypoint by waypoint

pub mod graph;
pub mod link;
pub mod plan;
pub mod search;
pub mod waypoint;

pub use graph::*;
pub use link::*;
pub use plan::*;
pub use search::*;
pub use waypoint::*;
