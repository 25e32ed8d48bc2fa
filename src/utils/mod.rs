//! # Utilities Module
//!
//! Math primitives shared by the navigation graph and its consumers.

pub mod math;

pub use math::*;
