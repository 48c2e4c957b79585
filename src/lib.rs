//! Deterministic pseudo-random variate generation and bounded random-walk
//! simulation.
//!
//! This crate provides a self-contained middle-square pseudo-random number
//! generator producing uniform, Gaussian, and binary variates, and a 2-D
//! random-walk simulator that consumes those variates to walk inside a
//! rectangular region until it reaches a destination or exhausts its step
//! budget.

#![warn(missing_docs)]

pub mod geometry;
pub mod rng;
pub mod walk;

/// Default width and height of the walk rectangle, centered on the origin
pub const DEFAULT_MAP_SIZE: f64 = 4.0;

/// Default number of steps for a walk run
pub const DEFAULT_STEPS: usize = 100;

pub use geometry::{Point, Rect};
pub use rng::MidSquare;
pub use walk::{RandomWalk, StepMode};
