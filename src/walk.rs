//! Bounded, destination-seeking 2-D random walk
//!
//! The simulator owns its generator and turns a sequence of draws into an
//! ordered trajectory of points inside a rectangle. Candidate steps that
//! leave the rectangle are rejected and redrawn; the walk ends early once a
//! step lands within tolerance of the destination.

use log::{debug, trace};
use serde::Serialize;

use crate::geometry::{Point, Rect};
use crate::rng::MidSquare;
use crate::DEFAULT_MAP_SIZE;

/// Per-axis tolerance for the destination-reached test.
const DEST_EPSILON: f64 = 1e-5;

/// Distribution governing the start pick and every step distance.
///
/// Fixed at construction; there is no invalid mode to reject at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepMode {
    /// Step distances are raw uniform draws in `[0, 1)`.
    Uniform,
    /// Step distances are absolute values of accepted standard-normal draws.
    Gaussian,
}

/// A random-walk simulation over a rectangle centered on the origin.
///
/// The walk exclusively owns its [`MidSquare`] generator; given the same
/// seed, mode, and geometry the produced trajectory is exactly
/// reproducible.
pub struct RandomWalk {
    mode: StepMode,
    bounds: Rect,
    destination: Point,
    start: Point,
    rng: MidSquare,
}

impl RandomWalk {
    /// Create a simulator with a 4x4 rectangle centered on the origin, the
    /// destination at the origin, and a randomly picked start point.
    pub fn new(mode: StepMode, seed: u64) -> Self {
        Self::with_geometry(
            mode,
            seed,
            DEFAULT_MAP_SIZE,
            DEFAULT_MAP_SIZE,
            Point::new(0.0, 0.0),
        )
    }

    /// Create a simulator over a `width` x `height` rectangle centered on
    /// the origin, with the given destination and a randomly picked start
    /// point.
    ///
    /// The start pick is rejection-sampled from the walk's distribution
    /// after the rectangle is fixed, so it always lies inside the bounds.
    /// In Gaussian mode the pick loops until a pair lands strictly inside
    /// the half-extents; the loop is uncapped and will not terminate if the
    /// generator state has collapsed to zero.
    pub fn with_geometry(
        mode: StepMode,
        seed: u64,
        width: f64,
        height: f64,
        destination: Point,
    ) -> Self {
        let mut rng = MidSquare::new(seed);
        let bounds = Rect::centered(width, height);
        let start = pick_start(mode, &bounds, &mut rng);
        debug!(
            "walk init: mode {:?}, seed {}, start ({:.4}, {:.4})",
            mode, seed, start.x, start.y
        );
        Self {
            mode,
            bounds,
            destination,
            start,
            rng,
        }
    }

    /// Run the walk for at most `steps` accepted steps.
    ///
    /// The returned trajectory begins with the start point and gains one
    /// point per accepted step, so its length is at most `steps + 1`. Every
    /// point lies inside the bounds. After each accepted step the new point
    /// is tested against the destination (per-axis tolerance of 1e-5 on
    /// both axes) and the walk ends early on a hit; the start point itself
    /// is never tested.
    ///
    /// A candidate that leaves the rectangle discards its distance, axis,
    /// and sign draws together and redraws all three. The retry loop is
    /// uncapped: degenerate geometry (for instance a start placed out of
    /// bounds through [`set_start`](Self::set_start)) can spin forever.
    pub fn walk(&mut self, steps: usize) -> Vec<Point> {
        let mut trajectory = Vec::with_capacity(steps + 1);
        trajectory.push(self.start);

        for step in 0..steps {
            let accepted = loop {
                let last = trajectory[trajectory.len() - 1];
                let d = self.step_distance();
                let horizontal = self.rng.next_binary() == 1;
                let sign = if self.rng.next_binary() == 1 { 1.0 } else { -1.0 };

                let candidate = if horizontal {
                    Point::new(last.x + d * sign, last.y)
                } else {
                    Point::new(last.x, last.y + d * sign)
                };

                if self.bounds.contains(candidate) {
                    break candidate;
                }
                trace!(
                    "step {}: candidate ({:.4}, {:.4}) out of bounds, redrawing",
                    step,
                    candidate.x,
                    candidate.y
                );
            };

            trajectory.push(accepted);

            if self.reached_destination(accepted) {
                debug!("destination reached after {} steps", step + 1);
                break;
            }
        }
        trajectory
    }

    /// The distribution mode fixed at construction.
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// The bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Horizontal extent of the bounds as `(min, max)`.
    pub fn x_range(&self) -> (f64, f64) {
        self.bounds.x_range()
    }

    /// Vertical extent of the bounds as `(min, max)`.
    pub fn y_range(&self) -> (f64, f64) {
        self.bounds.y_range()
    }

    /// The destination point.
    pub fn destination(&self) -> Point {
        self.destination
    }

    /// The start point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Replace the bounds with a `width` x `height` rectangle centered on
    /// the origin. The start and destination are not revalidated against
    /// the new rectangle.
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.bounds = Rect::centered(width, height);
    }

    /// Override the start point. No containment check is performed; a start
    /// outside the bounds makes the step retry loop in [`walk`](Self::walk)
    /// unable to accept any candidate.
    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }

    /// Override the destination point. No containment check is performed.
    pub fn set_destination(&mut self, destination: Point) {
        self.destination = destination;
    }

    fn reached_destination(&self, p: Point) -> bool {
        (p.x - self.destination.x).abs() < DEST_EPSILON
            && (p.y - self.destination.y).abs() < DEST_EPSILON
    }

    /// Draw the scalar distance for one step attempt.
    ///
    /// Uniform mode consumes one uniform draw. Gaussian mode draws pairs
    /// until one component has absolute value at most 1; the first
    /// component of the pair wins over the second, and a pair never yields
    /// more than one scalar even when both components qualify.
    fn step_distance(&mut self) -> f64 {
        match self.mode {
            StepMode::Uniform => self.rng.next_uniform(),
            StepMode::Gaussian => loop {
                let (first, second) = self.rng.next_gaussian_pair();
                if first.abs() <= 1.0 {
                    break first.abs();
                }
                if second.abs() <= 1.0 {
                    break second.abs();
                }
            },
        }
    }
}

/// Pick a start point inside `bounds` from the walk's distribution.
///
/// Uniform mode maps one uniform per axis affinely onto the rectangle.
/// Gaussian mode accepts the first pair whose components both lie strictly
/// inside the half-extents.
fn pick_start(mode: StepMode, bounds: &Rect, rng: &mut MidSquare) -> Point {
    match mode {
        StepMode::Uniform => Point::new(
            rng.next_uniform() * bounds.width() - bounds.max_x(),
            rng.next_uniform() * bounds.height() - bounds.max_y(),
        ),
        StepMode::Gaussian => loop {
            let (x, y) = rng.next_gaussian_pair();
            if x.abs() < bounds.max_x() && y.abs() < bounds.max_y() {
                break Point::new(x, y);
            }
            trace!("start pick ({:.4}, {:.4}) rejected", x, y);
        },
    }
}
