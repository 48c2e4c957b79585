//! Text reporters for generated variates and finished trajectories.

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use randwalk::{MidSquare, Point, RandomWalk, Rect, StepMode};

/// Number of decile buckets in the comparison histogram
const BUCKETS: usize = 10;

/// Print `count` uniform variates, one per line.
pub fn print_uniform(rng: &mut MidSquare, count: usize) {
    println!("Uniform-distributed Random Numbers");
    println!("x");
    for _ in 0..count {
        println!("{:.10}", rng.next_uniform());
    }
}

/// Print `count / 2` Gaussian pairs as two right-aligned columns.
pub fn print_gaussian(rng: &mut MidSquare, count: usize) {
    println!("Gaussian-distributed Random Numbers");
    println!("{:>10}  {:>10}", "y1", "y2");
    for _ in 0..count / 2 {
        let (y1, y2) = rng.next_gaussian_pair();
        println!("{:>10.6}  {:>10.6}", y1, y2);
    }
}

/// Print `count` binary variates as a two-column ledger, zeros on the left
/// and ones on the right.
pub fn print_binary(rng: &mut MidSquare, count: usize) {
    println!("Binary-distributed Random Numbers");
    println!("Bin0\tBin1");
    for _ in 0..count {
        if rng.next_binary() == 1 {
            println!("\t1");
        } else {
            println!("0\t");
        }
    }
}

/// Print decile histograms of `count` uniform draws from the middle-square
/// generator (seeded) and from the rand crate's standard generator
/// (entropy-seeded), for side-by-side comparison.
pub fn print_comparison(seed: u64, count: usize) {
    let mut ours = MidSquare::new(seed);
    let mut theirs = StdRng::from_entropy();

    let mut our_hist = [0usize; BUCKETS];
    let mut their_hist = [0usize; BUCKETS];

    for _ in 0..count {
        our_hist[bucket(ours.next_uniform())] += 1;
        their_hist[bucket(theirs.gen::<f64>())] += 1;
    }

    println!("Middle-square PRNG distribution from 0.0 to 0.9");
    print_histogram(&our_hist);
    println!();
    println!("rand StdRng distribution from 0.0 to 0.9");
    print_histogram(&their_hist);
}

fn bucket(v: f64) -> usize {
    ((v * BUCKETS as f64) as usize).min(BUCKETS - 1)
}

fn print_histogram(hist: &[usize; BUCKETS]) {
    for i in 0..BUCKETS {
        print!(".{}\t", i);
    }
    println!();
    for count in hist {
        print!("{}\t", count);
    }
    println!();
}

/// Print a finished trajectory as an x/y table at fixed 3-decimal precision.
pub fn print_trajectory(trajectory: &[Point]) {
    println!("x\ty");
    for p in trajectory {
        println!("{:.3}\t{:.3}", p.x, p.y);
    }
}

/// Serialized record of a finished walk run.
#[derive(Serialize)]
struct WalkRecord<'a> {
    mode: StepMode,
    seed: u64,
    bounds: Rect,
    start: Point,
    destination: Point,
    trajectory: &'a [Point],
}

/// Write a walk record to `path` as pretty-printed JSON.
pub fn write_json(path: &Path, seed: u64, walk: &RandomWalk, trajectory: &[Point]) -> Result<()> {
    let record = WalkRecord {
        mode: walk.mode(),
        seed,
        bounds: walk.bounds(),
        start: walk.start(),
        destination: walk.destination(),
        trajectory,
    };

    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| anyhow!("Failed to serialize walk record: {}", e))?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| anyhow!("Failed to create '{}': {}", path.display(), e))?;
    file.write_all(json.as_bytes())
        .map_err(|e| anyhow!("Failed to write '{}': {}", path.display(), e))?;

    Ok(())
}
