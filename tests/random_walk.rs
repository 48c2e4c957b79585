use std::io::Write;

use randwalk::{Point, RandomWalk, StepMode};
use serde_json::Value;

#[test]
fn test_zero_steps() {
    let mut walk = RandomWalk::new(StepMode::Uniform, 19890929);
    let start = walk.start();
    let trajectory = walk.walk(0);
    assert_eq!(trajectory, vec![start]);
}

#[test]
fn test_all_points_in_bounds() {
    for seed in [19890929u64, 0xDEAD_BEEF, 20190421, 987654321] {
        for mode in [StepMode::Uniform, StepMode::Gaussian] {
            let mut walk = RandomWalk::new(mode, seed);
            let bounds = walk.bounds();
            for p in walk.walk(300) {
                let (min_x, max_x) = bounds.x_range();
                let (min_y, max_y) = bounds.y_range();
                assert!(min_x <= p.x && p.x <= max_x, "seed {seed}: x escaped at {p:?}");
                assert!(min_y <= p.y && p.y <= max_y, "seed {seed}: y escaped at {p:?}");
            }
        }
    }
}

/// The destination test only runs after an appended step, never against the
/// start point, so a walk whose destination equals its start still moves.
#[test]
fn test_destination_at_start_does_not_end_walk() {
    for mode in [StepMode::Uniform, StepMode::Gaussian] {
        let mut walk = RandomWalk::new(mode, 19890929);
        let start = walk.start();
        walk.set_destination(start);
        let trajectory = walk.walk(5);
        assert_eq!(trajectory.len(), 6, "mode {mode:?} ended early");
    }
}

#[test]
fn test_custom_geometry_start_in_bounds() {
    let walk = RandomWalk::with_geometry(
        StepMode::Uniform,
        19890929,
        2.0,
        2.0,
        Point::new(0.0, 0.0),
    );
    assert_eq!(walk.x_range(), (-1.0, 1.0));
    assert_eq!(walk.y_range(), (-1.0, 1.0));
    assert!(walk.bounds().contains(walk.start()));
}

#[test]
fn test_trajectory_steps_move_one_axis() {
    let mut walk = RandomWalk::new(StepMode::Gaussian, 20190421);
    let trajectory = walk.walk(50);
    for pair in trajectory.windows(2) {
        let dx = (pair[1].x - pair[0].x).abs();
        let dy = (pair[1].y - pair[0].y).abs();
        assert!(
            dx == 0.0 || dy == 0.0,
            "step moved on both axes: {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_json_export_round_trip() {
    let mut walk = RandomWalk::new(StepMode::Uniform, 19890929);
    let trajectory = walk.walk(10);

    let json = serde_json::to_string(&trajectory).expect("trajectory serializes");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("trajectory.json");
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(json.as_bytes()).expect("write temp file");

    let raw = std::fs::read_to_string(&path).expect("read temp file");
    let parsed: Value = serde_json::from_str(&raw).expect("parse exported JSON");

    let points = parsed.as_array().expect("trajectory is an array");
    assert_eq!(points.len(), trajectory.len());
    for (value, point) in points.iter().zip(&trajectory) {
        assert_eq!(value["x"].as_f64(), Some(point.x));
        assert_eq!(value["y"].as_f64(), Some(point.y));
    }
}
