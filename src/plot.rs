//! Character-grid rendering of a finished walk trajectory.

use randwalk::{Point, RandomWalk, StepMode};

const GRID_WIDTH: usize = 61;
const GRID_HEIGHT: usize = 25;

/// Render the trajectory onto a character grid spanning the walk's bounds.
///
/// Visited cells are marked `*`, with the start, destination, and end point
/// overlaid as `S`, `D`, and `E`. The zero axes are drawn where they cross
/// the rectangle.
pub fn render(trajectory: &[Point], walk: &RandomWalk) -> String {
    let (min_x, max_x) = walk.x_range();
    let (min_y, max_y) = walk.y_range();

    let mut grid = [[' '; GRID_WIDTH]; GRID_HEIGHT];

    let col = |x: f64| scale(x, min_x, max_x, GRID_WIDTH);
    // row 0 is the top of the grid, so the y axis is flipped
    let row = |y: f64| GRID_HEIGHT - 1 - scale(y, min_y, max_y, GRID_HEIGHT);

    if min_y <= 0.0 && 0.0 <= max_y {
        let r = row(0.0);
        for cell in grid[r].iter_mut() {
            *cell = '-';
        }
    }
    if min_x <= 0.0 && 0.0 <= max_x {
        let c = col(0.0);
        for line in grid.iter_mut() {
            line[c] = if line[c] == '-' { '+' } else { '|' };
        }
    }

    for p in trajectory {
        grid[row(p.y)][col(p.x)] = '*';
    }

    let destination = walk.destination();
    grid[row(destination.y)][col(destination.x)] = 'D';
    if let Some(first) = trajectory.first() {
        grid[row(first.y)][col(first.x)] = 'S';
    }
    if let Some(last) = trajectory.last() {
        grid[row(last.y)][col(last.x)] = 'E';
    }

    let title = match walk.mode() {
        StepMode::Uniform => "Random Walk With Uniform-distributed Random Step Distance",
        StepMode::Gaussian => "Random Walk With Gaussian-distributed Random Step Distance",
    };

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push('+');
    out.push_str(&"-".repeat(GRID_WIDTH));
    out.push_str("+\n");
    for line in &grid {
        out.push('|');
        out.extend(line.iter());
        out.push_str("|\n");
    }
    out.push('+');
    out.push_str(&"-".repeat(GRID_WIDTH));
    out.push_str("+\n");
    out.push_str("S = start, D = destination, E = end, * = visited\n");
    out
}

/// Map `v` from `[min, max]` onto a grid index in `[0, cells - 1]`.
fn scale(v: f64, min: f64, max: f64, cells: usize) -> usize {
    let t = ((v - min) / (max - min)).clamp(0.0, 1.0);
    ((t * (cells - 1) as f64).round() as usize).min(cells - 1)
}
