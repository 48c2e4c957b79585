use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use randwalk::{MidSquare, Point, RandomWalk, StepMode};

mod plot;

mod report;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Uniform-distributed start pick and step distances
    Uniform,
    /// Gaussian-distributed start pick and step distances
    Gaussian,
}

impl From<ModeArg> for StepMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Uniform => StepMode::Uniform,
            ModeArg::Gaussian => StepMode::Gaussian,
        }
    }
}

/// Generate pseudo-random variates and run bounded random-walk simulations
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the generator (defaults to the current UNIX time)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a table of uniform-distributed variates
    Uniform {
        /// Number of variates to print
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
    /// Print a table of Gaussian-distributed variate pairs
    Gaussian {
        /// Number of variates to print (two per generated pair)
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
    /// Print a table of binary variates
    Binary {
        /// Number of variates to print
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
    /// Compare the decile histogram of this generator against the rand crate
    Compare {
        /// Number of variates to draw from each generator
        #[arg(long, default_value_t = 10000)]
        count: usize,
    },
    /// Run a random walk and print its trajectory
    Walk {
        /// Distribution for the start pick and step distances
        #[arg(long, value_enum, default_value_t = ModeArg::Uniform)]
        mode: ModeArg,

        /// Maximum number of accepted steps
        #[arg(long, default_value_t = randwalk::DEFAULT_STEPS)]
        steps: usize,

        /// Width of the walk rectangle
        #[arg(long, default_value_t = randwalk::DEFAULT_MAP_SIZE)]
        width: f64,

        /// Height of the walk rectangle
        #[arg(long, default_value_t = randwalk::DEFAULT_MAP_SIZE)]
        height: f64,

        /// X coordinate of the destination
        #[arg(long, default_value_t = 0.0)]
        dest_x: f64,

        /// Y coordinate of the destination
        #[arg(long, default_value_t = 0.0)]
        dest_y: f64,

        /// Render the trajectory as a character grid
        #[arg(long)]
        plot: bool,

        /// Write the walk record to a JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(time_seed);
    info!("using seed {}", seed);

    match args.command {
        Commands::Uniform { count } => {
            report::print_uniform(&mut MidSquare::new(seed), count);
        }
        Commands::Gaussian { count } => {
            report::print_gaussian(&mut MidSquare::new(seed), count);
        }
        Commands::Binary { count } => {
            report::print_binary(&mut MidSquare::new(seed), count);
        }
        Commands::Compare { count } => {
            report::print_comparison(seed, count);
        }
        Commands::Walk {
            mode,
            steps,
            width,
            height,
            dest_x,
            dest_y,
            plot,
            json,
        } => {
            if width <= 0.0 || height <= 0.0 {
                eprintln!(
                    "Error: walk rectangle must have positive area (got {} x {})",
                    width, height
                );
                std::process::exit(1);
            }

            let mode = StepMode::from(mode);
            let mut walk =
                RandomWalk::with_geometry(mode, seed, width, height, Point::new(dest_x, dest_y));

            let trajectory = walk.walk(steps);

            if plot {
                print!("{}", plot::render(&trajectory, &walk));
            }
            report::print_trajectory(&trajectory);

            if let Some(path) = json {
                report::write_json(&path, seed, &walk, &trajectory).unwrap_or_else(|e| {
                    eprintln!("Error writing '{}': {}", path.display(), e);
                    std::process::exit(1);
                });
            }
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
