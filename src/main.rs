//! Command line front end: solves a maze file, or checks a path against it.
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use maze_runner::{create_solver, read_maze, validate, MazeSolver, Result};

#[derive(Parser, Debug)]
#[command(version, about = "Right-hand rule maze runner", long_about = None)]
struct Args {
    /// Maze text file, '#' for walls and ' ' for passages
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Canonical path to check against the maze instead of printing one
    #[arg(short = 'p', long = "path")]
    path: Option<String>,

    /// Solving algorithm
    #[arg(short = 'm', long = "method", default_value = "righthand")]
    method: String,

    /// Print the step by step trace before the result
    #[arg(long)]
    trace: bool,

    /// Walk the maze even if its exit is not connected to the entry
    #[arg(long)]
    no_precheck: bool,
}

fn print_trace(trace: &[String]) {
    for line in trace {
        println!("{}", line);
    }
}

fn run(args: &Args) -> Result<()> {
    let grid = read_maze(&args.input)?;
    let solver = create_solver(&args.method, !args.no_precheck)?;
    info!("**** Computing path using {}", solver.name());
    let solution = match solver.solve(&grid) {
        Ok(solution) => solution,
        Err(e) => {
            match e.recorded() {
                Some(recorded) if args.trace => print_trace(recorded.trace()),
                _ => {}
            }
            return Err(e);
        }
    };
    if args.trace {
        print_trace(solution.trace());
    }
    let canonical = solution.canonical_path()?;
    match &args.path {
        Some(expected) => println!("{}", validate(&canonical, expected)),
        None => println!("{}", canonical),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    info!("** Starting Maze Runner");
    let result = run(&args);
    info!("** End of Maze Runner");
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
