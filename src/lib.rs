//! # maze_runner
//!
//! Solves rectangular text mazes by
//! [wall following](https://en.wikipedia.org/wiki/Maze-solving_algorithm#Wall_follower),
//! keeping the right hand on the wall from the entry (the open cell in the first column) until
//! the exit (the open cell in the last column) is reached. Every move is recorded as `F`
//! (forward), `L` or `R` (quarter turns), and the result is reported in run-length encoded
//! canonical form such as `3F R 2F L F`.
//!
//! Connected components of the open cells are precomputed so that a maze whose exit cannot be
//! reached is rejected without walking it.
//!
//! ```
//! use maze_runner::{solve_maze, validate, Validation};
//!
//! let path = solve_maze(["####", "#   ", "  ##", "####"]).unwrap();
//! assert_eq!(path, "F L F R 2F");
//! assert_eq!(validate(&path, "F L F R 2F"), Validation::Match);
//! ```
pub mod error;
pub mod maze_grid;
pub mod observer;
pub mod orientation;
pub mod path;
pub mod reader;
pub mod solver;

pub use error::{MazeError, Result};
pub use maze_grid::{Cell, MazeGrid, Position, OPEN, WALL};
pub use observer::{LogObserver, NullObserver, StepObserver};
pub use orientation::Orientation;
pub use path::{encode, expand, validate, PathRecorder, Step, Validation};
pub use reader::{parse_maze, read_maze};
pub use solver::right_hand::{decide, Action, Navigator, NavigatorState, RightHandSolver};
pub use solver::{create_solver, MazeSolver, Solution};

/// Builds a grid from text rows and returns its canonical right-hand path.
pub fn solve_maze<I, S>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let grid = MazeGrid::from_lines(lines)?;
    RightHandSolver::new().canonical_path(&grid)
}
