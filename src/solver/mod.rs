use crate::{
    error::{MazeError, Result},
    maze_grid::{MazeGrid, Position},
    observer::{LogObserver, StepObserver},
    orientation::Orientation,
    path::PathRecorder,
};

pub mod right_hand;

use right_hand::{NavigatorState, RightHandSolver};

/// Outcome of a successful solve.
#[derive(Clone, Debug)]
pub struct Solution {
    pub position: Position,
    pub orientation: Orientation,
    pub recorder: PathRecorder,
}

impl Solution {
    /// The run-length encoded path, e.g. `F L F R 2F`. Fails with [MazeError::EmptyPath] when
    /// the entry already is the exit.
    pub fn canonical_path(&self) -> Result<String> {
        self.recorder.encode()
    }
    pub fn raw_sequence(&self) -> &[char] {
        self.recorder.raw_sequence()
    }
    pub fn trace(&self) -> &[String] {
        self.recorder.trace()
    }
}

impl From<NavigatorState> for Solution {
    fn from(state: NavigatorState) -> Self {
        Solution {
            position: state.position(),
            orientation: state.orientation(),
            recorder: state.into_recorder(),
        }
    }
}

pub trait MazeSolver {
    /// Name under which [create_solver] knows this solver.
    fn name(&self) -> &'static str;

    fn solve_observed(&self, grid: &MazeGrid, observer: &mut dyn StepObserver)
        -> Result<Solution>;

    /// Solves `grid`, reporting every step to the `log` facade.
    fn solve(&self, grid: &MazeGrid) -> Result<Solution> {
        self.solve_observed(grid, &mut LogObserver)
    }

    fn canonical_path(&self, grid: &MazeGrid) -> Result<String> {
        self.solve(grid)?.canonical_path()
    }
}

/// Looks up a solver by name. An empty name selects the right-hand solver.
pub fn create_solver(method: &str, check_reachability: bool) -> Result<Box<dyn MazeSolver>> {
    if method.is_empty() || method.eq_ignore_ascii_case("righthand") {
        Ok(Box::new(RightHandSolver { check_reachability }))
    } else {
        Err(MazeError::UnknownMethod(method.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_knows_the_right_hand_solver() {
        for method in ["", "righthand", "RightHand"] {
            let solver = create_solver(method, true).unwrap();
            assert_eq!(solver.name(), "righthand");
        }
        assert!(matches!(
            create_solver("bfs", true),
            Err(MazeError::UnknownMethod(m)) if m == "bfs"
        ));
    }

    #[test]
    fn solution_exposes_the_canonical_path() {
        let grid = MazeGrid::from_lines(["####", "#   ", "  ##", "####"]).unwrap();
        let solver = create_solver("righthand", true).unwrap();
        let solution = solver.solve(&grid).unwrap();
        assert_eq!(solution.position, grid.exit());
        assert_eq!(solution.raw_sequence().len(), 6);
        assert_eq!(solution.trace().len(), 6);
        assert_eq!(solution.canonical_path().unwrap(), "F L F R 2F");
        assert_eq!(solver.canonical_path(&grid).unwrap(), "F L F R 2F");
    }

    #[test]
    fn single_column_maze_has_nothing_to_encode() {
        let grid = MazeGrid::from_lines([" "]).unwrap();
        let solution = RightHandSolver::new().solve(&grid).unwrap();
        assert!(matches!(
            solution.canonical_path(),
            Err(MazeError::EmptyPath)
        ));
    }
}
