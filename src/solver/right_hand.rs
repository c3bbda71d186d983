//! Right-hand wall following.
//!
//! The solver keeps its right hand on a wall: it turns right whenever the right side opens up,
//! goes straight while a wall is on its right, otherwise turns left, and only turns around in a
//! dead end. This finds *a* path on any maze whose entry and exit lie on the same wall, but it
//! is not a shortest path search: in open rooms it hugs the walls instead of crossing.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::{info, warn};

use crate::error::{MazeError, Result};
use crate::maze_grid::{MazeGrid, Position};
use crate::observer::StepObserver;
use crate::orientation::Orientation;
use crate::path::{PathRecorder, Step};
use crate::solver::{MazeSolver, Solution};

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Every walk starts at the entry facing into the maze.
pub const START_ORIENTATION: Orientation = Orientation::East;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    TurnAroundThenMove,
    TurnRightThenMove,
    TurnLeftThenMove,
    Blocked,
}

impl Action {
    pub fn describe(self) -> &'static str {
        match self {
            Action::MoveForward => "Moved forward.",
            Action::TurnAroundThenMove => "Turned around and moved forward.",
            Action::TurnRightThenMove => "Turned right and moved forward.",
            Action::TurnLeftThenMove => "Turned left and moved forward.",
            Action::Blocked => "Blocked.",
        }
    }
}

/// Position and facing of a walk in progress, together with everything it has recorded.
#[derive(Clone, Debug)]
pub struct NavigatorState {
    position: Position,
    orientation: Orientation,
    recorder: PathRecorder,
}

impl NavigatorState {
    pub fn new(position: Position, orientation: Orientation) -> NavigatorState {
        NavigatorState {
            position,
            orientation,
            recorder: PathRecorder::new(),
        }
    }
    pub fn at_entry(grid: &MazeGrid) -> NavigatorState {
        NavigatorState::new(grid.entry(), START_ORIENTATION)
    }

    pub fn position(&self) -> Position {
        self.position
    }
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    pub fn recorder(&self) -> &PathRecorder {
        &self.recorder
    }
    pub fn into_recorder(self) -> PathRecorder {
        self.recorder
    }

    fn turn(&mut self, rotation: fn(Orientation) -> Orientation, steps: &[Step]) {
        self.orientation = rotation(self.orientation);
        for &step in steps {
            self.recorder.record(step, self.position, self.orientation);
        }
    }
    fn advance(&mut self) {
        self.position = self.position.step(self.orientation);
        self.recorder
            .record(Step::Forward, self.position, self.orientation);
    }
}

fn open_towards(grid: &MazeGrid, state: &NavigatorState, orientation: Orientation) -> bool {
    grid.is_open_at(state.position.step(orientation))
}

/// Picks the next action for `state` without changing anything.
///
/// Going straight needs an open cell ahead *and* a wall on the right; an opening on the right
/// always takes precedence. Turning around requires walls ahead, left and right with an open
/// cell behind.
pub fn decide(grid: &MazeGrid, state: &NavigatorState) -> Action {
    let facing = state.orientation;
    let ahead = open_towards(grid, state, facing);
    let right = open_towards(grid, state, facing.right_of());
    let left = open_towards(grid, state, facing.left_of());
    let boxed_in = !ahead && !right && !left;
    if ahead && !right {
        Action::MoveForward
    } else if right {
        Action::TurnRightThenMove
    } else if left {
        Action::TurnLeftThenMove
    } else if boxed_in && open_towards(grid, state, facing.turn_around()) {
        Action::TurnAroundThenMove
    } else {
        Action::Blocked
    }
}

/// Drives a [NavigatorState] across a [MazeGrid] until the exit is reached.
pub struct Navigator<'a> {
    grid: &'a MazeGrid,
    state: NavigatorState,
    visited: FxIndexSet<(Position, Orientation)>,
}

impl<'a> Navigator<'a> {
    pub fn new(grid: &'a MazeGrid) -> Navigator<'a> {
        Navigator {
            grid,
            state: NavigatorState::at_entry(grid),
            visited: FxIndexSet::default(),
        }
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }
    pub fn at_exit(&self) -> bool {
        self.state.position == self.grid.exit()
    }
    pub fn decide(&self) -> Action {
        decide(self.grid, &self.state)
    }

    /// Applies `action`, recording every step it consists of. [Action::Blocked], or a move
    /// that would leave the open cells, ends the walk.
    fn apply(&mut self, action: Action) -> Result<()> {
        let heading = match action {
            Action::MoveForward => self.state.orientation,
            Action::TurnRightThenMove => self.state.orientation.turn_right(),
            Action::TurnLeftThenMove => self.state.orientation.turn_left(),
            Action::TurnAroundThenMove => self.state.orientation.turn_around(),
            Action::Blocked => return Err(self.abandon()),
        };
        if !open_towards(self.grid, &self.state, heading) {
            return Err(self.abandon());
        }
        match action {
            Action::MoveForward => {}
            Action::TurnRightThenMove => self.state.turn(Orientation::turn_right, &[Step::Right]),
            Action::TurnLeftThenMove => self.state.turn(Orientation::turn_left, &[Step::Left]),
            Action::TurnAroundThenMove => self
                .state
                .turn(Orientation::turn_around, &[Step::Right, Step::Right]),
            Action::Blocked => {}
        }
        self.state.advance();
        Ok(())
    }

    /// Decides and applies one action. The walk is deterministic, so deciding twice from the
    /// same position and facing means it would circle forever.
    pub fn step<O>(&mut self, observer: &mut O) -> Result<Action>
    where
        O: StepObserver + ?Sized,
    {
        let key = (self.state.position, self.state.orientation);
        if !self.visited.insert(key) {
            warn!(
                "Revisited {} facing {} after {} decisions",
                key.0,
                key.1,
                self.visited.len()
            );
            return Err(self.abandon());
        }
        let action = self.decide();
        self.apply(action)?;
        observer.on_step(action, &self.state);
        Ok(action)
    }

    pub fn run<O>(mut self, observer: &mut O) -> Result<NavigatorState>
    where
        O: StepObserver + ?Sized,
    {
        while !self.at_exit() {
            self.step(observer)?;
        }
        observer.on_finish(&self.state);
        Ok(self.state)
    }

    fn abandon(&mut self) -> MazeError {
        warn!(
            "No path found: stuck at {} facing {}",
            self.state.position, self.state.orientation
        );
        MazeError::NoPathFound {
            position: self.state.position,
            orientation: self.state.orientation,
            recorded: Box::new(std::mem::take(&mut self.state.recorder)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RightHandSolver {
    /// Refuse mazes whose exit lies on a different connected component than the entry
    /// before taking a single step.
    pub check_reachability: bool,
}

impl RightHandSolver {
    pub fn new() -> RightHandSolver {
        RightHandSolver {
            check_reachability: true,
        }
    }
}

impl Default for RightHandSolver {
    fn default() -> Self {
        RightHandSolver::new()
    }
}

impl MazeSolver for RightHandSolver {
    fn name(&self) -> &'static str {
        "righthand"
    }

    fn solve_observed(
        &self,
        grid: &MazeGrid,
        observer: &mut dyn StepObserver,
    ) -> Result<Solution> {
        let entry = grid.entry();
        let exit = grid.exit();
        if self.check_reachability {
            if grid.unreachable(&entry, &exit) {
                info!("{} is not reachable from {}", exit, entry);
                return Err(MazeError::NoPathFound {
                    position: entry,
                    orientation: START_ORIENTATION,
                    recorded: Box::default(),
                });
            }
            info!("{} is reachable from {}, computing path", exit, entry);
        }
        Navigator::new(grid).run(observer).map(Solution::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NullObserver;

    fn grid(lines: &[&str]) -> MazeGrid {
        MazeGrid::from_lines(lines).unwrap()
    }

    fn walk(lines: &[&str]) -> Result<NavigatorState> {
        Navigator::new(&grid(lines)).run(&mut NullObserver)
    }

    fn facing(row: i32, col: i32, orientation: Orientation) -> NavigatorState {
        NavigatorState::new(Position::new(row, col), orientation)
    }

    #[test]
    fn straight_ahead_needs_a_wall_on_the_right() {
        let g = grid(&["#####", "     ", "#####"]);
        assert_eq!(
            decide(&g, &facing(1, 1, Orientation::East)),
            Action::MoveForward
        );
        // Same corridor walked westwards: the right hand is now on the upper wall.
        assert_eq!(
            decide(&g, &facing(1, 3, Orientation::West)),
            Action::MoveForward
        );
    }

    #[test]
    fn an_opening_on_the_right_wins_over_straight_ahead() {
        let g = grid(&["#####", "     ", "## ##", "#####"]);
        assert_eq!(
            decide(&g, &facing(1, 2, Orientation::East)),
            Action::TurnRightThenMove
        );
        assert_eq!(
            decide(&g, &facing(1, 2, Orientation::West)),
            Action::MoveForward
        );
    }

    #[test]
    fn left_then_about_face_then_blocked() {
        let g = grid(&["## # ", "   # ", "#####"]);
        assert_eq!(
            decide(&g, &facing(1, 2, Orientation::East)),
            Action::TurnLeftThenMove
        );
        // The top border counts as a wall.
        assert_eq!(
            decide(&g, &facing(0, 2, Orientation::North)),
            Action::TurnAroundThenMove
        );
        let dead_end = grid(&["#####", "   # ", "#####"]);
        assert_eq!(
            decide(&dead_end, &facing(1, 2, Orientation::East)),
            Action::TurnAroundThenMove
        );
        let cell = grid(&["###", " # ", "###"]);
        assert_eq!(
            decide(&cell, &facing(1, 0, Orientation::East)),
            Action::Blocked
        );
    }

    #[test]
    fn walks_a_straight_corridor() {
        let state = walk(&["####", "####", "    ", "####", "####"]).unwrap();
        assert_eq!(state.position(), Position::new(2, 3));
        assert_eq!(state.recorder().encode().unwrap(), "3F");
    }

    #[test]
    fn follows_turns() {
        let state = walk(&["####", "#   ", "  ##", "####"]).unwrap();
        assert_eq!(state.recorder().raw_string(), "FLFRFF");
        assert_eq!(state.recorder().encode().unwrap(), "F L F R 2F");
        assert_eq!(
            state.recorder().trace(),
            [
                "Position: (2, 1), Direction: F",
                "Position: (2, 1), Direction: L",
                "Position: (1, 1), Direction: F",
                "Position: (1, 1), Direction: R",
                "Position: (1, 2), Direction: F",
                "Position: (1, 3), Direction: F",
            ]
        );
        assert_eq!(state.orientation(), Orientation::East);
    }

    #[test]
    fn about_face_is_two_right_turns() {
        let state = walk(&["####", "#   ", "# ##", "   #", "####"]).unwrap();
        assert_eq!(state.recorder().raw_string(), "FFRRFRFFRFF");
        assert_eq!(state.recorder().encode().unwrap(), "2F 2R F R 2F R 2F");
        // The second half of the about-face does not change state and is not traced.
        assert_eq!(state.recorder().trace().len(), 10);
        assert_eq!(state.recorder().trace()[2], "Position: (3, 2), Direction: R");
        assert_eq!(state.recorder().trace()[3], "Position: (3, 1), Direction: F");
    }

    #[test]
    fn prefers_the_right_hand_branch_over_the_shortcut() {
        let state = walk(&["#####", "#####", "     ", "#   #", "#####"]).unwrap();
        assert_eq!(
            state.recorder().encode().unwrap(),
            "F R F L 2F L F R F"
        );
    }

    #[test]
    fn hugs_the_walls_of_an_open_room() {
        let state = walk(&["     ", "     ", "     "]).unwrap();
        assert_eq!(state.recorder().encode().unwrap(), "R 2F L 4F L 2F");
    }

    #[test]
    fn entry_on_the_exit_needs_no_steps() {
        let state = walk(&["#", " ", "#"]).unwrap();
        assert_eq!(state.position(), Position::new(1, 0));
        assert!(state.recorder().is_empty());
    }

    #[test]
    fn boxed_in_entry_is_blocked() {
        match walk(&["###", " # ", "###"]) {
            Err(MazeError::NoPathFound {
                position,
                orientation,
                recorded,
            }) => {
                assert_eq!(position, Position::new(1, 0));
                assert_eq!(orientation, Orientation::East);
                assert!(recorded.is_empty());
            }
            other => panic!("expected NoPathFound, got {:?}", other),
        }
    }

    #[test]
    fn moves_into_walls_are_refused() {
        let g = grid(&["# ", "  "]);
        let mut navigator = Navigator::new(&g);
        navigator.apply(Action::MoveForward).unwrap();
        assert_eq!(navigator.state().position(), Position::new(1, 1));
        assert_eq!(navigator.state().recorder().raw_string(), "F");
        // From the entry at (1, 0) facing east only the cell ahead is open.
        for action in [
            Action::TurnRightThenMove,
            Action::TurnLeftThenMove,
            Action::TurnAroundThenMove,
        ] {
            let mut navigator = Navigator::new(&g);
            match navigator.apply(action) {
                Err(MazeError::NoPathFound {
                    position,
                    orientation,
                    recorded,
                }) => {
                    assert_eq!(position, Position::new(1, 0));
                    assert_eq!(orientation, Orientation::East);
                    assert!(recorded.is_empty());
                }
                other => panic!("{:?} should be refused, got {:?}", action, other),
            }
        }
    }

    #[test]
    fn circling_walk_keeps_its_partial_trace() {
        match walk(&["####", "  # ", "####"]) {
            Err(MazeError::NoPathFound {
                position,
                orientation,
                recorded,
            }) => {
                assert_eq!(position, Position::new(1, 1));
                assert_eq!(orientation, Orientation::East);
                assert_eq!(recorded.raw_string(), "FRRFRRF");
                assert_eq!(recorded.trace().len(), 5);
            }
            other => panic!("expected NoPathFound, got {:?}", other),
        }
    }

    #[test]
    fn precheck_refuses_unreachable_exits() {
        let g = grid(&["####", "  # ", "####"]);
        let mut steps = 0;
        let mut count = |_: Action, _: &NavigatorState| steps += 1;
        let result = RightHandSolver::new().solve_observed(&g, &mut count);
        assert!(matches!(result, Err(MazeError::NoPathFound { .. })));
        assert_eq!(steps, 0);

        let solver = RightHandSolver {
            check_reachability: false,
        };
        let mut steps = 0;
        let mut count = |_: Action, _: &NavigatorState| steps += 1;
        let result = solver.solve_observed(&g, &mut count);
        assert!(matches!(result, Err(MazeError::NoPathFound { .. })));
        assert_eq!(steps, 3);
    }

    #[test]
    fn observer_sees_every_action() {
        let g = grid(&["####", "#   ", "# ##", "   #", "####"]);
        let mut actions = vec![];
        let mut collect = |action: Action, _: &NavigatorState| actions.push(action);
        let solution = RightHandSolver::new()
            .solve_observed(&g, &mut collect)
            .unwrap();
        assert_eq!(
            actions,
            [
                Action::MoveForward,
                Action::MoveForward,
                Action::TurnAroundThenMove,
                Action::TurnRightThenMove,
                Action::MoveForward,
                Action::TurnRightThenMove,
                Action::MoveForward,
            ]
        );
        assert_eq!(solution.position, g.exit());
    }
}
