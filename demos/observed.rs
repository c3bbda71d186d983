use maze_runner::{Action, MazeGrid, MazeSolver, NavigatorState, RightHandSolver};

// Counts the kinds of actions taken while solving a maze with a dead end.
fn main() {
    let grid = MazeGrid::from_lines(["####", "#   ", "# ##", "   #", "####"]).unwrap();
    let mut turns = 0;
    let mut about_faces = 0;
    let mut observer = |action: Action, state: &NavigatorState| {
        match action {
            Action::TurnRightThenMove | Action::TurnLeftThenMove => turns += 1,
            Action::TurnAroundThenMove => about_faces += 1,
            _ => {}
        }
        println!(
            "{:<34} now at {} facing {}",
            action.describe(),
            state.position(),
            state.orientation()
        );
    };
    let solution = RightHandSolver::new()
        .solve_observed(&grid, &mut observer)
        .unwrap();
    println!("{turns} turns, {about_faces} about-faces");
    println!("Canonical path: {}", solution.canonical_path().unwrap());
}
