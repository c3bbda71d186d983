use maze_runner::{validate, MazeGrid, MazeSolver, RightHandSolver};
use maze_runner_benchmark::generate_maze;
use rand::{rngs::StdRng, SeedableRng};

// Generates a perfect maze, solves it and checks the result against itself.
fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = MazeGrid::from_lines(generate_maze(8, 12, &mut rng)).unwrap();
    println!("{}", grid);
    let path = RightHandSolver::new().canonical_path(&grid).unwrap();
    println!("{}", path);
    println!("{}", validate(&path, &path));
}
