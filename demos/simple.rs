use maze_runner::{MazeGrid, MazeSolver, RightHandSolver};

// In this example a path is found through a maze with shape
// #####
//     #
// # # #
// #    
// #####
// The entry is the open cell in the first column, the exit the open cell in the last one.
fn main() {
    let grid = MazeGrid::from_lines(["#####", "    #", "# # #", "#    ", "#####"]).unwrap();
    println!("{}", grid);
    let solution = RightHandSolver::new().solve(&grid).unwrap();
    println!("Steps taken:");
    for line in solution.trace() {
        println!("{}", line);
    }
    println!("Canonical path: {}", solution.canonical_path().unwrap());
}
