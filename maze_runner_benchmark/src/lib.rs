use csv::ReaderBuilder;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One row of `scenarios.csv`: a maze under `mazes/` and its expected canonical path.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub expected: String,
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: String,
    pub lines: Vec<String>,
    pub expected: String,
}

fn root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf()
}

fn load_maze(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Could not read maze file")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn load_scenarios() -> Vec<Scenario> {
    let file = File::open(root().join("scenarios.csv")).expect("Could not open scenario file");
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    csv_reader
        .deserialize()
        .map(|result| result.expect("Could not parse scenario record"))
        .collect()
}

/// Names of all mazes under `mazes/`, without the `.txt` extension.
pub fn get_maze_names() -> Vec<String> {
    let mut names = Vec::new();
    for entry in WalkDir::new(root().join("mazes")).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "txt") {
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .expect("Maze file name is not valid UTF-8");
            names.push(name.to_owned());
        }
    }
    names
}

pub fn get_maze(name: &str) -> Vec<String> {
    if get_maze_names().iter().any(|n| n == name) {
        load_maze(&root().join("mazes").join(format!("{name}.txt")))
    } else {
        panic!("Could not load maze {name}!");
    }
}

/// Every scenario paired with its maze text.
pub fn get_fixtures() -> Vec<Fixture> {
    load_scenarios()
        .into_iter()
        .map(|Scenario { name, expected }| Fixture {
            lines: get_maze(&name),
            name,
            expected,
        })
        .collect()
}

/// Generates a perfect maze (exactly one route between any two cells) of `rows` x `cols`
/// rooms with a recursive backtracker. Rooms sit on odd coordinates of a
/// `(2 * rows + 1) x (2 * cols + 1)` text grid; the entry and exit are openings in the left
/// and right border on random room rows.
pub fn generate_maze<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Vec<String> {
    assert!(rows > 0 && cols > 0);
    let (h, w) = (2 * rows + 1, 2 * cols + 1);
    let mut grid = vec![vec!['#'; w]; h];
    let mut visited = vec![vec![false; cols]; rows];
    let mut stack = vec![(0usize, 0usize)];
    visited[0][0] = true;
    grid[1][1] = ' ';
    while let Some(&(r, c)) = stack.last() {
        let mut unvisited = Vec::with_capacity(4);
        if r > 0 && !visited[r - 1][c] {
            unvisited.push((r - 1, c));
        }
        if c + 1 < cols && !visited[r][c + 1] {
            unvisited.push((r, c + 1));
        }
        if r + 1 < rows && !visited[r + 1][c] {
            unvisited.push((r + 1, c));
        }
        if c > 0 && !visited[r][c - 1] {
            unvisited.push((r, c - 1));
        }
        match unvisited.choose(rng) {
            Some(&(nr, nc)) => {
                visited[nr][nc] = true;
                // Knock out the wall between the two rooms.
                grid[r + nr + 1][c + nc + 1] = ' ';
                grid[2 * nr + 1][2 * nc + 1] = ' ';
                stack.push((nr, nc));
            }
            None => {
                stack.pop();
            }
        }
    }
    grid[2 * rng.gen_range(0..rows) + 1][0] = ' ';
    grid[2 * rng.gen_range(0..rows) + 1][w - 1] = ' ';
    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}
