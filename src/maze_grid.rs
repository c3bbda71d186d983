use core::fmt;

use log::info;
use petgraph::unionfind::UnionFind;

use crate::error::{MazeError, Result};
use crate::orientation::Orientation;

/// Marker for a wall in maze text.
pub const WALL: char = '#';
/// Marker for an open passage in maze text.
pub const OPEN: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            WALL => Some(Cell::Wall),
            OPEN => Some(Cell::Open),
            _ => None,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Cell::Open => OPEN,
            Cell::Wall => WALL,
        }
    }
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// A (row, column) location. Signed so that neighbours of border cells can be expressed and
/// then rejected by the bounds check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }
    /// The neighbouring position one step towards `orientation`.
    pub fn step(self, orientation: Orientation) -> Position {
        let (d_row, d_col) = orientation.forward_offset();
        Position::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// [MazeGrid] is an immutable rectangle of [Cell]s. The entry (first open cell of column 0)
/// and exit (first open cell of the last column) are located once on construction, and
/// [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) of open
/// cells are kept in a [UnionFind] so reachability can be answered without walking the maze.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    entry: Position,
    exit: Position,
    components: UnionFind<usize>,
}

/// Positions are signed so stepping off the grid stays representable, which caps each side
/// of the grid at `i32::MAX` cells.
fn check_extent(len: usize, axis: &str) -> Result<i32> {
    i32::try_from(len).map_err(|_| {
        MazeError::InvalidGrid(format!("{len} {axis} exceed the limit of {}", i32::MAX))
    })
}

impl MazeGrid {
    /// Builds a grid from rows of cells. Short rows are padded with walls up to the length of
    /// the longest row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<MazeGrid> {
        if rows.is_empty() {
            return Err(MazeError::InvalidGrid("grid has no rows".to_owned()));
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(MazeError::InvalidGrid("grid has no columns".to_owned()));
        }
        let height = rows.len();
        check_extent(height, "rows")?;
        check_extent(width, "columns")?;
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Wall);
            cells.extend(row);
        }

        let first_open_in = |col: usize| {
            (0..height)
                .find(|&row| cells[row * width + col].is_open())
                .map(|row| Position::new(row as i32, col as i32))
        };
        let entry = first_open_in(0).ok_or(MazeError::NoEntryFound)?;
        let exit = first_open_in(width - 1).ok_or(MazeError::NoExitFound)?;

        let mut grid = MazeGrid {
            cells,
            width,
            height,
            entry,
            exit,
            components: UnionFind::new(width * height),
        };
        grid.generate_components();
        info!(
            "Built {}x{} maze with entry {} and exit {}",
            height, width, entry, exit
        );
        Ok(grid)
    }

    /// Builds a grid from text rows using [WALL] and [OPEN] markers.
    pub fn from_lines<I, S>(lines: I) -> Result<MazeGrid>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        Cell::from_symbol(symbol)
                            .ok_or(MazeError::InvalidCell { symbol, row, col })
                    })
                    .collect::<Result<Vec<Cell>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        MazeGrid::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn entry(&self) -> Position {
        self.entry
    }
    pub fn exit(&self) -> Position {
        self.exit
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }
    fn get_ix(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
    fn get_ix_point(&self, point: &Position) -> usize {
        self.get_ix(point.row as usize, point.col as usize)
    }

    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell> {
        if self.in_bounds(row, col) {
            Ok(self.cells[self.get_ix(row as usize, col as usize)])
        } else {
            Err(MazeError::OutOfBounds { row, col })
        }
    }

    /// Like [cell_at](Self::cell_at) but treats everything outside the grid as a wall.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        self.cell_at(row, col).map_or(false, Cell::is_open)
    }
    pub fn is_open_at(&self, position: Position) -> bool {
        self.is_open(position.row, position.col)
    }

    /// Retrieves the component id a given open [Position] belongs to.
    pub fn get_component(&self, point: &Position) -> Option<usize> {
        self.is_open_at(*point)
            .then(|| self.components.find(self.get_ix_point(point)))
    }
    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        match (self.get_component(start), self.get_component(goal)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Position, goal: &Position) -> bool {
        !self.reachable(start, goal)
    }

    /// Links every open cell to its open right and lower neighbours; together these cover
    /// every edge of the 4-neighbourhood once.
    fn generate_components(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let point = Position::new(row as i32, col as i32);
                if !self.is_open_at(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for neighbour in [point.step(Orientation::East), point.step(Orientation::South)] {
                    if self.is_open_at(neighbour) {
                        let ix = self.get_ix_point(&neighbour);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line = row.iter().map(|cell| cell.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
