use std::fs;
use std::path::Path;

use log::info;

use crate::error::{MazeError, Result};
use crate::maze_grid::MazeGrid;

/// Parses maze text, one row per line. Short rows are padded with walls.
pub fn parse_maze(text: &str) -> Result<MazeGrid> {
    if text.lines().next().is_none() {
        return Err(MazeError::InvalidGrid("maze file is empty".to_owned()));
    }
    MazeGrid::from_lines(text.lines())
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<MazeGrid> {
    let path = path.as_ref();
    info!("Reading the maze from file: {}", path.display());
    let grid = parse_maze(&fs::read_to_string(path)?)?;
    info!(
        "Maze read successfully with {} rows and {} columns",
        grid.height(),
        grid.width()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_grid::{Cell, Position};

    #[test]
    fn parses_crlf_and_pads() {
        let grid = parse_maze("####\r\n    \r\n##\r\n").unwrap();
        assert_eq!((grid.height(), grid.width()), (3, 4));
        assert_eq!(grid.entry(), Position::new(1, 0));
        assert_eq!(grid.exit(), Position::new(1, 3));
        assert_eq!(grid.cell_at(2, 3).unwrap(), Cell::Wall);
    }

    #[test]
    fn empty_text_is_invalid() {
        assert!(matches!(parse_maze(""), Err(MazeError::InvalidGrid(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            read_maze("does/not/exist.maz.txt"),
            Err(MazeError::Io(_))
        ));
    }
}
