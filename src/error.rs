//! Error type shared by every stage of a solve.

use thiserror::Error;

use crate::maze_grid::Position;
use crate::orientation::Orientation;
use crate::path::PathRecorder;

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("no entry point found at column 0")]
    NoEntryFound,

    #[error("no exit point found at the rightmost column")]
    NoExitFound,

    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: i32, col: i32 },

    /// The walk was abandoned. Whatever had been recorded up to that point is kept so
    /// callers can still inspect the trace.
    #[error("no path found: stuck at {position} facing {orientation}")]
    NoPathFound {
        position: Position,
        orientation: Orientation,
        recorded: Box<PathRecorder>,
    },

    #[error("there is no path available to encode")]
    EmptyPath,

    #[error("invalid direction symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("invalid maze character {symbol:?} at ({row}, {col})")]
    InvalidCell { symbol: char, row: usize, col: usize },

    #[error("invalid path step {0:?}, expected one of F, L, R")]
    InvalidStep(char),

    #[error("unknown algorithm type: {0}")]
    UnknownMethod(String),

    #[error("could not read maze: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    /// Steps recorded before an abandoned walk, if this error carries any.
    pub fn recorded(&self) -> Option<&PathRecorder> {
        match self {
            MazeError::NoPathFound { recorded, .. } => Some(recorded),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
