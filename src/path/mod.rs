//! Recording, encoding and checking of the moves a solver makes.
use log::trace;

use crate::error::Result;
use crate::maze_grid::Position;
use crate::orientation::Orientation;

pub mod encoder;
pub mod validator;

pub use encoder::{encode, expand, MAX_EXPANDED_STEPS};
pub use validator::{validate, Validation};

/// A single primitive move. About-faces are recorded as two [Step::Right]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Forward,
    Left,
    Right,
}

impl Step {
    pub fn symbol(self) -> char {
        match self {
            Step::Forward => 'F',
            Step::Left => 'L',
            Step::Right => 'R',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<Step> {
        match symbol {
            'F' => Some(Step::Forward),
            'L' => Some(Step::Left),
            'R' => Some(Step::Right),
            _ => None,
        }
    }
}

/// Append-only log of every [Step] taken, alongside a human readable trace.
///
/// The raw sequence captures every step. The trace skips an entry when the solver's
/// (position, orientation) is unchanged since the previous entry, which happens on the second
/// half of an about-face.
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    raw: Vec<char>,
    trace: Vec<String>,
    last: Option<(Position, Orientation)>,
}

impl PathRecorder {
    pub fn new() -> PathRecorder {
        PathRecorder::default()
    }

    /// Records `step`, taken so that the solver now stands at `position` facing `orientation`.
    pub fn record(&mut self, step: Step, position: Position, orientation: Orientation) {
        self.raw.push(step.symbol());
        if self.last == Some((position, orientation)) {
            return;
        }
        self.last = Some((position, orientation));
        let entry = format!("Position: {}, Direction: {}", position, step.symbol());
        trace!("{}", entry);
        self.trace.push(entry);
    }

    pub fn raw_sequence(&self) -> &[char] {
        &self.raw
    }
    pub fn raw_string(&self) -> String {
        self.raw.iter().collect()
    }
    pub fn trace(&self) -> &[String] {
        &self.trace
    }
    pub fn len(&self) -> usize {
        self.raw.len()
    }
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The canonical run-length encoded form of everything recorded so far.
    pub fn encode(&self) -> Result<String> {
        encode(&self.raw)
    }
}
