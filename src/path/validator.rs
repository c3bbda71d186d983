use core::fmt;

use log::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validation {
    Match,
    Mismatch,
}

impl Validation {
    pub fn is_match(self) -> bool {
        self == Validation::Match
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Validation::Match => write!(f, "correct path"),
            Validation::Mismatch => write!(f, "incorrect path"),
        }
    }
}

/// Compares a generated canonical path with one supplied by the caller. Only the generated
/// side is trimmed; internal spacing has to match exactly.
pub fn validate(generated: &str, expected: &str) -> Validation {
    let generated = generated.trim();
    if generated == expected {
        info!("Validation successful: the generated path matches");
        Validation::Match
    } else {
        warn!(
            "Validation failed: expected '{}', but got '{}'",
            expected, generated
        );
        Validation::Mismatch
    }
}
