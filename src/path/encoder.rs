use itertools::Itertools;

use crate::error::{MazeError, Result};
use crate::path::Step;

/// Run-length encodes a raw F/L/R sequence into the canonical form, e.g. `FFFRFF` becomes
/// `3F R 2F`. Runs of one are written as the bare letter.
pub fn encode(raw: &[char]) -> Result<String> {
    if raw.is_empty() {
        return Err(MazeError::EmptyPath);
    }
    let symbols = raw
        .iter()
        .map(|&symbol| {
            let upper = symbol.to_ascii_uppercase();
            Step::from_symbol(upper)
                .map(Step::symbol)
                .ok_or(MazeError::InvalidStep(symbol))
        })
        .collect::<Result<Vec<char>>>()?;
    Ok(symbols
        .into_iter()
        .dedup_with_count()
        .map(|(count, symbol)| {
            if count == 1 {
                symbol.to_string()
            } else {
                format!("{count}{symbol}")
            }
        })
        .join(" "))
}

/// Longest raw sequence [expand] will produce.
pub const MAX_EXPANDED_STEPS: usize = 1 << 24;

/// Expands a canonical path back into its raw sequence. Explicit counts of one (`1F`) are
/// accepted as well. A path expanding to more than [MAX_EXPANDED_STEPS] steps is rejected.
pub fn expand(encoded: &str) -> Result<String> {
    let mut raw = String::new();
    for token in encoded.split_whitespace() {
        let split = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (digits, rest) = token.split_at(split);
        let mut letters = rest.chars();
        let step = match (letters.next(), letters.next()) {
            (Some(symbol), None) => Step::from_symbol(symbol.to_ascii_uppercase())
                .ok_or(MazeError::InvalidStep(symbol))?,
            (Some(_), Some(extra)) => return Err(MazeError::InvalidStep(extra)),
            (None, _) => {
                let last = token.chars().last().unwrap_or(' ');
                return Err(MazeError::InvalidStep(last));
            }
        };
        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or(MazeError::InvalidStep(step.symbol()))?
        };
        if count > MAX_EXPANDED_STEPS - raw.len() {
            return Err(MazeError::InvalidStep(step.symbol()));
        }
        raw.extend(std::iter::repeat(step.symbol()).take(count));
    }
    if raw.is_empty() {
        return Err(MazeError::EmptyPath);
    }
    Ok(raw)
}
