//! Click Scripts
//!
//! Text form of a click sequence, one point per line, so a session can be
//! replayed without a window. Components are separated by whitespace and/or
//! commas; blank lines and `#` comments are skipped.
//!
//! ```text
//! # first column
//! 2 1 1
//! 2.0, 1.0, 2.0
//! ```

use crate::world::ClickPoint;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ReplayError {
    #[error("line {line}: expected 3 components, found {found}")]
    WrongArity { line: usize, found: usize },
    #[error("line {line}: {text:?} is not a number")]
    BadNumber { line: usize, text: String },
}

/// Parse a click script into points, reporting the first bad line.
pub fn parse_click_script(script: &str) -> Result<Vec<ClickPoint>, ReplayError> {
    let mut points = Vec::new();
    for (idx, raw) in script.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let parts: Vec<&str> = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() != 3 {
            return Err(ReplayError::WrongArity { line, found: parts.len() });
        }

        let mut xyz = [0.0f64; 3];
        for (slot, text) in xyz.iter_mut().zip(&parts) {
            *slot = text.parse().map_err(|_| ReplayError::BadNumber {
                line,
                text: text.to_string(),
            })?;
        }
        points.push(ClickPoint::new(xyz[0], xyz[1], xyz[2]));
    }
    Ok(points)
}
