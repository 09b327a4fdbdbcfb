//! Splitting input lines into code segments

use crate::error::ParseError;
use crate::tree::Level;

/// Separates the segments of one code list
pub const SEGMENT_DELIMITER: char = ',';

/// Separates a segment name from its explicit level
pub const LEVEL_DELIMITER: char = ':';

/// One step of a hierarchical code path
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Node name this step matches or creates
    pub name: String,
    /// Explicit level, if the input carried one
    pub level: Option<Level>,
}

impl Segment {
    /// A segment whose level is derived from its position
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }

    /// A segment carrying an explicit level
    pub fn with_level(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level: Some(level),
        }
    }
}

/// Parse one line such as `001-139,001-009,001,001.0:3.5`
///
/// Empty fields are dropped, so a blank line or a line of bare commas yields
/// an empty sequence.
pub fn parse_line(line: &str) -> Result<Vec<Segment>, ParseError> {
    line.trim()
        .split(SEGMENT_DELIMITER)
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(parse_segment)
        .collect()
}

/// Parse a single `name` or `name:level` field
pub fn parse_segment(raw: &str) -> Result<Segment, ParseError> {
    let Some((name, level)) = raw.split_once(LEVEL_DELIMITER) else {
        return Ok(Segment::new(raw.trim()));
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyName {
            segment: raw.to_string(),
        });
    }

    let level_text = level.trim();
    match level_text.parse::<Level>() {
        Ok(value) if value.is_finite() => Ok(Segment::with_level(name, value)),
        _ => Err(ParseError::InvalidLevel {
            segment: raw.to_string(),
            level: level_text.to_string(),
        }),
    }
}
