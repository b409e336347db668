#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use parser::parser::parse;

/// Byte offset into a named source. Offsets saturate at `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line text and the byte column within
/// the line. An offset equal to the source length maps to the end of the last
/// line, so errors at end of input still have somewhere to point.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            Some((line_number - 1, line.to_string(), line.len()))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}

/// Renders an error with the offending source line and a caret under its column.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `=`, did you miss a separator?)
/// -> shell
///   |
/// 1 | let = 5;
///   | ----^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    let summary = match error.get_tip() {
        ErrorTip::None => error.to_string(),
        tip => tip.to_string(),
    };
    rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), summary));
    rendered.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Positions are byte offsets; the caret is placed by character.
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();
    (String::from(&string[start..]), start)
}
