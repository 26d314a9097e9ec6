#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Location of the first character of a source.
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }

    /// Placeholder for errors that are not tied to the source text.
    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line: {}, Col: {}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (tip)
        -> prog.txt
          |
        1 | x ! y
          |   ^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let position = error.get_position();
    if position.is_null() {
        return out;
    }

    out.push_str(&format!("-> {}\n", file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    // Tabs count as one column, so echo them as one space.
    let echoed = line_text_removed.trim_end().replace('\t', " ");
    out.push_str(&format!("{} | {}\n", line_string, echoed));

    let column = position.column as usize;
    let arrows = column.saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\r\nsecond\n\nTesting { }\n";

        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 2), Some("second"));
        assert_eq!(super::get_line_at_position(source, 3), Some(""));
        assert_eq!(super::get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::IllegalCharacter { character: '!' },
            Position::new(1, 3),
        );
        let rendered = super::render_error(&error, "x ! y", "prog.txt");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: IllegalCharacter (character `!` is not part of the language)"
        );
        assert_eq!(lines[1], "-> prog.txt");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | x ! y");
        assert_eq!(lines[4], "  |   ^");
    }

    #[test]
    fn test_render_error_strips_indentation() {
        let error = Error::new(
            ErrorImpl::IllegalCharacter { character: '@' },
            Position::new(2, 5),
        );
        let rendered = super::render_error(&error, "x;\n  y @", "prog.txt");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "2 | y @");
        assert_eq!(lines[4], "  |   ^");
    }

    #[test]
    fn test_render_error_echoes_tabs_as_single_columns() {
        let error = Error::new(
            ErrorImpl::IllegalCharacter { character: '!' },
            Position::new(1, 3),
        );
        let rendered = super::render_error(&error, "a\t!", "prog.txt");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | a !");
        assert_eq!(lines[4], "  |   ^");
    }

    #[test]
    fn test_render_error_without_position() {
        let error = Error::new(
            ErrorImpl::InvalidConfiguration {
                message: "bad".to_string(),
            },
            Position::null(),
        );
        let rendered = super::render_error(&error, "", "prog.txt");

        assert_eq!(rendered, "Error: InvalidConfiguration (bad)\n");
    }
}
