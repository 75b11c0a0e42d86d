//! Source positions.
//!
//! Every token and AST node carries a [`Pos`]: the absolute character offset
//! into the source plus the 1-based line and column, so diagnostics can point
//! at the exact character without re-scanning the file.

use std::fmt;

/// A position in the source text.
///
/// `offset` counts characters from the start of the file, matching how the
/// scanner walks the source; `line` and `column` are both 1-based.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pos {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Pos {
    /// Position of the first character of a file.
    pub const START: Pos = Pos {
        offset: 0,
        line: 1,
        column: 1,
    };

    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Pos {
            offset,
            line,
            column,
        }
    }
}

impl Default for Pos {
    fn default() -> Self {
        Pos::START
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.line, self.column, self.offset)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} (line {}, column {})",
            self.offset, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_line_one_column_one() {
        assert_eq!(Pos::START.offset, 0);
        assert_eq!(Pos::START.line, 1);
        assert_eq!(Pos::START.column, 1);
        assert_eq!(Pos::default(), Pos::START);
    }

    #[test]
    fn display_names_all_three_coordinates() {
        let pos = Pos::new(17, 3, 5);
        assert_eq!(format!("{pos}"), "position 17 (line 3, column 5)");
        assert_eq!(format!("{pos:?}"), "3:5@17");
    }
}
