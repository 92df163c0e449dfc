//! Error and diagnostic types for DSL parsing

use std::fmt;

use crate::dsl::sections::Tag;

/// Input that cannot produce a record. No partial record is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing class header section (Cl')")]
    MissingHeader,
    #[error("class header in section {index} has an empty name")]
    EmptyName { index: usize },
    #[error("duplicate class header in section {index} (first header in section {first})")]
    DuplicateHeader { first: usize, index: usize },
}

/// Data the parser dropped on purpose. Never fatal.
///
/// `index` is the zero-based position of the section in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A non-blank section whose prefix is not a known tag
    UnknownSection { index: usize, prefix: String },
    /// A tagged section with fewer `''` columns than its tag needs
    ShortSection {
        index: usize,
        tag: Tag,
        columns: usize,
        required: usize,
    },
    /// An empty name token; no row is produced for it
    EmptyName { index: usize, tag: Tag, row: usize },
    /// A column with more entries than there are names
    ExtraValues {
        index: usize,
        tag: Tag,
        column: usize,
        dropped: usize,
    },
    /// A row missing a value the tag cannot fill in (legacy vars, empty enums)
    IncompleteRow { index: usize, tag: Tag, row: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownSection { index, prefix } => {
                write!(f, "section {index}: unknown section '{prefix}' ignored")
            }
            Diagnostic::ShortSection {
                index,
                tag,
                columns,
                required,
            } => write!(
                f,
                "section {index}: '{tag}' needs {required} columns, found {columns}; section ignored"
            ),
            Diagnostic::EmptyName { index, tag, row } => {
                write!(f, "section {index}: '{tag}' entry {row} has an empty name and was skipped")
            }
            Diagnostic::ExtraValues {
                index,
                tag,
                column,
                dropped,
            } => write!(
                f,
                "section {index}: '{tag}' column {column} has {dropped} more value(s) than names"
            ),
            Diagnostic::IncompleteRow { index, tag, row } => {
                write!(f, "section {index}: '{tag}' entry {row} is incomplete and was skipped")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::MissingHeader.to_string(),
            "missing class header section (Cl')"
        );
        assert_eq!(
            ParseError::EmptyName { index: 0 }.to_string(),
            "class header in section 0 has an empty name"
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::ExtraValues {
            index: 2,
            tag: Tag::Signals,
            column: 1,
            dropped: 1,
        };
        assert_eq!(
            diagnostic.to_string(),
            "section 2: 'sg' column 1 has 1 more value(s) than names"
        );
    }
}
