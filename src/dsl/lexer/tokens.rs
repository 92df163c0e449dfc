//! Token definitions for the weave DSL
//!
//! Longest match makes `''` a single [`Token::ColumnSep`]; a run of three
//! quotes lexes as a column separator followed by a field separator, which is
//! the same left-to-right reading a plain string split would give.
use logos::Logos;

/// All possible tokens in the weave DSL
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Token {
    #[token(";")]
    SectionSep,

    #[token("''")]
    ColumnSep,

    #[token("'")]
    FieldSep,

    #[token("|")]
    Pipe,

    #[token(",")]
    Comma,

    #[regex(r"\s+")]
    Whitespace,

    // Text content (catch-all for non-delimiter characters)
    #[regex(r"[^;'|,\s]+")]
    Text,
}

impl Token {
    /// Check if this token is one of the quote separators
    pub fn is_quote(&self) -> bool {
        matches!(self, Token::ColumnSep | Token::FieldSep)
    }

    /// Whitespace next to these tokens carries no meaning
    pub fn absorbs_whitespace(&self) -> bool {
        matches!(self, Token::SectionSep | Token::ColumnSep | Token::FieldSep)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace)
    }

    /// Fixed source text for delimiter tokens, `None` for text and whitespace
    pub fn delimiter(&self) -> Option<&'static str> {
        match self {
            Token::SectionSep => Some(";"),
            Token::ColumnSep => Some("''"),
            Token::FieldSep => Some("'"),
            Token::Pipe => Some("|"),
            Token::Comma => Some(","),
            Token::Whitespace | Token::Text => None,
        }
    }
}
