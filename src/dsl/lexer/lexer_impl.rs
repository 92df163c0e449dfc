//! Implementation of the weave lexer
//!
//! Convenience functions for tokenizing DSL text. The actual tokenization is
//! handled entirely by logos.

use crate::dsl::lexer::tokens::Token;
use logos::Logos;

/// A token paired with its byte range in the source
pub type Spanned = (Token, logos::Span);

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a string and collect tokens with their spans
pub fn tokenize_with_spans(source: &str) -> Vec<Spanned> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize_with_spans(""), vec![]);
    }

    #[test]
    fn test_section_tokenization() {
        let tokens = tokenize("Cl'A'';sg'Died''");
        assert_eq!(
            tokens,
            vec![
                Token::Text,
                Token::FieldSep,
                Token::Text,
                Token::ColumnSep,
                Token::SectionSep,
                Token::Text,
                Token::FieldSep,
                Token::Text,
                Token::ColumnSep,
            ]
        );
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "cn'MAX''int''10";
        let tokens = tokenize_with_spans(source);
        let rebuilt: String = tokens
            .iter()
            .map(|(_, span)| &source[span.clone()])
            .collect();
        assert_eq!(rebuilt, source);
        assert_eq!(tokens[3], (Token::ColumnSep, 6..8));
    }

    #[test]
    fn test_multibyte_text_spans() {
        let source = "Cl'Café'";
        let tokens = tokenize_with_spans(source);
        assert_eq!(&source[tokens[2].1.clone()], "Café");
    }
}
