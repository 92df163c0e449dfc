//! Detokenizer for the weave DSL
//!
//! Converts a token stream back into text. The two renderings are cosmetic:
//! [`compress`] produces the canonical single-line form and [`expand`] a
//! readable one with each section on its own line. Neither changes what a
//! compressed source parses to.

use crate::dsl::lexer::lexer_impl::tokenize_with_spans;
use crate::dsl::lexer::tokens::Token;

/// Canonicalize whitespace.
///
/// Runs of whitespace collapse to one space, whitespace touching `;` or a
/// quote separator is dropped, and the result is trimmed.
pub fn compress(source: &str) -> String {
    let tokens = tokenize_with_spans(source);
    let mut result = String::with_capacity(source.len());

    for (index, (token, span)) in tokens.iter().enumerate() {
        if token.is_whitespace() {
            let prev = index.checked_sub(1).map(|i| tokens[i].0);
            let next = tokens.get(index + 1).map(|(t, _)| *t);
            let at_edge = prev.is_none() || next.is_none();
            let absorbed = prev.is_some_and(|t| t.absorbs_whitespace())
                || next.is_some_and(|t| t.absorbs_whitespace());
            if !at_edge && !absorbed {
                result.push(' ');
            }
            continue;
        }
        push_token(&mut result, source, *token, span);
    }

    result
}

/// Spread a source out for reading: one section per line, quotes padded.
pub fn expand(source: &str) -> String {
    let tokens = tokenize_with_spans(source);
    let mut result = String::with_capacity(source.len() * 2);

    for (token, span) in &tokens {
        match token {
            Token::SectionSep => result.push_str(";\n"),
            Token::ColumnSep => result.push_str(" '   ' "),
            Token::FieldSep => result.push_str(" ' "),
            _ => push_token(&mut result, source, *token, span),
        }
    }

    result
}

fn push_token(out: &mut String, source: &str, token: Token, span: &logos::Span) {
    match token.delimiter() {
        Some(text) => out.push_str(text),
        None => out.push_str(&source[span.clone()]),
    }
}
