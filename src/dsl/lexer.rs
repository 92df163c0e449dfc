//! Lexer module for the weave DSL
//!
//! The DSL has no nesting: a class description is a flat run of text cut by
//! five delimiters. Tokenization is handled entirely by logos; everything
//! above it (sections, columns, items) works on token spans and slices the
//! source text, so no character is ever rewritten during parsing.
//!
//! Delimiters, from coarsest to finest:
//! - `;`  section
//! - `''` column (the doubled field separator)
//! - `'`  field (header only, and the tag/body boundary)
//! - `|`  per-item group (signal and function parameter lists)
//! - `,`  list item

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::{compress, expand};
pub use lexer_impl::{tokenize, tokenize_with_spans, Spanned};
pub use tokens::Token;
