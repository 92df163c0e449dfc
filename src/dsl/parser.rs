//! Parser for the weave DSL
//!
//! Converts DSL text into a [`ClassRecord`]. Sections are dispatched on their
//! two-letter tag; unknown tags are skipped so that newer producers can add
//! sections without breaking older readers.
//!
//! The entry points are:
//! - [`DslParser::parse`]: record or [`ParseError`]
//! - [`DslParser::parse_with_diagnostics`]: also returns what was dropped
//!
//! Whitespace is canonicalized with [`compress`] before sections are cut, so
//! wrapped, padded and [`expand`](crate::dsl::lexer::expand)ed text parse exactly like the single-line
//! form. Section indices survive this step since no `;` is added or removed.
//!
//! The parser owns its id source and its type-default table, both injected.

mod fields;
pub mod header;

use std::sync::Arc;

use tracing::{debug, trace};

use crate::dsl::ast::{ClassKind, ClassRecord};
use crate::dsl::defaults::{GodotDefaults, TypeDefaults};
use crate::dsl::error::{Diagnostic, ParseError};
use crate::dsl::ids::{IdSource, SessionIds};
use crate::dsl::lexer::{compress, tokenize_with_spans};
use crate::dsl::sections::{split_sections, Tag};

use fields::FieldContext;
pub use header::Header;

/// A parsed record and everything the parser silently dropped
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub record: ClassRecord,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone)]
pub struct DslParser {
    ids: Arc<dyn IdSource>,
    defaults: Arc<dyn TypeDefaults>,
}

impl DslParser {
    /// Parser with process-wide ids and the built-in default table
    pub fn new() -> Self {
        Self {
            ids: Arc::new(SessionIds),
            defaults: Arc::new(GodotDefaults),
        }
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    pub fn with_defaults(mut self, defaults: impl TypeDefaults + 'static) -> Self {
        self.defaults = Arc::new(defaults);
        self
    }

    pub fn defaults(&self) -> Arc<dyn TypeDefaults> {
        Arc::clone(&self.defaults)
    }

    /// Create a record in minimal form with a fresh id
    pub fn create(&self, name: impl Into<String>, kind: ClassKind) -> ClassRecord {
        ClassRecord::new(self.ids.next_id(), name, kind)
    }

    pub fn parse(&self, source: &str) -> Result<ClassRecord, ParseError> {
        self.parse_with_diagnostics(source).map(|parsed| parsed.record)
    }

    pub fn parse_with_diagnostics(&self, source: &str) -> Result<Parsed, ParseError> {
        let source = compress(source);
        let tokens = tokenize_with_spans(&source);
        let sections = split_sections(&source, &tokens);
        trace!(sections = sections.len(), "split DSL source");

        let mut header: Option<(usize, Header)> = None;
        let mut record = ClassRecord::new(self.ids.next_id(), "", ClassKind::Normal);
        let mut diagnostics = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            if section.is_blank() {
                continue;
            }

            let Some(tag) = section.tag() else {
                let prefix = section.prefix().unwrap_or_else(|| section.trimmed());
                diagnostics.push(Diagnostic::UnknownSection {
                    index,
                    prefix: prefix.to_string(),
                });
                continue;
            };
            debug!(index, %tag, "dispatching section");

            if tag == Tag::Header {
                if let Some((first, _)) = header {
                    return Err(ParseError::DuplicateHeader { first, index });
                }
                header = Some((index, Header::parse(section)));
                continue;
            }

            let mut ctx = FieldContext {
                index,
                defaults: self.defaults.as_ref(),
                diagnostics: &mut diagnostics,
            };
            fields::apply(tag, section, &mut record, &mut ctx);
        }

        let (index, header) = header.ok_or(ParseError::MissingHeader)?;
        if header.name.is_empty() {
            return Err(ParseError::EmptyName { index });
        }
        header.apply(&mut record);

        for diagnostic in &diagnostics {
            debug!(class = %record.name, "{diagnostic}");
        }

        Ok(Parsed {
            record,
            diagnostics,
        })
    }
}

impl Default for DslParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DslParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DslParser").finish_non_exhaustive()
    }
}
