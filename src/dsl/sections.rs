//! Section and column splitting
//!
//! A [`Segment`] is a contiguous byte range of the source together with the
//! tokens that fall inside it. Sections, columns and list items are all
//! segments: each level is produced by cutting the parent segment at one kind
//! of delimiter token. Text is always recovered by slicing the source, never
//! by re-joining tokens.

use std::fmt;
use std::ops::Range;

use crate::dsl::lexer::{Spanned, Token};

/// Section tags recognized by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `Cl` class header
    Header,
    /// `cv` legacy combined var/type list, folded into unique props
    LegacyVars,
    /// `sg`
    Signals,
    /// `fn`
    Functions,
    /// `cn`
    Constants,
    /// `en`, one enum per section
    Enum,
    /// `fl`
    Flags,
    /// `cp`
    CurrentProps,
    /// `ip`
    InterfaceProps,
    /// `up`
    UniqueProps,
    /// `cm`
    Components,
}

impl Tag {
    pub const ALL: [Tag; 11] = [
        Tag::Header,
        Tag::LegacyVars,
        Tag::Signals,
        Tag::Functions,
        Tag::Constants,
        Tag::Enum,
        Tag::Flags,
        Tag::CurrentProps,
        Tag::InterfaceProps,
        Tag::UniqueProps,
        Tag::Components,
    ];

    pub fn from_code(code: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tag::Header => "Cl",
            Tag::LegacyVars => "cv",
            Tag::Signals => "sg",
            Tag::Functions => "fn",
            Tag::Constants => "cn",
            Tag::Enum => "en",
            Tag::Flags => "fl",
            Tag::CurrentProps => "cp",
            Tag::InterfaceProps => "ip",
            Tag::UniqueProps => "up",
            Tag::Components => "cm",
        }
    }

    /// Number of `''` columns a section needs before any row is read
    pub fn min_columns(&self) -> usize {
        match self {
            Tag::Header => 1,
            Tag::Constants | Tag::Flags | Tag::CurrentProps | Tag::UniqueProps => 3,
            Tag::LegacyVars
            | Tag::Signals
            | Tag::Functions
            | Tag::Enum
            | Tag::InterfaceProps
            | Tag::Components => 2,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A slice of the source and the tokens inside it
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    source: &'a str,
    range: Range<usize>,
    tokens: &'a [Spanned],
}

impl<'a> Segment<'a> {
    /// The whole source as one segment
    pub fn root(source: &'a str, tokens: &'a [Spanned]) -> Self {
        Segment {
            source,
            range: 0..source.len(),
            tokens,
        }
    }

    /// Raw text of the segment, untrimmed
    pub fn text(&self) -> &'a str {
        &self.source[self.range.clone()]
    }

    pub fn trimmed(&self) -> &'a str {
        self.text().trim()
    }

    pub fn is_blank(&self) -> bool {
        self.tokens.iter().all(|(token, _)| token.is_whitespace())
    }

    pub fn tokens(&self) -> &'a [Spanned] {
        self.tokens
    }

    /// Cut this segment at every `separator` token
    pub fn split(&self, separator: Token) -> Vec<Segment<'a>> {
        let mut pieces = Vec::new();
        let mut start = self.range.start;
        let mut from = 0;

        for (index, (token, span)) in self.tokens.iter().enumerate() {
            if *token == separator {
                pieces.push(self.piece(start..span.start, from..index));
                start = span.end;
                from = index + 1;
            }
        }
        pieces.push(self.piece(start..self.range.end, from..self.tokens.len()));
        pieces
    }

    fn piece(&self, range: Range<usize>, tokens: Range<usize>) -> Segment<'a> {
        Segment {
            source: self.source,
            range,
            tokens: &self.tokens[tokens],
        }
    }

    /// The leading text token when it is directly followed by a quote.
    ///
    /// `cn'a` and `cn''int` both carry the prefix `cn`; ` cn'a` and `cnx'a`
    /// carry none.
    pub fn prefix(&self) -> Option<&'a str> {
        match self.tokens {
            [(Token::Text, text), (next, _), ..] if next.is_quote() => {
                Some(&self.source[text.clone()])
            }
            _ => None,
        }
    }

    /// The recognized section tag, if any
    pub fn tag(&self) -> Option<Tag> {
        self.prefix().and_then(Tag::from_code)
    }

    /// Header-style fields: every `'` is a boundary and `''` is two
    /// boundaries around an empty field.
    pub fn fields(&self) -> Vec<&'a str> {
        let mut fields = Vec::new();
        let mut start = self.range.start;

        for (token, span) in self.tokens {
            match token {
                Token::FieldSep => {
                    fields.push(&self.source[start..span.start]);
                    start = span.end;
                }
                Token::ColumnSep => {
                    fields.push(&self.source[start..span.start]);
                    fields.push("");
                    start = span.end;
                }
                _ => {}
            }
        }
        fields.push(&self.source[start..self.range.end]);
        fields
    }

    /// Drop the leading `tag'` from the first column of a section.
    ///
    /// The cut is the measured length of the tag token plus its quote. When
    /// the tag is followed by `''` the first column holds nothing but the tag.
    pub fn strip_tag(&self) -> Segment<'a> {
        match self.tokens {
            [(Token::Text, _), (Token::FieldSep, quote), ..] => {
                self.piece(quote.end..self.range.end, 2..self.tokens.len())
            }
            [(Token::Text, _)] => self.piece(self.range.end..self.range.end, 1..1),
            _ => self.clone(),
        }
    }

    /// `''`-separated columns
    pub fn columns(&self) -> Vec<Segment<'a>> {
        self.split(Token::ColumnSep)
    }

    /// `,`-separated items, trimmed. Empty items are kept so positions line up.
    pub fn items(&self) -> Vec<&'a str> {
        self.split(Token::Comma)
            .iter()
            .map(|item| item.trimmed())
            .collect()
    }

    /// `|`-separated groups of `,`-separated items, with empty items dropped
    pub fn groups(&self) -> Vec<Vec<&'a str>> {
        self.split(Token::Pipe)
            .iter()
            .map(|group| {
                group
                    .items()
                    .into_iter()
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .collect()
    }
}

/// Split a tokenized source into `;`-separated sections
pub fn split_sections<'a>(source: &'a str, tokens: &'a [Spanned]) -> Vec<Segment<'a>> {
    Segment::root(source, tokens).split(Token::SectionSep)
}
