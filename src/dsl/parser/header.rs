//! Class header parsing
//!
//! `Cl'Name'Parent'Interface1,Interface2`. Every field after the name is
//! optional, and an empty parent field means no parent.

use crate::dsl::ast::{ClassKind, ClassRecord};
use crate::dsl::sections::Segment;

/// Fields read from a header section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub parent: Option<String>,
    pub interfaces: Vec<String>,
}

impl Header {
    pub fn parse(section: &Segment<'_>) -> Header {
        // [tag, name, parent, interfaces]
        let fields = section.fields();
        let name = fields.get(1).map(|f| f.trim()).unwrap_or_default();
        let parent = fields
            .get(2)
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        let interfaces = fields
            .get(3)
            .map(|f| {
                f.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Header {
            name: name.to_string(),
            parent,
            interfaces,
        }
    }

    /// Write the header into `record`, classifying it by name
    pub fn apply(self, record: &mut ClassRecord) {
        record.kind = ClassKind::infer(&self.name);
        record.name = self.name;
        record.parent = self.parent;
        record.interfaces = self.interfaces;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::lexer::tokenize_with_spans;

    fn header(source: &str) -> Header {
        let tokens = tokenize_with_spans(source);
        Header::parse(&Segment::root(source, &tokens))
    }

    #[test]
    fn test_full_header() {
        let h = header("Cl'Player'CharacterBody2D'IMovable, IDamageable");
        assert_eq!(h.name, "Player");
        assert_eq!(h.parent.as_deref(), Some("CharacterBody2D"));
        assert_eq!(h.interfaces, vec!["IMovable", "IDamageable"]);
    }

    #[test]
    fn test_empty_parent_field() {
        let h = header("Cl'Player''IMovable");
        assert_eq!(h.parent, None);
        assert_eq!(h.interfaces, vec!["IMovable"]);
    }

    #[test]
    fn test_name_only() {
        let h = header("Cl'Player");
        assert_eq!(h.name, "Player");
        assert_eq!(h.parent, None);
        assert!(h.interfaces.is_empty());
    }

    #[test]
    fn test_interfaces_drop_empty_tokens() {
        let h = header("Cl'Player''IMovable,,IDamageable,");
        assert_eq!(h.interfaces, vec!["IMovable", "IDamageable"]);
    }

    #[test]
    fn test_interfaces_keep_duplicates() {
        let h = header("Cl'Player''IMovable,IMovable");
        assert_eq!(h.interfaces, vec!["IMovable", "IMovable"]);
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(header("Cl'").name, "");
        assert_eq!(header("Cl''Node").name, "");
    }
}
