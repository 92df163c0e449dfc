//! JSON serialization of a record, for collaborators that exchange records
//! rather than DSL text

use super::registry::{FormatError, Formatter};
use crate::dsl::ast::ClassRecord;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, record: &ClassRecord) -> Result<String, FormatError> {
        serde_json::to_string_pretty(record)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON record"
    }
}
