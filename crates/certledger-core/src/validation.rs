//! Document validation: presence checks for the required fields.
//!
//! Only presence is checked. Values are opaque text; an empty string is
//! a valid value and no date format is enforced.

use crate::document::{Certificate, Document, Field};
use crate::error::ValidationError;

/// Validate a document and extract its certificate fields.
///
/// Fields are checked in canonical order, so the first missing field
/// reported is deterministic.
pub fn validate_document(document: &Document) -> Result<Certificate, ValidationError> {
    let require = |field: Field| -> Result<String, ValidationError> {
        document
            .field(field)
            .map(str::to_owned)
            .ok_or(ValidationError::MissingField(field))
    };

    Ok(Certificate {
        recipient: require(Field::Recipient)?,
        course: require(Field::Course)?,
        date: require(Field::Date)?,
        issuer: require(Field::Issuer)?,
    })
}

/// List every required field the document lacks, in canonical order.
pub fn missing_fields(document: &Document) -> Vec<Field> {
    Field::ALL
        .iter()
        .copied()
        .filter(|f| document.field(*f).is_none())
        .collect()
}
