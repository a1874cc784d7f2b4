//! Documents and the certificates validated out of them.
//!
//! A [`Document`] is whatever the caller hands in: an unordered bag of named
//! text fields. A [`Certificate`] is the validated view holding exactly the
//! four fields that take part in fingerprinting.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::validate_document;

/// The fields that take part in canonicalization, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Recipient,
    Course,
    Date,
    Issuer,
}

impl Field {
    /// All required fields, in the order they are joined.
    pub const ALL: [Field; 4] = [Field::Recipient, Field::Course, Field::Date, Field::Issuer];

    /// The key this field is stored under in a [`Document`].
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Recipient => "recipient",
            Field::Course => "course",
            Field::Date => "date",
            Field::Issuer => "issuer",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unordered mapping of field names to text values.
///
/// Documents are never persisted; only their fingerprint is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, String>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove a field.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a required field value.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Number of fields present, recognized or not.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a document from a JSON object.
    ///
    /// Required fields must hold strings. Other keys are carried along
    /// only if they are strings; anything else under an unrecognized key
    /// is dropped, since it never reaches the fingerprint.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ValidationError::MalformedDocument(e.to_string()))?;
        Self::from_json_value(&value)
    }

    /// Build a document from an already parsed JSON value.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::MalformedDocument("expected a JSON object".into()))?;

        let mut document = Document::new();
        for (name, value) in object {
            match value {
                serde_json::Value::String(s) => {
                    document.insert(name.clone(), s.clone());
                }
                _ => {
                    if let Some(field) = Field::ALL.iter().find(|f| f.as_str() == name) {
                        return Err(ValidationError::FieldNotText(*field));
                    }
                }
            }
        }
        Ok(document)
    }
}

impl<K, V> FromIterator<(K, V)> for Document
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A document that carries all four required fields.
///
/// Values are kept exactly as supplied; normalization happens only in
/// canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub recipient: String,
    pub course: String,
    pub date: String,
    pub issuer: String,
}

impl Certificate {
    pub fn new(
        recipient: impl Into<String>,
        course: impl Into<String>,
        date: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            course: course.into(),
            date: date.into(),
            issuer: issuer.into(),
        }
    }

    /// The raw value of a field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Recipient => &self.recipient,
            Field::Course => &self.course,
            Field::Date => &self.date,
            Field::Issuer => &self.issuer,
        }
    }

    /// Convert back into a plain document.
    pub fn to_document(&self) -> Document {
        Field::ALL
            .iter()
            .map(|f| (f.as_str(), self.value(*f)))
            .collect()
    }
}

impl TryFrom<&Document> for Certificate {
    type Error = ValidationError;

    fn try_from(document: &Document) -> Result<Self, Self::Error> {
        validate_document(document)
    }
}

impl From<Certificate> for Document {
    fn from(cert: Certificate) -> Self {
        cert.to_document()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builder() {
        let doc = Document::new().with("recipient", "Bob").with("course", "Rust");
        assert_eq!(doc.get("recipient"), Some("Bob"));
        assert_eq!(doc.field(Field::Course), Some("Rust"));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_document_from_json() {
        let doc = Document::from_json(
            r#"{"recipient":"Bob Lee","course":"Systems Design","date":"2024-01-10","issuer":"Acme","grade":7}"#,
        )
        .unwrap();
        assert_eq!(doc.get("issuer"), Some("Acme"));
        // non-text extras are dropped
        assert_eq!(doc.get("grade"), None);
    }

    #[test]
    fn test_document_from_json_rejects_non_text_field() {
        let err = Document::from_json(r#"{"recipient":42}"#).unwrap_err();
        assert_eq!(err, ValidationError::FieldNotText(Field::Recipient));
    }

    #[test]
    fn test_document_from_json_rejects_non_object() {
        let err = Document::from_json("[1,2,3]").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedDocument(_)));

        let err = Document::from_json("{not json").unwrap_err();
        assert!(matches!(err, ValidationError::MalformedDocument(_)));
    }

    #[test]
    fn test_certificate_document_roundtrip() {
        let cert = Certificate::new("Bob Lee", "Systems Design", "2024-01-10", "Acme");
        let doc = cert.to_document();
        assert_eq!(Certificate::try_from(&doc).unwrap(), cert);
    }

    #[test]
    fn test_field_order() {
        let names: Vec<_> = Field::ALL.iter().map(Field::as_str).collect();
        assert_eq!(names, ["recipient", "course", "date", "issuer"]);
    }
}
