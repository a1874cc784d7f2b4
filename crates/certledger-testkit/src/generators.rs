//! Proptest generators for property-based testing.

use proptest::prelude::*;

use certledger_core::{Certificate, Document, DELIMITER};

/// A field value without the delimiter and without surrounding whitespace.
pub fn field_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,'-]{0,30}".prop_map(|s| s.trim().to_string())
}

/// A date-like string.
pub fn date() -> impl Strategy<Value = String> {
    (2000u32..2040, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

/// A certificate with delimiter-free values.
pub fn certificate() -> impl Strategy<Value = Certificate> {
    (field_value(), field_value(), date(), field_value())
        .prop_map(|(recipient, course, date, issuer)| Certificate::new(recipient, course, date, issuer))
}

/// Whitespace that canonicalization strips.
pub fn padding() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,3}"
}

/// Parameters for disguising a certificate without changing its meaning.
#[derive(Debug, Clone)]
pub struct Disguise {
    pub upper: [bool; 4],
    pub leading: [String; 4],
    pub trailing: [String; 4],
}

impl Arbitrary for Disguise {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<[bool; 4]>(),
            prop::array::uniform4(padding()),
            prop::array::uniform4(padding()),
        )
            .prop_map(|(upper, leading, trailing)| Disguise {
                upper,
                leading,
                trailing,
            })
            .boxed()
    }
}

impl Disguise {
    fn apply_one(&self, i: usize, value: &str) -> String {
        let cased = if self.upper[i] {
            value.to_uppercase()
        } else {
            value.to_lowercase()
        };
        format!("{}{}{}", self.leading[i], cased, self.trailing[i])
    }

    /// Re-case and pad every field of `cert`.
    pub fn apply(&self, cert: &Certificate) -> Certificate {
        Certificate::new(
            self.apply_one(0, &cert.recipient),
            self.apply_one(1, &cert.course),
            self.apply_one(2, &cert.date),
            self.apply_one(3, &cert.issuer),
        )
    }
}

/// A document with extra, unrecognized fields mixed in.
pub fn document_with_extras() -> impl Strategy<Value = Document> {
    (
        certificate(),
        prop::collection::btree_map("[a-z]{3,8}", field_value(), 0..4),
    )
        .prop_map(|(cert, extras)| {
            let mut doc = cert.to_document();
            for (k, v) in extras {
                if doc.get(&k).is_none() {
                    doc.insert(k, v);
                }
            }
            doc
        })
}

/// True if no value contains the delimiter.
pub fn delimiter_free(cert: &Certificate) -> bool {
    [&cert.recipient, &cert.course, &cert.date, &cert.issuer]
        .iter()
        .all(|v| !v.contains(DELIMITER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use certledger_core::{canonical_bytes, fingerprint, fingerprint_document};

    proptest! {
        #[test]
        fn test_fingerprint_deterministic(cert in certificate()) {
            prop_assert_eq!(fingerprint(&cert), fingerprint(&cert));
        }

        #[test]
        fn test_disguise_preserves_fingerprint(cert in certificate(), disguise: Disguise) {
            let disguised = disguise.apply(&cert);
            prop_assert_eq!(canonical_bytes(&cert), canonical_bytes(&disguised));
            prop_assert_eq!(fingerprint(&cert), fingerprint(&disguised));
        }

        #[test]
        fn test_extra_fields_ignored(doc in document_with_extras()) {
            let cert = certledger_core::validate_document(&doc).unwrap();
            prop_assert_eq!(fingerprint_document(&doc).unwrap(), fingerprint(&cert));
        }

        #[test]
        fn test_generated_values_are_delimiter_free(cert in certificate()) {
            prop_assert!(delimiter_free(&cert));
        }

        #[test]
        fn test_recipient_change_detected(
            cert in certificate(),
            other in field_value(),
        ) {
            prop_assume!(other.to_lowercase() != cert.recipient.to_lowercase());
            let mut changed = cert.clone();
            changed.recipient = other;
            prop_assert_ne!(fingerprint(&cert), fingerprint(&changed));
        }
    }
}
