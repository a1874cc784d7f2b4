//! Golden fingerprint vectors.
//!
//! Every issued fingerprint depends on these exact bytes. A change that
//! breaks one of these vectors invalidates every certificate on record.

use certledger_core::{canonical_bytes, fingerprint, Certificate};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub recipient: &'static str,
    pub course: &'static str,
    pub date: &'static str,
    pub issuer: &'static str,
    /// Expected canonical form.
    pub expected_canonical: &'static str,
    /// Expected fingerprint (hex).
    pub expected_fingerprint: &'static str,
}

impl GoldenVector {
    pub fn certificate(&self) -> Certificate {
        Certificate::new(self.recipient, self.course, self.date, self.issuer)
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "reference certificate",
            recipient: "Bob Lee",
            course: "Systems Design",
            date: "2024-01-10",
            issuer: "Acme",
            expected_canonical: "bob lee|systems design|2024-01-10|acme",
            expected_fingerprint:
                "6c10b3404e687938f56ea859003f91a64de1792b312a5aa18bb4ae55f479a5ad",
        },
        GoldenVector {
            name: "case and padding collapse",
            recipient: "  BOB LEE ",
            course: "systems design\t",
            date: "2024-01-10",
            issuer: "\nACME",
            expected_canonical: "bob lee|systems design|2024-01-10|acme",
            expected_fingerprint:
                "6c10b3404e687938f56ea859003f91a64de1792b312a5aa18bb4ae55f479a5ad",
        },
        GoldenVector {
            name: "tampered course",
            recipient: "Bob Lee",
            course: "Systems Design 2",
            date: "2024-01-10",
            issuer: "Acme",
            expected_canonical: "bob lee|systems design 2|2024-01-10|acme",
            expected_fingerprint:
                "5300103c2cb573a90b5ee18c9bd766612d566b41e945cca25accba3ba0fab52f",
        },
        GoldenVector {
            name: "all fields empty",
            recipient: "",
            course: " ",
            date: "",
            issuer: "",
            expected_canonical: "|||",
            expected_fingerprint:
                "be5be69f55e91af25e54ecc2154d4da359b67b3b27e25f5cc0b3ff54eb74dff3",
        },
        GoldenVector {
            // The date is opaque text but still lower-cased.
            name: "date is case-folded",
            recipient: "Alice",
            course: "Rust 101",
            date: "2024-03-01T00:00:00Z",
            issuer: "Acme University",
            expected_canonical: "alice|rust 101|2024-03-01t00:00:00z|acme university",
            expected_fingerprint:
                "7b0cfda4d48c1af3aee50fb2cba3a088bd60e983937a62926c55c0490e980104",
        },
        GoldenVector {
            name: "non-ascii values",
            recipient: "JOSÉ",
            course: "Café Ñ",
            date: "2024-01-10",
            issuer: "Müller GmbH",
            expected_canonical: "josé|café ñ|2024-01-10|müller gmbh",
            expected_fingerprint:
                "d23b413d30d4a476d45e1024baa0856e956cac2c5c2646fac012d66898311070",
        },
        GoldenVector {
            // The delimiter is not escaped; this shares its canonical form
            // with ("a", "b|c", "d", "e").
            name: "delimiter inside a value",
            recipient: "a|b",
            course: "c",
            date: "d",
            issuer: "e",
            expected_canonical: "a|b|c|d|e",
            expected_fingerprint:
                "2d4b7507de8bf3f1c304248f357c3de417fa87257fb68e22f1afe1da51c504a2",
        },
    ]
}

/// Check every vector, returning the names of those that fail.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .into_iter()
        .filter(|v| {
            let cert = v.certificate();
            canonical_bytes(&cert) != v.expected_canonical.as_bytes()
                || fingerprint(&cert).to_hex() != v.expected_fingerprint
        })
        .map(|v| v.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        let failures = verify_all_vectors();
        assert!(failures.is_empty(), "failing vectors: {:?}", failures);
    }

    #[test]
    fn test_delimiter_ambiguity() {
        let vectors = all_vectors();
        let shifted = vectors
            .iter()
            .find(|v| v.name == "delimiter inside a value")
            .unwrap();

        let other = Certificate::new("a", "b|c", "d", "e");
        assert_eq!(fingerprint(&shifted.certificate()), fingerprint(&other));
    }

    #[test]
    fn test_delimiter_vector_digest() {
        let cert = Certificate::new("a|b", "c", "d", "e");
        assert_eq!(
            fingerprint(&cert).to_hex(),
            "2d4b7507de8bf3f1c304248f357c3de417fa87257fb68e22f1afe1da51c504a2"
        );
    }

    #[test]
    fn test_vector_fingerprints_are_lowercase_hex() {
        for v in all_vectors() {
            assert_eq!(v.expected_fingerprint.len(), 64, "{}", v.name);
            assert!(v
                .expected_fingerprint
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
