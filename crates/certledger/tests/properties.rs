//! Property tests for fingerprint determinism and normalization.

use proptest::prelude::*;

use certledger::core::{canonical_bytes, fingerprint};
use certledger::Certificate;

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,'-]{0,24}"
}

fn certificate() -> impl Strategy<Value = Certificate> {
    (value(), value(), value(), value())
        .prop_map(|(r, c, d, i)| Certificate::new(r, c, d, i))
}

/// Random surrounding whitespace and ASCII case flips.
fn disguise(s: &str, upper: bool, pad: &str) -> String {
    let cased = if upper {
        s.to_uppercase()
    } else {
        s.to_lowercase()
    };
    format!("{pad}{cased}{pad}")
}

proptest! {
    #[test]
    fn fingerprint_is_deterministic(cert in certificate()) {
        prop_assert_eq!(fingerprint(&cert), fingerprint(&cert.clone()));
    }

    #[test]
    fn case_and_padding_do_not_change_fingerprint(
        cert in certificate(),
        upper in any::<bool>(),
        pad in "[ \t\n]{0,3}",
    ) {
        let disguised = Certificate::new(
            disguise(&cert.recipient, upper, &pad),
            disguise(&cert.course, !upper, &pad),
            disguise(&cert.date, upper, &pad),
            disguise(&cert.issuer, !upper, &pad),
        );
        prop_assert_eq!(canonical_bytes(&cert), canonical_bytes(&disguised));
        prop_assert_eq!(fingerprint(&cert), fingerprint(&disguised));
    }

    #[test]
    fn different_courses_differ(cert in certificate(), suffix in "[a-z0-9]{1,4}") {
        let mut changed = cert.clone();
        changed.course = format!("{} {}", cert.course.trim(), suffix);
        prop_assume!(changed.course.trim().to_lowercase() != cert.course.trim().to_lowercase());
        prop_assert_ne!(fingerprint(&cert), fingerprint(&changed));
    }
}
