//! Path segments for free-text natural keys.

use std::fmt::Write;

/// Lower-case, spaces to `_`, percent-escape everything outside
/// `[a-z0-9_.~-]`.
///
/// Escapes are emitted in lower-case hex and an existing `%hh` sequence is
/// kept as is, so `slug(slug(x)) == slug(x)`.
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase().replace(' ', "_");
    let bytes = lowered.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'~') {
            out.push(b as char);
        } else if b == b'%' && is_escape(&bytes[i..]) {
            out.push_str(&lowered[i..i + 3]);
            i += 3;
            continue;
        } else {
            let _ = write!(out, "%{:02x}", b);
        }
        i += 1;
    }
    out
}

fn is_escape(rest: &[u8]) -> bool {
    rest.len() >= 3 && rest[1].is_ascii_hexdigit() && rest[2].is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slug_labels() {
        assert_eq!(slug("first_half"), "first_half");
        assert_eq!(slug("First Half Extratime"), "first_half_extratime");
        assert_eq!(slug("00:23:04.500"), "00%3a23%3a04.500");
        assert_eq!(slug("half start"), "half_start");
        assert_eq!(slug("Estádio"), "est%c3%a1dio");
        assert_eq!(slug("50%"), "50%25");
    }

    proptest! {
        #[test]
        fn prop_slug_is_idempotent(text in "\\PC{0,40}") {
            let once = slug(&text);
            prop_assert_eq!(slug(&once), once.clone());
            prop_assert!(once.bytes().all(|b| b.is_ascii_graphic()));
        }
    }
}
