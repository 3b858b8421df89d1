//! ASCII composition predicate for captured text.
//!
//! Captured strings made entirely of ASCII digits, letters, punctuation, and
//! whitespace carry nothing worth extracting and are dropped. A single byte
//! outside those classes anywhere in the string keeps it.

/// Per-class flags recorded during a composition scan.
///
/// Kept as individual booleans rather than a single "saw anything" bit so
/// future rules can require or weight specific classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassFlags {
    pub digit: bool,
    pub letter: bool,
    pub punct: bool,
    pub space: bool,
}

impl ClassFlags {
    /// True if any class was observed.
    pub fn any(&self) -> bool {
        self.digit || self.letter || self.punct || self.space
    }
}

/// ASCII whitespace under C-locale `isspace` semantics.
///
/// Includes vertical tab (0x0B), which `u8::is_ascii_whitespace` does not.
fn is_ascii_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Scan bytes and record which ASCII classes appear.
///
/// Returns `None` as soon as a byte matches none of the four classes. Any
/// byte >= 0x80 disqualifies, so every byte of a multi-byte UTF-8 sequence
/// disqualifies. Classes are tested in digit, letter, punctuation,
/// whitespace order.
pub fn scan_classes(bytes: &[u8]) -> Option<ClassFlags> {
    let mut flags = ClassFlags::default();

    for &byte in bytes {
        if byte.is_ascii_digit() {
            flags.digit = true;
        } else if byte.is_ascii_alphabetic() {
            flags.letter = true;
        } else if byte.is_ascii_punctuation() {
            flags.punct = true;
        } else if is_ascii_space(byte) {
            flags.space = true;
        } else {
            return None;
        }
    }

    Some(flags)
}

/// Decide whether captured text should be dropped from the sift output.
///
/// Empty text is always filtered. Non-empty text is filtered when every byte
/// classifies as ASCII digit, letter, punctuation, or whitespace; one
/// disqualifying byte anywhere retains it, regardless of position.
///
/// Classification is byte-level, not code-point-level, matching the
/// byte-oriented capture source. The predicate is pure and total: it never
/// fails, allocates nothing, and makes a single pass with early exit.
pub fn should_filter(text: &str) -> bool {
    should_filter_bytes(text.as_bytes())
}

/// Byte-slice entry point for callers holding raw capture buffers.
pub fn should_filter_bytes(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return true;
    }

    match scan_classes(bytes) {
        // Non-empty and fully classified, so at least one flag is set; the
        // OR over flags is kept rather than collapsed to `true`.
        Some(flags) => flags.any(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_filtered() {
        assert!(should_filter(""));
        assert!(should_filter_bytes(b""));
    }

    #[test]
    fn test_single_class_inputs_are_filtered() {
        assert!(should_filter("12345"));
        assert!(should_filter("hello"));
        assert!(should_filter("ABCXYZ"));
        assert!(should_filter("!?.,;:"));
        assert!(should_filter("   \t\n"));
    }

    #[test]
    fn test_mixed_ascii_is_filtered() {
        assert!(should_filter("Hi, 2024!"));
        assert!(should_filter("Level 3 - Press [A] to continue..."));
        assert!(should_filter("x = f(42);\r\n"));
    }

    #[test]
    fn test_non_ascii_is_retained() {
        assert!(!should_filter("こんにちは"));
        assert!(!should_filter("装備を変更しました"));
        assert!(!should_filter("전투 시작"));
    }

    #[test]
    fn test_single_disqualifying_byte_anywhere_retains() {
        assert!(!should_filter("abc火123"));
        assert!(!should_filter("火abc123"));
        assert!(!should_filter("abc123火"));
        // Raw high byte, not valid UTF-8.
        assert!(!should_filter_bytes(b"abc\x80123"));
        assert!(!should_filter_bytes(b"\xff"));
    }

    #[test]
    fn test_control_bytes_are_disqualifying() {
        // NUL and BEL fall into none of the four classes.
        assert!(!should_filter_bytes(b"abc\x00def"));
        assert!(!should_filter_bytes(b"\x07"));
    }

    #[test]
    fn test_vertical_tab_and_form_feed_are_whitespace() {
        assert!(should_filter_bytes(b"\x0b"));
        assert!(should_filter_bytes(b"\x0c"));
        assert!(should_filter_bytes(b"a\x0bb\x0cc"));
    }

    #[test]
    fn test_permutation_invariance_for_ascii_input() {
        let forward = "Hi, 2024!";
        let reversed: String = forward.chars().rev().collect();
        assert!(should_filter(forward));
        assert!(should_filter(&reversed));
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "hello", "Hi, 2024!", "こんにちは"] {
            let first = should_filter(input);
            for _ in 0..3 {
                assert_eq!(should_filter(input), first);
            }
        }
    }

    #[test]
    fn test_scan_classes_tracks_each_class() {
        let flags = scan_classes(b"a1! ").unwrap();
        assert!(flags.digit && flags.letter && flags.punct && flags.space);

        let flags = scan_classes(b"42").unwrap();
        assert!(flags.digit);
        assert!(!flags.letter && !flags.punct && !flags.space);

        assert!(scan_classes("火".as_bytes()).is_none());
    }

    #[test]
    fn test_scan_classes_empty_has_no_flags() {
        let flags = scan_classes(b"").unwrap();
        assert!(!flags.any());
    }
}
