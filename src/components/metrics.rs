use regex::Regex;

type SavedRegex = std::sync::LazyLock<Regex>;

/// Word and character counts for a snapshot of the buffer. Always recomputed from scratch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub word_count: usize,
    pub char_count: usize,
}

/// The whitespace that separates words: space, tab, line feed, vertical tab, form feed and
/// carriage return. Non-breaking and other Unicode spaces count as ordinary characters.
pub fn is_separator(chr: char) -> bool {
    matches!(chr, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Count the words and characters in `text`.
///
/// Words are the tokens left after collapsing every run of separators into a single space.
/// With `include_spaces` the character count is the length of the raw text, otherwise every
/// separator is left out. Lengths are in `char`s, not bytes.
pub fn compute(text: &str, include_spaces: bool) -> TextMetrics {
    // blank means nothing but spaces and control characters
    if text.trim_matches(|chr: char| chr <= ' ').is_empty() {
        return TextMetrics::default();
    }

    static SEPARATOR_RUN_REGEX: SavedRegex =
        SavedRegex::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").unwrap());

    let normalized = SEPARATOR_RUN_REGEX.replace_all(text, " ");

    // leading or trailing separators leave an empty token at either end
    let word_count = normalized
        .split(' ')
        .filter(|token| !token.is_empty())
        .count();

    let char_count = if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|chr| !is_separator(*chr)).count()
    };

    TextMetrics {
        word_count,
        char_count,
    }
}

#[test]
fn test_compute_empty() {
    assert_eq!(compute("", false), TextMetrics::default());
    assert_eq!(compute("", true), TextMetrics::default());
    assert_eq!(compute("   \n\t", true), TextMetrics::default());
    assert_eq!(compute("   \n\t", false), TextMetrics::default());
    assert_eq!(compute("\x0B\x0C\r\n", false), TextMetrics::default());

    // control characters are blank too, even though they don't separate words
    assert_eq!(compute("\x01 \x00", true), TextMetrics::default());
}

#[test]
fn test_compute_unicode_spaces_are_characters() {
    assert_eq!(compute("a\u{a0}b", false), TextMetrics {
        word_count: 1,
        char_count: 3
    });
    assert_eq!(compute("\u{2003}", true), TextMetrics {
        word_count: 1,
        char_count: 1
    });
    assert_eq!(compute("\u{2003}\u{a0}\r\n", true), TextMetrics {
        word_count: 1,
        char_count: 4
    });
    assert_eq!(compute("\u{2003}\u{a0}\r\n", false).char_count, 2);
    assert_eq!(compute("one\u{85}two three", false).word_count, 2);
}

#[test]
fn test_compute_basic() {
    assert_eq!(compute("hello world", false).word_count, 2);
    assert_eq!(compute("hello world", false).char_count, 10);
    assert_eq!(compute("hello world", true).word_count, 2);
    assert_eq!(compute("hello world", true).char_count, 11);
}

#[test]
fn test_compute_whitespace_runs() {
    assert_eq!(compute("a  b   c", false).word_count, 3);
    assert_eq!(compute("a  b   c", true).word_count, 3);
    assert_eq!(compute("a\n\n\tb \r\n c", false).word_count, 3);
    assert_eq!(compute("a\n\n\tb \r\n c", false).char_count, 3);
    assert_eq!(compute("a\n\n\tb \r\n c", true).char_count, 10);
}

#[test]
fn test_compute_surrounding_whitespace() {
    assert_eq!(compute("   word   ", false).word_count, 1);
    assert_eq!(compute("   word   ", true).word_count, 1);
    assert_eq!(compute("   word   ", true).char_count, 10);
    assert_eq!(compute("\nword\n", false).char_count, 4);
}

#[test]
fn test_compute_counts_chars_not_bytes() {
    let metrics = compute("héllo wörld ✓", true);
    assert_eq!(metrics.word_count, 3);
    assert_eq!(metrics.char_count, 13);

    assert_eq!(compute("héllo wörld ✓", false).char_count, 11);
}

#[test]
fn test_toggle_only_changes_char_count() {
    for text in ["one", "one two", " a\tb\nc ", "trailing\n", "x  y  z"] {
        let without = compute(text, false);
        let with = compute(text, true);

        assert_eq!(without.word_count, with.word_count, "text: {text:?}");
        assert!(with.char_count >= without.char_count, "text: {text:?}");
    }
}

#[test]
fn test_compute_is_repeatable() {
    let text = "The quick brown fox\njumps over\tthe lazy dog.";
    assert_eq!(compute(text, false), compute(text, false));
    assert_eq!(compute(text, true), compute(text, true));
    assert_eq!(compute(text, false).word_count, 9);
}
