//! Plain-text parser for vocabulary lists.
//!
//! # Format
//! ```text
//! # comment lines and blank lines are skipped
//! cat:noun:a small animal:The cat slept.
//! run:verb:move quickly
//! happy：adjective：feeling joy
//! ```
//!
//! Each line is `word:type:meaning[:example]`. Full-width colons are accepted.
//! Colons inside the example are preserved.

use crate::types::VocabularyEntry;

const FIELD_SEPARATOR: char = ':';
const FULL_WIDTH_SEPARATOR: char = '：';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whitespace, plus the byte order mark some editors put at the start of a file.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Parse raw text into vocabulary entries.
///
/// Invalid lines are dropped silently; an empty result means the input had no
/// valid entries.
pub fn parse(content: &str) -> Vec<VocabularyEntry> {
    content
        .lines()
        .filter_map(|line| match classify(line) {
            LineType::Entry(text) => parse_entry(&text),
            LineType::Comment | LineType::Empty => None,
        })
        .collect()
}

enum LineType {
    Entry(String),
    Comment,
    Empty,
}

fn classify(line: &str) -> LineType {
    let trimmed = trim(line);

    if trimmed.is_empty() {
        LineType::Empty
    } else if trimmed.starts_with('#') {
        LineType::Comment
    } else {
        LineType::Entry(trimmed.replace(FULL_WIDTH_SEPARATOR, ":"))
    }
}

fn parse_entry(line: &str) -> Option<VocabularyEntry> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let word = trim(fields.next()?);
    let word_type = trim(fields.next()?);
    let meaning = trim(fields.next()?);
    let example = fields.collect::<Vec<_>>().join(":");

    if word.is_empty() || meaning.is_empty() {
        return None;
    }

    Some(VocabularyEntry::new(word, word_type, meaning, trim(&example)))
}

/// Render entries back into the text format accepted by [`parse`].
pub fn serialize(entries: &[VocabularyEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let mut line = format!("{}:{}:{}", entry.word, entry.word_type, entry.meaning);
            if !entry.example.is_empty() {
                line.push(':');
                line.push_str(&entry.example);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn parse_mixed_input() {
        let input = "cat:noun:a small animal:The cat slept.\n# comment\n\nbad-line";
        let entries = parse(input);
        assert_eq!(
            entries,
            vec![VocabularyEntry::new(
                "cat",
                "noun",
                "a small animal",
                "The cat slept."
            )]
        );
    }

    #[test]
    fn parse_without_example() {
        let entries = parse("run:verb:move quickly");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].example, "");
    }

    #[test]
    fn full_width_colons_are_normalized() {
        assert_eq!(parse("foo：bar：baz"), parse("foo:bar:baz"));
        assert_eq!(parse("foo：bar:baz").len(), 1);
    }

    #[test]
    fn example_keeps_inner_colons() {
        let entries = parse("time:noun:a measure:Time: 10:30 am");
        assert_eq!(entries[0].example, "Time: 10:30 am");
    }

    #[test]
    fn fields_are_trimmed() {
        let entries = parse("   dog :  noun  : a pet :  Dogs bark.  ");
        assert_eq!(
            entries[0],
            VocabularyEntry::new("dog", "noun", "a pet", "Dogs bark.")
        );
    }

    #[test]
    fn empty_type_is_allowed() {
        let entries = parse("sun::the star at the centre");
        assert_eq!(entries[0].word_type, "");
    }

    #[test]
    fn drop_lines_missing_word_or_meaning() {
        assert!(parse(":noun:meaning").is_empty());
        assert!(parse("word:noun:  ").is_empty());
        assert!(parse("word:noun").is_empty());
    }

    #[test]
    fn indented_comment_is_skipped() {
        assert!(parse("   # cat:noun:not really").is_empty());
    }

    #[test]
    fn preserves_line_order() {
        let entries = parse("b:noun:second\na:noun:first");
        let words: Vec<_> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a"]);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n# only comments\n").is_empty());
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        let entries = parse("\u{FEFF}cat:noun:a small animal\n\u{FEFF}  dog :noun: a pet\u{FEFF}");
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[1], VocabularyEntry::new("dog", "noun", "a pet", ""));
    }

    #[test]
    fn serialize_then_parse_is_stable() {
        let input = "cat:noun:a small animal:The cat: a pet.\n# skip\nrun：verb：move fast\n  sun  :: star ";
        let first = parse(input);
        assert_eq!(parse(&serialize(&first)), first);
    }

    fn vocabulary_text() -> impl Strategy<Value = String> {
        prop_oneof![
            "[ab#:：\\- \t\r\n\u{FEFF}]{0,80}",
            any::<String>(),
        ]
    }

    proptest! {
        #[test]
        fn every_entry_has_word_and_meaning(text in vocabulary_text()) {
            for entry in parse(&text) {
                prop_assert!(!entry.word.trim().is_empty());
                prop_assert!(!entry.meaning.trim().is_empty());
            }
        }

        #[test]
        fn reparsing_serialized_entries_is_identity(text in vocabulary_text()) {
            let first = parse(&text);
            prop_assert_eq!(parse(&serialize(&first)), first);
        }
    }
}
