/// Edge cases run against every engine
use wordfilter::{Engine, FilterSource, Wordfilter};

fn filters(words: &[&str]) -> Vec<Wordfilter> {
    Engine::ALL
        .iter()
        .map(|&engine| {
            let words = words.iter().map(|w| w.to_string()).collect();
            Wordfilter::with_engine(FilterSource::Words(words), engine).unwrap()
        })
        .collect()
}

fn check(words: &[&str], cases: &[(&str, bool)]) {
    for wf in filters(words) {
        for &(input, expected) in cases {
            assert_eq!(
                wf.blacklisted(input),
                expected,
                "{} failed for: {input:?}",
                wf.engine()
            );
        }
    }
}

#[test]
fn test_empty_word_list() {
    check(&[], &[("anything", false), ("", false)]);
}

#[test]
fn test_empty_string_input() {
    check(&["test", "word"], &[("", false)]);
}

#[test]
fn test_empty_entry_matches_every_text() {
    check(&[""], &[("", true), ("anything at all", true)]);

    for mut wf in filters(&["custom"]) {
        wf.add_words("").unwrap();
        assert!(wf.blacklisted("unrelated"), "{}", wf.engine());
        wf.remove_words("").unwrap();
        assert!(!wf.blacklisted("unrelated"), "{}", wf.engine());
    }
}

#[test]
fn test_single_character_words() {
    check(
        &["a", "b", "x"],
        &[("a", true), ("B", true), ("test a test", true), ("c", false)],
    );
}

#[test]
fn test_unicode_characters() {
    check(
        &["café", "日本語", "🔥"],
        &[
            ("café", true),
            ("CAFÉ", true),
            ("日本語", true),
            ("🔥", true),
            ("test 🔥 test", true),
            ("cafe", false),
        ],
    );
}

#[test]
fn test_special_characters_are_literal() {
    check(
        &["test@email.com", "hello-world", "under_score", "dots.in.word", "a+b"],
        &[
            ("test@email.com", true),
            ("hello-world", true),
            ("under_score", true),
            ("dots.in.word", true),
            ("dotsXinXword", false),
            ("a+b", true),
            ("aab", false),
        ],
    );
}

#[test]
fn test_very_long_strings() {
    let mut long_string = "a".repeat(10000);
    long_string.push_str(" needle");
    let no_match = "b".repeat(10000);
    check(&["needle"], &[(long_string.as_str(), true), (no_match.as_str(), false)]);
}

#[test]
fn test_case_insensitivity() {
    check(
        &["CaseSensitive", "UPPERCASE"],
        &[
            ("casesensitive", true),
            ("CASESENSITIVE", true),
            ("CaSeSenSiTive", true),
            ("uppercase", true),
        ],
    );
}

#[test]
fn test_whitespace_handling() {
    check(
        &["word"],
        &[(" word ", true), ("\tword\t", true), ("\nword\n", true), ("word\r\n", true)],
    );
}

#[test]
fn test_substring_matching() {
    check(
        &["ass"],
        &[("ass", true), ("class", true), ("assorted", true), ("CLASSIC", true), ("as s", false)],
    );
}

#[test]
fn test_large_word_list() {
    let words: Vec<String> = (0..5000).map(|i| format!("word{i}")).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    check(
        &refs,
        &[
            ("word0", true),
            ("word4999", true),
            ("word2500", true),
            ("notaword", false),
        ],
    );
}

#[test]
fn test_duplicate_words() {
    for wf in filters(&["duplicate", "DUPLICATE", "other"]) {
        assert_eq!(wf.len(), 2);
        assert!(wf.blacklisted("duplicate"));
        assert!(wf.blacklisted("other"));
    }
}

#[test]
fn test_overlapping_entries() {
    for mut wf in filters(&["bad", "badger"]) {
        wf.remove_words("bad").unwrap();
        assert!(!wf.blacklisted("bad"), "{}", wf.engine());
        assert!(wf.blacklisted("honey badger"), "{}", wf.engine());
    }
}

#[test]
fn test_multiline_strings() {
    check(
        &["secret"],
        &[("line 1\nline 2 with secret\nline 3", true), ("line 1\nline 2\nline 3", false)],
    );
}

#[test]
fn test_very_long_word() {
    let long_word = "a".repeat(1000);
    let shorter = "a".repeat(999);
    check(&[long_word.as_str()], &[(long_word.as_str(), true), (shorter.as_str(), false)]);
}

#[test]
fn test_consecutive_matches() {
    check(&["bad"], &[("badbad", true), ("bad bad bad", true)]);
}

#[test]
fn test_clear_then_query_every_engine() {
    for mut wf in filters(&["one", "two"]) {
        wf.clear_list();
        assert!(wf.is_empty());
        assert!(!wf.blacklisted("one two"), "{}", wf.engine());
        wf.add_words(vec!["three"]).unwrap();
        assert!(wf.blacklisted("THREE"), "{}", wf.engine());
    }
}
