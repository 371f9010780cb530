//! Text normalization used to turn node content into a URI suffix.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, percent_encode, utf8_percent_encode};
use regex::Regex;

/// ASCII characters escaped in URI text: controls, DEL and URI delimiters.
const URI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'{2,}").expect("emphasis pattern is valid"));
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*?>").expect("tag pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("whitespace pattern is valid"));

/// Removes `''italic''` and `'''bold'''` markers. Single apostrophes stay.
pub fn remove_wiki_emphasis(text: &str) -> String {
    EMPHASIS.replace_all(text, "").into_owned()
}

/// Removes anything that looks like an HTML tag.
pub fn strip_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Collapses ASCII whitespace runs into single spaces and trims both ends.
///
/// Unicode spaces such as U+0085 or U+00A0 are left for escaping.
pub fn clean_space(text: &str) -> String {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    WHITESPACE.replace_all(trimmed, " ").into_owned()
}

/// Percent-escapes characters that may not appear in a URI path segment and
/// turns spaces into underscores. Other non-ASCII characters are kept.
pub fn escape_uri_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        match c {
            ' ' => out.push('_'),
            c if c.is_ascii() => {
                out.extend(utf8_percent_encode(c.encode_utf8(&mut buf), URI_UNSAFE));
            }
            '\u{80}'..='\u{9F}' => {
                out.extend(percent_encode(c.encode_utf8(&mut buf).as_bytes(), NON_ALPHANUMERIC));
            }
            c => out.push(c),
        }
    }
    out
}

/// Runs the full normalization pipeline and keeps at most `max_chars`
/// characters before escaping.
pub fn normalize_text(text: &str, max_chars: usize) -> String {
    let text = remove_wiki_emphasis(text).replace("&nbsp;", " ");
    let text: String = text
        .chars()
        .map(|c| match c {
            '(' | ')' | '\n' | '\r' | '\t' | '\u{91}' | '\u{92}' => ' ',
            c => c,
        })
        .collect();
    let text: String = strip_tags(&text)
        .chars()
        .filter(|c| !matches!(c, '!' | ',' | '.' | ':' | ';' | '?'))
        .collect();
    let text = clean_space(&text);
    let truncated: String = text.chars().take(max_chars).collect();
    escape_uri_text(&truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::italic("''word''", "word")]
    #[case::bold("'''word'''", "word")]
    #[case::bold_italic("'''''word'''''", "word")]
    #[case::apostrophe("O'Brien", "O'Brien")]
    fn test_remove_wiki_emphasis(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_wiki_emphasis(input), expected);
    }

    #[test]
    fn test_strip_tags_is_non_greedy() {
        assert_eq!(strip_tags("a<ref>b</ref>c<br/>"), "abc");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
    }

    #[test]
    fn test_clean_space() {
        assert_eq!(clean_space("  a \t b\n\nc  "), "a b c");
        assert_eq!(clean_space("   "), "");
        assert_eq!(clean_space("\u{85}a\u{A0}b"), "\u{85}a\u{A0}b");
    }

    #[rstest]
    #[case::space("a b", "a_b")]
    #[case::reserved("a#b%c", "a%23b%25c")]
    #[case::brackets("[x]{y}", "%5Bx%5D%7By%7D")]
    #[case::pipe_and_quote("a|\"b\"", "a%7C%22b%22")]
    #[case::control("a\u{1}b", "a%01b")]
    #[case::delete("a\u{7F}b", "a%7Fb")]
    #[case::c1_control("a\u{85}b", "a%C2%85b")]
    #[case::non_ascii("Zürich", "Zürich")]
    #[case::kept_ascii("a&b=c/d", "a&b=c/d")]
    fn test_escape_uri_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_uri_text(input), expected);
    }

    #[rstest]
    #[case::punctuation("Hello, World!", "Hello_World")]
    #[case::parentheses("Paris (France)", "Paris_France")]
    #[case::nbsp("10&nbsp;km", "10_km")]
    #[case::emphasis_and_tags("'''Bold''' text<br />", "Bold_text")]
    #[case::legacy_quotes("\u{91}quoted\u{92}", "quoted")]
    #[case::line_breaks("line\r\nbreak\tand tab", "line_break_and_tab")]
    #[case::next_line_is_escaped("a\u{85}b", "a%C2%85b")]
    #[case::nbsp_char_is_kept("a\u{A0}b", "a\u{A0}b")]
    #[case::vertical_tab_and_form_feed("a\x0B\x0Cb", "a_b")]
    fn test_normalize_text(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_text(input, 50), expected);
    }

    #[test]
    fn test_normalize_truncates_before_escaping() {
        let input = "a".repeat(49) + "#b";
        assert_eq!(normalize_text(&input, 50), "a".repeat(49) + "%23");

        let input = "x".repeat(80);
        assert_eq!(normalize_text(&input, 50).chars().count(), 50);
    }
}
