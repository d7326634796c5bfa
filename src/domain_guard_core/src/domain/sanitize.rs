//! Plain-text sanitizing for values submitted through admin forms.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*?>.*?</(script|style)>")
        .expect("script/style pattern is valid")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"));

static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[a-fA-F0-9]{2}").expect("octet pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Reduces arbitrary user input to a single line of plain text.
///
/// Markup is removed (script and style blocks together with their content),
/// a stray `<` left behind is encoded as `&lt;`, control characters and
/// whitespace runs collapse to single spaces, percent-encoded octets are
/// dropped and the result is trimmed. Sanitizing is total and idempotent.
pub fn sanitize_text_field(input: &str) -> String {
    let text = strip_tags(input).replace('<', "&lt;");
    let text: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let text = remove_percent_octets(&collapse_whitespace(&text));

    collapse_whitespace(&text).trim().to_string()
}

pub(crate) fn strip_tags(input: &str) -> String {
    let mut text = SCRIPT_OR_STYLE.replace_all(input, "").into_owned();
    loop {
        let stripped = TAG.replace_all(&text, "").into_owned();
        if stripped == text {
            return text;
        }
        text = stripped;
    }
}

pub(crate) fn remove_percent_octets(input: &str) -> String {
    let mut text = input.to_string();
    while PERCENT_OCTET.is_match(&text) {
        text = PERCENT_OCTET.replace_all(&text, "").into_owned();
    }
    text
}

pub(crate) fn collapse_whitespace(input: &str) -> String {
    WHITESPACE.replace_all(input, " ").into_owned()
}
