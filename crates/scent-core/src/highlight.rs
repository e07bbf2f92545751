//! Highlighting of literally typed terms inside display text.

use regex::{Regex, RegexBuilder};

/// A run of display text, marked when it matched a typed term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub hit: bool,
}

impl<'a> Span<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, hit: false }
    }
}

/// Case-insensitive alternation over `terms`, longest first so "sandalwood"
/// wins over "sandal". `None` when there is nothing to highlight.
pub fn term_pattern(terms: &[String]) -> Option<Regex> {
    let mut terms: Vec<&str> = terms.iter().map(String::as_str).filter(|t| !t.is_empty()).collect();
    if terms.is_empty() {
        return None;
    }
    terms.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    terms.dedup();

    let alternation = terms.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
    match RegexBuilder::new(&alternation).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(%err, "highlight: pattern rejected, rendering plain");
            None
        }
    }
}

/// Split `text` into plain and hit spans. Concatenating the span texts
/// always yields `text` again.
pub fn spans<'a>(text: &'a str, terms: &[String]) -> Vec<Span<'a>> {
    match term_pattern(terms) {
        Some(re) => spans_with(&re, text),
        None if text.is_empty() => Vec::new(),
        None => vec![Span::plain(text)],
    }
}

/// [`spans`] with a prebuilt pattern, for rendering many fields per pass.
pub fn spans_with<'a>(re: &Regex, text: &'a str) -> Vec<Span<'a>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            out.push(Span::plain(&text[last..m.start()]));
        }
        out.push(Span { text: m.as_str(), hit: true });
        last = m.end();
    }
    if last < text.len() {
        out.push(Span::plain(&text[last..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn terms(t: &[&str]) -> Vec<String> {
        t.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn marks_case_insensitive_hits() {
        let got = spans("Mysore Sandalwood", &terms(&["sandal"]));
        assert_eq!(
            got,
            vec![
                Span { text: "Mysore ", hit: false },
                Span { text: "Sandal", hit: true },
                Span { text: "wood", hit: false },
            ]
        );
    }

    #[test]
    fn longest_term_wins() {
        let got = spans("Sandalwood", &terms(&["sandal", "sandalwood"]));
        assert_eq!(got, vec![Span { text: "Sandalwood", hit: true }]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let got = spans("Eau (EDP) 1.5", &terms(&["(edp)", "1.5"]));
        let hits: Vec<&str> = got.iter().filter(|s| s.hit).map(|s| s.text).collect();
        assert_eq!(hits, vec!["(EDP)", "1.5"]);
    }

    #[test]
    fn no_terms_is_one_plain_span() {
        assert_eq!(spans("Oud", &[]), vec![Span { text: "Oud", hit: false }]);
        assert!(spans("", &[]).is_empty());
    }

    proptest! {
        #[test]
        fn spans_reassemble_text(text in "\\PC{0,40}", t in "[a-z]{1,3}") {
            let joined: String = spans(&text, &[t]).iter().map(|s| s.text).collect();
            prop_assert_eq!(joined, text);
        }
    }
}
