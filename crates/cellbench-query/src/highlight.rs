//! Match highlighting for rendered search results.

use regex::RegexBuilder;

const OPEN: &str = "<mark>";
const CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of `query` in `<mark>` tags.
///
/// The query is matched literally. An empty query returns the text unchanged.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures<'_>| {
                format!("{OPEN}{}{CLOSE}", &caps[0])
            })
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_highlight_keeps_original_case() {
        assert_eq!(
            highlight("Immune cells from the immune system", "IMMUNE"),
            "<mark>Immune</mark> cells from the <mark>immune</mark> system"
        );
    }

    #[test]
    fn test_highlight_matches_literally() {
        assert_eq!(highlight("t-SNE (2D)", "(2d)"), "t-SNE <mark>(2D)</mark>");
        assert_eq!(highlight("a.b axb", "."), "a<mark>.</mark>b axb");
    }

    #[test]
    fn test_empty_query_or_no_match() {
        assert_eq!(highlight("scVI", ""), "scVI");
        assert_eq!(highlight("scVI", "peak"), "scVI");
    }
}
