/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that rendered markup contains a fragment
#[macro_export]
macro_rules! assert_html_contains {
    ($html:expr, $fragment:expr) => {
        assert!(
            $html.contains($fragment),
            "Markup should contain '{}', but was:\n{}",
            $fragment,
            $html
        );
    };
}

/// Assert that rendered markup does NOT contain a fragment
#[macro_export]
macro_rules! assert_html_not_contains {
    ($html:expr, $fragment:expr) => {
        assert!(
            !$html.contains($fragment),
            "Markup should NOT contain '{}', but it was found in:\n{}",
            $fragment,
            $html
        );
    };
}
