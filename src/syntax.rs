//! Syntax highlighting for fenced code blocks using syntect.
//!
//! The adapter is a lookup-or-pass-through: when a syntax is registered for
//! the fence's language tag the source is tokenized and formatted into
//! trusted markup; otherwise the source comes back unchanged and the caller
//! escapes it as plain text. An unknown language is never an error.
//!
//! The syntax and theme sets are loaded once per process. They are
//! configuration only, with no per-call state, so concurrent renders share
//! them safely.

use crate::error::Error;

/// Result of a highlight lookup.
///
/// When `matched` is false, `html` is the source unchanged and must still
/// be escaped by the caller. When true, `html` is trusted markup to emit
/// raw.
#[derive(Debug, Clone)]
pub(crate) struct Highlighted {
    pub matched: bool,
    pub html: String,
}

fn pass_through(source: &str) -> Highlighted {
    Highlighted {
        matched: false,
        html: source.to_owned(),
    }
}

#[cfg(feature = "highlighting")]
const CODE_HIGHLIGHT_THEME: &str = "InspiredGitHub";

/// Highlight `source` according to the fence language tag.
#[cfg(feature = "highlighting")]
pub(crate) fn highlight(source: &str, language: Option<&str>) -> Result<Highlighted, Error> {
    use std::sync::LazyLock;

    use syntect::highlighting::ThemeSet;
    use syntect::html::highlighted_html_for_string;
    use syntect::parsing::SyntaxSet;

    static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
    static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

    let Some(language) = language else {
        return Ok(pass_through(source));
    };
    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(language) else {
        tracing::trace!(language, "no syntax registered, passing source through");
        return Ok(pass_through(source));
    };
    // The default theme set always carries this theme; treat its absence
    // like an unknown language rather than failing the render.
    let Some(theme) = THEME_SET.themes.get(CODE_HIGHLIGHT_THEME) else {
        return Ok(pass_through(source));
    };

    let html = highlighted_html_for_string(source, &SYNTAX_SET, syntax, theme)?;
    Ok(Highlighted {
        matched: true,
        html: strip_pre_wrapper(&html).to_owned(),
    })
}

/// Highlight when the `highlighting` feature is disabled: always a
/// pass-through.
#[cfg(not(feature = "highlighting"))]
pub(crate) fn highlight(source: &str, _language: Option<&str>) -> Result<Highlighted, Error> {
    Ok(pass_through(source))
}

/// Syntect wraps its output in `<pre style="...">...</pre>`; the renderer
/// owns the `pre > code` structure, so only the inner spans are kept.
#[cfg(feature = "highlighting")]
fn strip_pre_wrapper(html: &str) -> &str {
    let start = html.find('>').map_or(0, |i| i + 1);
    let end = html.rfind("</pre>").unwrap_or(html.len());
    html.get(start..end).unwrap_or(html)
}

#[cfg(all(test, feature = "highlighting"))]
mod tests {
    use super::*;

    #[test]
    fn highlights_known_language() -> Result<(), Error> {
        let result = highlight("def foo\n  bar\nend\n", Some("ruby"))?;
        assert!(result.matched);
        assert!(
            result.html.contains("<span"),
            "highlighted output should contain token spans"
        );
        assert!(
            !result.html.contains("<pre"),
            "outer pre wrapper should be stripped"
        );
        Ok(())
    }

    #[test]
    fn unknown_language_passes_through() -> Result<(), Error> {
        let source = "some code here";
        let result = highlight(source, Some("nonexistentlang"))?;
        assert!(!result.matched);
        assert_eq!(result.html, source);
        Ok(())
    }

    #[test]
    fn absent_language_passes_through() -> Result<(), Error> {
        let result = highlight("plain\n", None)?;
        assert!(!result.matched);
        assert_eq!(result.html, "plain\n");
        Ok(())
    }
}
