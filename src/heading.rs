//! Heading anchor derivation.

use comrak::nodes::{AstNode, NodeValue};

/// Derive a URL-safe slug: lowercase, every maximal run of characters
/// outside `[a-z0-9]` collapses to a single hyphen, one trailing hyphen is
/// stripped. Pure and deterministic; duplicate headings produce duplicate
/// slugs, which is accepted.
#[must_use]
pub(crate) fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Slug for a heading node: flatten the text content of every text-bearing
/// descendant in document order (structural nodes are skipped, not errors)
/// and slug the result.
pub(crate) fn slug_for<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    slug(&text)
}

fn collect_text<'a>(node: &'a AstNode<'a>, buffer: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(literal) | NodeValue::HtmlInline(literal) => buffer.push_str(literal),
        NodeValue::Code(code) => buffer.push_str(&code.literal),
        _ => {}
    }
    for child in node.children() {
        collect_text(child, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::slug;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("C++ & Go!", "c-go")]
    #[case("1", "1")]
    #[case("Ticks aren't in", "ticks-aren-t-in")]
    #[case("  spaced  out  ", "-spaced-out")]
    #[case("UPPER lower", "upper-lower")]
    fn derives_expected_slugs(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slug(input), expected);
    }

    #[test]
    fn identical_text_is_not_disambiguated() {
        assert_eq!(slug("Stuff"), slug("Stuff"));
    }
}
