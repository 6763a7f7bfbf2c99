//! Markup emission substrate.
//!
//! The renderer never serializes or escapes output itself; it emits tag
//! calls through [`HtmlBuilder`] and leaves representation to the
//! substrate. [`HtmlWriter`] is the default substrate: an in-memory HTML5
//! serializer producing compact output (no whitespace between elements
//! beyond what input nodes imply).

use std::borrow::Cow;

/// Ordered set of element attributes with merge semantics.
///
/// `set` replaces an existing attribute, except `class`, which accumulates
/// space-separated. This is the seam that lets an [`Elements`] override
/// inject extra attributes without clobbering the ones the base emission
/// derives from the node.
///
/// [`Elements`]: crate::Elements
#[derive(Debug, Clone, Default)]
pub struct Attributes(Vec<(Cow<'static, str>, String)>);

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the same name.
    /// A `class` attribute appends to the existing class list instead.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some((_, existing)) = self.0.iter_mut().find(|(n, _)| *n == name) {
            if name == "class" && !existing.is_empty() {
                existing.push(' ');
                existing.push_str(&value);
            } else {
                *existing = value;
            }
        } else {
            self.0.push((name, value));
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder-style class merge.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.with("class", value)
    }

    /// Merge `other` into `self` attribute by attribute.
    pub fn extend(&mut self, other: Attributes) {
        for (name, value) in other.0 {
            self.set(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Minimal emission contract the renderer calls into.
///
/// Escaping text and attribute values is the substrate's responsibility;
/// `raw` receives markup the renderer already trusts (highlighter output,
/// unsanitized embedded HTML) and must pass it through untouched.
pub trait HtmlBuilder {
    /// Open `tag` with the given attributes. Void elements (`br`, `hr`,
    /// `img`) are opened and never closed.
    fn open(&mut self, tag: &str, attrs: &Attributes);

    fn close(&mut self, tag: &str);

    /// Emit text content; the substrate escapes it.
    fn text(&mut self, text: &str);

    /// Emit trusted markup verbatim.
    fn raw(&mut self, html: &str);
}

/// Default substrate: serializes emissions into a `String`.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    buffer: String,
}

impl HtmlWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn into_html(self) -> String {
        self.buffer
    }

    fn push_escaped(&mut self, value: &str) {
        for ch in value.chars() {
            match ch {
                '&' => self.buffer.push_str("&amp;"),
                '<' => self.buffer.push_str("&lt;"),
                '>' => self.buffer.push_str("&gt;"),
                '"' => self.buffer.push_str("&quot;"),
                _ => self.buffer.push(ch),
            }
        }
    }
}

impl HtmlBuilder for HtmlWriter {
    fn open(&mut self, tag: &str, attrs: &Attributes) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        for (name, value) in attrs.iter() {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.push_escaped(value);
            self.buffer.push('"');
        }
        self.buffer.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    fn text(&mut self, text: &str) {
        self.push_escaped(text);
    }

    fn raw(&mut self, html: &str) {
        self.buffer.push_str(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_tags_and_escaped_text() {
        let mut out = HtmlWriter::new();
        out.open("p", &Attributes::new());
        out.text("a < b & c");
        out.close("p");
        assert_eq!(out.as_str(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn escapes_attribute_values() {
        let mut out = HtmlWriter::new();
        out.open("a", &Attributes::new().with("href", r#"x?a=1&b="2""#));
        out.close("a");
        assert_eq!(out.as_str(), r#"<a href="x?a=1&amp;b=&quot;2&quot;"></a>"#);
    }

    #[test]
    fn raw_passes_through_unescaped() {
        let mut out = HtmlWriter::new();
        out.raw("<span>hi</span>");
        assert_eq!(out.as_str(), "<span>hi</span>");
    }

    #[test]
    fn class_attributes_merge() {
        let attrs = Attributes::new().class("highlight").class("language-ruby");
        let mut out = HtmlWriter::new();
        out.open("code", &attrs);
        assert_eq!(out.as_str(), r#"<code class="highlight language-ruby">"#);
    }

    #[test]
    fn non_class_attributes_replace() {
        let attrs = Attributes::new().with("id", "a").with("id", "b");
        let mut out = HtmlWriter::new();
        out.open("h1", &attrs);
        assert_eq!(out.as_str(), r#"<h1 id="b">"#);
    }
}
