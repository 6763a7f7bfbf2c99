//! Overridable element emission.
//!
//! Every element the renderer produces goes through the [`Elements`] trait.
//! The default implementation of each method is the base emission in
//! [`defaults`]; a custom implementation can intercept the elements it
//! cares about, merge extra attributes, and hand the element back to
//! [`defaults::open`] — decorating the base output without reimplementing
//! any traversal.
//!
//! ```
//! use castmark::{defaults, Attributes, Element, Elements, Error, HtmlBuilder};
//!
//! struct Themed;
//!
//! impl Elements for Themed {
//!     fn open(
//!         &mut self,
//!         element: &Element<'_>,
//!         attrs: Attributes,
//!         out: &mut dyn HtmlBuilder,
//!     ) -> Result<(), Error> {
//!         let attrs = match element {
//!             Element::Heading { level: 1, .. } => attrs.class("font-bold text-xl"),
//!             _ => attrs,
//!         };
//!         defaults::open(element, attrs, out)
//!     }
//! }
//! ```

use crate::builder::{Attributes, HtmlBuilder};
use crate::error::Error;

/// Kind of a list node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// One renderable element, carrying the semantic payload its base emission
/// derives standard attributes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Paragraph,
    /// Heading of the given level (1–6) with its derived slug.
    Heading { level: u8, id: &'a str },
    Blockquote,
    /// `start` is the first ordered-list number; ignored for unordered lists.
    List { kind: ListKind, start: usize },
    ListItem,
    InlineCode,
    /// The `pre > code` pair; supplied attributes land on the `pre`, while
    /// the `code` carries the `highlight`/`language-*` classes.
    CodeBlock { language: Option<&'a str> },
    /// Void.
    ThematicBreak,
    /// Void.
    HardBreak,
    Link {
        href: &'a str,
        title: Option<&'a str>,
    },
    /// Void; children of the node are consumed as alt text, not rendered.
    Image {
        src: &'a str,
        alt: &'a str,
        title: Option<&'a str>,
    },
    Emphasis,
    Strong,
    Table,
    TableHead,
    TableBody,
    TableRow,
    HeaderCell,
    Cell,
}

/// Hook for customizing element emission.
///
/// Both methods default to the base emissions; see the module docs for the
/// decoration pattern. Overrides that skip `defaults::open`/`close` take
/// over the element's markup entirely but must keep open/close balanced.
pub trait Elements {
    fn open(
        &mut self,
        element: &Element<'_>,
        attrs: Attributes,
        out: &mut dyn HtmlBuilder,
    ) -> Result<(), Error> {
        defaults::open(element, attrs, out)
    }

    fn close(&mut self, element: &Element<'_>, out: &mut dyn HtmlBuilder) -> Result<(), Error> {
        defaults::close(element, out)
    }
}

/// The stock emission with no decoration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultElements;

impl Elements for DefaultElements {}

/// Base emissions, callable from [`Elements`] overrides.
pub mod defaults {
    use super::{Attributes, Element, Error, HtmlBuilder, ListKind};

    fn heading_tag(level: u8) -> &'static str {
        match level {
            1 => "h1",
            2 => "h2",
            3 => "h3",
            4 => "h4",
            5 => "h5",
            _ => "h6",
        }
    }

    fn emit(
        out: &mut dyn HtmlBuilder,
        tag: &str,
        mut base: Attributes,
        extra: Attributes,
    ) -> Result<(), Error> {
        base.extend(extra);
        out.open(tag, &base);
        Ok(())
    }

    /// Emit the opening markup for `element`, merging `attrs` over the
    /// attributes derived from the element itself.
    pub fn open(
        element: &Element<'_>,
        attrs: Attributes,
        out: &mut dyn HtmlBuilder,
    ) -> Result<(), Error> {
        match element {
            Element::Paragraph => emit(out, "p", Attributes::new(), attrs),
            Element::Heading { level, id } => {
                emit(out, heading_tag(*level), Attributes::new().with("id", *id), attrs)
            }
            Element::Blockquote => emit(out, "blockquote", Attributes::new(), attrs),
            Element::List {
                kind: ListKind::Ordered,
                start,
            } => {
                let mut base = Attributes::new();
                if *start > 1 {
                    base.set("start", start.to_string());
                }
                emit(out, "ol", base, attrs)
            }
            Element::List {
                kind: ListKind::Unordered,
                ..
            } => emit(out, "ul", Attributes::new(), attrs),
            Element::ListItem => emit(out, "li", Attributes::new(), attrs),
            Element::InlineCode => emit(out, "code", Attributes::new(), attrs),
            Element::CodeBlock { language } => {
                emit(out, "pre", Attributes::new(), attrs)?;
                let mut class = String::from("highlight");
                if let Some(language) = language {
                    class.push_str(" language-");
                    class.push_str(language);
                }
                out.open("code", &Attributes::new().class(class));
                Ok(())
            }
            Element::ThematicBreak => emit(out, "hr", Attributes::new(), attrs),
            Element::HardBreak => emit(out, "br", Attributes::new(), attrs),
            Element::Link { href, title } => {
                let mut base = Attributes::new().with("href", *href);
                if let Some(title) = title {
                    base.set("title", *title);
                }
                emit(out, "a", base, attrs)
            }
            Element::Image { src, alt, title } => {
                let mut base = Attributes::new().with("src", *src).with("alt", *alt);
                if let Some(title) = title {
                    base.set("title", *title);
                }
                emit(out, "img", base, attrs)
            }
            Element::Emphasis => emit(out, "em", Attributes::new(), attrs),
            Element::Strong => emit(out, "strong", Attributes::new(), attrs),
            Element::Table => emit(out, "table", Attributes::new(), attrs),
            Element::TableHead => emit(out, "thead", Attributes::new(), attrs),
            Element::TableBody => emit(out, "tbody", Attributes::new(), attrs),
            Element::TableRow => emit(out, "tr", Attributes::new(), attrs),
            Element::HeaderCell => emit(out, "th", Attributes::new(), attrs),
            Element::Cell => emit(out, "td", Attributes::new(), attrs),
        }
    }

    /// Emit the closing markup for `element`. Void elements close nothing.
    pub fn close(element: &Element<'_>, out: &mut dyn HtmlBuilder) -> Result<(), Error> {
        match element {
            Element::Paragraph => out.close("p"),
            Element::Heading { level, .. } => out.close(heading_tag(*level)),
            Element::Blockquote => out.close("blockquote"),
            Element::List {
                kind: ListKind::Ordered,
                ..
            } => out.close("ol"),
            Element::List {
                kind: ListKind::Unordered,
                ..
            } => out.close("ul"),
            Element::ListItem => out.close("li"),
            Element::InlineCode => out.close("code"),
            Element::CodeBlock { .. } => {
                out.close("code");
                out.close("pre");
            }
            Element::ThematicBreak | Element::HardBreak | Element::Image { .. } => {}
            Element::Link { .. } => out.close("a"),
            Element::Emphasis => out.close("em"),
            Element::Strong => out.close("strong"),
            Element::Table => out.close("table"),
            Element::TableHead => out.close("thead"),
            Element::TableBody => out.close("tbody"),
            Element::TableRow => out.close("tr"),
            Element::HeaderCell => out.close("th"),
            Element::Cell => out.close("td"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HtmlWriter;
    use pretty_assertions::assert_eq;

    fn open_to_string(element: &Element<'_>, attrs: Attributes) -> String {
        let mut out = HtmlWriter::new();
        #[allow(clippy::expect_used)]
        defaults::open(element, attrs, &mut out).expect("base emission is infallible");
        out.into_html()
    }

    #[test]
    fn heading_merges_extra_attributes_after_id() {
        let html = open_to_string(
            &Element::Heading {
                level: 1,
                id: "hello",
            },
            Attributes::new().class("title"),
        );
        assert_eq!(html, r#"<h1 id="hello" class="title">"#);
    }

    #[test]
    fn code_block_opens_pre_and_code() {
        let html = open_to_string(
            &Element::CodeBlock {
                language: Some("ruby"),
            },
            Attributes::new(),
        );
        assert_eq!(html, r#"<pre><code class="highlight language-ruby">"#);
    }

    #[test]
    fn bare_fence_gets_no_language_class() {
        let html = open_to_string(&Element::CodeBlock { language: None }, Attributes::new());
        assert_eq!(html, r#"<pre><code class="highlight">"#);
    }

    #[test]
    fn ordered_list_start_attribute_only_past_one() {
        assert_eq!(
            open_to_string(
                &Element::List {
                    kind: ListKind::Ordered,
                    start: 1
                },
                Attributes::new()
            ),
            "<ol>"
        );
        assert_eq!(
            open_to_string(
                &Element::List {
                    kind: ListKind::Ordered,
                    start: 3
                },
                Attributes::new()
            ),
            r#"<ol start="3">"#
        );
    }

    #[test]
    fn empty_titles_are_omitted() {
        let html = open_to_string(
            &Element::Link {
                href: "world",
                title: None,
            },
            Attributes::new(),
        );
        assert_eq!(html, r#"<a href="world">"#);
    }
}
