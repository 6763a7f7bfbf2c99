//! Markdown to HTML rendering engine with overridable element emission.
//!
//! The engine walks the document tree produced by [`comrak`] and emits
//! markup through two seams:
//!
//! - [`Elements`] — one hook per renderable element. The default
//!   implementation of every hook is the base emission in [`defaults`], so
//!   a custom implementation can inject attributes (a class, an id) and
//!   still invoke the stock markup — decorate, don't replace.
//! - [`HtmlBuilder`] — the markup substrate receiving tag calls. The
//!   bundled [`HtmlWriter`] serializes to a compact in-memory string and
//!   owns all escaping; the engine itself never escapes output text.
//!
//! Raw HTML embedded in the source is dropped unless the sanitize gate is
//! explicitly opened. Fenced code blocks are highlighted through syntect
//! when a syntax matches the fence language, and fall back to escaped
//! plain text otherwise.
//!
//! ```
//! # fn main() -> Result<(), castmark::Error> {
//! let html = castmark::to_html("# Hello World")?;
//! assert_eq!(html, r#"<h1 id="hello-world">Hello World</h1>"#);
//! # Ok(())
//! # }
//! ```

mod ast;
mod builder;
mod elements;
mod error;
mod heading;
mod syntax;
mod table;
mod visitor;

pub use ast::default_options;
pub use builder::{Attributes, HtmlBuilder, HtmlWriter};
pub use elements::{defaults, DefaultElements, Element, Elements, ListKind};
pub use error::Error;

// Callers tweak the parser pass-through bag with comrak's own types.
pub use comrak;

use visitor::HtmlVisitor;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// When true (the default), raw HTML embedded in the Markdown source is
    /// dropped silently. Setting this to false emits it verbatim and
    /// unescaped, trusting the caller to have sanitized the input.
    pub sanitize: bool,
    /// Parser options forwarded verbatim to comrak, pre-seeded with the
    /// fixed set the renderer relies on (see [`default_options`]).
    pub markdown: comrak::Options<'static>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sanitize: true,
            markdown: default_options(),
        }
    }
}

/// The rendering engine.
///
/// All traversal state is scoped to a single `render` call; a `Renderer`
/// holds only configuration and the element hooks, so independent renderers
/// may run concurrently on independent threads.
#[derive(Debug, Clone, Default)]
pub struct Renderer<E: Elements = DefaultElements> {
    options: Options,
    elements: E,
}

impl Renderer<DefaultElements> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            elements: DefaultElements,
        }
    }
}

impl<E: Elements> Renderer<E> {
    /// Build a renderer around custom element hooks.
    pub fn with_elements(options: Options, elements: E) -> Self {
        Self { options, elements }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Toggle the raw-HTML sanitize gate.
    #[must_use]
    pub fn sanitize(mut self, sanitize: bool) -> Self {
        self.options.sanitize = sanitize;
        self
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Render a Markdown document to an HTML string.
    ///
    /// Output is built into a fresh buffer; on any error the buffer is
    /// discarded, so a failed render emits nothing.
    pub fn render(&mut self, markdown: &str) -> Result<String, Error> {
        let mut out = HtmlWriter::new();
        self.render_to(markdown, &mut out)?;
        Ok(out.into_html())
    }

    /// Render into an external builder substrate.
    ///
    /// On error the substrate may have received a partial emission; the
    /// buffer is the caller's to discard.
    pub fn render_to(&mut self, markdown: &str, out: &mut dyn HtmlBuilder) -> Result<(), Error> {
        tracing::debug!(
            len = markdown.len(),
            sanitize = self.options.sanitize,
            "rendering markdown document"
        );
        let arena = comrak::Arena::new();
        let root = ast::parse(&arena, markdown, &self.options.markdown);
        HtmlVisitor::new(&mut self.elements, out, self.options.sanitize).visit(root)
    }
}

/// Render with default options: sanitized raw HTML, GFM tables enabled.
pub fn to_html(markdown: &str) -> Result<String, Error> {
    Renderer::new().render(markdown)
}
