//! The decoration contract: a custom `Elements` implementation injects
//! attributes and still invokes the base emission, without touching
//! traversal.

use castmark::{
    defaults, Attributes, Element, Elements, Error, HtmlBuilder, ListKind, Options, Renderer,
};
use pretty_assertions::assert_eq;

struct Themed;

impl Elements for Themed {
    fn open(
        &mut self,
        element: &Element<'_>,
        attrs: Attributes,
        out: &mut dyn HtmlBuilder,
    ) -> Result<(), Error> {
        let attrs = match element {
            Element::Heading { level: 1, .. } => attrs.class("font-bold text-xl"),
            Element::List {
                kind: ListKind::Unordered,
                ..
            } => attrs.class("ml-4 pt-2"),
            Element::CodeBlock { .. } => attrs.class("terminal"),
            _ => attrs,
        };
        defaults::open(element, attrs, out)
    }
}

fn themed(input: &str) -> Result<String, Error> {
    Renderer::with_elements(Options::default(), Themed).render(input)
}

#[test]
fn decorated_headings_keep_their_derived_id() -> Result<(), Error> {
    assert_eq!(
        themed("# Hello World\n")?,
        r#"<h1 id="hello-world" class="font-bold text-xl">Hello World</h1>"#
    );
    Ok(())
}

#[test]
fn decorated_lists_merge_classes_into_base_emission() -> Result<(), Error> {
    assert_eq!(
        themed("# Hello World\n\n- A\n- B\n- C\n")?,
        r#"<h1 id="hello-world" class="font-bold text-xl">Hello World</h1><ul class="ml-4 pt-2"><li>A</li><li>B</li><li>C</li></ul>"#
    );
    Ok(())
}

#[test]
fn code_block_decoration_lands_on_the_pre() -> Result<(), Error> {
    assert_eq!(
        themed("```nonexistentlang\nx\n```\n")?,
        "<pre class=\"terminal\"><code class=\"highlight language-nonexistentlang\">x\n</code></pre>"
    );
    Ok(())
}

#[test]
fn undecorated_elements_use_the_stock_markup() -> Result<(), Error> {
    assert_eq!(themed("Plain *text*.\n")?, "<p>Plain <em>text</em>.</p>");
    Ok(())
}
