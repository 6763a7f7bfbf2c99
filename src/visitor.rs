//! Core dispatcher: walks the document tree depth-first and emits markup.

use comrak::nodes::{AstNode, NodeCodeBlock, NodeLink, NodeValue};

use crate::ast::node_kind;
use crate::builder::{Attributes, HtmlBuilder};
use crate::elements::{Element, Elements, ListKind};
use crate::error::Error;
use crate::heading;
use crate::syntax;
use crate::table::TableVisitor;

/// Walks a parsed tree and emits through the element hooks into the
/// builder substrate. Holds only call-scoped state; one visitor per render.
pub(crate) struct HtmlVisitor<'e, 'o, E: Elements> {
    elements: &'e mut E,
    out: &'o mut dyn HtmlBuilder,
    sanitize: bool,
}

impl<'e, 'o, E: Elements> HtmlVisitor<'e, 'o, E> {
    pub(crate) fn new(elements: &'e mut E, out: &'o mut dyn HtmlBuilder, sanitize: bool) -> Self {
        Self {
            elements,
            out,
            sanitize,
        }
    }

    /// Dispatch one node to its handler. Each node kind has exactly one
    /// handler; anything outside the closed enumeration aborts the render.
    pub(crate) fn visit<'a>(&mut self, node: &'a AstNode<'a>) -> Result<(), Error> {
        match &node.data.borrow().value {
            NodeValue::Document => self.visit_children(node),
            NodeValue::Text(literal) => {
                self.out.text(literal);
                Ok(())
            }
            NodeValue::SoftBreak => {
                self.out.text(" ");
                Ok(())
            }
            NodeValue::LineBreak => self.open(&Element::HardBreak),
            NodeValue::ThematicBreak => self.open(&Element::ThematicBreak),
            NodeValue::Escaped => self.visit_escaped(node),
            NodeValue::Heading(node_heading) => {
                let id = heading::slug_for(node);
                self.wrap_children(
                    node,
                    &Element::Heading {
                        level: node_heading.level,
                        id: &id,
                    },
                )
            }
            NodeValue::Paragraph => self.visit_paragraph(node),
            NodeValue::Link(link) => self.wrap_children(
                node,
                &Element::Link {
                    href: &link.url,
                    title: non_empty(&link.title),
                },
            ),
            NodeValue::Image(link) => self.visit_image(node, link),
            NodeValue::Emph => self.wrap_children(node, &Element::Emphasis),
            NodeValue::Strong => self.wrap_children(node, &Element::Strong),
            NodeValue::List(list) => {
                let kind = match list.list_type {
                    comrak::nodes::ListType::Ordered => ListKind::Ordered,
                    comrak::nodes::ListType::Bullet => ListKind::Unordered,
                };
                self.wrap_children(
                    node,
                    &Element::List {
                        kind,
                        start: list.start,
                    },
                )
            }
            NodeValue::Item(_) => self.wrap_children(node, &Element::ListItem),
            NodeValue::Code(code) => {
                let element = Element::InlineCode;
                self.open(&element)?;
                self.out.text(&code.literal);
                self.close(&element)
            }
            NodeValue::CodeBlock(block) => self.visit_code_block(block),
            NodeValue::BlockQuote => self.wrap_children(node, &Element::Blockquote),
            NodeValue::Table(_) => TableVisitor::new(self).visit(node),
            NodeValue::HtmlBlock(block) => self.visit_raw_html(&block.literal),
            NodeValue::HtmlInline(literal) => self.visit_raw_html(literal),
            NodeValue::TableRow(_) => Err(Error::MalformedNode {
                kind: "table-row",
                reason: "encountered outside of a table",
            }),
            NodeValue::TableCell => Err(Error::MalformedNode {
                kind: "table-cell",
                reason: "encountered outside of a table row",
            }),
            other => Err(Error::UnknownNodeType(node_kind(other))),
        }
    }

    pub(crate) fn visit_children<'a>(&mut self, node: &'a AstNode<'a>) -> Result<(), Error> {
        for child in node.children() {
            self.visit(child)?;
        }
        Ok(())
    }

    pub(crate) fn open(&mut self, element: &Element<'_>) -> Result<(), Error> {
        self.elements.open(element, Attributes::new(), self.out)
    }

    pub(crate) fn close(&mut self, element: &Element<'_>) -> Result<(), Error> {
        self.elements.close(element, self.out)
    }

    fn wrap_children<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        element: &Element<'_>,
    ) -> Result<(), Error> {
        self.open(element)?;
        self.visit_children(node)?;
        self.close(element)
    }

    /// Tight-list items suppress the implicit paragraph wrapper: when the
    /// grandparent is a list whose tightness flag is set, children render
    /// bare. The parent pointer is ancestry inspection only.
    fn visit_paragraph<'a>(&mut self, node: &'a AstNode<'a>) -> Result<(), Error> {
        let in_tight_list = node
            .parent()
            .and_then(|parent| parent.parent())
            .is_some_and(|grandparent| {
                matches!(
                    &grandparent.data.borrow().value,
                    NodeValue::List(list) if list.tight
                )
            });

        if in_tight_list {
            self.visit_children(node)
        } else {
            self.wrap_children(node, &Element::Paragraph)
        }
    }

    /// Backslash-escaped character: emit the literal from the wrapper's
    /// first child. An empty wrapper renders nothing.
    fn visit_escaped<'a>(&mut self, node: &'a AstNode<'a>) -> Result<(), Error> {
        if let Some(child) = node.first_child() {
            if let NodeValue::Text(literal) = &child.data.borrow().value {
                self.out.text(literal);
            }
        }
        Ok(())
    }

    /// Images are leaf-like: the first child supplies the alt text and no
    /// children are rendered.
    fn visit_image<'a>(&mut self, node: &'a AstNode<'a>, link: &NodeLink) -> Result<(), Error> {
        let first = node.first_child().ok_or(Error::MalformedNode {
            kind: "image",
            reason: "no child to derive alt text from",
        })?;
        let alt = match &first.data.borrow().value {
            NodeValue::Text(literal) => literal.clone(),
            _ => {
                return Err(Error::MalformedNode {
                    kind: "image",
                    reason: "first child carries no text content",
                })
            }
        };
        self.open(&Element::Image {
            src: &link.url,
            alt: &alt,
            title: non_empty(&link.title),
        })
    }

    fn visit_code_block(&mut self, block: &NodeCodeBlock) -> Result<(), Error> {
        let language = non_empty(&block.info);
        let highlighted = syntax::highlight(&block.literal, language)?;

        let element = Element::CodeBlock { language };
        self.open(&element)?;
        if highlighted.matched {
            // Trusted markup from the highlighter, not user text.
            self.out.raw(&highlighted.html);
        } else {
            self.out.text(&highlighted.html);
        }
        self.close(&element)
    }

    /// Raw HTML embedded in the source. Dropped under the sanitize gate
    /// (the default); emitted verbatim and unescaped otherwise.
    fn visit_raw_html(&mut self, literal: &str) -> Result<(), Error> {
        if self.sanitize {
            tracing::debug!("dropping embedded raw HTML (sanitize enabled)");
            return Ok(());
        }
        self.out.raw(literal);
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
