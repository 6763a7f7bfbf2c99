//! Table reconstruction.
//!
//! The parse tree represents a table as a flat sequence of row and cell
//! nodes with no row-position markers, so header/body structure has to be
//! rebuilt during traversal. The sub-visitor carries one piece of state for
//! exactly one table node; nested tables inside cells go back through the
//! core dispatcher and get their own instance.

use comrak::nodes::{AstNode, NodeValue};

use crate::elements::{Element, Elements};
use crate::error::Error;
use crate::visitor::HtmlVisitor;

/// Where the traversal currently stands within the table.
///
/// The flip to `InBodyRows` happens only after the header row's closing
/// structure has been emitted, because cells consult the state at visit
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowState {
    AwaitingHeader,
    InHeaderRow,
    InBodyRows,
}

pub(crate) struct TableVisitor<'c, 'e, 'o, E: Elements> {
    core: &'c mut HtmlVisitor<'e, 'o, E>,
    state: RowState,
}

impl<'c, 'e, 'o, E: Elements> TableVisitor<'c, 'e, 'o, E> {
    pub(crate) fn new(core: &'c mut HtmlVisitor<'e, 'o, E>) -> Self {
        Self {
            core,
            state: RowState::AwaitingHeader,
        }
    }

    /// Render a complete table. Finishes when the table node's children
    /// are exhausted; no partial emission.
    pub(crate) fn visit<'a>(&mut self, table: &'a AstNode<'a>) -> Result<(), Error> {
        self.core.open(&Element::Table)?;
        for child in table.children() {
            match &child.data.borrow().value {
                NodeValue::TableRow(header) => self.visit_row(child, *header)?,
                _ => {
                    return Err(Error::MalformedNode {
                        kind: "table",
                        reason: "child is not a table row",
                    })
                }
            }
        }
        if self.state == RowState::InBodyRows {
            self.core.close(&Element::TableBody)?;
        }
        self.core.close(&Element::Table)
    }

    fn visit_row<'a>(&mut self, row: &'a AstNode<'a>, header: bool) -> Result<(), Error> {
        if self.state == RowState::AwaitingHeader {
            // The first row is the header unless the parser's explicit
            // marker says otherwise.
            if header {
                self.core.open(&Element::TableHead)?;
                self.state = RowState::InHeaderRow;
            } else {
                self.core.open(&Element::TableBody)?;
                self.state = RowState::InBodyRows;
            }
        }

        self.core.open(&Element::TableRow)?;
        for cell in row.children() {
            match &cell.data.borrow().value {
                NodeValue::TableCell => self.visit_cell(cell)?,
                _ => {
                    return Err(Error::MalformedNode {
                        kind: "table-row",
                        reason: "child is not a table cell",
                    })
                }
            }
        }
        self.core.close(&Element::TableRow)?;

        if self.state == RowState::InHeaderRow {
            self.core.close(&Element::TableHead)?;
            self.core.open(&Element::TableBody)?;
            self.state = RowState::InBodyRows;
        }
        Ok(())
    }

    /// Cells inherit the row's header/body status; their content renders
    /// through the core dispatcher so inline behavior (text, code, strong,
    /// links, the sanitize gate) matches the rest of the document.
    fn visit_cell<'a>(&mut self, cell: &'a AstNode<'a>) -> Result<(), Error> {
        let element = if self.state == RowState::InHeaderRow {
            Element::HeaderCell
        } else {
            Element::Cell
        };
        self.core.open(&element)?;
        self.core.visit_children(cell)?;
        self.core.close(&element)
    }
}
