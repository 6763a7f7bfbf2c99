//! Parse adapter over comrak.
//!
//! The engine does not parse Markdown itself; it walks the tree comrak
//! produces. This module owns the fixed option set the engine relies on
//! (GFM quirks, the table extension, escaped-character nodes) while leaving
//! the rest of the options bag for callers to adjust.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options};

/// Parser options pre-seeded with everything the renderer depends on.
///
/// - `extension.table`: tables surface as table/row/cell nodes;
/// - `render.gfm_quirks`: match GitHub's rendering quirks;
/// - `render.escaped_char_spans`: backslash escapes surface as `Escaped`
///   nodes so the renderer can emit the literal character (the parser
///   consults this render option when building the tree).
#[must_use]
pub fn default_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.render.gfm_quirks = true;
    options.render.escaped_char_spans = true;
    options
}

/// Parse `source` into a document tree allocated in `arena`.
///
/// The returned root (and every node under it) lives only as long as the
/// arena; the renderer creates one arena per render call, so no node
/// outlives the render.
pub fn parse<'a>(
    arena: &'a Arena<AstNode<'a>>,
    source: &str,
    options: &Options<'_>,
) -> &'a AstNode<'a> {
    comrak::parse_document(arena, source, options)
}

/// Short tag name for a node value, used in `UnknownNodeType` messages.
///
/// Derived from the debug representation with any payload stripped, so a
/// `Strikethrough` node reports as `Strikethrough`, not its full contents.
pub(crate) fn node_kind(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    match debug.find(['(', '{', ' ']) {
        Some(end) => debug[..end].trim().to_owned(),
        None => debug,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_tables() {
        let options = default_options();
        assert!(options.extension.table);
        assert!(options.render.gfm_quirks);
        assert!(options.render.escaped_char_spans);
    }

    #[test]
    fn node_kind_strips_payload() {
        assert_eq!(node_kind(&NodeValue::Text("hi".into())), "Text");
        assert_eq!(node_kind(&NodeValue::Document), "Document");
    }
}
