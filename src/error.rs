#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The dispatcher met a node kind outside the closed enumeration it
    /// knows how to render. This indicates a parser/engine mismatch (for
    /// example an extension enabled through the parser options bag without
    /// a corresponding handler) and aborts the whole render.
    #[error("unknown node type: {0}")]
    UnknownNodeType(String),

    /// A list node carried a kind that is neither ordered nor unordered.
    ///
    /// Not constructible from a comrak tree (its `ListType` is closed over
    /// exactly those two kinds); kept in the public taxonomy for front ends
    /// feeding the builder substrate directly.
    #[error("unknown list kind: {0}")]
    UnknownListKind(String),

    /// A node is missing a field the renderer requires, e.g. an image node
    /// with no child to derive alt text from. Raised at the point of field
    /// access, never pre-validated.
    #[error("malformed {kind} node: {reason}")]
    MalformedNode {
        kind: &'static str,
        reason: &'static str,
    },

    #[cfg(feature = "highlighting")]
    #[error(transparent)]
    Highlight(#[from] syntect::Error),
}
