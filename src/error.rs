use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure in this crate is a local, synchronous contract violation: nothing is
/// transient, nothing is retried, and no operation leaves partially mutated state behind.
/// A silently wrong control flow graph would corrupt every downstream optimization pass,
/// so the kernel fails fast instead of masking malformed input.
///
/// # Error Categories
///
/// ## Graph Errors
/// - [`Error::InvalidVertexIndex`] - A query or mutation referenced a vertex index that is
///   out of range for the graph
/// - [`Error::CapacityExceeded`] - The requested vertex count cannot be represented by the
///   dense adjacency matrix
///
/// ## Control Flow Construction Errors
/// - [`Error::MalformedControlFlow`] - A terminator instruction references a block label
///   that does not exist in the module
/// - [`Error::UnknownBlock`] - A block label lookup on the module view failed
///
/// ## View Errors
/// - [`Error::EmptyViewAccess`] - `front` or `back` was called on an empty view
///
/// # Examples
///
/// ```rust
/// use cfgcore::{Error, LabeledDigraph, VertexId};
///
/// let mut graph = LabeledDigraph::new(2).unwrap();
/// match graph.add_edge(VertexId::new(0), VertexId::new(7)) {
///     Err(Error::InvalidVertexIndex { vertex, vertex_count }) => {
///         eprintln!("vertex {} out of range (graph has {})", vertex, vertex_count);
///     }
///     other => panic!("expected InvalidVertexIndex, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex index was out of range for the graph it was used with.
    ///
    /// Raised by every graph query or mutation that receives an index `>= vertex_count`.
    /// The operation is aborted before any state changes; the index is never clamped.
    #[error("Vertex index {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertexIndex {
        /// The offending vertex index.
        vertex: usize,
        /// The vertex count of the graph the index was used with.
        vertex_count: usize,
    },

    /// The requested vertex count cannot be represented.
    ///
    /// The adjacency storage is a dense V×V bit matrix; this error is returned when
    /// `V * V` overflows `usize` at construction time.
    #[error("Cannot allocate a dense adjacency matrix for {vertices} vertices")]
    CapacityExceeded {
        /// The vertex count that was requested.
        vertices: usize,
    },

    /// A terminator instruction references a block label that cannot be resolved.
    ///
    /// Construction of the control flow graph aborts and no partially built graph
    /// is returned.
    #[error("Block '{block}' has a terminator targeting unknown block '{target}'")]
    MalformedControlFlow {
        /// Label of the block whose terminator is malformed.
        block: String,
        /// The target label that could not be resolved.
        target: String,
    },

    /// A block label lookup on the module view failed.
    ///
    /// Surfaced by [`ModuleView::lookup_block`](crate::cfg::ModuleView::lookup_block)
    /// implementations when the named block is absent.
    #[error("No basic block with label '{0}'")]
    UnknownBlock(String),

    /// `front` or `back` was called on an empty view.
    ///
    /// Callers are expected to check [`View::is_empty`](crate::view::View::is_empty)
    /// before accessing the ends of a view.
    #[error("front/back access on an empty view")]
    EmptyViewAccess,
}
