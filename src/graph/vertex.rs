//! Vertex identifier implementation for the graph kernel.
//!
//! This module provides the [`VertexId`] type, a strongly-typed identifier for vertices
//! within a [`LabeledDigraph`](crate::graph::LabeledDigraph). The newtype wrapper prevents
//! accidental confusion between vertex indices and other integer values such as
//! instruction offsets or block-local counters.

use std::fmt;

/// A strongly-typed identifier for vertices within a directed graph.
///
/// `VertexId` wraps a `usize` index. Vertices are identified by dense integer indices
/// `0..vertex_count`, fixed when the graph is constructed; in the control-flow context
/// vertex `i` corresponds to the `i`-th basic block of the enclosing function.
///
/// # Examples
///
/// ```rust
/// use cfgcore::{LabeledDigraph, VertexId};
///
/// let mut graph = LabeledDigraph::new(2).unwrap();
/// let a = VertexId::new(0);
/// let b = VertexId::new(1);
/// graph.add_edge(a, b).unwrap();
/// assert!(graph.has_edge(a, b).unwrap());
/// ```
///
/// # Thread Safety
///
/// `VertexId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex identifier.
    ///
    /// The index is a 0-based position usable for indexing per-vertex side tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    /// Converts a raw `usize` index into a `VertexId`.
    ///
    /// The conversion does not validate the index against any graph.
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    /// Extracts the raw index from a `VertexId`.
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
