//! Labeled directed graph with dense edge storage.
//!
//! This module provides [`LabeledDigraph`], the graph representation shared by every
//! optimization pass in the middle end and back end. Each pass builds or receives its
//! own instance, traverses it, and drops it with the pass; no instance is shared across
//! passes.
//!
//! # Architecture
//!
//! Edges live in a dense V×V [`BitMatrix`], giving O(1) existence checks and trivial
//! transpose and equality semantics at the vertex counts this domain sees (basic blocks
//! per function, tens to low hundreds). Vertex labels are display strings only; they
//! carry no identity and do not participate in equality.
//!
//! # Examples
//!
//! ```rust
//! use cfgcore::{LabeledDigraph, VertexId};
//!
//! let mut graph = LabeledDigraph::new(3).unwrap();
//! graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
//! graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();
//!
//! let succ: Vec<_> = graph.successors(VertexId::new(0)).unwrap().collect();
//! assert_eq!(succ, vec![VertexId::new(1)]);
//! ```

use std::fmt::{self, Write};

use crate::{
    graph::{
        dot::escape_dot,
        matrix::{BitMatrix, ColIter, RowIter},
        VertexId,
    },
    Error, Result,
};

/// A directed graph with dense edge storage and per-vertex display labels.
///
/// The vertex count is fixed at construction; vertices are identified by dense integer
/// indices `0..vertex_count`. Edge insertion is idempotent: adding an edge that already
/// exists changes nothing, including the edge counter. Self-loops are representable and
/// not rejected.
///
/// # Equality
///
/// `PartialEq` compares vertex count, edge count, and the adjacency matrix only.
/// Labels are display metadata and deliberately do not participate, so structural
/// comparisons between graphs built by different passes remain meaningful.
///
/// # Thread Safety
///
/// `LabeledDigraph` is [`Send`] and [`Sync`], but defines no concurrent-mutation
/// contract; an instance is exclusively owned by the pass that built or received it.
/// [`reverse`](Self::reverse) returns a new, independently owned graph.
#[derive(Debug, Clone)]
pub struct LabeledDigraph {
    /// Dense adjacency: cell `(u, v)` is set iff edge `u -> v` exists.
    adjacency: BitMatrix,
    /// Display label per vertex, `"V<i>"` until overwritten.
    labels: Vec<String>,
    /// Number of distinct edges inserted so far. Never decremented.
    edge_count: usize,
}

impl LabeledDigraph {
    /// Creates a graph with the given vertex count, no edges, and default labels.
    ///
    /// Vertex `i` starts with the synthetic label `"V<i>"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the V×V adjacency matrix cannot be
    /// represented.
    pub fn new(vertex_count: usize) -> Result<Self> {
        let adjacency = BitMatrix::new(vertex_count).ok_or(Error::CapacityExceeded {
            vertices: vertex_count,
        })?;
        let labels = (0..vertex_count).map(|i| format!("V{i}")).collect();
        Ok(Self {
            adjacency,
            labels,
            edge_count: 0,
        })
    }

    /// Validates a vertex index against this graph.
    fn check(&self, vertex: VertexId) -> Result<usize> {
        let index = vertex.index();
        if index < self.vertex_count() {
            Ok(index)
        } else {
            Err(Error::InvalidVertexIndex {
                vertex: index,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns the number of vertices. Fixed at construction.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.adjacency.dim()
    }

    /// Returns the number of distinct edges inserted so far.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an iterator over all vertex ids, ascending.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count()).map(VertexId::new)
    }

    /// Inserts the edge `from -> to`.
    ///
    /// Idempotent: if the edge already exists this is a no-op and the edge counter is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if either endpoint is out of range; the
    /// graph is not modified in that case.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let u = self.check(from)?;
        let v = self.check(to)?;
        if !self.adjacency.contains(u, v) {
            self.adjacency.set(u, v);
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Returns `true` if the edge `from -> to` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if either endpoint is out of range.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        let u = self.check(from)?;
        let v = self.check(to)?;
        Ok(self.adjacency.contains(u, v))
    }

    /// Returns a lazy, restartable iterator over the successors of a vertex.
    ///
    /// Successors are yielded in ascending index order. The iterator borrows the graph
    /// and can be cloned to restart; as long as the graph is unchanged each run yields
    /// the same sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn successors(&self, vertex: VertexId) -> Result<Successors<'_>> {
        let u = self.check(vertex)?;
        Ok(Successors {
            inner: self.adjacency.row_iter(u),
        })
    }

    /// Returns a lazy, restartable iterator over the predecessors of a vertex.
    ///
    /// Predecessors are yielded in ascending index order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn predecessors(&self, vertex: VertexId) -> Result<Predecessors<'_>> {
        let v = self.check(vertex)?;
        Ok(Predecessors {
            inner: self.adjacency.col_iter(v),
        })
    }

    /// Returns the number of outgoing edges of a vertex.
    ///
    /// Recomputed on every call, so the answer stays correct after further edge
    /// insertions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.successors(vertex)?.count())
    }

    /// Returns the number of incoming edges of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.predecessors(vertex)?.count())
    }

    /// Alias for [`out_degree`](Self::out_degree): the length of the successor sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn successor_count(&self, vertex: VertexId) -> Result<usize> {
        self.out_degree(vertex)
    }

    /// Alias for [`in_degree`](Self::in_degree): the length of the predecessor sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn predecessor_count(&self, vertex: VertexId) -> Result<usize> {
        self.in_degree(vertex)
    }

    /// Returns a new graph with the same vertices and labels and the edge set
    /// transposed (`u -> v` becomes `v -> u`).
    ///
    /// Pure: `self` is not mutated. Labels are preserved so that reports rendered from
    /// the reversed graph stay readable.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            adjacency: self.adjacency.transpose(),
            labels: self.labels.clone(),
            edge_count: self.edge_count,
        }
    }

    /// Returns `true` if `to` is reachable from `from` by following edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if either endpoint is out of range.
    pub fn is_reachable(&self, from: VertexId, to: VertexId) -> Result<bool> {
        let start = self.check(from)?;
        let target = self.check(to)?;
        if start == target {
            return Ok(true);
        }

        let mut visited = vec![false; self.vertex_count()];
        visited[start] = true;
        let mut worklist = vec![start];

        while let Some(current) = worklist.pop() {
            for succ in self.adjacency.row_iter(current) {
                if succ == target {
                    return Ok(true);
                }
                if !visited[succ] {
                    visited[succ] = true;
                    worklist.push(succ);
                }
            }
        }

        Ok(false)
    }

    /// Overwrites the display label of a vertex.
    ///
    /// No uniqueness constraint is enforced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn set_vertex_label(&mut self, vertex: VertexId, label: impl Into<String>) -> Result<()> {
        let index = self.check(vertex)?;
        self.labels[index] = label.into();
        Ok(())
    }

    /// Returns the current display label of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertexIndex`] if `vertex` is out of range.
    pub fn vertex_label(&self, vertex: VertexId) -> Result<&str> {
        let index = self.check(vertex)?;
        Ok(&self.labels[index])
    }

    /// Writes the DOT description of this graph into `sink`.
    ///
    /// The output is a `digraph {` header line, one `<index> [label="..."];` statement
    /// per vertex in ascending index order, one `<source> -> <destination>;` statement
    /// per edge in ascending `(source, destination)` order, and a `}` footer line.
    /// Existing report tooling parses exactly this statement set and ordering.
    ///
    /// Pure serialization; the graph is not modified.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the sink.
    pub fn render<W: Write>(&self, sink: &mut W) -> fmt::Result {
        writeln!(sink, "digraph {{")?;
        for (index, label) in self.labels.iter().enumerate() {
            writeln!(sink, "    {index} [label=\"{}\"];", escape_dot(label))?;
        }
        for u in 0..self.vertex_count() {
            for v in self.adjacency.row_iter(u) {
                writeln!(sink, "    {u} -> {v};")?;
            }
        }
        writeln!(sink, "}}")
    }

    /// Returns the DOT description of this graph as a string.
    ///
    /// Convenience wrapper over [`render`](Self::render) for the reporting
    /// collaborator, which owns writing the text to storage and embedding any
    /// rendered image.
    #[must_use]
    pub fn render_as_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.render(&mut out);
        out
    }
}

/// Structural equality: vertex count, edge count, and adjacency. Labels are ignored.
impl PartialEq for LabeledDigraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count == other.edge_count
            && self.adjacency == other.adjacency
    }
}

impl Eq for LabeledDigraph {}

impl fmt::Display for LabeledDigraph {
    /// Formats the graph as its DOT description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Lazy iterator over the successors of a vertex, ascending by index.
///
/// Restartable: cloning the iterator restarts the scan from the beginning.
#[derive(Clone)]
pub struct Successors<'a> {
    inner: RowIter<'a>,
}

impl Iterator for Successors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(VertexId::new)
    }
}

/// Lazy iterator over the predecessors of a vertex, ascending by index.
///
/// Restartable: cloning the iterator restarts the scan from the beginning.
#[derive(Clone)]
pub struct Predecessors<'a> {
    inner: ColIter<'a>,
}

impl Iterator for Predecessors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(VertexId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_new_graph_defaults() {
        let graph = LabeledDigraph::new(3).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_label(v(0)).unwrap(), "V0");
        assert_eq!(graph.vertex_label(v(2)).unwrap(), "V2");
        assert!(!graph.has_edge(v(0), v(1)).unwrap());
    }

    #[test]
    fn test_zero_vertex_graph() {
        let graph = LabeledDigraph::new(0).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.has_edge(v(0), v(0)).is_err());
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut graph = LabeledDigraph::new(3).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge(v(0), v(1)).unwrap());
        assert!(graph.has_edge(v(1), v(2)).unwrap());
    }

    #[test]
    fn test_add_edge_self_loop() {
        let mut graph = LabeledDigraph::new(2).unwrap();
        graph.add_edge(v(1), v(1)).unwrap();
        assert!(graph.has_edge(v(1), v(1)).unwrap());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_invalid_index_leaves_graph_unchanged() {
        let mut graph = LabeledDigraph::new(2).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();

        let err = graph.add_edge(v(5), v(0)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidVertexIndex {
                vertex: 5,
                vertex_count: 2
            }
        ));
        assert_eq!(graph.edge_count(), 1);

        assert!(graph.add_edge(v(0), v(2)).is_err());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_successors_ascending_and_restartable() {
        let mut graph = LabeledDigraph::new(5).unwrap();
        graph.add_edge(v(1), v(4)).unwrap();
        graph.add_edge(v(1), v(0)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();

        let succ = graph.successors(v(1)).unwrap();
        let first: Vec<_> = succ.clone().collect();
        assert_eq!(first, vec![v(0), v(2), v(4)]);
        let second: Vec<_> = succ.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predecessors_ascending() {
        let mut graph = LabeledDigraph::new(4).unwrap();
        graph.add_edge(v(3), v(1)).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(2), v(1)).unwrap();

        let preds: Vec<_> = graph.predecessors(v(1)).unwrap().collect();
        assert_eq!(preds, vec![v(0), v(2), v(3)]);
    }

    #[test]
    fn test_degrees_track_insertions() {
        let mut graph = LabeledDigraph::new(3).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        assert_eq!(graph.out_degree(v(0)).unwrap(), 1);
        assert_eq!(graph.in_degree(v(1)).unwrap(), 1);

        graph.add_edge(v(0), v(2)).unwrap();
        assert_eq!(graph.out_degree(v(0)).unwrap(), 2);
        assert_eq!(graph.successor_count(v(0)).unwrap(), 2);
        assert_eq!(graph.predecessor_count(v(2)).unwrap(), 1);
        assert_eq!(graph.in_degree(v(0)).unwrap(), 0);
    }

    #[test]
    fn test_reverse_transposes_and_preserves_labels() {
        let mut graph = LabeledDigraph::new(3).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();
        graph.set_vertex_label(v(0), "entry").unwrap();

        let rev = graph.reverse();
        assert!(rev.has_edge(v(1), v(0)).unwrap());
        assert!(rev.has_edge(v(2), v(1)).unwrap());
        assert!(!rev.has_edge(v(0), v(1)).unwrap());
        assert_eq!(rev.edge_count(), 2);
        assert_eq!(rev.vertex_label(v(0)).unwrap(), "entry");

        // Original untouched
        assert!(graph.has_edge(v(0), v(1)).unwrap());
    }

    #[test]
    fn test_reverse_involution() {
        let mut graph = LabeledDigraph::new(4).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(1)).unwrap();
        graph.add_edge(v(2), v(3)).unwrap();
        graph.set_vertex_label(v(3), "exit").unwrap();

        let round_trip = graph.reverse().reverse();
        assert_eq!(round_trip, graph);
        assert_eq!(round_trip.vertex_label(v(3)).unwrap(), "exit");
    }

    #[test]
    fn test_reverse_swaps_successor_and_predecessor_sets() {
        let mut graph = LabeledDigraph::new(4).unwrap();
        graph.add_edge(v(0), v(2)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();
        graph.add_edge(v(2), v(3)).unwrap();

        let rev = graph.reverse();
        for u in graph.vertex_ids() {
            let succ_in_rev: Vec<_> = rev.successors(u).unwrap().collect();
            let pred_in_orig: Vec<_> = graph.predecessors(u).unwrap().collect();
            assert_eq!(succ_in_rev, pred_in_orig);

            let pred_in_rev: Vec<_> = rev.predecessors(u).unwrap().collect();
            let succ_in_orig: Vec<_> = graph.successors(u).unwrap().collect();
            assert_eq!(pred_in_rev, succ_in_orig);
        }
    }

    #[test]
    fn test_equality_ignores_labels() {
        let mut a = LabeledDigraph::new(2).unwrap();
        let mut b = LabeledDigraph::new(2).unwrap();
        a.add_edge(v(0), v(1)).unwrap();
        b.add_edge(v(0), v(1)).unwrap();
        b.set_vertex_label(v(0), "completely different").unwrap();
        assert_eq!(a, b);

        b.add_edge(v(1), v(0)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_requires_same_vertex_count() {
        let a = LabeledDigraph::new(2).unwrap();
        let b = LabeledDigraph::new(3).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_reachable() {
        let mut graph = LabeledDigraph::new(4).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.add_edge(v(1), v(2)).unwrap();

        assert!(graph.is_reachable(v(0), v(2)).unwrap());
        assert!(graph.is_reachable(v(1), v(1)).unwrap());
        assert!(!graph.is_reachable(v(2), v(0)).unwrap());
        assert!(!graph.is_reachable(v(0), v(3)).unwrap());
        assert!(graph.is_reachable(v(0), v(9)).is_err());
    }

    #[test]
    fn test_set_vertex_label() {
        let mut graph = LabeledDigraph::new(2).unwrap();
        graph.set_vertex_label(v(1), "loop.header").unwrap();
        assert_eq!(graph.vertex_label(v(1)).unwrap(), "loop.header");
        assert!(graph.set_vertex_label(v(2), "nope").is_err());
    }

    #[test]
    fn test_render_statement_set_and_order() {
        let mut graph = LabeledDigraph::new(3).unwrap();
        graph.add_edge(v(1), v(0)).unwrap();
        graph.add_edge(v(0), v(2)).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        graph.set_vertex_label(v(0), "entry").unwrap();

        let text = graph.render_as_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "digraph {",
                "    0 [label=\"entry\"];",
                "    1 [label=\"V1\"];",
                "    2 [label=\"V2\"];",
                "    0 -> 1;",
                "    0 -> 2;",
                "    1 -> 0;",
                "}",
            ]
        );
    }

    #[test]
    fn test_render_escapes_labels() {
        let mut graph = LabeledDigraph::new(1).unwrap();
        graph.set_vertex_label(v(0), "a \"quoted\" label").unwrap();
        let text = graph.render_as_text();
        assert!(text.contains("0 [label=\"a \\\"quoted\\\" label\"];"));
    }

    #[test]
    fn test_display_matches_render() {
        let mut graph = LabeledDigraph::new(2).unwrap();
        graph.add_edge(v(0), v(1)).unwrap();
        assert_eq!(format!("{graph}"), graph.render_as_text());
    }
}
