//! Depth-first traversal over [`LabeledDigraph`].
//!
//! This module produces the ordered vertex sequences that seed dataflow fixed-point
//! iteration in the optimization passes: pre-order, post-order, and reverse post-order.
//! Traversal state (visited markers, output sequence) is ephemeral per invocation and
//! never persisted on the graph.
//!
//! # Determinism
//!
//! Successor enumeration is ascending by index, and the unreachable-vertex restarts
//! scan in ascending index order, so every sequence produced here is fully
//! deterministic for a given graph and parameters. Reproducible pass output and
//! testing both depend on this.
//!
//! # Examples
//!
//! ```rust
//! use cfgcore::{dfs, LabeledDigraph, Order, VertexId};
//!
//! let mut graph = LabeledDigraph::new(3).unwrap();
//! graph.add_edge(VertexId::new(0), VertexId::new(1)).unwrap();
//! graph.add_edge(VertexId::new(1), VertexId::new(2)).unwrap();
//!
//! let order = dfs(&graph, Order::Post, VertexId::new(0), false).unwrap();
//! assert_eq!(order, vec![VertexId::new(2), VertexId::new(1), VertexId::new(0)]);
//! ```

use crate::{graph::LabeledDigraph, Error, Result, VertexId};

/// The vertex ordering produced by a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// A vertex is emitted the moment it is first visited, before its successors are
    /// explored.
    Pre,
    /// A vertex is emitted after all of its reachable successors have been fully
    /// explored.
    Post,
    /// The [`Post`](Self::Post) sequence, reversed as a final step. Not a separate
    /// traversal; it is the exact mirror image of post-order.
    ReversePost,
}

/// Lazy depth-first pre-order iterator over graph vertices.
///
/// Performs an iterative (non-recursive) depth-first walk starting from a given
/// vertex, visiting each reachable vertex exactly once. Unvisited successors are
/// pushed in reverse so that they are explored in ascending index order.
///
/// Construct with [`dfs_iter`]. The iterator is [`Clone`]; cloning restarts nothing
/// (it snapshots the current position), but a fresh call to [`dfs_iter`] on an
/// unchanged graph replays the identical sequence.
#[derive(Clone)]
pub struct Dfs<'g> {
    graph: &'g LabeledDigraph,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'g> Dfs<'g> {
    fn new(graph: &'g LabeledDigraph, start: VertexId) -> Result<Self> {
        if start.index() >= graph.vertex_count() {
            return Err(Error::InvalidVertexIndex {
                vertex: start.index(),
                vertex_count: graph.vertex_count(),
            });
        }

        let mut visited = vec![false; graph.vertex_count()];
        visited[start.index()] = true;

        Ok(Dfs {
            graph,
            stack: vec![start],
            visited,
        })
    }
}

impl Iterator for Dfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;

        // Push unvisited successors in reverse so the lowest index is explored first.
        // Indices were validated at construction, so the successor query cannot fail.
        let successors: Vec<VertexId> = self
            .graph
            .successors(vertex)
            .into_iter()
            .flatten()
            .collect();
        for &succ in successors.iter().rev() {
            if !self.visited[succ.index()] {
                self.visited[succ.index()] = true;
                self.stack.push(succ);
            }
        }

        Some(vertex)
    }
}

/// Returns a lazy depth-first pre-order iterator starting from `start`.
///
/// Vertices not reachable from `start` are not visited. Restartable by calling
/// `dfs_iter` again; on an unchanged graph each call yields the same sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidVertexIndex`] if `start` is out of range, which includes
/// every start vertex on a graph with zero vertices.
pub fn dfs_iter(graph: &LabeledDigraph, start: VertexId) -> Result<Dfs<'_>> {
    Dfs::new(graph, start)
}

/// Runs a depth-first search and returns the vertex sequence in the requested order.
///
/// The traversal starts at `start` and marks each vertex visited at most once. With
/// `visit_unreachable` set, once the initial walk completes the remaining vertices are
/// scanned in ascending index order and a fresh walk is launched from the first
/// unvisited one, repeating until every vertex appears exactly once. With it unset,
/// only vertices reachable from `start` appear.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `order` - Pre, post, or reverse post-order
/// * `start` - The starting vertex
/// * `visit_unreachable` - Whether to restart the walk on unreachable vertices
///
/// # Errors
///
/// Returns [`Error::InvalidVertexIndex`] if `start` is out of range, which includes
/// every start vertex on a graph with zero vertices.
///
/// # Complexity
///
/// O(V²) on the dense adjacency scan (O(V + E) vertex work on top of O(V) per-row
/// successor scans).
pub fn dfs(
    graph: &LabeledDigraph,
    order: Order,
    start: VertexId,
    visit_unreachable: bool,
) -> Result<Vec<VertexId>> {
    if start.index() >= graph.vertex_count() {
        return Err(Error::InvalidVertexIndex {
            vertex: start.index(),
            vertex_count: graph.vertex_count(),
        });
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut result = Vec::with_capacity(graph.vertex_count());

    walk(graph, order, start, &mut visited, &mut result);

    if visit_unreachable {
        // Restart at the lowest-index unvisited vertex until all are covered.
        while let Some(next) = visited.iter().position(|&seen| !seen) {
            walk(graph, order, VertexId::new(next), &mut visited, &mut result);
        }
    }

    if order == Order::ReversePost {
        result.reverse();
    }

    Ok(result)
}

/// One depth-first walk from `start`, appending to `result` per the order rule.
///
/// Reverse post-order is accumulated as plain post-order here; the caller reverses
/// the completed sequence as the final step.
fn walk(
    graph: &LabeledDigraph,
    order: Order,
    start: VertexId,
    visited: &mut [bool],
    result: &mut Vec<VertexId>,
) {
    enum State {
        Enter,
        Exit,
    }

    let mut stack = vec![(start, State::Enter)];

    while let Some((vertex, state)) = stack.pop() {
        match state {
            State::Enter => {
                if visited[vertex.index()] {
                    continue;
                }
                visited[vertex.index()] = true;

                if order == Order::Pre {
                    result.push(vertex);
                } else {
                    stack.push((vertex, State::Exit));
                }

                // Push successors in reverse so the lowest index is explored first.
                // Indices were validated by the caller, so the query cannot fail.
                let successors: Vec<VertexId> = graph
                    .successors(vertex)
                    .into_iter()
                    .flatten()
                    .collect();
                for &succ in successors.iter().rev() {
                    if !visited[succ.index()] {
                        stack.push((succ, State::Enter));
                    }
                }
            }
            State::Exit => result.push(vertex),
        }
    }
}

/// Pre-order over the vertices reachable from `start`.
///
/// # Errors
///
/// Returns [`Error::InvalidVertexIndex`] if `start` is out of range.
pub fn preorder(graph: &LabeledDigraph, start: VertexId) -> Result<Vec<VertexId>> {
    dfs(graph, Order::Pre, start, false)
}

/// Post-order over the vertices reachable from `start`.
///
/// # Errors
///
/// Returns [`Error::InvalidVertexIndex`] if `start` is out of range.
pub fn postorder(graph: &LabeledDigraph, start: VertexId) -> Result<Vec<VertexId>> {
    dfs(graph, Order::Post, start, false)
}

/// Reverse post-order over the vertices reachable from `start`.
///
/// The preferred iteration order for forward dataflow analysis: in an acyclic region
/// every vertex appears before its successors.
///
/// # Errors
///
/// Returns [`Error::InvalidVertexIndex`] if `start` is out of range.
pub fn reverse_postorder(graph: &LabeledDigraph, start: VertexId) -> Result<Vec<VertexId>> {
    dfs(graph, Order::ReversePost, start, false)
}
