//! Dense directed graph kernel: storage, traversal, and rendering.
//!
//! The centerpiece is [`LabeledDigraph`], a fixed-capacity directed graph over a
//! bit-matrix adjacency ([`BitMatrix`]) with a display label per vertex. Around it sit
//! the traversal engine ([`dfs`], [`Order`], the lazy [`Dfs`] iterator) and the DOT
//! text renderer.
//!
//! # Architecture
//!
//! - `vertex` — [`VertexId`], the typed vertex handle. A thin newtype over the dense
//!   index; conversions to and from `usize` are explicit.
//! - `matrix` — [`BitMatrix`], V×V adjacency packed into 64-bit words. Row scans give
//!   successors, column scans give predecessors, both in ascending order.
//! - `digraph` — [`LabeledDigraph`] and its edge/label/degree operations, plus
//!   [`reverse`](LabeledDigraph::reverse) and reachability.
//! - `traversal` — iterative depth-first search producing pre-order, post-order, and
//!   reverse post-order sequences, with optional unreachable-vertex sweeps.
//! - `dot` — string escaping for the DOT output grammar.
//!
//! # Thread Safety
//!
//! Every type here is plain owned data (`Send + Sync`). Shared mutation is the
//! caller's problem; typical use builds a graph once and traverses it read-only.

mod digraph;
mod dot;
mod matrix;
mod traversal;
mod vertex;

pub use digraph::{LabeledDigraph, Predecessors, Successors};
pub use dot::escape_dot;
pub use matrix::BitMatrix;
pub use traversal::{dfs, dfs_iter, postorder, preorder, reverse_postorder, Dfs, Order};
pub use vertex::VertexId;
