// Copyright 2026 cfgcore contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # cfgcore
//!
//! A compact control-flow-graph kernel for compiler middle ends: a dense labeled
//! directed graph, depth-first traversal orders, and a builder that derives the graph
//! from basic-block terminators. Built in pure Rust with no runtime dependencies
//! beyond error derivation.
//!
//! ## Features
//!
//! - **Dense adjacency storage** - V×V bit matrix, O(1) edge insert and query
//! - **Typed vertex handles** - [`VertexId`] keeps raw indices out of signatures
//! - **Traversal orders** - pre-order, post-order, and reverse post-order over an
//!   iterative engine, with optional sweeps over unreachable vertices
//! - **CFG construction** - one vertex per basic block, edges decoded from jump and
//!   branch terminators through the [`cfg::ModuleView`] collaborator interface
//! - **Lazy sequences** - the [`View`] trait family composes cheap, restartable
//!   pipelines over traversal output without materializing collections
//! - **DOT rendering** - graphs print as `digraph { .. }` text for quick inspection
//!
//! ## Quick Start
//!
//! ```rust
//! use cfgcore::prelude::*;
//!
//! let mut graph = LabeledDigraph::new(3)?;
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! graph.add_edge(VertexId::new(1), VertexId::new(2))?;
//!
//! let order = reverse_postorder(&graph, VertexId::new(0))?;
//! assert_eq!(order, vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
//! # Ok::<(), cfgcore::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `cfgcore` is organized into three layers:
//!
//! - [`graph`] - the storage and algorithm kernel: [`LabeledDigraph`], [`BitMatrix`],
//!   the traversal engine, and DOT rendering
//! - [`cfg`] - terminator decoding and [`cfg::build_cfg`], which maps an IR module
//!   onto the kernel
//! - [`view`] - lazy sequence adapters ([`RangeView`], [`MapView`], [`IterView`])
//!   shared by traversal consumers
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Index validation is
//! fail-fast: an out-of-range [`VertexId`] surfaces as
//! [`Error::InvalidVertexIndex`] before any state changes.
//!
//! ```rust
//! use cfgcore::{Error, LabeledDigraph, VertexId};
//!
//! let graph = LabeledDigraph::new(2)?;
//! match graph.has_edge(VertexId::new(0), VertexId::new(9)) {
//!     Err(Error::InvalidVertexIndex { vertex, vertex_count }) => {
//!         assert_eq!((vertex, vertex_count), (9, 2));
//!     }
//!     other => panic!("expected an index error, got {other:?}"),
//! }
//! # Ok::<(), cfgcore::Error>(())
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use cfgcore::prelude::*;
///
/// let graph = LabeledDigraph::new(4)?;
/// assert_eq!(graph.vertex_count(), 4);
/// # Ok::<(), cfgcore::Error>(())
/// ```
pub mod prelude;

/// Dense directed graph storage, traversal algorithms, and DOT rendering.
///
/// # Key Types
///
/// - [`LabeledDigraph`] - fixed-capacity directed graph with per-vertex labels
/// - [`VertexId`] - typed handle into the graph's dense index space
/// - [`Order`] - the traversal order selector for [`graph::dfs`]
///
/// # Examples
///
/// ```rust
/// use cfgcore::{LabeledDigraph, Order, VertexId, graph::dfs};
///
/// let mut graph = LabeledDigraph::new(2)?;
/// graph.add_edge(VertexId::new(0), VertexId::new(1))?;
/// let post = dfs(&graph, Order::Post, VertexId::new(0), false)?;
/// assert_eq!(post, vec![VertexId::new(1), VertexId::new(0)]);
/// # Ok::<(), cfgcore::Error>(())
/// ```
pub mod graph;

/// Control flow graph construction from basic-block terminators.
///
/// The [`cfg::build_cfg`] entry point consumes any IR object model through the
/// [`cfg::ModuleView`] and [`cfg::BlockView`] traits and produces a
/// [`LabeledDigraph`] with one vertex per block.
pub mod cfg;

/// Lazy, restartable sequence adapters.
///
/// The [`View`] trait abstracts over cheaply cloneable sequences: borrow a slice with
/// [`RangeView`], wrap any cloneable iterator with [`IterView`], and compose
/// element-wise transforms with [`View::map`]. Iteration never consumes the view.
pub mod view;

/// `cfgcore` Result type.
///
/// A type alias for [`std::result::Result<T, Error>`] used by every fallible
/// operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// `cfgcore` Error type.
///
/// Covers index validation, capacity limits, malformed control flow during CFG
/// construction, and empty-sequence access. See the [`error category
/// docs`](Error) for the full breakdown.
pub use error::Error;

/// The graph kernel's core types, re-exported at the crate root.
///
/// [`LabeledDigraph`] is the main entry point; [`VertexId`] addresses its vertices,
/// and [`Successors`]/[`Predecessors`] are the lazy adjacency iterators it hands out.
pub use graph::{BitMatrix, LabeledDigraph, Predecessors, Successors, VertexId};

/// Traversal entry points, re-exported at the crate root.
///
/// [`dfs`] is the general engine; [`preorder`], [`postorder`], and
/// [`reverse_postorder`] are the common fixed-order shorthands, and [`dfs_iter`]
/// yields pre-order lazily.
pub use graph::{dfs, dfs_iter, postorder, preorder, reverse_postorder, Dfs, Order};

/// Lazy sequence types, re-exported at the crate root.
pub use view::{IterView, MapView, RangeView, View};
