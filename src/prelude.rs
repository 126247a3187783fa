//! Common imports for working with `cfgcore`.
//!
//! This prelude re-exports the types and functions most code needs: the graph and its
//! vertex handle, the traversal entry points, the CFG builder surface, and the lazy
//! view adapters. Import it with a glob:
//!
//! ```rust
//! use cfgcore::prelude::*;
//!
//! let mut graph = LabeledDigraph::new(2)?;
//! graph.add_edge(VertexId::new(0), VertexId::new(1))?;
//! assert_eq!(preorder(&graph, VertexId::new(0))?.len(), 2);
//! # Ok::<(), cfgcore::Error>(())
//! ```

pub use crate::{Error, Result};

pub use crate::graph::{
    dfs, dfs_iter, escape_dot, postorder, preorder, reverse_postorder, Dfs, LabeledDigraph,
    Order, Predecessors, Successors, VertexId,
};

pub use crate::cfg::{build_cfg, BlockView, Instruction, ModuleView, Terminator};

pub use crate::view::{IterView, MapView, RangeView, View};
