//! Control flow graph construction from an IR module view.
//!
//! The builder consumes an externally owned module through the narrow
//! [`ModuleView`]/[`BlockView`] collaborator interface and produces a
//! [`LabeledDigraph`] whose vertices are the module's basic blocks and whose edges are
//! derived from decoded block terminators. The kernel decides nothing about what an
//! edge means beyond "control may flow from block A to block B".
//!
//! # Examples
//!
//! ```rust,ignore
//! use cfgcore::cfg::build_cfg;
//!
//! let module = parse_ir(source)?;
//! let graph = build_cfg(&module)?;
//! for block in cfgcore::reverse_postorder(&graph, graph.vertex_ids().next().unwrap())? {
//!     // drive the pass in RPO
//! }
//! ```

use crate::{
    cfg::{Instruction, Terminator},
    Error, LabeledDigraph, Result, VertexId,
};

/// Read-only view of one basic block, as exposed by the IR object model.
///
/// The builder reads only the block's identifying index, display label, and final
/// (terminator) instruction; the rest of the instruction list never crosses the
/// boundary.
pub trait BlockView {
    /// The block's position in the module's block sequence. Defines its vertex index.
    fn index(&self) -> usize;

    /// The block's display label, e.g. `"B0"` or `"while.cond"`.
    fn label(&self) -> &str;

    /// The block's final instruction, or `None` for an empty block.
    fn terminator(&self) -> Option<&Instruction>;
}

/// Read-only view of an IR module, the collaborator interface consumed by the builder.
pub trait ModuleView {
    /// The block handle type.
    type Block: BlockView;

    /// Returns the number of basic blocks in the module.
    fn block_count(&self) -> usize;

    /// Returns the basic blocks in their stable module order, which defines vertex
    /// indices `0..block_count`.
    fn blocks(&self) -> &[Self::Block];

    /// Looks up a block by its label.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBlock`] if no block carries the label.
    fn lookup_block(&self, label: &str) -> Result<&Self::Block>;
}

/// Builds the control flow graph of an IR module.
///
/// Vertex `i` corresponds to the `i`-th block reported by the module and carries the
/// block's own display label. For each block the terminator is decoded once
/// ([`Terminator::decode`]): an unconditional jump derives one edge, a conditional
/// branch derives two (taken and not-taken), and every other terminator shape derives
/// none — no implicit fall-through edge is inferred.
///
/// # Errors
///
/// - [`Error::MalformedControlFlow`] if a terminator references a block label the
///   module cannot resolve. Construction aborts; no partially built graph is returned.
/// - [`Error::CapacityExceeded`] if the block count cannot back a dense graph.
pub fn build_cfg<M: ModuleView>(module: &M) -> Result<LabeledDigraph> {
    let mut graph = LabeledDigraph::new(module.block_count())?;

    for block in module.blocks() {
        graph.set_vertex_label(VertexId::new(block.index()), block.label())?;
    }

    for block in module.blocks() {
        let Some(instruction) = block.terminator() else {
            continue;
        };
        let from = VertexId::new(block.index());

        match Terminator::decode(instruction) {
            Terminator::Jump { target } => {
                let to = resolve(module, block, &target)?;
                graph.add_edge(from, to)?;
            }
            Terminator::Branch {
                target_true,
                target_false,
            } => {
                let taken = resolve(module, block, &target_true)?;
                let not_taken = resolve(module, block, &target_false)?;
                graph.add_edge(from, taken)?;
                graph.add_edge(from, not_taken)?;
            }
            Terminator::Other => {}
        }
    }

    Ok(graph)
}

/// Resolves a terminator target label to its vertex.
fn resolve<M: ModuleView>(module: &M, block: &M::Block, target: &str) -> Result<VertexId> {
    match module.lookup_block(target) {
        Ok(found) => Ok(VertexId::new(found.index())),
        Err(_) => Err(Error::MalformedControlFlow {
            block: block.label().to_string(),
            target: target.to_string(),
        }),
    }
}
