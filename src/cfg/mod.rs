//! Control flow graph construction from basic-block terminators.
//!
//! This module turns an IR module's basic blocks into a [`crate::LabeledDigraph`]: one
//! vertex per block in module order, one edge per decoded control transfer. It owns the
//! two pieces of that pipeline:
//!
//! - [`Terminator`] — classification of a block's final instruction into an
//!   unconditional jump, a conditional branch, or an edge-free terminator, driven by
//!   the [`JUMP_MNEMONICS`] and [`BRANCH_MNEMONICS`] tables.
//! - [`build_cfg`] — the builder itself, consuming any IR object model through the
//!   [`ModuleView`] and [`BlockView`] collaborator traits.
//!
//! # Architecture
//!
//! The builder never owns blocks or instructions. It reads each block's index, label,
//! and final instruction through the view traits, decodes the terminator once, and
//! inserts edges into a freshly allocated graph. Unresolvable branch targets abort
//! construction with [`crate::Error::MalformedControlFlow`]; the caller never observes
//! a half-built graph.
//!
//! # Examples
//!
//! ```rust,ignore
//! use cfgcore::cfg::{build_cfg, Instruction, Terminator};
//!
//! let jump = Instruction::new("b", vec!["loop.head".to_string()]);
//! assert!(matches!(Terminator::decode(&jump), Terminator::Jump { .. }));
//!
//! let graph = build_cfg(&module)?;
//! ```

mod builder;
mod terminator;

pub use builder::{build_cfg, BlockView, ModuleView};
pub use terminator::{Instruction, Terminator, BRANCH_MNEMONICS, JUMP_MNEMONICS};
