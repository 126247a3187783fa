//! Terminator instruction decoding.
//!
//! Each basic block ends in a terminator instruction that determines its successors.
//! The raw IR hands terminators across the boundary as a mnemonic plus string
//! operands; this module decodes that shape once into a closed [`Terminator`] variant
//! so that the builder and any downstream consumer match on an
//! exhaustiveness-checked enum instead of re-comparing mnemonic strings.

/// The terminator instruction of a basic block, as exposed by the IR object model.
///
/// Only the operation mnemonic and its ordered operand list cross the boundary; the
/// kernel neither owns nor validates any other instruction semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation mnemonic, e.g. `"b"` or `"beq"`.
    pub mnemonic: String,
    /// The ordered operand list. Target labels occupy fixed positions per mnemonic.
    pub operands: Vec<String>,
}

impl Instruction {
    /// Creates an instruction from a mnemonic and operands.
    #[must_use]
    pub fn new(mnemonic: impl Into<String>, operands: Vec<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            operands,
        }
    }
}

/// Mnemonics decoded as an unconditional jump. The single operand is the target label.
pub const JUMP_MNEMONICS: &[&str] = &["b"];

/// Mnemonics decoded as a two-way conditional branch. The final two operands are the
/// taken and not-taken target labels, in that order; any leading operands (condition
/// registers) are ignored here.
pub const BRANCH_MNEMONICS: &[&str] = &["beq", "bne"];

/// The decoded control-transfer shape of a block terminator.
///
/// This is deliberately a closed set: only the jump and branch shapes of the source
/// instruction set derive edges. Every other terminator (returns, halts, plain
/// arithmetic in a malformed block) decodes to [`Other`](Self::Other) and contributes
/// no edges; in particular, no implicit fall-through edge to the lexically next block
/// is ever inferred. Callers whose IR has fall-through semantics must model it with an
/// explicit terminator or extend the recognized-mnemonic tables above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminator {
    /// Unconditional jump to a single target block.
    Jump {
        /// Label of the target block.
        target: String,
    },
    /// Conditional branch with a taken and a not-taken target.
    Branch {
        /// Label of the taken target block.
        target_true: String,
        /// Label of the not-taken target block.
        target_false: String,
    },
    /// Any terminator shape that derives no edges.
    Other,
}

impl Terminator {
    /// Decodes an instruction against the recognized-mnemonic tables.
    ///
    /// A jump mnemonic without its target operand, or a branch mnemonic with fewer
    /// than two operands, decodes to [`Terminator::Other`]: the instruction cannot
    /// name a destination, so it derives no edges.
    #[must_use]
    pub fn decode(instruction: &Instruction) -> Self {
        let mnemonic = instruction.mnemonic.as_str();
        let operands = &instruction.operands;

        if JUMP_MNEMONICS.contains(&mnemonic) {
            if let Some(target) = operands.last() {
                return Terminator::Jump {
                    target: target.clone(),
                };
            }
        } else if BRANCH_MNEMONICS.contains(&mnemonic) {
            if let [.., target_true, target_false] = operands.as_slice() {
                return Terminator::Branch {
                    target_true: target_true.clone(),
                    target_false: target_false.clone(),
                };
            }
        }

        Terminator::Other
    }

    /// Returns `true` if this terminator derives at least one edge.
    #[must_use]
    pub const fn has_targets(&self) -> bool {
        !matches!(self, Terminator::Other)
    }
}
