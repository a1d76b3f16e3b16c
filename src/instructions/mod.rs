//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function that takes a mutable reference to the
//! CPU. By the time a handler runs, the opcode byte has been fetched and PC points
//! at the first operand byte; the handler fetches its own operands.
//!
//! ## Categories
//!
//! - **load_store**: Load instructions (LDA)
//! - **control**: Instructions that stop the processor (JAM)

pub mod control;
pub mod load_store;

/// What the execution loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Proceed to the next instruction.
    Continue,
    /// Stop the processor; the CPU becomes `Halted`.
    Halt,
}
