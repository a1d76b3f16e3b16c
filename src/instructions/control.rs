//! # Control Instructions
//!
//! - JAM: freeze the processor
//!
//! On NMOS parts the twelve JAM opcodes lock the bus until a hardware reset. The
//! core models that as the `Halted` execution state. Registers and memory are left
//! as they were after the opcode fetch.

use super::Flow;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes a JAM instruction.
pub(crate) fn execute_jam<M: MemoryBus>(_cpu: &mut CPU<M>) -> Result<Flow, ExecutionError> {
    Ok(Flow::Halt)
}
