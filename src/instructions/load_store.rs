//! # Load Instructions
//!
//! - LDA: Load Accumulator (immediate, zero page)

use super::Flow;
use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte into the accumulator, setting the zero and negative flags as
/// appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: Opcode,
) -> Result<Flow, ExecutionError> {
    let metadata = opcode.metadata();

    let value = cpu
        .read_operand(metadata.addressing_mode)
        .ok_or(ExecutionError::UnimplementedOpcode(opcode as u8))?;

    cpu.regs.a = value;
    cpu.regs.status.set_nz(value);

    Ok(Flow::Continue)
}
