//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::disassembler::{Instruction, BYTE_DIRECTIVE};

/// Format a single instruction as assembly text
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic.to_string()
    } else {
        format!("{} {}", instr.mnemonic, operand)
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> String {
    if instr.mnemonic == BYTE_DIRECTIVE {
        return format!("${:02X}", instr.opcode);
    }

    match (instr.addressing_mode, instr.operand_bytes.first()) {
        (AddressingMode::Implicit, _) => String::new(),
        (AddressingMode::Immediate, Some(value)) => format!("#${:02X}", value),
        (AddressingMode::Immediate, None) => "#$??".to_string(),
        (AddressingMode::ZeroPage, Some(addr)) => format!("${:02X}", addr),
        (AddressingMode::ZeroPage, None) => "$??".to_string(),
    }
}
