//! # Addressing Modes
//!
//! Addressing modes used by the opcode table. Each mode determines how the CPU
//! interprets the operand bytes that follow an opcode.

/// 6502 addressing mode enumeration.
///
/// Only the modes reachable from the implemented opcodes are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Example: JAM
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit => 0,
            AddressingMode::Immediate | AddressingMode::ZeroPage => 1,
        }
    }
}
