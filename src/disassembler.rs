//! 6502 Disassembler Module
//!
//! Converts machine code into assembly text for debug and render layers.
//! Bytes that are not defined opcodes become `.byte` directives.

pub mod decoder;
pub mod formatter;

pub use formatter::format_instruction;

use crate::addressing::AddressingMode;
use crate::MemoryBus;

/// Mnemonic used for bytes that do not decode to an instruction.
pub const BYTE_DIRECTIVE: &str = ".byte";

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g., "LDA", "JAM", ".byte")
    pub mnemonic: &'static str,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Operand bytes (0-1 bytes for the implemented opcodes)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (opcode + operands)
    pub size_bytes: u8,
}

impl Instruction {
    /// Builds a `.byte` directive for an undecodable byte.
    fn data_byte(address: u16, byte: u8) -> Self {
        Instruction {
            address,
            opcode: byte,
            mnemonic: BYTE_DIRECTIVE,
            addressing_mode: AddressingMode::Implicit,
            operand_bytes: vec![byte],
            size_bytes: 1,
        }
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// `start_address` is the address of `bytes[0]`; it only affects the addresses
/// recorded in the output.
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address)
            .unwrap_or_else(|| Instruction::data_byte(address, bytes[offset]));

        offset += instr.size_bytes as usize;
        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}

/// Disassemble `count` instructions straight from a memory bus.
///
/// Reads wrap from 0xFFFF to 0x0000, so this never runs out of bytes.
pub fn disassemble_memory<M: MemoryBus>(memory: &M, start: u16, count: usize) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(count);
    let mut address = start;

    for _ in 0..count {
        let window = [memory.read(address), memory.read(address.wrapping_add(1))];
        let instr = decoder::decode_instruction(&window, address)
            .unwrap_or_else(|| Instruction::data_byte(address, window[0]));

        address = address.wrapping_add(instr.size_bytes as u16);
        instructions.push(instr);
    }

    instructions
}
