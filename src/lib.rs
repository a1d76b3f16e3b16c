//! # nez: MOS 6502 CPU Core
//!
//! An NMOS 6502 CPU core built around three pieces: a 64KB byte-addressable
//! memory, a register file, and a fetch-decode-execute engine.
//!
//! The engine reproduces instruction effects and flag behavior exactly. It does
//! not model cycle timing, and it does not model memory mirroring or
//! memory-mapped I/O. Those belong to the host system.
//!
//! ## Quick Start
//!
//! ```rust
//! use nez::{ExecutionState, FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$12 followed by JAM
//! cpu.load_program(0x0000, &[0xA9, 0x12, 0x02]);
//!
//! assert_eq!(cpu.step(), ExecutionState::Running);
//! assert_eq!(cpu.a(), 0x12);
//! assert_eq!(cpu.pc(), 0x0002);
//!
//! assert_eq!(cpu.run(), ExecutionState::Halted);
//! ```
//!
//! ## Execution Model
//!
//! A CPU starts out [`ExecutionState::Running`]. Each call to [`CPU::step`]
//! retires one instruction and reports the resulting state:
//!
//! - JAM opcodes move the CPU to [`ExecutionState::Halted`], a normal
//!   terminal state.
//! - Bytes with no instruction semantics move it to
//!   [`ExecutionState::Faulted`], carrying an [`ExecutionError`] and the
//!   address of the offending byte.
//!
//! Once the CPU has stopped, further steps are no-ops. Nothing in this crate
//! panics or aborts on bad program data.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution loop
//! - `memory` - MemoryBus trait and the flat 64KB implementation
//! - `registers` - Register file and the closed set of register names
//! - `status` - Status register flags
//! - `opcodes` - Opcode enumeration and metadata
//! - `addressing` - Addressing mode enumeration
//! - `disassembler` - Memory-to-text decoding for debug views

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{ExecutionState, Fault, CPU};
pub use disassembler::{disassemble, disassemble_memory, format_instruction, Instruction};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Opcode, OpcodeMetadata};
pub use registers::{Register, Registers};
pub use status::Status;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no instruction semantics.
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),
}
