//! # Opcode Table
//!
//! The closed set of opcodes this core executes, and their metadata.
//!
//! The mapping from raw byte to [`Opcode`] is partial and injective: each
//! defined byte names exactly one variant, and every other byte decodes to
//! `None`. The execution engine reports those as
//! [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError::UnimplementedOpcode).
//!
//! The JAM column follows the NMOS 6502 layout: `x2` for x in
//! {0-7, 9, B, D, F}.

use crate::addressing::AddressingMode;

/// An instruction the core knows how to execute.
///
/// The discriminant is the opcode byte.
///
/// # Examples
///
/// ```
/// use nez::Opcode;
///
/// assert_eq!(Opcode::from_byte(0xA9), Some(Opcode::LdaImm));
/// assert_eq!(Opcode::LdaImm as u8, 0xA9);
/// assert_eq!(Opcode::from_byte(0xFF), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// LDA #imm: load operand into accumulator.
    LdaImm = 0xA9,
    /// LDA zpg: load zero-page byte into accumulator.
    LdaZrpg = 0xA5,

    // JAMx instructions freeze the CPU.
    Jam0 = 0x02,
    Jam1 = 0x12,
    Jam2 = 0x22,
    Jam3 = 0x32,
    Jam4 = 0x42,
    Jam5 = 0x52,
    Jam6 = 0x62,
    Jam7 = 0x72,
    Jam9 = 0x92,
    JamB = 0xB2,
    JamD = 0xD2,
    JamF = 0xF2,
}

/// Static information about an opcode needed for decoding and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "JAM").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

const LDA_IMMEDIATE: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "LDA",
    addressing_mode: AddressingMode::Immediate,
    size_bytes: 2,
};

const LDA_ZERO_PAGE: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "LDA",
    addressing_mode: AddressingMode::ZeroPage,
    size_bytes: 2,
};

const JAM: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "JAM",
    addressing_mode: AddressingMode::Implicit,
    size_bytes: 1,
};

impl Opcode {
    /// Every defined opcode.
    pub const ALL: [Opcode; 14] = [
        Opcode::LdaImm,
        Opcode::LdaZrpg,
        Opcode::Jam0,
        Opcode::Jam1,
        Opcode::Jam2,
        Opcode::Jam3,
        Opcode::Jam4,
        Opcode::Jam5,
        Opcode::Jam6,
        Opcode::Jam7,
        Opcode::Jam9,
        Opcode::JamB,
        Opcode::JamD,
        Opcode::JamF,
    ];

    /// Decodes a raw byte. Returns `None` for bytes outside the defined set.
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        let opcode = match byte {
            0xA9 => Opcode::LdaImm,
            0xA5 => Opcode::LdaZrpg,
            0x02 => Opcode::Jam0,
            0x12 => Opcode::Jam1,
            0x22 => Opcode::Jam2,
            0x32 => Opcode::Jam3,
            0x42 => Opcode::Jam4,
            0x52 => Opcode::Jam5,
            0x62 => Opcode::Jam6,
            0x72 => Opcode::Jam7,
            0x92 => Opcode::Jam9,
            0xB2 => Opcode::JamB,
            0xD2 => Opcode::JamD,
            0xF2 => Opcode::JamF,
            _ => return None,
        };
        Some(opcode)
    }

    /// Returns true for the JAM family.
    pub fn is_jam(self) -> bool {
        !matches!(self, Opcode::LdaImm | Opcode::LdaZrpg)
    }

    /// Returns the decoding metadata for this opcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{AddressingMode, Opcode};
    ///
    /// let lda = Opcode::LdaZrpg.metadata();
    /// assert_eq!(lda.mnemonic, "LDA");
    /// assert_eq!(lda.addressing_mode, AddressingMode::ZeroPage);
    /// assert_eq!(lda.size_bytes, 2);
    /// ```
    pub fn metadata(self) -> &'static OpcodeMetadata {
        match self {
            Opcode::LdaImm => &LDA_IMMEDIATE,
            Opcode::LdaZrpg => &LDA_ZERO_PAGE,
            Opcode::Jam0
            | Opcode::Jam1
            | Opcode::Jam2
            | Opcode::Jam3
            | Opcode::Jam4
            | Opcode::Jam5
            | Opcode::Jam6
            | Opcode::Jam7
            | Opcode::Jam9
            | Opcode::JamB
            | Opcode::JamD
            | Opcode::JamF => &JAM,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = crate::ExecutionError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::from_byte(byte).ok_or(crate::ExecutionError::UnimplementedOpcode(byte))
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}
