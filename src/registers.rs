//! # Register File
//!
//! The six 6502 registers and the closed set of names used to address them.
//!
//! PC is 16 bits wide, as on real hardware. A, X, Y, SP and the status register
//! are 8 bits wide. Every register reads as zero after construction.

use crate::status::Status;

/// Names of the registers in the register file.
///
/// The set is closed, so [`Registers::get`] and [`Registers::set`] match it
/// exhaustively and there is no "invalid register" case to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Program counter (address of next instruction byte)
    Pc,
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
    /// Processor status (NV-BDIZC)
    Status,
    /// Stack pointer (0x0100 + SP gives full stack address)
    Sp,
}

impl Register {
    /// All register names, in display order.
    pub const ALL: [Register; 6] = [
        Register::Pc,
        Register::A,
        Register::X,
        Register::Y,
        Register::Status,
        Register::Sp,
    ];

    /// Short display name, as a debugger would label it.
    pub fn name(self) -> &'static str {
        match self {
            Register::Pc => "PC",
            Register::A => "A",
            Register::X => "X",
            Register::Y => "Y",
            Register::Status => "P",
            Register::Sp => "SP",
        }
    }

    /// Width of the register in bits.
    pub fn width(self) -> u8 {
        match self {
            Register::Pc => 16,
            Register::A | Register::X | Register::Y | Register::Status | Register::Sp => 8,
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The register file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Program counter
    pub pc: u16,
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Status flags
    pub status: Status,
    /// Stack pointer
    pub sp: u8,
}

impl Registers {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `reg`, zero-extended to 16 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{Register, Registers};
    ///
    /// let mut regs = Registers::new();
    /// regs.set(Register::Pc, 0x8000);
    /// assert_eq!(regs.get(Register::Pc), 0x8000);
    /// assert_eq!(regs.get(Register::A), 0);
    /// ```
    pub fn get(&self, reg: Register) -> u16 {
        match reg {
            Register::Pc => self.pc,
            Register::A => self.a as u16,
            Register::X => self.x as u16,
            Register::Y => self.y as u16,
            Register::Status => self.status.bits() as u16,
            Register::Sp => self.sp as u16,
        }
    }

    /// Sets `reg` to `value`.
    ///
    /// 8-bit registers keep the low byte of `value`.
    pub fn set(&mut self, reg: Register, value: u16) {
        let low = value as u8;
        match reg {
            Register::Pc => self.pc = value,
            Register::A => self.a = low,
            Register::X => self.x = low,
            Register::Y => self.y = low,
            Register::Status => self.status = Status::from_bits_retain(low),
            Register::Sp => self.sp = low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_start_zeroed() {
        let regs = Registers::new();
        for reg in Register::ALL {
            assert_eq!(regs.get(reg), 0, "{} should start at zero", reg);
        }
    }

    #[test]
    fn test_set_get_each_register() {
        let mut regs = Registers::new();

        regs.set(Register::Pc, 0xBEEF);
        regs.set(Register::A, 0x11);
        regs.set(Register::X, 0x22);
        regs.set(Register::Y, 0x33);
        regs.set(Register::Status, 0x83);
        regs.set(Register::Sp, 0xFD);

        assert_eq!(regs.get(Register::Pc), 0xBEEF);
        assert_eq!(regs.get(Register::A), 0x11);
        assert_eq!(regs.get(Register::X), 0x22);
        assert_eq!(regs.get(Register::Y), 0x33);
        assert_eq!(regs.get(Register::Status), 0x83);
        assert_eq!(regs.get(Register::Sp), 0xFD);
        assert!(regs.status.contains(Status::NEGATIVE | Status::ZERO | Status::CARRY));
    }

    #[test]
    fn test_eight_bit_registers_keep_low_byte() {
        let mut regs = Registers::new();
        regs.set(Register::A, 0x1234);
        regs.set(Register::Sp, 0x01FF);

        assert_eq!(regs.a, 0x34);
        assert_eq!(regs.sp, 0xFF);
    }

    #[test]
    fn test_register_widths() {
        assert_eq!(Register::Pc.width(), 16);
        for reg in &Register::ALL[1..] {
            assert_eq!(reg.width(), 8);
        }
    }
}
