//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, the plain 64KB store the core runs on.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every address in 0x0000-0xFFFF is readable
//! - `write` is the mapped path the CPU uses; `write_direct` is the bootstrap path
//!   used to preload a program image before execution begins

/// Memory bus trait for CPU to read/write bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - `write_direct(&mut self)`: Bootstrap store that bypasses mapped-write semantics
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use nez::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// A bus with side effects on `write` overrides `write_direct` so program
/// loading still lands in the backing store:
///
/// ```
/// use nez::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             0x8000..=0xFFFF => self.rom[(addr - 0x8000) as usize],
///             _ => 0,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         // ROM ignores CPU writes
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
///
///     fn write_direct(&mut self, addr: u16, value: u8) {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize] = value,
///             0x8000..=0xFFFF => self.rom[(addr - 0x8000) as usize] = value,
///             _ => {}
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This is the path instructions take. Implementations that model mirroring or
    /// mapper registers put that logic here.
    fn write(&mut self, addr: u16, value: u8);

    /// Stores a byte without any mapped-write side effects.
    ///
    /// Used by hosts and tests to preload a program image. The default forwards to
    /// `write`, which is correct for any bus whose `write` is a plain store.
    fn write_direct(&mut self, addr: u16, value: u8) {
        self.write(addr, value);
    }

    /// Copies `bytes` into memory starting at `start` through `write_direct`.
    ///
    /// Addresses wrap from 0xFFFF back to 0x0000.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0x11, 0x22]);
    /// assert_eq!(mem.read(0xFFFF), 0x11);
    /// assert_eq!(mem.read(0x0000), 0x22);
    /// ```
    fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.write_direct(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to a single contiguous array,
/// initialized to 0x00. Nothing is mirrored and nothing is mapped, so `write`
/// and `write_direct` are the same plain store.
///
/// # Examples
///
/// ```
/// use nez::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_direct(0x0000, 0xA9); // LDA #$42
/// memory.write_direct(0x0001, 0x42);
///
/// let mut cpu = CPU::new(memory);
/// cpu.step();
/// assert_eq!(cpu.a(), 0x42);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// assert_eq!(mem.read(0x0000), 0x00);
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Returns the whole address space as a slice, for dumping and disassembly.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("FlatMemory")
            .field("nonzero_bytes", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn write_direct(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbors untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_boundaries() {
        let mut mem = FlatMemory::new();

        mem.write_direct(0x0000, 0x01);
        mem.write_direct(0x00FF, 0x0F);
        mem.write_direct(0x0100, 0x10);
        mem.write_direct(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x00FF), 0x0F);
        assert_eq!(mem.read(0x0100), 0x10);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_load_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0xAA, 0xBB, 0xCC]);

        assert_eq!(mem.read(0xFFFE), 0xAA);
        assert_eq!(mem.read(0xFFFF), 0xBB);
        assert_eq!(mem.read(0x0000), 0xCC);
    }

    struct CountingBus {
        inner: FlatMemory,
        mapped_writes: usize,
    }

    impl MemoryBus for CountingBus {
        fn read(&self, addr: u16) -> u8 {
            self.inner.read(addr)
        }

        fn write(&mut self, addr: u16, value: u8) {
            self.mapped_writes += 1;
            self.inner.write(addr, value);
        }
    }

    #[test]
    fn test_default_write_direct_forwards_to_write() {
        let mut bus = CountingBus {
            inner: FlatMemory::new(),
            mapped_writes: 0,
        };

        bus.load(0x0200, &[1, 2, 3]);

        assert_eq!(bus.mapped_writes, 3);
        assert_eq!(bus.read(0x0202), 3);
    }
}
