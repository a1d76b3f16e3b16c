//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: PC (16-bit), A, X, Y, SP and the status flags
//! - **Memory**: the bus it exclusively owns
//! - **Execution state**: Running, Halted or Faulted
//! - **Instruction counter**: number of instructions retired
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run()`: Execute until the CPU halts or faults
//! - `run_until()`: As `run()`, checking a cancellation callback between instructions
//! - `run_for()`: Execute at most a fixed number of instructions
//!
//! Cycle timing is not modeled.

use log::{debug, trace, warn};

use crate::instructions::{self, Flow};
use crate::{
    AddressingMode, ExecutionError, FlatMemory, MemoryBus, Opcode, Register, Registers, Status,
};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Stack pointer value after a hardware reset sequence.
pub const RESET_SP: u8 = 0xFD;

/// A fault raised by `step`, with the location of the instruction that caused it.
///
/// By the time a fault is reported, PC has already moved past the opcode byte;
/// `address` is where that byte was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{error} at 0x{address:04X}")]
pub struct Fault {
    error: ExecutionError,
    address: u16,
}

impl Fault {
    /// Creates a fault for `error` raised by the instruction at `address`.
    pub fn new(error: ExecutionError, address: u16) -> Self {
        Self { error, address }
    }

    /// The execution error.
    pub fn error(&self) -> ExecutionError {
        self.error
    }

    /// Address of the opcode byte that faulted.
    pub fn address(&self) -> u16 {
        self.address
    }
}

/// Execution status of the CPU, reported by every `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    /// Ready to execute the next instruction.
    Running,

    /// Stopped by a JAM instruction. Not an error.
    Halted,

    /// Stopped on a byte with no instruction semantics.
    Faulted(Fault),
}

impl ExecutionState {
    /// Returns true while the CPU will still execute instructions.
    pub fn is_running(&self) -> bool {
        matches!(self, ExecutionState::Running)
    }

    /// Returns the fault, if the CPU faulted.
    pub fn fault(&self) -> Option<Fault> {
        match self {
            ExecutionState::Faulted(fault) => Some(*fault),
            ExecutionState::Running | ExecutionState::Halted => None,
        }
    }

    /// Converts the state into a `Result` for callers that propagate with `?`.
    ///
    /// `Running` and `Halted` are both `Ok`.
    pub fn into_result(self) -> Result<(), ExecutionError> {
        match self {
            ExecutionState::Faulted(fault) => Err(fault.error),
            ExecutionState::Running | ExecutionState::Halted => Ok(()),
        }
    }
}

impl std::fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutionState::Running => f.write_str("running"),
            ExecutionState::Halted => f.write_str("halted"),
            ExecutionState::Faulted(fault) => write!(f, "faulted: {}", fault),
        }
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its register file and its memory bus; nothing else can mutate
/// either while the CPU exists. It is generic over the memory implementation via
/// the `MemoryBus` trait and defaults to [`FlatMemory`].
///
/// # Examples
///
/// ```
/// use nez::{CPU, ExecutionState, FlatMemory};
///
/// let mut cpu = CPU::new(FlatMemory::new());
///
/// // Everything starts at zero
/// assert_eq!(cpu.pc(), 0x0000);
/// assert_eq!(cpu.a(), 0x00);
/// assert_eq!(cpu.status(), 0x00);
/// assert_eq!(cpu.state(), ExecutionState::Running);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Register file
    pub(crate) regs: Registers,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Current execution status
    pub(crate) state: ExecutionState,

    /// Instructions retired since construction or reset
    pub(crate) instructions: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// Every register is zero and the CPU is `Running`. Memory is used as given;
    /// preload it with `write_direct` or `load_program` before stepping.
    pub fn new(memory: M) -> Self {
        Self {
            regs: Registers::new(),
            memory,
            state: ExecutionState::Running,
            instructions: 0,
        }
    }

    /// Returns every register to zero and the CPU to `Running`.
    ///
    /// Memory is left untouched.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.state = ExecutionState::Running;
        self.instructions = 0;
        debug!("cpu reset");
    }

    /// Performs the hardware power-on sequence.
    ///
    /// Like [`reset`](Self::reset), then loads PC from the reset vector at
    /// 0xFFFC/0xFFFD (little-endian), sets SP to 0xFD and sets the interrupt
    /// disable flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.write_direct(0xFFFC, 0x00);
    /// cpu.write_direct(0xFFFD, 0x80);
    /// cpu.reset_from_vector();
    ///
    /// assert_eq!(cpu.pc(), 0x8000);
    /// assert_eq!(cpu.sp(), 0xFD);
    /// assert!(cpu.flag_i());
    /// ```
    pub fn reset_from_vector(&mut self) {
        self.reset();
        let pc_low = self.memory.read(RESET_VECTOR);
        let pc_high = self.memory.read(RESET_VECTOR.wrapping_add(1));
        self.regs.pc = u16::from_le_bytes([pc_low, pc_high]);
        self.regs.sp = RESET_SP;
        self.regs.status.insert(Status::INTERRUPT_DISABLE);
        debug!("reset vector -> PC=0x{:04X}", self.regs.pc);
    }

    /// Executes one instruction and reports the resulting execution state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC and advance PC by one
    /// 2. Decode it against the opcode table
    /// 3. Execute it, fetching operands as needed
    ///
    /// A JAM opcode halts the CPU. A byte with no instruction semantics faults it;
    /// in that case only the PC advance from the opcode fetch has happened.
    /// Once the CPU is halted or faulted, `step` changes nothing and returns the
    /// same state.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{CPU, ExecutionError, ExecutionState, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.write_direct(0x0000, 0xFF); // undefined opcode
    ///
    /// match cpu.step() {
    ///     ExecutionState::Faulted(fault) => {
    ///         assert_eq!(fault.error(), ExecutionError::UnimplementedOpcode(0xFF));
    ///         assert_eq!(fault.address(), 0x0000);
    ///     }
    ///     other => panic!("expected a fault, got {}", other),
    /// }
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> ExecutionState {
        if !self.state.is_running() {
            return self.state;
        }

        let address = self.regs.pc;
        let opcode = self.fetch_byte();

        match self.execute(opcode) {
            Ok(Flow::Continue) => {
                self.instructions += 1;
                trace!("0x{:04X}: {:02X} A={:02X}", address, opcode, self.regs.a);
            }
            Ok(Flow::Halt) => {
                self.instructions += 1;
                self.state = ExecutionState::Halted;
                debug!("halted by JAM 0x{:02X} at 0x{:04X}", opcode, address);
            }
            Err(error) => {
                let fault = Fault::new(error, address);
                warn!("{}", fault);
                self.state = ExecutionState::Faulted(fault);
            }
        }

        self.state
    }

    /// Decodes and dispatches one opcode.
    fn execute(&mut self, opcode: u8) -> Result<Flow, ExecutionError> {
        match Opcode::try_from(opcode)? {
            op @ (Opcode::LdaImm | Opcode::LdaZrpg) => {
                instructions::load_store::execute_lda(self, op)
            }
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
            | Opcode::JamF => instructions::control::execute_jam(self),
        }
    }

    /// Runs until the CPU halts or faults, and returns the final state.
    ///
    /// A program that never reaches a JAM or an undefined byte runs forever; hosts
    /// that need to stay responsive use [`run_until`](Self::run_until) or
    /// [`run_for`](Self::run_for).
    pub fn run(&mut self) -> ExecutionState {
        self.run_until(|| false)
    }

    /// Runs until the CPU halts or faults, or `cancelled` returns true.
    ///
    /// `cancelled` is checked before each instruction, never during one. A
    /// cancelled run returns `Running`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::atomic::{AtomicBool, Ordering};
    /// use nez::{CPU, ExecutionState, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_program(0x0000, &[0xA9, 0x01, 0xA9, 0x02, 0x02]);
    ///
    /// let stop = AtomicBool::new(true);
    /// assert_eq!(cpu.run_until(|| stop.load(Ordering::Relaxed)), ExecutionState::Running);
    /// assert_eq!(cpu.pc(), 0x0000);
    ///
    /// stop.store(false, Ordering::Relaxed);
    /// assert_eq!(cpu.run_until(|| stop.load(Ordering::Relaxed)), ExecutionState::Halted);
    /// assert_eq!(cpu.a(), 0x02);
    /// ```
    pub fn run_until<F>(&mut self, mut cancelled: F) -> ExecutionState
    where
        F: FnMut() -> bool,
    {
        while self.state.is_running() {
            if cancelled() {
                debug!("run cancelled at 0x{:04X}", self.regs.pc);
                break;
            }
            self.step();
        }

        self.state
    }

    /// Executes at most `max_instructions` instructions.
    ///
    /// Stops early if the CPU halts or faults. Returns the number of instructions
    /// retired, which is useful for frame-locked hosts that hand out a fixed
    /// budget per frame.
    pub fn run_for(&mut self, max_instructions: u64) -> u64 {
        let start = self.instructions;

        for _ in 0..max_instructions {
            if !self.step().is_running() {
                break;
            }
        }

        self.instructions - start
    }

    // ========== Fetch Helpers ==========

    /// Reads the byte at PC and advances PC by one.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetches the operand for `mode` and resolves it to a value.
    ///
    /// Returns `None` for modes that carry no operand.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> Option<u8> {
        match mode {
            AddressingMode::Implicit => None,
            AddressingMode::Immediate => Some(self.fetch_byte()),
            AddressingMode::ZeroPage => {
                let addr = self.fetch_byte() as u16;
                Some(self.memory.read(addr))
            }
        }
    }

    // ========== State Inspection ==========

    /// Returns the current execution state.
    pub fn state(&self) -> ExecutionState {
        self.state
    }

    /// Returns the number of instructions retired since construction or reset.
    ///
    /// Faulting bytes are not counted; JAM is.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.regs
    }

    /// Returns the value of `reg`, zero-extended to 16 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use nez::{CPU, FlatMemory, Register};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.set_register(Register::Pc, 0x0600);
    /// assert_eq!(cpu.register(Register::Pc), 0x0600);
    /// assert_eq!(cpu.register(Register::Sp), 0x00);
    /// ```
    pub fn register(&self, reg: Register) -> u16 {
        self.regs.get(reg)
    }

    /// Sets `reg` to `value`. 8-bit registers keep the low byte.
    pub fn set_register(&mut self, reg: Register, value: u16) {
        self.regs.set(reg, value);
    }

    // ========== Memory Access ==========

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and returns its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }

    /// Reads a byte from memory without affecting CPU state.
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Stores a byte through the bootstrap path.
    pub fn write_direct(&mut self, addr: u16, value: u8) {
        self.memory.write_direct(addr, value);
    }

    /// Copies a program image to `start` and points PC at it.
    pub fn load_program(&mut self, start: u16, program: &[u8]) {
        self.memory.load(start, program);
        self.regs.pc = start;
        debug!("loaded {} bytes at 0x{:04X}", program.len(), start);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.status.bits()
    }

    /// Returns the status register as typed flags.
    pub fn flags(&self) -> Status {
        self.regs.status
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.status.contains(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.status.contains(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.status.contains(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.status.contains(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.status.contains(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.status.contains(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.status.contains(Status::CARRY)
    }

    // ========== Register Setters ==========

    /// Sets the accumulator register.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets the status register from a packed byte.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = Status::from_bits_retain(value);
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.status.set(Status::NEGATIVE, value);
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.status.set(Status::ZERO, value);
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CPU")
            .field("regs", &self.regs)
            .field("state", &self.state)
            .field("instructions", &self.instructions)
            .finish_non_exhaustive()
    }
}
