//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection and
//! disassembly.

use crate::{disassemble_memory, format_instruction, ExecutionState, FlatMemory, CPU};
use wasm_bindgen::prelude::*;

/// Result of disassembly operation
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator {
    cpu: CPU<FlatMemory>,
    on_stop: Option<js_sys::Function>,
    program_start: u16,
    program_end: u16,
}

#[wasm_bindgen]
impl Emulator {
    /// Create an emulator with zeroed memory and registers
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator {
            cpu: CPU::new(FlatMemory::new()),
            on_stop: None,
            program_start: 0x0000,
            program_end: 0x0000,
        }
    }

    /// Register a callback invoked with the state name when the CPU halts or faults
    pub fn set_on_stop(&mut self, callback: js_sys::Function) {
        self.on_stop = Some(callback);
    }

    /// Execute a single instruction and return the resulting state name
    pub fn step(&mut self) -> String {
        let was_running = self.cpu.state().is_running();
        let state = self.cpu.step();
        self.notify_if_stopped(was_running);
        state_name(state).to_string()
    }

    /// Execute up to `max_instructions` instructions and return how many ran
    pub fn run_for(&mut self, max_instructions: u32) -> u32 {
        let was_running = self.cpu.state().is_running();
        let executed = self.cpu.run_for(max_instructions as u64) as u32;
        self.notify_if_stopped(was_running);
        executed
    }

    /// Reset registers and execution state, then point PC at the loaded program
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.set_pc(self.program_start);
    }

    /// Current execution state: "running", "halted" or "faulted"
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        state_name(self.cpu.state()).to_string()
    }

    /// Opcode byte that faulted, if the CPU is faulted
    #[wasm_bindgen(getter)]
    pub fn fault_opcode(&self) -> Option<u8> {
        self.cpu.state().fault().map(|fault| match fault.error() {
            crate::ExecutionError::UnimplementedOpcode(op) => op,
        })
    }

    /// Address of the faulting opcode, if the CPU is faulted
    #[wasm_bindgen(getter)]
    pub fn fault_address(&self) -> Option<u16> {
        self.cpu.state().fault().map(|fault| fault.address())
    }

    /// Human-readable description of the current state
    #[wasm_bindgen(getter)]
    pub fn state_message(&self) -> String {
        self.cpu.state().to_string()
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn instructions(&self) -> f64 {
        self.cpu.instructions() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read_memory(addr)
    }

    /// Write a single byte to memory through the bootstrap path
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write_direct(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as usize) << 8;
        self.cpu.memory().as_slice()[start..start + 256].to_vec()
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.load_program(start_addr, program);
        self.program_start = start_addr;
        self.program_end = start_addr.wrapping_add(program.len() as u16);
    }

    /// Disassemble memory starting at an address
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        disassemble_memory(self.cpu.memory(), start_addr, num_instructions as usize)
            .iter()
            .map(|instr| {
                let mut bytes = vec![instr.opcode];
                if instr.size_bytes > 1 {
                    bytes.extend_from_slice(&instr.operand_bytes);
                }

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }

    /// Get the program start address
    #[wasm_bindgen(getter)]
    pub fn program_start(&self) -> u16 {
        self.program_start
    }

    /// Get the program end address
    #[wasm_bindgen(getter)]
    pub fn program_end(&self) -> u16 {
        self.program_end
    }
}

impl Emulator {
    fn notify_if_stopped(&self, was_running: bool) {
        let state = self.cpu.state();
        if !was_running || state.is_running() {
            return;
        }
        if let Some(callback) = &self.on_stop {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(state_name(state)));
        }
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

fn state_name(state: ExecutionState) -> &'static str {
    match state {
        ExecutionState::Running => "running",
        ExecutionState::Halted => "halted",
        ExecutionState::Faulted(_) => "faulted",
    }
}
