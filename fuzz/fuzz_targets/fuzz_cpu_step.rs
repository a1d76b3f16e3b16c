//! Fuzz target for CPU step execution.
//!
//! Creates arbitrary register state and memory around PC, executes a few
//! instructions, and checks the halt/fault contracts.

#![no_main]

use arbitrary::Arbitrary;
use nez::{ExecutionError, ExecutionState, FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    pc: u16,
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Bytes at the PC location (instructions + operands)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    steps: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page);
    memory.load(input.cpu_state.pc, &input.program);

    let mut cpu = CPU::new(memory);
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..input.steps {
        let before = *cpu.registers();
        let was_running = cpu.state().is_running();

        let state = cpu.step();

        // X, Y and SP are never written by the implemented instructions
        assert_eq!(cpu.x(), before.x);
        assert_eq!(cpu.y(), before.y);
        assert_eq!(cpu.sp(), before.sp);

        if !was_running {
            assert_eq!(*cpu.registers(), before);
            continue;
        }

        match state {
            ExecutionState::Running => {
                assert_eq!(cpu.pc(), before.pc.wrapping_add(2));
            }
            ExecutionState::Halted => {
                assert_eq!(cpu.pc(), before.pc.wrapping_add(1));
                assert_eq!(cpu.a(), before.a);
                assert_eq!(cpu.status(), before.status.bits());
            }
            ExecutionState::Faulted(fault) => {
                let ExecutionError::UnimplementedOpcode(op) = fault.error();
                assert_eq!(op, cpu.read_memory(before.pc));
                assert_eq!(fault.address(), before.pc);
                assert_eq!(cpu.a(), before.a);
                assert_eq!(cpu.status(), before.status.bits());
            }
        }
    }
});
