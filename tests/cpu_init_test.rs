//! CPU initialization tests
//!
//! Verifies construction state, the two reset paths and the register accessors.

use nez::{ExecutionState, FlatMemory, MemoryBus, Register, CPU};

#[test]
fn test_cpu_construction_values() {
    let cpu = CPU::new(FlatMemory::new());

    assert_eq!(cpu.pc(), 0x0000, "PC should start at 0x0000");
    assert_eq!(cpu.a(), 0x00, "Accumulator should be 0x00");
    assert_eq!(cpu.x(), 0x00, "X register should be 0x00");
    assert_eq!(cpu.y(), 0x00, "Y register should be 0x00");
    assert_eq!(cpu.sp(), 0x00, "Stack pointer should be 0x00");
    assert_eq!(cpu.status(), 0x00, "Status should be 0x00");

    assert!(!cpu.flag_n(), "Negative flag should be clear");
    assert!(!cpu.flag_v(), "Overflow flag should be clear");
    assert!(!cpu.flag_b(), "Break flag should be clear");
    assert!(!cpu.flag_d(), "Decimal flag should be clear");
    assert!(!cpu.flag_i(), "Interrupt disable flag should be clear");
    assert!(!cpu.flag_z(), "Zero flag should be clear");
    assert!(!cpu.flag_c(), "Carry flag should be clear");

    assert_eq!(cpu.instructions(), 0);
    assert_eq!(cpu.state(), ExecutionState::Running);
}

#[test]
fn test_construction_keeps_preloaded_memory() {
    let mut memory = FlatMemory::new();
    memory.write_direct(0x0000, 0xA9);
    memory.write_direct(0x0001, 0x12);

    let cpu = CPU::new(memory);

    assert_eq!(cpu.read_memory(0x0000), 0xA9);
    assert_eq!(cpu.read_memory(0x0001), 0x12);
    assert_eq!(cpu.pc(), 0x0000, "Construction never reads the reset vector");
}

#[test]
fn test_reset_from_vector() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.write_direct(0xFFFC, 0x34);
    cpu.write_direct(0xFFFD, 0x12);
    cpu.set_a(0x55);

    cpu.reset_from_vector();

    assert_eq!(cpu.pc(), 0x1234, "PC should be loaded from reset vector");
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_i(), "Interrupt disable flag should be set");
    assert!(!cpu.flag_z());
}

#[test]
fn test_reset_recovers_from_halt() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(0x0000, &[0x02]);
    assert_eq!(cpu.step(), ExecutionState::Halted);

    cpu.reset();

    assert_eq!(cpu.state(), ExecutionState::Running);
    assert_eq!(cpu.instructions(), 0);
    assert_eq!(cpu.read_memory(0x0000), 0x02, "Reset leaves memory alone");
}

#[test]
fn test_register_accessor_matches_typed_getters() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_pc(0x0600);
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);
    cpu.set_sp(0xFF);
    cpu.set_status(0b1000_0010);

    assert_eq!(cpu.register(Register::Pc), cpu.pc());
    assert_eq!(cpu.register(Register::A), cpu.a() as u16);
    assert_eq!(cpu.register(Register::X), cpu.x() as u16);
    assert_eq!(cpu.register(Register::Y), cpu.y() as u16);
    assert_eq!(cpu.register(Register::Sp), cpu.sp() as u16);
    assert_eq!(cpu.register(Register::Status), cpu.status() as u16);
    assert!(cpu.flag_n());
    assert!(cpu.flag_z());
}

#[test]
fn test_set_register_bootstraps_pc_and_sp() {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_register(Register::Pc, 0xC000);
    cpu.set_register(Register::Sp, 0x00FD);

    assert_eq!(cpu.pc(), 0xC000);
    assert_eq!(cpu.sp(), 0xFD);
}
