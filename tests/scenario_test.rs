//! End-to-end scenarios: a program image, one step, and the observable result.

use nez::{ExecutionError, ExecutionState, FlatMemory, Register, CPU};

fn fresh_cpu() -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_register(Register::Pc, 0);
    cpu
}

#[test]
fn scenario_lda_immediate() {
    let mut cpu = fresh_cpu();
    cpu.write_direct(0, 0xA9);
    cpu.write_direct(1, 0x12);

    cpu.step();

    assert_eq!(cpu.register(Register::A), 0x12);
    assert_eq!(cpu.register(Register::Pc), 2);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn scenario_lda_zero_page() {
    let mut cpu = fresh_cpu();
    cpu.write_direct(0x00, 0xA5);
    cpu.write_direct(0x01, 0x10);
    cpu.write_direct(0x10, 0x7F);

    cpu.step();

    assert_eq!(cpu.register(Register::A), 0x7F);
    assert_eq!(cpu.register(Register::Pc), 2);
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn scenario_lda_immediate_zero() {
    let mut cpu = fresh_cpu();
    cpu.write_direct(0, 0xA9);
    cpu.write_direct(1, 0x00);

    cpu.step();

    assert_eq!(cpu.register(Register::A), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn scenario_jam_halts() {
    let mut cpu = fresh_cpu();
    cpu.write_direct(0, 0x02);

    assert_eq!(cpu.step(), ExecutionState::Halted);
    let regs = *cpu.registers();

    assert_eq!(cpu.step(), ExecutionState::Halted);
    assert_eq!(*cpu.registers(), regs);
}

#[test]
fn scenario_undefined_opcode_faults() {
    let mut cpu = fresh_cpu();
    cpu.write_direct(0, 0xFF);

    let state = cpu.step();

    assert_eq!(
        state.fault().map(|f| f.error()),
        Some(ExecutionError::UnimplementedOpcode(0xFF))
    );
    for reg in [Register::A, Register::X, Register::Y, Register::Status, Register::Sp] {
        assert_eq!(cpu.register(reg), 0, "{} should still be zero", reg);
    }
}
