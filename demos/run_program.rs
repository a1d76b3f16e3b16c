//! Run program example
//!
//! Demonstrates loading a program image, stepping it to completion, and
//! inspecting the register file after each instruction.
//!
//! This example shows:
//! - Creating a 64KB flat memory instance
//! - Preloading a program and zero-page data through the bootstrap path
//! - Stepping the CPU and printing state, as a render loop would each frame
//! - Handling the Halted and Faulted terminal states

use nez::{disassemble_memory, format_instruction, ExecutionState, FlatMemory, Register, CPU};

fn print_registers(cpu: &CPU<FlatMemory>) {
    let line: Vec<String> = Register::ALL
        .iter()
        .map(|&reg| match reg.width() {
            16 => format!("{}={:04X}", reg, cpu.register(reg)),
            _ => format!("{}={:02X}", reg, cpu.register(reg)),
        })
        .collect();
    println!("  {}", line.join(" "));
}

fn main() {
    println!("nez - Run Program Example");
    println!("=========================\n");

    let mut cpu = CPU::new(FlatMemory::new());

    // LDA #$12 ; LDA $10 ; LDA #$00 ; LDA #$80 ; JAM
    let program = [0xA9, 0x12, 0xA5, 0x10, 0xA9, 0x00, 0xA9, 0x80, 0x02];
    cpu.write_direct(0x0010, 0x7F);
    cpu.load_program(0x0600, &program);

    println!("Program at 0x0600:");
    for instr in disassemble_memory(cpu.memory(), 0x0600, 5) {
        println!("  {:04X}  {}", instr.address, format_instruction(&instr));
    }

    println!("\nInitial state:");
    print_registers(&cpu);

    loop {
        let pc = cpu.pc();
        let state = cpu.step();
        println!("\nAfter instruction at 0x{:04X}: {}", pc, state);
        print_registers(&cpu);

        match state {
            ExecutionState::Running => continue,
            ExecutionState::Halted => {
                println!("\nCPU halted after {} instructions.", cpu.instructions());
                break;
            }
            ExecutionState::Faulted(fault) => {
                eprintln!("\nCPU faulted: {}", fault);
                std::process::exit(1);
            }
        }
    }

    // A second program that trips over an undefined byte
    cpu.reset();
    cpu.load_program(0x0700, &[0xA9, 0x01, 0xFF]);
    let state = cpu.run();
    if let Some(fault) = state.fault() {
        println!(
            "Second program stopped at 0x{:04X}: {}",
            fault.address(),
            fault.error()
        );
    }
}
