//! Opcode table validation tests
//!
//! Verifies the byte-to-opcode mapping is injective and the metadata consistent.

use std::collections::HashSet;

use nez::{AddressingMode, Opcode};

#[test]
fn test_opcode_bytes() {
    assert_eq!(Opcode::LdaImm as u8, 0xA9);
    assert_eq!(Opcode::LdaZrpg as u8, 0xA5);
    assert_eq!(Opcode::Jam0 as u8, 0x02);
    assert_eq!(Opcode::Jam1 as u8, 0x12);
    assert_eq!(Opcode::Jam2 as u8, 0x22);
    assert_eq!(Opcode::Jam3 as u8, 0x32);
    assert_eq!(Opcode::Jam4 as u8, 0x42);
    assert_eq!(Opcode::Jam5 as u8, 0x52);
    assert_eq!(Opcode::Jam6 as u8, 0x62);
    assert_eq!(Opcode::Jam7 as u8, 0x72);
    assert_eq!(Opcode::Jam9 as u8, 0x92);
    assert_eq!(Opcode::JamB as u8, 0xB2);
    assert_eq!(Opcode::JamD as u8, 0xD2);
    assert_eq!(Opcode::JamF as u8, 0xF2);
}

#[test]
fn test_at_most_one_opcode_per_byte() {
    let bytes: HashSet<u8> = Opcode::ALL.iter().map(|&op| op as u8).collect();
    assert_eq!(bytes.len(), Opcode::ALL.len(), "Opcode bytes must be unique");
}

#[test]
fn test_decode_is_inverse_of_encode() {
    for byte in 0..=0xFFu8 {
        if let Some(opcode) = Opcode::from_byte(byte) {
            assert_eq!(opcode as u8, byte, "0x{:02X} decoded to {:?}", byte, opcode);
        }
    }
}

#[test]
fn test_undefined_bytes_are_unrecognized() {
    let defined: HashSet<u8> = Opcode::ALL.iter().map(|&op| op as u8).collect();

    for byte in 0..=0xFFu8 {
        if !defined.contains(&byte) {
            assert_eq!(
                Opcode::from_byte(byte),
                None,
                "0x{:02X} must not match any opcode",
                byte
            );
        }
    }
}

#[test]
fn test_lda_metadata() {
    let imm = Opcode::LdaImm.metadata();
    assert_eq!(imm.mnemonic, "LDA");
    assert_eq!(imm.addressing_mode, AddressingMode::Immediate);
    assert_eq!(imm.size_bytes, 2);

    let zpg = Opcode::LdaZrpg.metadata();
    assert_eq!(zpg.mnemonic, "LDA");
    assert_eq!(zpg.addressing_mode, AddressingMode::ZeroPage);
    assert_eq!(zpg.size_bytes, 2);
}

#[test]
fn test_jam_metadata() {
    for opcode in Opcode::ALL.iter().filter(|op| op.is_jam()) {
        let meta = opcode.metadata();
        assert_eq!(meta.mnemonic, "JAM");
        assert_eq!(meta.addressing_mode, AddressingMode::Implicit);
        assert_eq!(meta.size_bytes, 1);
    }
}
