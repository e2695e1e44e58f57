//! Bit-serial CRC digests, no tables.
//!
//! Same model as the generated tables: MSB-first, zero initial register, no
//! final XOR. These exist to cross-check a generated table, not for speed.

use crcgen_core::{Polynomial, Width};

pub const fn crc8_bitwise(poly: u8, data: &[u8]) -> u8 {
    let mut crc = 0u8;
    let mut i = 0;
    while i < data.len() {
        crc ^= data[i];
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 { (crc << 1) ^ poly } else { crc << 1 };
            bit += 1;
        }
        i += 1;
    }
    crc
}

pub const fn crc16_bitwise(poly: u16, data: &[u8]) -> u16 {
    let mut crc = 0u16;
    let mut i = 0;
    while i < data.len() {
        crc ^= (data[i] as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 { (crc << 1) ^ poly } else { crc << 1 };
            bit += 1;
        }
        i += 1;
    }
    crc
}

/// Width-dispatched bit-serial digest, widened to u16.
pub fn bitwise(poly: Polynomial, data: &[u8]) -> u16 {
    match poly.width() {
        Width::Crc8 => crc8_bitwise(poly.value() as u8, data) as u16,
        Width::Crc16 => crc16_bitwise(poly.value(), data),
    }
}

// Published check values for "123456789".
const CHECK_INPUT: &[u8] = b"123456789";
const _: () = assert!(crc8_bitwise(0x07, CHECK_INPUT) == 0xF4); // CRC-8/SMBUS
const _: () = assert!(crc16_bitwise(0x1021, CHECK_INPUT) == 0x31C3); // CRC-16/XMODEM
const _: () = assert!(crc16_bitwise(0x8005, CHECK_INPUT) == 0xFEE8); // CRC-16/UMTS
