#![no_std]
#![forbid(unsafe_code)]

pub mod reference;
pub mod tables;

pub use tables::{crc16_table, crc8_table, gen_table, table_entry, CRC16_CCITT_TABLE, CRC8_WCDMA_TABLE};

use crcgen_core::{Polynomial, Width, TABLE_LEN};
use log::debug;

/// Table storage at its native element width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entries {
    Crc8([u8; TABLE_LEN]),
    Crc16([u16; TABLE_LEN]),
}

/// A generated lookup table: entry `i` is the contribution of input byte `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    poly: Polynomial,
    entries: Entries,
}

impl Table {
    /// Builds the forward, zero-init table for `poly`. Cannot fail: the
    /// width and range checks already happened in `Polynomial::new`.
    pub fn generate(poly: Polynomial) -> Self {
        let entries = match poly.width() {
            Width::Crc8 => Entries::Crc8(crc8_table(poly.value() as u8)),
            Width::Crc16 => Entries::Crc16(crc16_table(poly.value())),
        };
        debug!("generated {} table for polynomial {}", poly.width(), poly);
        Self { poly, entries }
    }

    pub fn width(&self) -> Width { self.poly.width() }
    pub fn polynomial(&self) -> Polynomial { self.poly }
    pub fn entries(&self) -> &Entries { &self.entries }

    #[inline]
    pub fn get(&self, index: u8) -> u16 {
        match &self.entries {
            Entries::Crc8(t) => t[index as usize] as u16,
            Entries::Crc16(t) => t[index as usize],
        }
    }

    /// Entries in index order, widened to u16.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        (0..=u8::MAX).map(move |i| self.get(i))
    }

    pub fn len(&self) -> usize { TABLE_LEN }
    pub fn is_empty(&self) -> bool { false }

    /// Table-driven CRC of `data` continuing from register `crc`.
    ///
    /// CRC-8: `crc = T[crc ^ byte]`.
    /// CRC-16: `crc = T[(crc >> 8) ^ byte] ^ (crc << 8)`.
    pub fn update(&self, crc: u16, data: &[u8]) -> u16 {
        match &self.entries {
            Entries::Crc8(t) => data.iter().fold(crc as u8, |r, &b| t[(r ^ b) as usize]) as u16,
            Entries::Crc16(t) => data
                .iter()
                .fold(crc, |r, &b| t[((r >> 8) as u8 ^ b) as usize] ^ (r << 8)),
        }
    }

    /// Zero-initialized digest. With 0x1021 this is CRC-16/XMODEM.
    pub fn digest(&self, data: &[u8]) -> u16 { self.update(0, data) }
}
