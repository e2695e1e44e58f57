use crcgen_core::poly::{CRC16_CCITT, CRC8_WCDMA};
use crcgen_core::{Width, TABLE_LEN};

/// Register contribution of `byte` after 8 rounds of division by `poly`.
///
/// Both widths share one shape: an accumulator starting at zero, and a shadow
/// register holding the byte in its most significant position. The carry of
/// each round is the top bit of `acc ^ shadow`. For CRC-8 that XOR is exactly
/// the classic register seeded with the byte itself.
///
/// Every shift is masked to the register width; bits of `poly` above the
/// width are discarded.
pub const fn table_entry(width: Width, poly: u16, byte: u8) -> u16 {
    let mask = width.mask();
    let top = 1u16 << (width.bits() - 1);
    let poly = poly & mask;

    let mut acc = 0u16;
    let mut shadow = ((byte as u16) << (width.bits() - 8)) & mask;
    let mut n = 0;
    while n < 8 {
        let carry = (acc ^ shadow) & top != 0;
        acc = (acc << 1) & mask;
        shadow = (shadow << 1) & mask;
        if carry {
            acc ^= poly;
        }
        n += 1;
    }
    acc
}

/// Full 256-entry table, widened to u16 regardless of `width`.
pub const fn gen_table(width: Width, poly: u16) -> [u16; TABLE_LEN] {
    let mut table = [0u16; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = table_entry(width, poly, i as u8);
        i += 1;
    }
    table
}

pub const fn crc8_table(poly: u8) -> [u8; TABLE_LEN] {
    let wide = gen_table(Width::Crc8, poly as u16);
    let mut table = [0u8; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        table[i] = wide[i] as u8;
        i += 1;
    }
    table
}

pub const fn crc16_table(poly: u16) -> [u16; TABLE_LEN] {
    gen_table(Width::Crc16, poly)
}

/// CRC-8/WCDMA (0x9B), built at compile time. Lives in .rodata.
pub static CRC8_WCDMA_TABLE: [u8; TABLE_LEN] = crc8_table(CRC8_WCDMA);

/// CRC-16/CCITT (0x1021), built at compile time.
pub static CRC16_CCITT_TABLE: [u16; TABLE_LEN] = crc16_table(CRC16_CCITT);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_one_is_the_polynomial() {
        assert_eq!(table_entry(Width::Crc8, 0x9B, 1), 0x9B);
        assert_eq!(table_entry(Width::Crc16, 0x1021, 1), 0x1021);
    }

    #[test]
    fn wide_bits_are_masked() {
        // 0x19B truncates to 0x9B in an 8-bit register.
        assert_eq!(gen_table(Width::Crc8, 0x19B), gen_table(Width::Crc8, 0x9B));
        assert!(gen_table(Width::Crc8, 0xFFFF).iter().all(|&e| e <= 0xFF));
    }
}
