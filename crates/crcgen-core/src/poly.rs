//! Well-known generator polynomials, normal form.
//! See https://en.wikipedia.org/wiki/Cyclic_redundancy_check#Standards_and_common_use

// CRC-8
pub const CRC8_SMBUS: u8 = 0x07;
pub const CRC8_AUTOSAR: u8 = 0x2F;
pub const CRC8_WCDMA: u8 = 0x9B;

// CRC-16
pub const CRC16_CCITT: u16 = 0x1021;
pub const CRC16_DNP: u16 = 0x3D65;
pub const CRC16_IBM: u16 = 0x8005;
