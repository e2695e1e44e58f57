#![no_std]
#[cfg(feature = "std")]
extern crate std;

pub mod poly;

/// Number of entries in every lookup table: one per input byte value.
pub const TABLE_LEN: usize = 256;

/// Supported CRC register widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Width {
    Crc8 = 8,
    Crc16 = 16,
}

impl Width {
    #[inline(always)]
    pub const fn bits(self) -> u32 { self as u32 }

    /// All-ones value of the register width.
    #[inline(always)]
    pub const fn mask(self) -> u16 {
        match self {
            Width::Crc8 => 0x00FF,
            Width::Crc16 => 0xFFFF,
        }
    }

    /// Hex digits needed to print one table entry.
    pub const fn hex_digits(self) -> usize { (self.bits() / 4) as usize }

    pub const fn from_bits(bits: u32) -> CrcResult<Self> {
        match bits {
            8 => Ok(Width::Crc8),
            16 => Ok(Width::Crc16),
            other => Err(CrcError::UnsupportedWidth(other)),
        }
    }
}

impl TryFrom<u32> for Width {
    type Error = CrcError;
    fn try_from(bits: u32) -> CrcResult<Self> { Self::from_bits(bits) }
}

impl core::fmt::Display for Width {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CRC-{}", self.bits())
    }
}

/// A generator polynomial in normal (MSB-first) form, known to fit its width.
///
/// The implicit x^W term is not stored: CRC-16/CCITT is `0x1021`, not `0x11021`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Polynomial {
    width: Width,
    value: u16,
}

impl Polynomial {
    /// Rejects zero and any value with bits set above `width`.
    pub const fn new(width: Width, value: u32) -> CrcResult<Self> {
        if value == 0 {
            return Err(CrcError::ZeroPolynomial);
        }
        if value > width.mask() as u32 {
            return Err(CrcError::PolynomialOverflow { width, value });
        }
        Ok(Self { width, value: value as u16 })
    }

    pub const fn width(&self) -> Width { self.width }
    pub const fn value(&self) -> u16 { self.value }
}

impl core::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{:0width$X}", self.value, width = self.width.hex_digits())
    }
}

pub type CrcResult<T> = Result<T, CrcError>;

#[derive(Debug)]
pub enum CrcError {
    UnsupportedWidth(u32),
    ZeroPolynomial,
    PolynomialOverflow { width: Width, value: u32 },
    MissingPackage,
    InvalidPackage,
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl core::fmt::Display for CrcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CrcError::UnsupportedWidth(bits) => write!(f, "CRC size must be 8 or 16 bits (got {})", bits),
            CrcError::ZeroPolynomial => write!(f, "a nonzero polynomial must be specified"),
            CrcError::PolynomialOverflow { width, value } => {
                write!(f, "polynomial 0x{:X} does not fit in {} bits", value, width.bits())
            }
            CrcError::MissingPackage => write!(f, "a package name must be specified"),
            CrcError::InvalidPackage => write!(f, "package name must be an identifier"),
            #[cfg(feature = "std")]
            CrcError::Io(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CrcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrcError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for CrcError {
    fn from(e: std::io::Error) -> Self { CrcError::Io(e) }
}
