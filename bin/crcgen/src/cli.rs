use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crcgen_core::{CrcError, CrcResult, Polynomial, Width};
use crcgen_emit::{EmitConfig, Lang};

const AFTER_HELP: &str = "\
See https://en.wikipedia.org/wiki/Cyclic_redundancy_check#Standards_and_common_use
for more information about CRC polynomials.";

#[derive(Parser, Debug)]
#[command(name = "crcgen", version, about = "Generate CRC-8/CRC-16 lookup tables as source code", after_help = AFTER_HELP)]
pub struct Cli {
    /// CRC size in bits (8 or 16)
    #[arg(long, value_name = "BITS", value_parser = parse_width)]
    pub size: Width,

    /// CRC polynomial in normal form, e.g. 0x1021 (0x, 0o, 0b prefixes accepted)
    #[arg(long, value_name = "POLYNOMIAL", value_parser = parse_poly)]
    pub poly: u32,

    /// Output filename [default: crc<BITS>_table.<ext>]; "-" writes to stdout
    #[arg(long, short, value_name = "FILENAME")]
    pub output: Option<PathBuf>,

    /// Module (Rust) or package (Go) name of the generated file
    #[arg(long, env = "GOPACKAGE")]
    pub package: String,

    #[arg(long, value_enum, default_value_t = Target::Rust)]
    pub lang: Target,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Rust,
    Go,
}

impl From<Target> for Lang {
    fn from(t: Target) -> Self {
        match t {
            Target::Rust => Lang::Rust,
            Target::Go => Lang::Go,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

/// A fully validated generation request.
#[derive(Debug)]
pub struct Job {
    pub poly: Polynomial,
    pub output: Output,
    pub config: EmitConfig,
}

impl Cli {
    pub fn into_job(self, generated_by: &str) -> CrcResult<Job> {
        let poly = Polynomial::new(self.size, self.poly)?;
        let lang = Lang::from(self.lang);
        let config = EmitConfig::new(&self.package, lang, generated_by)?;

        let output = match self.output {
            Some(path) if path.as_os_str() == "-" => Output::Stdout,
            Some(path) => Output::File(path),
            None => Output::File(PathBuf::from(lang.default_file_name(self.size))),
        };
        Ok(Job { poly, output, config })
    }
}

fn parse_width(s: &str) -> Result<Width, String> {
    let bits = parse_int(s)?;
    Width::try_from(bits).map_err(|e| e.to_string())
}

fn parse_poly(s: &str) -> Result<u32, String> {
    match parse_int(s)? {
        0 => Err(CrcError::ZeroPolynomial.to_string()),
        v => Ok(v),
    }
}

/// Integer with optional base prefix: 0x/0X, 0o/0O or a leading 0, 0b/0B.
/// Underscores between digits are ignored.
pub fn parse_int(s: &str) -> Result<u32, String> {
    let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    let (digits, radix) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        (bin, 2)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        (oct, 8)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(format!("invalid integer {:?}", s));
    }
    u32::from_str_radix(digits, radix).map_err(|e| format!("invalid integer {:?}: {}", s, e))
}
