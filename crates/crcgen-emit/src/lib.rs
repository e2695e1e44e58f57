#![no_std]
#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod backend;
#[cfg(feature = "std")]
pub mod fs_backend;
pub mod render;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use backend::OutputSink;
use crcgen_core::{CrcError, CrcResult, Width};
use crcgen_table::Table;
use log::info;

pub use render::render;

/// Target language of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Rust,
    Go,
}

// Strict and reserved keywords, 2021 edition.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "unsafe", "use", "where", "while",
    "abstract", "become", "box", "do", "final", "macro", "override", "priv", "typeof", "unsized",
    "virtual", "yield",
];

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return",
    "select", "struct", "switch", "type", "var",
];

impl Lang {
    pub fn extension(self) -> &'static str {
        match self {
            Lang::Rust => "rs",
            Lang::Go => "go",
        }
    }

    /// `crc<bits>_table.<ext>`
    pub fn default_file_name(self, width: Width) -> String {
        format!("crc{}_table.{}", width.bits(), self.extension())
    }

    fn is_keyword(self, word: &str) -> bool {
        match self {
            Lang::Rust => RUST_KEYWORDS.contains(&word),
            Lang::Go => GO_KEYWORDS.contains(&word),
        }
    }
}

/// Everything the renderer needs besides the table itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Module (Rust) or package (Go) name.
    pub package: String,
    pub lang: Lang,
    /// Command line quoted in the "do not edit" header.
    pub generated_by: String,
}

impl EmitConfig {
    pub fn new(package: &str, lang: Lang, generated_by: &str) -> CrcResult<Self> {
        validate_package(package, lang)?;
        Ok(Self {
            package: package.into(),
            lang,
            generated_by: generated_by.into(),
        })
    }
}

/// Package names must be plain identifiers and not keywords of `lang`.
pub fn validate_package(name: &str, lang: Lang) -> CrcResult<()> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(CrcError::MissingPackage)?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(CrcError::InvalidPackage);
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') || name == "_" || lang.is_keyword(name) {
        return Err(CrcError::InvalidPackage);
    }
    Ok(())
}

/// Renders tables and hands them to a sink in one piece.
pub struct Emitter {
    sink: Box<dyn OutputSink>,
    config: EmitConfig,
}

impl Emitter {
    pub fn new(sink: Box<dyn OutputSink>, config: EmitConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &EmitConfig { &self.config }

    /// Render and commit. Returns the number of bytes written.
    pub fn emit(&mut self, table: &Table) -> CrcResult<usize> {
        let source = render(table, &self.config);
        self.sink.commit(source.as_bytes())?;
        info!("{} table ({}) written to {}", table.width(), table.polynomial(), self.sink.describe());
        Ok(source.len())
    }
}
