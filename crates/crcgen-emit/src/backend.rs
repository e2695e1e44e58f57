#![forbid(unsafe_code)]
use alloc::string::String;
use crcgen_core::CrcResult;

/// Destination for a rendered table source file.
pub trait OutputSink {
    /// Write the complete file. A failure MUST NOT leave a partial file
    /// where a complete one is expected.
    fn commit(&mut self, contents: &[u8]) -> CrcResult<()>;

    /// Human-readable destination, for logs.
    fn describe(&self) -> String;
}
