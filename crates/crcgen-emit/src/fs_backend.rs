#![cfg(feature = "std")]

use crate::backend::OutputSink;
use crcgen_core::CrcResult;
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::format;
use std::process;
use std::string::{String, ToString};

/// Writes the table file atomically: temp sibling, fsync, rename.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// `<file>.<pid>.tmp` next to the destination; concurrent runs never share it.
    pub fn tmp_path(&self) -> io::Result<PathBuf> {
        let mut name = self.path.file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"))?
            .to_os_string();
        name.push(format!(".{}.tmp", process::id()));
        Ok(self.path.with_file_name(name))
    }

    fn write_tmp(tmp_path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true).create(true).truncate(true)
            .open(tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()
    }
}

impl OutputSink for FileSink {
    fn commit(&mut self, contents: &[u8]) -> CrcResult<()> {
        let tmp_path = self.tmp_path()?;
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent {
            fs::create_dir_all(dir)?;
        }

        // 1. Write + fsync the temp file
        if let Err(e) = Self::write_tmp(&tmp_path, contents) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                warn!("could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e.into());
        }

        // 2. Rename over the destination (atomic)
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        // 3. Sync parent dir
        if let Ok(f) = File::open(parent.unwrap_or(Path::new("."))) { let _ = f.sync_all(); }

        debug!("wrote {} bytes to {}", contents.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String { self.path.display().to_string() }
}

/// Standard output, for piping into another tool.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn commit(&mut self, contents: &[u8]) -> CrcResult<()> {
        let mut out = io::stdout().lock();
        out.write_all(contents)?;
        out.flush()?;
        Ok(())
    }

    fn describe(&self) -> String { "<stdout>".to_string() }
}
