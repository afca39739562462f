use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::debug;

use protrans_core::SequenceSink;

use crate::consts::{GZIP_EXTENSION, STDIO_IDENTIFIER};
use crate::error::{IoError, Result};

///
/// Write `content` to `path`, replacing the file if it exists.
///
/// Parent directories are created as needed. A `.gz` path is written gzip
/// compressed.
///
pub fn write_content(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(IoError::ParentDirectoryCreation)?;
    }

    let file = File::create(path)?;

    if path.extension() == Some(OsStr::new(GZIP_EXTENSION)) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        encoder.write_all(content)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        writer.write_all(content)?;
        writer.flush()?;
    }

    Ok(())
}

///
/// Writes proteins to files, gzip files or stdout.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl FileSink {
    pub fn write(&self, identifier: &str, content: &[u8]) -> Result<()> {
        if identifier == STDIO_IDENTIFIER {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(content)?;
            out.flush()?;
        } else {
            write_content(Path::new(identifier), content)?;
        }
        debug!("wrote {} bytes to {}", content.len(), identifier);
        Ok(())
    }
}

impl SequenceSink for FileSink {
    fn write_all(&self, identifier: &str, content: &[u8]) -> protrans_core::Result<()> {
        self.write(identifier, content)
            .map_err(|e| e.into_sink_error(identifier))
    }
}
