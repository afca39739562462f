use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use protrans_core::SequenceSource;

use crate::consts::{GZIP_EXTENSION, STDIO_IDENTIFIER};
use crate::error::{IoError, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IoError::NotFound,
        _ => IoError::Io(e),
    })
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
/// # Returns
///
/// The reader, plus the file size when it is a usable hint for the
/// decompressed content length.
pub fn get_dynamic_reader(path: &Path) -> Result<(BufReader<Box<dyn Read>>, Option<usize>)> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZIP_EXTENSION));
    let file = open(path)?;
    let size = file.metadata().ok().map(|m| m.len() as usize);

    let (file, size_hint): (Box<dyn Read>, Option<usize>) = match is_gzipped {
        true => (Box::new(MultiGzDecoder::new(file)), None),
        false => (Box::new(file), size),
    };

    Ok((BufReader::new(file), size_hint))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - identifier: path to the file to read, or '-' for stdin
pub fn get_dynamic_reader_w_stdin(
    identifier: &str,
) -> Result<(BufReader<Box<dyn Read>>, Option<usize>)> {
    if identifier == STDIO_IDENTIFIER {
        Ok((BufReader::new(Box::new(io::stdin()) as Box<dyn Read>), None))
    } else {
        get_dynamic_reader(Path::new(identifier))
    }
}

///
/// Read everything `reader` yields into one buffer.
///
/// With a size hint the buffer is reserved up front at exactly that size;
/// either way it keeps growing until the reader is exhausted.
///
pub fn read_content<R: Read>(mut reader: R, size_hint: Option<usize>) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    if let Some(size) = size_hint {
        content
            .try_reserve_exact(size)
            .map_err(|_| IoError::Allocation(size))?;
    }
    reader.read_to_end(&mut content)?;
    Ok(content)
}

///
/// Reads sequences from files, gzip files or stdin.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl FileSource {
    pub fn read(&self, identifier: &str) -> Result<Vec<u8>> {
        let (reader, size_hint) = get_dynamic_reader_w_stdin(identifier)?;
        let content = read_content(reader, size_hint)?;
        debug!("read {} bytes from {}", content.len(), identifier);
        Ok(content)
    }
}

impl SequenceSource for FileSource {
    fn read_all(&self, identifier: &str) -> protrans_core::Result<Vec<u8>> {
        self.read(identifier)
            .map_err(|e| e.into_source_error(identifier))
    }
}
