//! File I/O operations and path manipulation for gzcap.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_BUFFER_SIZE, GZIP_EXTENSION};
use crate::error::{Error, Result};

/// Checks if a file path ends in the canonical `.gz` extension.
///
/// The match is exact, so `FILE.GZ` does not qualify.
pub fn has_gzip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext == GZIP_EXTENSION)
}

/// Default compression output: the input path with `.gz` appended.
pub fn compressed_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(GZIP_EXTENSION);
    PathBuf::from(name)
}

/// Default decompression output: the input path with its `.gz` stripped.
///
/// # Errors
///
/// Returns [`Error::WrongExtension`] if the input does not end in `.gz`.
pub fn decompressed_output_path(input: &Path) -> Result<PathBuf> {
    if !has_gzip_extension(input) {
        return Err(Error::WrongExtension {
            path: input.to_path_buf(),
        });
    }

    // `has_gzip_extension` guarantees a non-empty stem
    Ok(input.with_extension(""))
}

/// Whether two paths name the same existing file.
///
/// Paths that cannot be resolved (for instance because they do not exist
/// yet) never match.
pub fn is_same_file(first: &Path, second: &Path) -> bool {
    match (fs::canonicalize(first), fs::canonicalize(second)) {
        (Ok(first), Ok(second)) => first == second,
        _ => false,
    }
}

/// Opens a buffered reader over the input file.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened.
pub fn open_input(path: &str) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::OpenInput {
        path: path.to_string(),
        source,
    })?;
    Ok(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Creates (or truncates) the output file behind a buffered writer.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the file cannot be created.
pub fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Creates the output file, refusing to touch an existing one.
///
/// # Errors
///
/// - [`Error::DestinationExists`] if `path` already exists
/// - [`Error::CreateOutput`] for any other creation failure
pub fn create_output_exclusive(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::DestinationExists {
                path: path.to_path_buf(),
            },
            _ => Error::CreateOutput {
                path: path.to_path_buf(),
                source,
            },
        })?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}
