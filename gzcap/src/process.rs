//! High-level file processing and CLI orchestration.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{CliConfig, OperationMode};
use crate::error::{Error, InvocationError, Result};
use crate::io::{
    compressed_output_path, create_output, create_output_exclusive, decompressed_output_path,
    has_gzip_extension, is_same_file, open_input,
};
use crate::operations::{compress_stream, decompress_stream, open_decoder};
use crate::transfer::TransferError;

/// A completed transfer of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Path of the file that was written
    pub output: PathBuf,
    /// Uncompressed bytes moved through the codec
    pub bytes: u64,
}

/// Maps a failed transfer to the per-file error for `mode`.
fn transfer_failure(err: TransferError, input_path: &str, mode: OperationMode) -> Error {
    let path = input_path.to_string();
    match (err, mode) {
        (TransferError::LimitExceeded { limit }, _) => Error::SizeLimitExceeded { path, limit },
        (TransferError::Io(source), OperationMode::Compress) => Error::Compression {
            path,
            message: source.to_string(),
        },
        (TransferError::Io(source), OperationMode::Decompress) => Error::Decompression {
            path,
            message: source.to_string(),
        },
    }
}

/// Deletes a partially written output file.
///
/// The caller is already reporting a failure for this file, so a removal
/// error is only printed.
fn discard_partial_output(path: &Path) {
    if let Err(err) = std::fs::remove_file(path) {
        eprintln!("{}: Cannot remove partial output: {err}", path.display());
    }
}

/// Removes the input file after successful processing.
///
/// # Parameters
///
/// * `input_path` - Path to the input file to potentially remove
/// * `config` - CLI configuration controlling file retention behavior
///
/// # Errors
///
/// Returns [`Error::RemoveFile`] if file removal fails.
pub fn cleanup_input_file(input_path: &str, config: &CliConfig) -> Result<()> {
    if config.keep {
        return Ok(());
    }

    std::fs::remove_file(input_path).map_err(|source| Error::RemoveFile {
        path: input_path.to_string(),
        source,
    })?;

    if config.verbose {
        eprintln!("Removed input file: {input_path}");
    }
    Ok(())
}

/// Compresses one file into `<input>.gz`, or into `output` when given.
///
/// The destination is created or truncated unconditionally. If the
/// transfer fails or exceeds the cap, the partial destination is deleted.
///
/// # Errors
///
/// - [`Error::OpenInput`] / [`Error::CreateOutput`] when a file cannot be opened
/// - [`Error::WrongExtension`] if the destination does not end in `.gz`
/// - [`Error::SameFile`] if the destination is the input itself
/// - [`Error::SizeLimitExceeded`] if the input is not smaller than `config.limit`
/// - [`Error::Compression`] on a read or write failure during the transfer
pub fn compress_file(
    input_path: &str,
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<Transfer> {
    let mut input = open_input(input_path)?;

    let output_path = output.map_or_else(
        || compressed_output_path(Path::new(input_path)),
        Path::to_path_buf,
    );
    if !has_gzip_extension(&output_path) {
        return Err(Error::WrongExtension { path: output_path });
    }
    if is_same_file(Path::new(input_path), &output_path) {
        return Err(Error::SameFile { path: output_path });
    }

    let writer = create_output(&output_path)?;

    // The encoder owns the writer, so the file is closed once this returns
    match compress_stream(&mut input, writer, config.limit, config.level) {
        Ok(bytes) => Ok(Transfer {
            output: output_path,
            bytes,
        }),
        Err(err) => {
            discard_partial_output(&output_path);
            Err(transfer_failure(err, input_path, OperationMode::Compress))
        }
    }
}

/// Decompresses one `.gz` file into its stripped name, or into `output`
/// when given.
///
/// The gzip header is validated before the destination is created, and the
/// destination is never overwritten. If the transfer fails or exceeds the
/// cap, the partial destination is deleted.
///
/// # Errors
///
/// - [`Error::WrongExtension`] if the input does not end in `.gz`
/// - [`Error::OpenInput`] / [`Error::CreateOutput`] when a file cannot be opened
/// - [`Error::InvalidHeader`] if the input is not gzip data
/// - [`Error::DestinationExists`] if the destination already exists
/// - [`Error::SizeLimitExceeded`] if the output would reach `config.limit`
/// - [`Error::Decompression`] on corrupt data or a write failure
pub fn decompress_file(
    input_path: &str,
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<Transfer> {
    let input_path_buf = Path::new(input_path);
    if !has_gzip_extension(input_path_buf) {
        return Err(Error::WrongExtension {
            path: input_path_buf.to_path_buf(),
        });
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => decompressed_output_path(input_path_buf)?,
    };

    let input = open_input(input_path)?;
    let mut decoder = open_decoder(input).map_err(|_| Error::InvalidHeader {
        path: input_path.to_string(),
    })?;

    let mut writer = create_output_exclusive(&output_path)?;
    let result = decompress_stream(&mut decoder, &mut writer, config.limit);
    drop(writer);

    match result {
        Ok(bytes) => Ok(Transfer {
            output: output_path,
            bytes,
        }),
        Err(err) => {
            discard_partial_output(&output_path);
            Err(transfer_failure(err, input_path, OperationMode::Decompress))
        }
    }
}

/// Processes a single file according to the CLI configuration.
///
/// Input removal is not done here; [`run_cli`] removes inputs once every
/// file has been processed.
///
/// # Errors
///
/// See [`compress_file`] and [`decompress_file`].
pub fn process_file(
    input_path: &str,
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<Transfer> {
    match config.mode {
        OperationMode::Compress => compress_file(input_path, output, config),
        OperationMode::Decompress => decompress_file(input_path, output, config),
    }
}

/// Runs a CLI command over multiple input files.
///
/// Files are processed in order. An explicit output filename is ignored,
/// with a warning, when more than one file is given.
///
/// Fatal errors (see [`Error::is_fatal`]) stop the run immediately and no
/// input is removed. Other failures are reported and the next file is
/// processed. Afterwards each successfully processed input is removed unless
/// `config.keep` is set; a failed removal is only a warning.
///
/// Only completed inputs are removed, not every input named: an input whose
/// transfer failed or overflowed is kept because its output was discarded.
///
/// # Parameters
///
/// * `files` - Input file paths to process
/// * `config` - CLI configuration specifying operation mode and options
/// * `program` - Program name to include in messages
///
/// # Errors
///
/// Returns an error wrapping an [`InvocationError`] for the first fatal
/// error, or [`Error::Incomplete`] if any file failed.
pub fn run_cli(files: &[String], config: &CliConfig, program: &str) -> io::Result<()> {
    let invocation_error = |source: Error| {
        io::Error::other(InvocationError {
            program: program.to_string(),
            source,
        })
    };

    if files.is_empty() {
        return Err(invocation_error(Error::MissingInput));
    }

    let output = match config.output.as_deref() {
        Some(_) if files.len() > 1 => {
            eprintln!("{program}: Warning: output filename is ignored for multiple input files");
            None
        }
        output => output,
    };

    let mut completed = Vec::with_capacity(files.len());
    let mut failed = 0;

    for file in files {
        match process_file(file, output, config) {
            Ok(transfer) => {
                if config.verbose {
                    eprintln!(
                        "{file}: {} bytes -> {}",
                        transfer.bytes,
                        transfer.output.display()
                    );
                }
                completed.push(file);
            }
            Err(err) if !err.is_fatal() => {
                eprintln!("{program}: {err}");
                failed += 1;
            }
            Err(err) => return Err(invocation_error(err)),
        }
    }

    for file in completed {
        if let Err(err) = cleanup_input_file(file, config) {
            eprintln!("{program}: Warning: {err}");
        }
    }

    if failed > 0 {
        return Err(invocation_error(Error::Incomplete { failed }));
    }

    Ok(())
}
