//! Error types for gzcap operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::size::ParseSizeError;

/// An error annotated with the program that hit it.
///
/// Carried inside the [`io::Error`] returned by [`crate::run_cli`] so the
/// binary can print a single prefixed diagnostic.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output
    pub program: String,
    /// Underlying error produced by processing
    pub source: Error,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Formats an error returned by [`crate::run_cli`] as one line for stderr.
pub fn format_error_for_stderr(program: &str, err: &io::Error) -> String {
    match err
        .get_ref()
        .and_then(|e| e.downcast_ref::<InvocationError>())
    {
        Some(run_err) => run_err.to_string(),
        None => format!("{program}: {err}"),
    }
}

/// Main error type for gzcap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No input file was named
    #[error("Expected a filename in addition to subcommand and flags")]
    MissingInput,

    /// Size string could not be turned into a byte count
    #[error("Invalid size: {0}")]
    InvalidSize(#[from] ParseSizeError),

    /// File lacks the `.gz` extension required by the operation
    #[error("{}: Filename does not have the .gz suffix", path.display())]
    WrongExtension {
        /// Offending path (decompression input or compression output)
        path: PathBuf,
    },

    /// Decompression output already exists
    #[error("{}: Output file already exists", path.display())]
    DestinationExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Compression output would overwrite its own input
    #[error("{}: Input and output are the same file", path.display())]
    SameFile {
        /// Path shared by input and output
        path: PathBuf,
    },

    /// Transfer hit the configured byte cap
    #[error("{path}: Needed size is larger than the limit of {limit} bytes")]
    SizeLimitExceeded {
        /// Path to the input file
        path: String,
        /// The configured cap
        limit: u64,
    },

    /// Failed to open input file
    #[error("{path}: {source}")]
    OpenInput {
        /// Path to the input file
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input does not start with a gzip header
    #[error("{path}: Not in gzip format")]
    InvalidHeader {
        /// Path to the input file
        path: String,
    },

    /// Compression transfer failed
    #[error("{path}: Compression failed: {message}")]
    Compression {
        /// Path to the file being compressed
        path: String,
        /// Error message from the transfer
        message: String,
    },

    /// Decompression transfer failed
    #[error("{path}: Decompression failed: {message}")]
    Decompression {
        /// Path to the file being decompressed
        path: String,
        /// Error message from the transfer
        message: String,
    },

    /// Failed to remove input file
    #[error("{path}: Cannot remove: {source}")]
    RemoveFile {
        /// Path to the file
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Some files were skipped after a per-file failure
    #[error("{failed} file(s) could not be processed")]
    Incomplete {
        /// Number of files that failed
        failed: usize,
    },
}

/// Specialized `Result` type for gzcap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error ends the whole invocation.
    ///
    /// Non-fatal errors only abandon the current file; the remaining
    /// files are still processed.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Error::SizeLimitExceeded { .. }
                | Error::Compression { .. }
                | Error::Decompression { .. }
                | Error::RemoveFile { .. }
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            Error::DestinationExists { .. } | Error::SameFile { .. } => {
                io::Error::new(io::ErrorKind::AlreadyExists, err)
            }
            Error::MissingInput | Error::InvalidSize(_) | Error::WrongExtension { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            Error::InvalidHeader { .. } | Error::Decompression { .. } => {
                io::Error::new(io::ErrorKind::InvalidData, err)
            }
            Error::SizeLimitExceeded { .. }
            | Error::Compression { .. }
            | Error::Incomplete { .. } => io::Error::other(err),
            Error::OpenInput { source, .. }
            | Error::CreateOutput { source, .. }
            | Error::RemoveFile { source, .. } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
        }
    }
}
