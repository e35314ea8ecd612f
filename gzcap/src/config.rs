//! Configuration types and constants for gzcap operations.

use std::path::PathBuf;

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// File extension for compressed files
pub const GZIP_EXTENSION: &str = "gz";

/// Default cap on the bytes copied per file.
///
/// Four billion bytes is roughly what the gzip trailer can record as the
/// uncompressed size.
pub const DEFAULT_SIZE_LIMIT: &str = "4G";

/// [`DEFAULT_SIZE_LIMIT`] in bytes
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 4_000_000_000;

/// Compression level used when none is requested
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Represents the two supported subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress input files into `.gz` files
    Compress,
    /// Decompress `.gz` files
    Decompress,
}

/// Configuration for one invocation, resolved once from the command line
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Explicit output filename, honored only for a single input
    pub output: Option<PathBuf>,
    /// Maximum number of bytes copied per file
    pub limit: u64,
    /// Keep input files after processing
    pub keep: bool,
    /// Verbose output
    pub verbose: bool,
    /// Compression level (0-9)
    pub level: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Compress,
            output: None,
            limit: DEFAULT_SIZE_LIMIT_BYTES,
            keep: false,
            verbose: false,
            level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}
