//! Size-capped gzip compression and decompression of individual files.
//!
//! Every transfer is bounded by a byte cap parsed from a size string such as
//! `4G` or `512K`, which guards against decompression bombs and oversized
//! outputs.

mod config;
mod error;
mod io;
mod operations;
mod process;
mod size;
mod transfer;


pub use config::{
    CliConfig, OperationMode, DEFAULT_BUFFER_SIZE, DEFAULT_COMPRESSION_LEVEL, DEFAULT_SIZE_LIMIT,
    DEFAULT_SIZE_LIMIT_BYTES, GZIP_EXTENSION,
};
pub use error::{format_error_for_stderr, Error, InvocationError, Result};
pub use io::{
    compressed_output_path, create_output, create_output_exclusive, decompressed_output_path,
    has_gzip_extension, is_same_file, open_input,
};
pub use operations::{compress_stream, decompress_stream, open_decoder};
pub use process::{
    cleanup_input_file, compress_file, decompress_file, process_file, run_cli, Transfer,
};
pub use size::{parse_byte_size, ParseSizeError};
pub use transfer::{copy_bounded, TransferError};
