//! Command line argument parsing for the gzcap utility.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gzcap::{
    parse_byte_size, CliConfig, OperationMode, DEFAULT_COMPRESSION_LEVEL, DEFAULT_SIZE_LIMIT,
};

/// Size-capped gzip utility
///
/// Compresses or decompresses individual files, copying at most a fixed
/// number of bytes per file.
#[derive(Debug, Parser)]
#[command(
    name = "gzcap",
    version,
    about = "Compress or decompress files with a cap on the bytes copied",
    long_about = "gzcap compresses files into .gz or decompresses .gz files. Each transfer \
                 stops at the size given with -l; output that would reach the limit is \
                 discarded, which guards against decompression bombs."
)]
pub struct GzcapOpts {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress files into .gz files
    Compress(FileArgs),
    /// Decompress .gz files
    Decompress(FileArgs),
}

/// Options shared by both subcommands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// Files to process
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Name of the output file; ignored when several files are given
    #[arg(short = 'o', long = "output", value_name = "NAME")]
    pub output: Option<PathBuf>,

    /// Maximum number of bytes to copy (4096, 512K, 4M, 4G; powers of 1000)
    #[arg(
        short = 'l',
        long = "limit",
        value_name = "SIZE",
        default_value = DEFAULT_SIZE_LIMIT,
        value_parser = parse_byte_size
    )]
    pub limit: u64,

    /// Keep (don't delete) input files
    #[arg(short = 'k', long = "keep")]
    pub keep: bool,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Compression level, 0 (none) to 9 (best)
    #[arg(
        long = "level",
        value_name = "LEVEL",
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(u32).range(0..=9)
    )]
    pub level: u32,
}

impl GzcapOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        let (mode, args) = self.mode_and_args();

        CliConfig {
            mode,
            output: args.output.clone(),
            limit: args.limit,
            keep: args.keep,
            verbose: args.verbose,
            level: args.level,
        }
    }

    /// Files supplied on the command line
    pub fn files(&self) -> &[String] {
        &self.mode_and_args().1.files
    }

    fn mode_and_args(&self) -> (OperationMode, &FileArgs) {
        match &self.command {
            Command::Compress(args) => (OperationMode::Compress, args),
            Command::Decompress(args) => (OperationMode::Decompress, args),
        }
    }
}
