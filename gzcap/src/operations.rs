//! Gzip stream wiring around the bounded copy.

use std::io;

use flate2::bufread::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::transfer::{copy_bounded, TransferError};

/// Compresses at most `limit` bytes of `input` into gzip data on `output`.
///
/// Returns the number of uncompressed bytes consumed. The gzip trailer is
/// only written when the whole input fit under the cap.
///
/// # Errors
///
/// Returns [`TransferError::LimitExceeded`] when the cap was reached, or
/// [`TransferError::Io`] if reading, compressing or writing failed.
pub fn compress_stream<R, W>(
    input: &mut R,
    output: W,
    limit: u64,
    level: u32,
) -> Result<u64, TransferError>
where
    R: io::Read + ?Sized,
    W: io::Write,
{
    let mut encoder = GzEncoder::new(output, Compression::new(level.min(9)));
    let bytes_read = copy_bounded(input, &mut encoder, limit)?;
    encoder.finish()?.flush()?;
    Ok(bytes_read)
}

/// Builds a gzip decoder over `input`, checking the header up front.
///
/// Concatenated gzip members are decoded as one stream.
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidData`] error if `input` does not start
/// with a complete gzip header.
pub fn open_decoder<R: io::BufRead>(input: R) -> io::Result<MultiGzDecoder<R>> {
    let decoder = MultiGzDecoder::new(input);
    if decoder.header().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "not in gzip format",
        ));
    }
    Ok(decoder)
}

/// Decompresses from an opened decoder into `output`, stopping at `limit`
/// decompressed bytes.
///
/// # Errors
///
/// Returns [`TransferError::LimitExceeded`] when the cap was reached, or
/// [`TransferError::Io`] on corrupt data or a write failure.
pub fn decompress_stream<R, W>(
    decoder: &mut MultiGzDecoder<R>,
    output: &mut W,
    limit: u64,
) -> Result<u64, TransferError>
where
    R: io::BufRead,
    W: io::Write + ?Sized,
{
    let bytes_written = copy_bounded(decoder, output, limit)?;
    output.flush()?;
    Ok(bytes_written)
}
