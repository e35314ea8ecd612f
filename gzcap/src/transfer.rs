//! Byte copying capped at a fixed size.

use std::io;

use thiserror::Error;

/// Failure of a bounded copy.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The cap was reached while the source still had data
    #[error("Needed size is larger than the limit of {limit} bytes")]
    LimitExceeded {
        /// The configured cap
        limit: u64,
    },

    /// Read or write failure other than a clean end of input
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Copies at most `limit` bytes from `reader` to `writer`.
///
/// Returns the number of bytes copied when the source ends first. Reaching
/// `limit` is reported as [`TransferError::LimitExceeded`] without probing
/// for more input, so a source of exactly `limit` bytes is rejected too.
/// Up to `limit` bytes may already have been written when that happens.
///
/// # Errors
///
/// - [`TransferError::LimitExceeded`] when `limit` bytes were copied
/// - [`TransferError::Io`] on any read or write failure
pub fn copy_bounded<R, W>(
    reader: &mut R,
    writer: &mut W,
    limit: u64,
) -> Result<u64, TransferError>
where
    R: io::Read + ?Sized,
    W: io::Write + ?Sized,
{
    let mut limited = io::Read::take(reader, limit);
    let written = io::copy(&mut limited, writer)?;

    if written == limit {
        return Err(TransferError::LimitExceeded { limit });
    }

    Ok(written)
}
