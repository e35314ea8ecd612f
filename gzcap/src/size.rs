//! Human-friendly byte size parsing (`4096`, `512K`, `4G`).

use thiserror::Error;

/// Decimal unit multipliers, keyed by uppercase suffix letter.
const UNIT_MULTIPLIERS: [(char, i64); 3] = [
    ('G', 1_000_000_000),
    ('M', 1_000_000),
    ('K', 1_000),
];

/// Errors produced while parsing a size string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
    /// The trailing character is not one of `G`, `M` or `K`
    #[error("Unable to use {suffix} as modifier for bytes")]
    UnrecognizedUnitSuffix {
        /// The offending character
        suffix: char,
    },

    /// The numeric part is not a base-10 integer
    #[error("Unable to convert {literal:?} to an integer")]
    InvalidIntegerLiteral {
        /// The substring that failed to parse
        literal: String,
    },

    /// The size resolves to a negative byte count
    #[error("Size must not be negative: {size}")]
    Negative {
        /// The full size string
        size: String,
    },

    /// The size does not fit in 64 bits once the unit is applied
    #[error("Size is too large: {size}")]
    Overflow {
        /// The full size string
        size: String,
    },
}

fn unit_multiplier(unit: char) -> Option<i64> {
    let unit = unit.to_ascii_uppercase();
    UNIT_MULTIPLIERS
        .iter()
        .find(|(letter, _)| *letter == unit)
        .map(|(_, multiplier)| *multiplier)
}

fn non_negative(bytes: i64, size: &str) -> Result<u64, ParseSizeError> {
    u64::try_from(bytes).map_err(|_| ParseSizeError::Negative {
        size: size.to_string(),
    })
}

/// Parses a size string into an exact byte count.
///
/// A bare integer is taken as bytes. Otherwise the last character is read as
/// a case-insensitive unit (`G`, `M`, `K`, powers of 1000) and the rest must
/// be an integer.
///
/// The whole string is tried as an integer first and exactly one trailing
/// character is peeled afterwards, so `"GG"` fails on the integer prefix
/// rather than on the unit.
///
/// # Errors
///
/// - [`ParseSizeError::UnrecognizedUnitSuffix`] if the last character is not a unit
/// - [`ParseSizeError::InvalidIntegerLiteral`] if the prefix is not an integer
/// - [`ParseSizeError::Negative`] / [`ParseSizeError::Overflow`] if the result
///   is not representable as a byte count
pub fn parse_byte_size(size: &str) -> Result<u64, ParseSizeError> {
    if let Ok(bytes) = size.parse::<i64>() {
        return non_negative(bytes, size);
    }

    let Some(unit) = size.chars().last() else {
        return Err(ParseSizeError::InvalidIntegerLiteral {
            literal: String::new(),
        });
    };

    let multiplier =
        unit_multiplier(unit).ok_or(ParseSizeError::UnrecognizedUnitSuffix { suffix: unit })?;

    let prefix = &size[..size.len() - unit.len_utf8()];
    let value = prefix
        .parse::<i64>()
        .map_err(|_| ParseSizeError::InvalidIntegerLiteral {
            literal: prefix.to_string(),
        })?;

    let bytes = value
        .checked_mul(multiplier)
        .ok_or_else(|| ParseSizeError::Overflow {
            size: size.to_string(),
        })?;

    non_negative(bytes, size)
}
