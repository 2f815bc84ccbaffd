use std::io;

use thiserror::Error;

/// Every way the codec can fail.
///
/// Each condition is its own variant so callers can match on exactly what
/// went wrong instead of parsing a message. None of these are transient:
/// retrying with the same inputs fails identically, so the caller's only
/// recovery is to fix the input, the payload, or the dictionary.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Encode was given zero bytes; there is nothing to count or code.
    #[error("input is empty, nothing to encode")]
    EmptyInput,

    /// A Huffman tree needs at least two leaves. A single-symbol input has
    /// no meaningful binary code; a caller that wants one must synthesize a
    /// trivial code itself.
    #[error("alphabet has {distinct} distinct byte value(s); at least 2 are required")]
    AlphabetTooSmall { distinct: usize },

    /// Decode was handed a dictionary with no entries.
    #[error("dictionary is empty")]
    EmptyDictionary,

    /// Packing met an input byte with no dictionary entry: the input and
    /// the dictionary do not come from the same encode.
    #[error("byte 0x{byte:02x} has no dictionary entry")]
    UnknownSymbol { byte: u8 },

    /// No dictionary code matches the bitstream at `bit_offset`. The payload
    /// is corrupted or truncated, or the wrong dictionary was supplied.
    #[error("no dictionary code matches the bitstream at bit {bit_offset}")]
    UnmatchedBits { bit_offset: usize },

    /// A serialized payload must hold at least one data byte plus the
    /// trailing valid-bits byte.
    #[error("payload too short: need at least one data byte and the trailing valid-bits byte")]
    TruncatedPayload,

    /// The trailing byte of a payload must be in `1..=8` (8 meaning the
    /// final data byte is fully meaningful).
    #[error("trailing valid-bits byte is {valid_bits}, expected 1..=8")]
    BadPadding { valid_bits: u8 },

    /// A dictionary line failed to parse. `line` is 1-based.
    #[error("dictionary line {line} is malformed: {reason}")]
    MalformedDictLine { line: usize, reason: String },

    /// Underlying read or write failure while moving a dictionary through a
    /// caller-supplied stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}
