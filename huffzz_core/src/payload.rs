use crate::dict::Dictionary;
use crate::error::CodecError;

/// A packed Huffman bitstream.
///
/// # Wire form
/// ```text
/// [D_0] [D_1] ... [D_{k-1}] [M]
/// ```
/// Each `D_i` holds 8 code bits, most significant bit first. `M` is the
/// number of meaningful bits in `D_{k-1}`, always in `1..=8`; `8` means the
/// final data byte is fully meaningful, and the spare low bits below `M`
/// are zero padding. `M = 0` cannot occur: a payload only exists for a
/// non-empty input over at least two symbols, so the stream holds at least
/// one bit and `data` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    data: Vec<u8>,
    valid_bits: u8,
}

impl EncodedPayload {
    /// Pack `input` symbol by symbol using the codes in `dict`.
    ///
    /// Each code's bits are shifted into an accumulator that is flushed
    /// every 8 bits; a final partial byte is right-padded with zeros and its
    /// meaningful bit count recorded.
    pub fn pack(dict: &Dictionary, input: &[u8]) -> Result<Self, CodecError> {
        if input.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let mut data = Vec::with_capacity(input.len() / 2 + 1);
        let mut acc = 0u8;
        let mut filled = 0u8;
        for &byte in input {
            let code = dict
                .code_for(byte)
                .ok_or(CodecError::UnknownSymbol { byte })?;
            for bit in code.bytes() {
                acc = (acc << 1) | (bit == b'1') as u8;
                filled += 1;
                if filled == 8 {
                    data.push(acc);
                    acc = 0;
                    filled = 0;
                }
            }
        }

        let valid_bits = if filled == 0 {
            8 // stream ended on a byte boundary; the last byte is all code bits
        } else {
            data.push(acc << (8 - filled));
            filled
        };

        Ok(EncodedPayload { data, valid_bits })
    }

    /// Unpack back into the original symbol sequence.
    ///
    /// Expands the stream to its meaningful bits, then repeatedly takes the
    /// one dictionary code matching at the current position; prefix-freedom
    /// guarantees at most one can. A position where no code matches fails
    /// immediately instead of rescanning, so corrupted input can never stall
    /// the decoder.
    pub fn unpack(&self, dict: &Dictionary) -> Result<Vec<u8>, CodecError> {
        if dict.is_empty() {
            return Err(CodecError::EmptyDictionary);
        }

        let bits = self.bit_string();
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < bits.len() {
            let rest = &bits[pos..];
            match dict
                .entries()
                .iter()
                .find(|entry| rest.starts_with(entry.code.as_str()))
            {
                Some(entry) => {
                    out.push(entry.symbol);
                    pos += entry.code.len();
                }
                None => return Err(CodecError::UnmatchedBits { bit_offset: pos }),
            }
        }
        Ok(out)
    }

    /// Serialize to the wire form: data bytes, then the valid-bits byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 1);
        out.extend_from_slice(&self.data);
        out.push(self.valid_bits);
        out
    }

    /// Parse the wire form produced by [`EncodedPayload::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() < 2 {
            return Err(CodecError::TruncatedPayload);
        }
        let (data, meta) = bytes.split_at(bytes.len() - 1);
        let valid_bits = meta[0];
        if valid_bits == 0 || valid_bits > 8 {
            return Err(CodecError::BadPadding { valid_bits });
        }
        Ok(EncodedPayload {
            data: data.to_vec(),
            valid_bits,
        })
    }

    /// Meaningful bit count of the whole stream.
    pub fn bit_len(&self) -> usize {
        (self.data.len() - 1) * 8 + self.valid_bits as usize
    }

    /// Size on the wire, trailing valid-bits byte included.
    pub fn wire_len(&self) -> usize {
        self.data.len() + 1
    }

    /// Packed data bytes, without the trailing valid-bits byte.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of meaningful bits in the final data byte (`1..=8`).
    pub fn valid_bits(&self) -> u8 {
        self.valid_bits
    }

    /// The meaningful bits as a '0'/'1' string, padding stripped.
    fn bit_string(&self) -> String {
        let mut bits = String::with_capacity(self.data.len() * 8);
        for &byte in &self.data {
            for shift in (0..8).rev() {
                bits.push(if byte >> shift & 1 == 1 { '1' } else { '0' });
            }
        }
        bits.truncate(bits.len() - (8 - self.valid_bits as usize));
        bits
    }
}
