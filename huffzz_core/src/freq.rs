use crate::error::CodecError;

/// Count how often each byte value occurs in `input`.
///
/// Returns `(byte, count)` pairs ordered by first occurrence in the input.
/// That ordering is what makes the whole encode pipeline reproducible: the
/// forest handed to the tree builder, and therefore every generated code,
/// depends only on the input bytes, never on hash-map iteration order.
pub fn count_frequencies(input: &[u8]) -> Result<Vec<(u8, u64)>, CodecError> {
    if input.is_empty() {
        return Err(CodecError::EmptyInput);
    }

    let mut counts = [0u64; 256];
    let mut seen_order = Vec::new();
    for &byte in input {
        if counts[byte as usize] == 0 {
            seen_order.push(byte);
        }
        counts[byte as usize] += 1;
    }

    Ok(seen_order
        .into_iter()
        .map(|byte| (byte, counts[byte as usize]))
        .collect())
}
