use crate::dict::Dictionary;
use crate::error::CodecError;
use crate::freq;
use crate::payload::EncodedPayload;
use crate::tree::Tree;

/// Result of one encode: the packed bitstream and the dictionary needed to
/// invert it. These two are what cross the process boundary; the tree they
/// were derived from is discarded inside [`encode`].
#[derive(Debug)]
pub struct Encoded {
    pub payload: EncodedPayload,
    pub dictionary: Dictionary,
}

impl Encoded {
    /// Wire size of the payload, trailing valid-bits byte included.
    pub fn packed_len(&self) -> usize {
        self.payload.wire_len()
    }
}

/// Compress `input` with a static Huffman code derived from its own byte
/// frequencies.
///
/// Pipeline: count frequencies, build the tree, derive the code table, pack
/// the input against it. Fails on an empty input or one with fewer than two
/// distinct byte values, since such inputs have no meaningful binary code.
pub fn encode(input: &[u8]) -> Result<Encoded, CodecError> {
    let frequencies = freq::count_frequencies(input)?;
    let tree = Tree::build(&frequencies)?;
    let dictionary = Dictionary::from_tree(&tree);
    let payload = EncodedPayload::pack(&dictionary, input)?;
    Ok(Encoded {
        payload,
        dictionary,
    })
}

/// Invert [`encode`]: recover the original bytes from a payload and the
/// dictionary it was packed with.
pub fn decode(payload: &EncodedPayload, dictionary: &Dictionary) -> Result<Vec<u8>, CodecError> {
    payload.unpack(dictionary)
}
