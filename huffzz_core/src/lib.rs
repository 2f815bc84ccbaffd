//! Static Huffman codec over single-byte symbols.
//!
//! ```
//! let encoded = huffzz_core::encode(b"ABRACADABRA")?;
//! let decoded = huffzz_core::decode(&encoded.payload, &encoded.dictionary)?;
//! assert_eq!(decoded, b"ABRACADABRA");
//! # Ok::<(), huffzz_core::CodecError>(())
//! ```

pub mod codec;
pub mod dict;
pub mod error;
pub mod freq;
pub mod payload;
pub mod tree;

pub use codec::{decode, encode, Encoded};
pub use dict::{DictEntry, Dictionary};
pub use error::CodecError;
pub use payload::EncodedPayload;
pub use tree::Tree;
