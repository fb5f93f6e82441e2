//! Metakey Core
//!
//! Compact, comparison-efficient keys for Double Metaphone codes.
//!
//! A metaphone code of up to four symbols packs into a `u16`, one symbol
//! per nibble. A word's primary and alternate codes are held together in a
//! [`PhoneticKey`], and two keys match when any reading of one equals any
//! reading of the other.
//!
//! # Features
//!
//! - `phonetic` (default) - Double Metaphone encoder backed by `rphonetic`
//!
//! # Example
//!
//! ```rust
//! use metakey_core::{encode, PhoneticKey};
//!
//! assert_eq!(encode("NLSN").raw(), 0x86A8);
//!
//! let a = PhoneticKey::from_codes("TS", None);
//! let b = PhoneticKey::from_codes("KS", Some("TS"));
//! assert!(a.fuzzy_eq(&b));
//! ```

pub mod codec;
pub mod encoder;
pub mod error;
pub mod record;
pub mod symbol;

// Re-export main types at crate root
pub use codec::{encode, encode_checked, PackedKey, ABSENT_KEY};
#[cfg(feature = "phonetic")]
pub use encoder::DoubleMetaphoneEncoder;
pub use encoder::{EncoderConfig, PhoneticCodes, PhoneticEncoder};
pub use error::{CodecError, CodecResult};
pub use record::PhoneticKey;
pub use symbol::Symbol;
