//! Packed key codec
//!
//! A phonetic code of up to four symbols packs into a `u16`, one symbol per
//! nibble, first symbol in the most significant position:
//!
//! ```text
//! "NLSN"  ->  N=0x8 L=0x6 S=0xA N=0x8  ->  0x86A8
//! ```
//!
//! Comparing two codes is then a single integer comparison, and the raw
//! integer can be used directly as a hash, sort or bucket key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};
use crate::symbol::Symbol;

/// Raw value reserved for "no alternate key".
///
/// Every nibble is `0xF`. Unreachability holds only for codes drawn from
/// [`Symbol::PHONETIC`]: none of those symbols uses `0xF`, so no such code
/// packs to this value. The full alphabet does reach it, since `Space` is
/// `0xF` and `"    "` packs to `0xFFFF`. Records therefore hold the
/// alternate as an `Option` and never compare against this value.
pub const ABSENT_KEY: u16 = 0xFFFF;

const BITS_PER_SYMBOL: u32 = 4;

/// A phonetic code packed into a fixed-width integer
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct PackedKey(u16);

impl PackedKey {
    /// Number of symbols a key holds without losing any
    pub const CAPACITY: usize = (u16::BITS / BITS_PER_SYMBOL) as usize;

    /// Key of the empty code
    pub const EMPTY: PackedKey = PackedKey(0);

    /// Wrap a raw packed value
    pub const fn from_raw(raw: u16) -> Self {
        PackedKey(raw)
    }

    /// The raw packed integer
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Symbols stored in this key, first symbol first.
    ///
    /// Leading zero nibbles are padding and are skipped, so for a code of at
    /// most [`CAPACITY`](Self::CAPACITY) recognized symbols this yields the
    /// original code back.
    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        let raw = self.0;
        let width = (u16::BITS - raw.leading_zeros()).div_ceil(BITS_PER_SYMBOL);
        (0..width)
            .rev()
            .map(move |i| Symbol::from_code((raw >> (i * BITS_PER_SYMBOL)) as u8))
    }

    /// Rebuild the code string. Unmapped nibbles render as `?`.
    pub fn to_code(self) -> String {
        self.symbols().map(|s| s.to_char().unwrap_or('?')).collect()
    }
}

impl From<PackedKey> for u16 {
    fn from(key: PackedKey) -> Self {
        key.0
    }
}

impl FromStr for PackedKey {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode_checked(s)
    }
}

impl fmt::Display for PackedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_code())
    }
}

impl fmt::LowerHex for PackedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for PackedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Pack a phonetic code into a key.
///
/// Total: the empty code packs to zero, unrecognized characters pack as
/// code `0`, and when the code is longer than [`PackedKey::CAPACITY`] the
/// earliest symbols are shifted out and lost.
pub fn encode(code: &str) -> PackedKey {
    let mut acc: u16 = 0;
    for c in code.chars() {
        acc <<= BITS_PER_SYMBOL;
        acc |= u16::from(Symbol::from_char(c).code());
    }
    PackedKey(acc)
}

/// Pack a phonetic code, rejecting input that [`encode`] would pack lossily.
pub fn encode_checked(code: &str) -> CodecResult<PackedKey> {
    let len = code.chars().count();
    if len > PackedKey::CAPACITY {
        return Err(CodecError::Overflow {
            len,
            capacity: PackedKey::CAPACITY,
        });
    }
    if let Some((index, ch)) = code
        .chars()
        .enumerate()
        .find(|(_, c)| Symbol::from_char(*c) == Symbol::Unmapped)
    {
        return Err(CodecError::Unmapped { ch, index });
    }
    Ok(encode(code))
}

/// Check if `encode(code)` drops symbols
pub(crate) fn overflows(code: &str) -> bool {
    code.chars().count() > PackedKey::CAPACITY
}
