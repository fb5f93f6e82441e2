//! Phonetic symbol alphabet
//!
//! Every symbol a Double Metaphone code can contain maps to one nibble.
//! Code `0x0` is reserved for characters outside the alphabet.

use std::fmt;

/// A single phonetic symbol, stored as a 4-bit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Any character outside the alphabet
    Unmapped = 0x0,

    // Vowel (only emitted at the start of a word)
    A = 0x1,

    // Consonant classes
    F = 0x2,
    H = 0x3,
    J = 0x4,
    K = 0x5,
    L = 0x6,
    M = 0x7,
    N = 0x8,
    P = 0x9,
    S = 0xA,
    T = 0xB,
    R = 0xC,
    X = 0xD,

    /// The "th" sound, written `0` in metaphone codes.
    ///
    /// Packs to `0xE`. Older 16-bit metaphone packers compared against the
    /// NUL character here and so packed `'0'` as `0x0` (`"SM0"` became
    /// `0xA70`); keys from this crate deliberately differ (`0xA7E`).
    Theta = 0xE,

    /// Word separator
    Space = 0xF,
}

impl Symbol {
    /// Symbols a phonetic encoder emits for a single word, in code order
    pub const PHONETIC: [Symbol; 14] = [
        Symbol::A,
        Symbol::F,
        Symbol::H,
        Symbol::J,
        Symbol::K,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::P,
        Symbol::S,
        Symbol::T,
        Symbol::R,
        Symbol::X,
        Symbol::Theta,
    ];

    /// Look up the symbol for a code character. Never fails: anything
    /// outside the alphabet (including lower-case letters) is `Unmapped`.
    #[inline]
    pub fn from_char(c: char) -> Self {
        match c {
            'A' => Symbol::A,
            'F' => Symbol::F,
            'H' => Symbol::H,
            'J' => Symbol::J,
            'K' => Symbol::K,
            'L' => Symbol::L,
            'M' => Symbol::M,
            'N' => Symbol::N,
            'P' => Symbol::P,
            'S' => Symbol::S,
            'T' => Symbol::T,
            'R' => Symbol::R,
            'X' => Symbol::X,
            '0' => Symbol::Theta,
            ' ' => Symbol::Space,
            _ => Symbol::Unmapped,
        }
    }

    /// Decode a nibble. Only the low 4 bits of `code` are considered.
    pub fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0x1 => Symbol::A,
            0x2 => Symbol::F,
            0x3 => Symbol::H,
            0x4 => Symbol::J,
            0x5 => Symbol::K,
            0x6 => Symbol::L,
            0x7 => Symbol::M,
            0x8 => Symbol::N,
            0x9 => Symbol::P,
            0xA => Symbol::S,
            0xB => Symbol::T,
            0xC => Symbol::R,
            0xD => Symbol::X,
            0xE => Symbol::Theta,
            0xF => Symbol::Space,
            _ => Symbol::Unmapped,
        }
    }

    /// The 4-bit code for this symbol
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The code character, or `None` for `Unmapped`
    pub fn to_char(self) -> Option<char> {
        let c = match self {
            Symbol::Unmapped => return None,
            Symbol::A => 'A',
            Symbol::F => 'F',
            Symbol::H => 'H',
            Symbol::J => 'J',
            Symbol::K => 'K',
            Symbol::L => 'L',
            Symbol::M => 'M',
            Symbol::N => 'N',
            Symbol::P => 'P',
            Symbol::S => 'S',
            Symbol::T => 'T',
            Symbol::R => 'R',
            Symbol::X => 'X',
            Symbol::Theta => '0',
            Symbol::Space => ' ',
        };
        Some(c)
    }

    /// Check if this symbol can appear in a single-word phonetic code
    pub fn is_phonetic(self) -> bool {
        !matches!(self, Symbol::Unmapped | Symbol::Space)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::from_char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "?"),
        }
    }
}
