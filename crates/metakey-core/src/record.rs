//! Phonetic key record
//!
//! A word can have two admissible phonetic readings. [`PhoneticKey`] holds
//! both as packed keys and compares records with a four-way cross check:
//!
//! ```text
//! a.primary   == b.primary
//! a.primary   == b.alternate
//! a.alternate == b.primary
//! a.alternate == b.alternate
//! ```
//!
//! Any hit is a match. The relation is reflexive and symmetric but NOT
//! transitive, so it is exposed as [`PhoneticKey::fuzzy_eq`] rather than
//! through `PartialEq`. `==` on records is plain structural equality, which
//! keeps records usable as `HashMap` keys.

use serde::{Deserialize, Serialize};

use crate::codec::{self, PackedKey, ABSENT_KEY};
use crate::encoder::{PhoneticCodes, PhoneticEncoder};

/// Packed primary key plus optional packed alternate key for one word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticKey {
    primary: PackedKey,
    alternate: Option<PackedKey>,
}

impl PhoneticKey {
    /// Encode `word` and pack its codes
    pub fn new<E>(encoder: &E, word: &str) -> Self
    where
        E: PhoneticEncoder + ?Sized,
    {
        Self::from_phonetic_codes(&encoder.encode(word))
    }

    /// Pack already computed codes. An empty alternate counts as absent.
    pub fn from_codes(primary: &str, alternate: Option<&str>) -> Self {
        Self {
            primary: pack(primary),
            alternate: alternate.filter(|a| !a.is_empty()).map(pack),
        }
    }

    pub fn from_phonetic_codes(codes: &PhoneticCodes) -> Self {
        Self::from_codes(&codes.primary, codes.alternate.as_deref())
    }

    /// Wrap keys that were packed elsewhere
    pub const fn from_packed(primary: PackedKey, alternate: Option<PackedKey>) -> Self {
        Self { primary, alternate }
    }

    /// Discard the current keys and recompute them for `word`
    pub fn recompute<E>(&mut self, encoder: &E, word: &str)
    where
        E: PhoneticEncoder + ?Sized,
    {
        *self = Self::new(encoder, word);
        tracing::trace!(
            word,
            primary = self.primary.raw(),
            alternate = self.alternate_raw(),
            "recomputed phonetic key"
        );
    }

    #[inline]
    pub fn primary(&self) -> PackedKey {
        self.primary
    }

    #[inline]
    pub fn alternate(&self) -> Option<PackedKey> {
        self.alternate
    }

    /// Raw alternate key, or [`ABSENT_KEY`] when the word has none.
    ///
    /// Lossy: an alternate of four spaces also packs to `ABSENT_KEY`, so the
    /// two cases are indistinguishable here. Use [`alternate`](Self::alternate)
    /// to test presence.
    pub fn alternate_raw(&self) -> u16 {
        self.alternate.map_or(ABSENT_KEY, PackedKey::raw)
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate.is_some()
    }

    /// The primary key followed by the alternate key, if present
    pub fn keys(&self) -> impl Iterator<Item = PackedKey> {
        std::iter::once(self.primary).chain(self.alternate)
    }

    /// Check if any reading of `self` matches any reading of `other`
    pub fn fuzzy_eq(&self, other: &PhoneticKey) -> bool {
        if self.primary == other.primary {
            return true;
        }
        if other.alternate == Some(self.primary) {
            return true;
        }
        match self.alternate {
            Some(alt) => alt == other.primary || other.alternate == Some(alt),
            None => false,
        }
    }

    pub fn fuzzy_ne(&self, other: &PhoneticKey) -> bool {
        !self.fuzzy_eq(other)
    }
}

fn pack(code: &str) -> PackedKey {
    if codec::overflows(code) {
        tracing::debug!(code, "phonetic code exceeds packed key capacity, truncating");
    }
    codec::encode(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    #[test]
    fn test_from_codes() {
        let key = PhoneticKey::from_codes("SM0", Some("XMT"));
        assert_eq!(key.primary(), encode("SM0"));
        assert_eq!(key.alternate(), Some(encode("XMT")));
        assert!(key.has_alternate());
    }

    #[test]
    fn test_missing_alternate_uses_sentinel() {
        for key in [
            PhoneticKey::from_codes("NLSN", None),
            PhoneticKey::from_codes("NLSN", Some("")),
        ] {
            assert_eq!(key.alternate(), None);
            assert_eq!(key.alternate_raw(), ABSENT_KEY);
            assert!(!key.has_alternate());
        }
    }

    #[test]
    fn test_default_is_empty_primary() {
        let key = PhoneticKey::default();
        assert_eq!(key.primary(), PackedKey::EMPTY);
        assert_eq!(key.alternate(), None);
    }

    #[test]
    fn test_keys_iterator() {
        let keys: Vec<u16> = PhoneticKey::from_codes("SM0", Some("XMT"))
            .keys()
            .map(PackedKey::raw)
            .collect();
        assert_eq!(keys, vec![0xA7E, 0xD7B]);

        let keys: Vec<PackedKey> = PhoneticKey::from_codes("NLSN", None).keys().collect();
        assert_eq!(keys, vec![encode("NLSN")]);
    }

    #[test]
    fn test_each_cross_comparison() {
        let a = PhoneticKey::from_codes("TS", None);

        // primary == primary
        assert!(a.fuzzy_eq(&PhoneticKey::from_codes("TS", Some("KS"))));
        // primary == other alternate
        assert!(a.fuzzy_eq(&PhoneticKey::from_codes("KS", Some("TS"))));

        let b = PhoneticKey::from_codes("KS", Some("TS"));
        // alternate == other primary
        assert!(b.fuzzy_eq(&PhoneticKey::from_codes("TS", None)));
        // alternate == other alternate
        assert!(b.fuzzy_eq(&PhoneticKey::from_codes("SK", Some("TS"))));
    }

    #[test]
    fn test_alternate_raw_is_lossy_for_space_codes() {
        let spaced = PhoneticKey::from_codes("N", Some("    "));
        let absent = PhoneticKey::from_codes("N", None);

        assert_eq!(spaced.alternate_raw(), ABSENT_KEY);
        assert_eq!(absent.alternate_raw(), ABSENT_KEY);
        assert_eq!(spaced.alternate(), Some(PackedKey::from_raw(ABSENT_KEY)));
        assert_eq!(absent.alternate(), None);
        assert_ne!(spaced, absent);
    }

    #[test]
    fn test_absent_alternates_never_match() {
        // Four spaces pack to the sentinel value but are a real alternate
        let spaced = PhoneticKey::from_codes("N", Some("    "));
        let absent = PhoneticKey::from_codes("M", None);
        assert_eq!(spaced.alternate_raw(), absent.alternate_raw());
        assert!(spaced.fuzzy_ne(&absent));
        assert!(absent.fuzzy_ne(&spaced));

        let also_absent = PhoneticKey::from_codes("K", None);
        assert!(absent.fuzzy_ne(&also_absent));
    }

    #[test]
    fn test_structural_equality_differs_from_fuzzy() {
        let a = PhoneticKey::from_codes("TS", None);
        let b = PhoneticKey::from_codes("KS", Some("TS"));
        assert!(a.fuzzy_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_recompute_replaces_both_keys() {
        let encoder = |word: &str| match word {
            "smith" => PhoneticCodes::new("SM0", Some("XMT")),
            _ => PhoneticCodes::primary_only("NLSN"),
        };

        let mut key = PhoneticKey::new(&encoder, "smith");
        assert!(key.has_alternate());

        key.recompute(&encoder, "nelson");
        assert_eq!(key, PhoneticKey::new(&encoder, "nelson"));
        assert_eq!(key.alternate(), None);
    }

    #[test]
    fn test_serde_shape() {
        let key = PhoneticKey::from_codes("SM0", Some("XMT"));
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"primary":2686,"alternate":3451}"#);

        let key = PhoneticKey::from_codes("NLSN", None);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"primary":34472,"alternate":null}"#);
        assert_eq!(serde_json::from_str::<PhoneticKey>(&json).unwrap(), key);
    }
}
