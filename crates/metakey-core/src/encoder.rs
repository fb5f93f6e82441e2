//! Phonetic encoder seam
//!
//! The rules that turn a word into metaphone codes live outside this crate.
//! [`PhoneticEncoder`] is the boundary: anything that yields a primary code
//! and an optional alternate code can feed [`PhoneticKey`](crate::PhoneticKey).
//!
//! With the `phonetic` feature, [`DoubleMetaphoneEncoder`] adapts the
//! `rphonetic` Double Metaphone implementation.

use serde::{Deserialize, Serialize};

/// Codes produced by a phonetic encoder for one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticCodes {
    pub primary: String,
    pub alternate: Option<String>,
}

impl PhoneticCodes {
    /// Build codes, treating an empty alternate as absent
    pub fn new(primary: impl Into<String>, alternate: Option<impl Into<String>>) -> Self {
        let alternate = alternate.map(Into::into).filter(|a: &String| !a.is_empty());
        Self {
            primary: primary.into(),
            alternate,
        }
    }

    /// Codes with no alternate reading
    pub fn primary_only(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: None,
        }
    }
}

/// Turns a word into phonetic codes
pub trait PhoneticEncoder {
    fn encode(&self, word: &str) -> PhoneticCodes;
}

impl<F> PhoneticEncoder for F
where
    F: Fn(&str) -> PhoneticCodes,
{
    fn encode(&self, word: &str) -> PhoneticCodes {
        self(word)
    }
}

/// Encoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Yield empty codes for words containing non-ASCII characters.
    ///
    /// Off by default. Every skipped word packs to the zero key, so with this
    /// on any two non-ASCII words fuzzy-match each other and the empty word.
    pub ascii_only: bool,
    /// Report an alternate identical to the primary as absent
    pub collapse_identical_alternate: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            collapse_identical_alternate: true,
        }
    }
}

/// Double Metaphone encoder producing codes of at most four symbols
#[cfg(feature = "phonetic")]
pub struct DoubleMetaphoneEncoder {
    inner: rphonetic::DoubleMetaphone,
    config: EncoderConfig,
}

#[cfg(feature = "phonetic")]
impl Default for DoubleMetaphoneEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "phonetic")]
impl DoubleMetaphoneEncoder {
    /// Create an encoder with default configuration
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            inner: rphonetic::DoubleMetaphone::default(),
            config,
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

#[cfg(feature = "phonetic")]
impl PhoneticEncoder for DoubleMetaphoneEncoder {
    fn encode(&self, word: &str) -> PhoneticCodes {
        // Double Metaphone only works reliably with ASCII
        if self.config.ascii_only && !word.is_ascii() {
            tracing::debug!(word, "skipping non-ascii word");
            return PhoneticCodes::default();
        }

        let result = self.inner.double_metaphone(word);
        let primary = result.primary().to_string();
        let alternate = result.alternate().to_string();

        let alternate = if self.config.collapse_identical_alternate && alternate == primary {
            None
        } else {
            Some(alternate)
        };

        PhoneticCodes::new(primary, alternate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_alternate_is_absent() {
        let codes = PhoneticCodes::new("NLSN", Some(""));
        assert_eq!(codes.alternate, None);

        let codes = PhoneticCodes::new("SM0", Some("XMT"));
        assert_eq!(codes.alternate.as_deref(), Some("XMT"));
    }

    #[test]
    fn test_closure_encoder() {
        let encoder = |word: &str| PhoneticCodes::primary_only(word.to_uppercase());
        assert_eq!(encoder.encode("nl").primary, "NL");
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: EncoderConfig = serde_json::from_str(r#"{"ascii_only": true}"#).unwrap();
        assert!(config.ascii_only);
        assert!(config.collapse_identical_alternate);

        let config: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EncoderConfig::default());
    }

    #[cfg(feature = "phonetic")]
    mod double_metaphone {
        use super::*;

        #[test]
        fn test_primary_codes() {
            let encoder = DoubleMetaphoneEncoder::new();
            assert_eq!(encoder.encode("Nelson").primary, "NLSN");
            assert_eq!(encoder.encode("Neilsen").primary, "NLSN");
        }

        #[test]
        fn test_alternate_reading() {
            let encoder = DoubleMetaphoneEncoder::new();
            let codes = encoder.encode("Smith");
            assert_eq!(codes.primary, "SM0");
            assert_eq!(codes.alternate.as_deref(), Some("XMT"));
        }

        #[test]
        fn test_identical_alternate_collapses() {
            let encoder = DoubleMetaphoneEncoder::new();
            assert_eq!(encoder.encode("Nelson").alternate, None);

            let encoder = DoubleMetaphoneEncoder::with_config(EncoderConfig {
                collapse_identical_alternate: false,
                ..EncoderConfig::default()
            });
            assert_eq!(encoder.encode("Nelson").alternate.as_deref(), Some("NLSN"));
        }

        #[test]
        fn test_non_ascii_encoded_by_default() {
            let encoder = DoubleMetaphoneEncoder::new();
            assert!(!encoder.config().ascii_only);
            assert_eq!(encoder.encode("Müller").primary, "MLR");
            assert_eq!(encoder.encode("Øresund").primary, "RSNT");
        }

        #[test]
        fn test_non_ascii_skipped_when_ascii_only() {
            let encoder = DoubleMetaphoneEncoder::with_config(EncoderConfig {
                ascii_only: true,
                ..EncoderConfig::default()
            });
            assert_eq!(encoder.encode("Müller"), PhoneticCodes::default());
        }

        #[test]
        fn test_codes_fit_packed_key() {
            let encoder = DoubleMetaphoneEncoder::new();
            for word in ["Schwarzenegger", "Thompson", "Jankelowicz", "Xavier"] {
                let codes = encoder.encode(word);
                assert!(codes.primary.chars().count() <= 4, "{}", word);
            }
        }
    }
}
