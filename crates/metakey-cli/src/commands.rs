//! Command implementations
//!
//! Each command writes its report to the given writer; `main` passes stdout.

use std::io::Write;
use std::path::Path;

use metakey_core::{encode, encode_checked, EncoderConfig, PhoneticEncoder, PhoneticKey};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// One word's packed keys, as printed by `keys --json`
#[derive(Debug, Serialize)]
pub struct KeyReport<'a> {
    pub word: &'a str,
    pub primary: String,
    pub primary_key: u16,
    pub alternate: Option<String>,
    pub alternate_key: Option<u16>,
}

impl<'a> KeyReport<'a> {
    pub fn new(word: &'a str, key: &PhoneticKey) -> Self {
        Self {
            word,
            primary: key.primary().to_code(),
            primary_key: key.primary().raw(),
            alternate: key.alternate().map(|k| k.to_code()),
            alternate_key: key.alternate().map(|k| k.raw()),
        }
    }
}

/// Load encoder configuration, overlaying a JSON file on the defaults
pub fn load_config(path: Option<&Path>) -> Result<EncoderConfig> {
    let Some(path) = path else {
        return Ok(EncoderConfig::default());
    };
    let raw = std::fs::read_to_string(path)?;
    let config: EncoderConfig = serde_json::from_str(&raw)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), ?config, "loaded encoder config");
    Ok(config)
}

fn describe(key: &PhoneticKey) -> String {
    let primary = key.primary();
    match key.alternate() {
        Some(alt) => format!("{:<4} {:#06x}  {:<4} {:#06x}", primary, primary, alt, alt),
        None => format!("{:<4} {:#06x}  -", primary, primary),
    }
}

/// Print packed keys for each word
pub fn keys<E, W>(encoder: &E, words: &[String], json: bool, out: &mut W) -> Result<()>
where
    E: PhoneticEncoder + ?Sized,
    W: Write,
{
    for word in words {
        let key = PhoneticKey::new(encoder, word);
        if json {
            serde_json::to_writer(&mut *out, &KeyReport::new(word, &key))?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{}", word, describe(&key))?;
        }
    }
    Ok(())
}

/// Compare two words, returning whether they match
pub fn compare<E, W>(encoder: &E, a: &str, b: &str, out: &mut W) -> Result<bool>
where
    E: PhoneticEncoder + ?Sized,
    W: Write,
{
    let key_a = PhoneticKey::new(encoder, a);
    let key_b = PhoneticKey::new(encoder, b);
    let matched = key_a.fuzzy_eq(&key_b);

    writeln!(out, "{}\t{}", a, describe(&key_a))?;
    writeln!(out, "{}\t{}", b, describe(&key_b))?;
    writeln!(out, "{}", if matched { "match" } else { "no match" })?;
    Ok(matched)
}

/// Pack raw phonetic codes
pub fn pack<W: Write>(codes: &[String], strict: bool, out: &mut W) -> Result<()> {
    for code in codes {
        let key = if strict {
            encode_checked(code).map_err(|source| Error::Codec {
                code: code.clone(),
                source,
            })?
        } else {
            encode(code)
        };
        writeln!(out, "{}\t{:#06x}\t{}", code, key, key.raw())?;
    }
    Ok(())
}
