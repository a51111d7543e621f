// SPDX-License-Identifier: Apache-2.0

//! Decoding of raw string lexemes into owned text.
//!
//! The tokenizer hands over the bytes between the quotes untouched. [`decode`]
//! re-validates them as UTF-8, resolves the JSON escape sequences and returns
//! the resulting `String`.

use alloc::string::String;
use core::str::Chars;

use crate::parse_error::ParseError;

/// Pure functions for resolving JSON escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Maps the character following a backslash to the character it stands for.
    ///
    /// # Examples
    /// ```
    /// use jsontree::escape_processor::EscapeProcessor;
    /// assert_eq!(EscapeProcessor::process_simple_escape('n'), Ok('\n'));
    /// assert!(EscapeProcessor::process_simple_escape('x').is_err());
    /// ```
    pub fn process_simple_escape(escape_char: char) -> Result<char, ParseError> {
        match escape_char {
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            '/' => Ok('/'),
            'b' => Ok('\u{08}'), // Backspace
            'f' => Ok('\u{0C}'), // Form feed
            _ => Err(ParseError::InvalidEscapeSequence),
        }
    }

    /// Returns the numeric value (0-15) of an ASCII hex digit.
    pub fn validate_hex_digit(ch: char) -> Result<u32, ParseError> {
        ch.to_digit(16).ok_or(ParseError::InvalidUnicodeHex)
    }

    /// Check if a Unicode codepoint is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDBFF).contains(&codepoint)
    }

    /// Check if a Unicode codepoint is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(codepoint: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&codepoint)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Result<u32, ParseError> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return Err(ParseError::InvalidUnicodeCodepoint);
        }
        Ok(0x10000 + ((high & 0x3FF) << 10) + (low & 0x3FF))
    }

    /// Reads exactly four hex digits, most significant first.
    fn read_hex_quad(chars: &mut Chars<'_>) -> Result<u32, ParseError> {
        let mut codepoint = 0u32;
        for _ in 0..4 {
            let ch = chars.next().ok_or(ParseError::InvalidUnicodeHex)?;
            codepoint = (codepoint << 4) | Self::validate_hex_digit(ch)?;
        }
        Ok(codepoint)
    }

    /// Resolves the `XXXX` part of a `\uXXXX` escape, which `chars` is
    /// positioned at.
    ///
    /// A high surrogate must be immediately followed by a `\uXXXX` low
    /// surrogate; the two are combined into one supplementary code point.
    /// Lone surrogates of either kind are rejected.
    pub fn process_unicode_escape(chars: &mut Chars<'_>) -> Result<char, ParseError> {
        let codepoint = Self::read_hex_quad(chars)?;

        let codepoint = if Self::is_high_surrogate(codepoint) {
            if chars.next() != Some('\\') || chars.next() != Some('u') {
                return Err(ParseError::InvalidUnicodeCodepoint);
            }
            let low = Self::read_hex_quad(chars)?;
            Self::combine_surrogate_pair(codepoint, low)?
        } else if Self::is_low_surrogate(codepoint) {
            return Err(ParseError::InvalidUnicodeCodepoint);
        } else {
            codepoint
        };

        char::from_u32(codepoint).ok_or(ParseError::InvalidUnicodeCodepoint)
    }
}

/// Decodes the raw content of a string token into owned text.
///
/// # Examples
/// ```
/// use jsontree::escape_processor::decode;
/// assert_eq!(decode(br"a\nb\u0041").unwrap(), "a\nbA");
/// ```
pub fn decode(raw: &[u8]) -> Result<String, ParseError> {
    let text = core::str::from_utf8(raw)?;
    if !text.contains('\\') {
        return Ok(String::from(text));
    }

    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }
        let escape = chars.next().ok_or(ParseError::InvalidEscapeSequence)?;
        let resolved = match escape {
            'u' => EscapeProcessor::process_unicode_escape(&mut chars)?,
            other => EscapeProcessor::process_simple_escape(other)?,
        };
        output.push(resolved);
    }
    log::trace!(
        "EscapeProcessor: decoded {} raw bytes into {} bytes",
        raw.len(),
        output.len()
    );
    Ok(output)
}
