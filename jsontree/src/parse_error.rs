// SPDX-License-Identifier: Apache-2.0

use crate::tokenizer;

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A lexical error bubbled up from the tokenizer.
    TokenizerError(tokenizer::Error),
    /// A string lexeme was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
    /// Invalid escape sequence character.
    InvalidEscapeSequence,
    /// Missing or invalid hex digits in Unicode escape sequence.
    InvalidUnicodeHex,
    /// Valid hex but invalid Unicode codepoint, such as an unpaired surrogate.
    InvalidUnicodeCodepoint,
    /// A token that the grammar does not allow at this point.
    UnexpectedToken {
        token: &'static str,
        position: usize,
    },
    /// A `,` directly followed by the closing `]` or `}`.
    TrailingComma { position: usize },
    /// The input ended in the middle of a value.
    UnexpectedEndOfInput { position: usize },
    /// Non-whitespace content after the top-level value, when configured to reject it.
    TrailingContent { position: usize },
    /// Arrays and objects nested deeper than the configured limit.
    MaxDepthReached { limit: usize, position: usize },
}

impl ParseError {
    /// Byte offset in the input the error refers to, when known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::TokenizerError(e) => Some(e.position()),
            ParseError::UnexpectedToken { position, .. }
            | ParseError::TrailingComma { position }
            | ParseError::UnexpectedEndOfInput { position }
            | ParseError::TrailingContent { position }
            | ParseError::MaxDepthReached { position, .. } => Some(*position),
            ParseError::InvalidUtf8(_)
            | ParseError::InvalidEscapeSequence
            | ParseError::InvalidUnicodeHex
            | ParseError::InvalidUnicodeCodepoint => None,
        }
    }
}

impl From<tokenizer::Error> for ParseError {
    fn from(err: tokenizer::Error) -> Self {
        ParseError::TokenizerError(err)
    }
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::TokenizerError(e) => write!(f, "{e}"),
            ParseError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {e}"),
            ParseError::UnexpectedToken { token, position } => {
                write!(f, "unexpected {token} at byte {position}")
            }
            ParseError::TrailingComma { position } => {
                write!(f, "trailing comma before byte {position}")
            }
            ParseError::UnexpectedEndOfInput { position } => {
                write!(f, "unexpected end of input at byte {position}")
            }
            ParseError::TrailingContent { position } => {
                write!(f, "trailing content at byte {position}")
            }
            ParseError::MaxDepthReached { limit, position } => {
                write!(f, "nesting deeper than {limit} levels at byte {position}")
            }
            _ => write!(f, "{self:?}"),
        }
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ParseError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}
