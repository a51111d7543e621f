// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis of JSON text.
//!
//! The [`Tokenizer`] walks a borrowed byte slice and produces one [`Token`] at a
//! time. String and number tokens are slices of the original input: the
//! tokenizer validates their lexical shape (number grammar, UTF-8
//! well-formedness, string termination) but leaves escape resolution and
//! numeric evaluation to the parser.

use crate::slice_input_buffer::SliceInputBuffer;

/// A classified unit of JSON input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `{`
    ObjectStart,
    /// `}`
    ObjectEnd,
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Raw string content between the quotes, escapes still unresolved.
    String(&'a [u8]),
    /// Raw number lexeme, exactly as it appears in the input.
    Number(&'a [u8]),
}

impl Token<'_> {
    /// Short name of the token, used in diagnostics.
    pub const fn describe(&self) -> &'static str {
        match self {
            Token::ObjectStart => "'{'",
            Token::ObjectEnd => "'}'",
            Token::ArrayStart => "'['",
            Token::ArrayEnd => "']'",
            Token::Comma => "','",
            Token::Colon => "':'",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::String(_) => "string",
            Token::Number(_) => "number",
        }
    }
}

/// The kind of lexical error reported in [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrKind {
    UnexpectedCharacter,
    InvalidNumber,
    UnclosedString,
    InvalidUtf8,
    UnescapedControlCharacter,
    InvalidKeyword,
}

impl core::fmt::Display for ErrKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ErrKind::UnexpectedCharacter => "unexpected character",
            ErrKind::InvalidNumber => "invalid number",
            ErrKind::UnclosedString => "unclosed string",
            ErrKind::InvalidUtf8 => "malformed UTF-8 in string",
            ErrKind::UnescapedControlCharacter => "unescaped control character in string",
            ErrKind::InvalidKeyword => "invalid literal",
        };
        f.write_str(msg)
    }
}

/// A lexical error: what went wrong, the offending byte and its offset.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrKind,
    character: u8,
    position: usize,
}

impl Error {
    pub fn new<T>(kind: ErrKind, character: u8, position: usize) -> Result<T, Self> {
        Err(Self {
            kind,
            character,
            position,
        })
    }

    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    /// The offending byte. A space stands in when the input ended.
    pub fn character(&self) -> u8 {
        self.character
    }

    /// Byte offset of the offending byte in the input.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?}({}) at {}",
            self.kind, self.character as char, self.position
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.character.is_ascii_graphic() {
            write!(
                f,
                "{} '{}' at byte {}",
                self.kind, self.character as char, self.position
            )
        } else {
            write!(
                f,
                "{} (byte 0x{:02x}) at byte {}",
                self.kind, self.character, self.position
            )
        }
    }
}

/// Pull tokenizer over a borrowed input slice with one token of lookahead.
pub struct Tokenizer<'a> {
    input: SliceInputBuffer<'a>,
    /// Start offset of the most recently scanned token
    token_start: usize,
    peeked: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Tokenizer {
            input: SliceInputBuffer::new(input),
            token_start: 0,
            peeked: None,
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// The token is cached, so repeated calls are cheap and return the same
    /// token. `Ok(None)` means the input is exhausted.
    pub fn peek(&mut self) -> Result<Option<Token<'a>>, Error> {
        if self.peeked.is_none() {
            self.peeked = self.scan()?;
        }
        Ok(self.peeked)
    }

    /// Returns the next token, draining the lookahead cache first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<Token<'a>>, Error> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.scan(),
        }
    }

    /// Discards the next token.
    pub fn skip(&mut self) -> Result<(), Error> {
        self.next().map(|_| ())
    }

    /// Byte offset where the most recently peeked or returned token starts.
    pub fn token_position(&self) -> usize {
        self.token_start
    }

    /// Current scan offset.
    pub fn position(&self) -> usize {
        self.input.current_pos()
    }

    /// True when nothing but whitespace is left and no token is pending.
    pub fn is_exhausted(&mut self) -> bool {
        if self.peeked.is_some() {
            return false;
        }
        self.input.skip_whitespace();
        self.input.is_empty()
    }

    fn scan(&mut self) -> Result<Option<Token<'a>>, Error> {
        self.input.skip_whitespace();
        let start = self.input.current_pos();
        self.token_start = start;

        let Some(byte) = self.input.peek_byte() else {
            log::trace!("Tokenizer: end of input at {}", start);
            return Ok(None);
        };

        let token = match byte {
            b'{' => self.single(Token::ObjectStart),
            b'}' => self.single(Token::ObjectEnd),
            b'[' => self.single(Token::ArrayStart),
            b']' => self.single(Token::ArrayEnd),
            b',' => self.single(Token::Comma),
            b':' => self.single(Token::Colon),
            b'-' | b'0'..=b'9' => self.scan_number(start)?,
            b'"' => self.scan_string(start)?,
            b't' => self.scan_keyword(b"true", Token::True, start)?,
            b'f' => self.scan_keyword(b"false", Token::False, start)?,
            b'n' => self.scan_keyword(b"null", Token::Null, start)?,
            other => return Error::new(ErrKind::UnexpectedCharacter, other, start),
        };
        log::trace!("Tokenizer: {:?} at {}", token, start);
        Ok(Some(token))
    }

    fn single(&mut self, token: Token<'a>) -> Token<'a> {
        self.input.advance();
        token
    }

    fn error_here<T>(&self, kind: ErrKind) -> Result<T, Error> {
        Error::new(
            kind,
            self.input.peek_byte().unwrap_or(b' '),
            self.input.current_pos(),
        )
    }

    fn consume_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(b'0'..=b'9') = self.input.peek_byte() {
            self.input.advance();
            count += 1;
        }
        count
    }

    fn require_digits(&mut self) -> Result<(), Error> {
        if self.consume_digits() == 0 {
            return self.error_here(ErrKind::InvalidNumber);
        }
        Ok(())
    }

    fn scan_number(&mut self, start: usize) -> Result<Token<'a>, Error> {
        if self.input.peek_byte() == Some(b'-') {
            self.input.advance();
        }

        match self.input.peek_byte() {
            Some(b'0') => {
                self.input.advance();
                // No leading zeros: "0" must stand alone as the whole part
                if let Some(b'0'..=b'9') = self.input.peek_byte() {
                    return self.error_here(ErrKind::InvalidNumber);
                }
            }
            Some(b'1'..=b'9') => {
                self.consume_digits();
            }
            _ => return self.error_here(ErrKind::InvalidNumber),
        }

        if self.input.peek_byte() == Some(b'.') {
            self.input.advance();
            self.require_digits()?;
        }

        if let Some(b'e' | b'E') = self.input.peek_byte() {
            self.input.advance();
            if let Some(b'+' | b'-') = self.input.peek_byte() {
                self.input.advance();
            }
            self.require_digits()?;
        }

        Ok(Token::Number(self.input.lexeme(start)))
    }

    fn scan_string(&mut self, start: usize) -> Result<Token<'a>, Error> {
        self.input.advance(); // opening quote
        let content_start = self.input.current_pos();
        let mut escaped = false;

        loop {
            let pos = self.input.current_pos();
            let Some(byte) = self.input.peek_byte() else {
                return Error::new(ErrKind::UnclosedString, b'"', start);
            };
            match byte {
                b'"' if !escaped => {
                    let content = self.input.lexeme(content_start);
                    self.input.advance();
                    return Ok(Token::String(content));
                }
                0x00..=0x1F => {
                    return Error::new(ErrKind::UnescapedControlCharacter, byte, pos);
                }
                0x20..=0x7F => {
                    escaped = byte == b'\\' && !escaped;
                    self.input.advance();
                }
                _ => {
                    self.scan_utf8_sequence(byte, pos)?;
                    escaped = false;
                }
            }
        }
    }

    /// Validates and consumes one multi-byte UTF-8 sequence starting with `lead`.
    fn scan_utf8_sequence(&mut self, lead: u8, pos: usize) -> Result<(), Error> {
        let width = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Error::new(ErrKind::InvalidUtf8, lead, pos),
        };
        // from_utf8 rejects overlong forms, surrogates and bad continuation bytes
        match self.input.remaining().get(..width).map(core::str::from_utf8) {
            Some(Ok(_)) => {
                self.input.advance_by(width);
                Ok(())
            }
            _ => Error::new(ErrKind::InvalidUtf8, lead, pos),
        }
    }

    fn scan_keyword(
        &mut self,
        literal: &'static [u8],
        token: Token<'a>,
        start: usize,
    ) -> Result<Token<'a>, Error> {
        let remaining = self.input.remaining();
        if remaining.starts_with(literal) {
            self.input.advance_by(literal.len());
            return Ok(token);
        }
        let matched = literal
            .iter()
            .zip(remaining)
            .take_while(|(want, got)| want == got)
            .count();
        Error::new(
            ErrKind::InvalidKeyword,
            remaining.get(matched).copied().unwrap_or(b' '),
            start + matched,
        )
    }
}
