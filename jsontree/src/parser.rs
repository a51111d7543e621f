// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::config::ParserConfig;
use crate::escape_processor;
use crate::number_parser;
use crate::parse_error::ParseError;
use crate::tokenizer::{Token, Tokenizer};
use crate::value::{Map, Value};

/// Recursive descent parser that builds a [`Value`] tree from a slice.
///
/// Each grammar rule is a method (`parse_value`, `parse_array`,
/// `parse_object`); the only state besides the tokenizer is the current
/// nesting depth.
// Lifetime 'a is the input buffer lifetime
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser with the default configuration.
    ///
    /// # Example
    /// ```
    /// use jsontree::{Parser, Value};
    /// let value = Parser::new(br#"{"name": "value"}"#).parse().unwrap();
    /// assert_eq!(value["name"], Value::from("value"));
    /// ```
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: ParserConfig) -> Self {
        Parser {
            tokenizer: Tokenizer::new(input),
            config,
            depth: 0,
        }
    }

    /// Parses one complete value.
    ///
    /// Content after the value is ignored unless the configuration rejects
    /// trailing content.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let result = self.parse_document();
        if let Err(e) = &result {
            log::debug!("Parser: aborted: {}", e);
        }
        result
    }

    fn parse_document(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;
        if self.config.reject_trailing_content && !self.tokenizer.is_exhausted() {
            return Err(ParseError::TrailingContent {
                position: self.tokenizer.position(),
            });
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.expect_next()? {
            Token::Null => Ok(Value::Null),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::String(raw) => Ok(Value::String(escape_processor::decode(raw)?)),
            Token::Number(raw) => Ok(Value::Number(number_parser::evaluate(raw))),
            Token::ArrayStart => self.parse_array(),
            Token::ObjectStart => self.parse_object(),
            other => Err(self.unexpected(other)),
        }
    }

    /// Called with the `[` already consumed.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        let mut items = Vec::new();

        if self.tokenizer.peek()? == Some(Token::ArrayEnd) {
            self.tokenizer.skip()?;
        } else {
            loop {
                items.push(self.parse_value()?);
                match self.expect_next()? {
                    Token::Comma => self.reject_trailing_comma(Token::ArrayEnd)?,
                    Token::ArrayEnd => break,
                    other => return Err(self.unexpected(other)),
                }
            }
        }

        self.exit_container();
        Ok(Value::Array(items))
    }

    /// Called with the `{` already consumed.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        let mut members = Map::new();

        if self.tokenizer.peek()? == Some(Token::ObjectEnd) {
            self.tokenizer.skip()?;
        } else {
            loop {
                let key = match self.expect_next()? {
                    Token::String(raw) => escape_processor::decode(raw)?,
                    other => return Err(self.unexpected(other)),
                };
                match self.expect_next()? {
                    Token::Colon => {}
                    other => return Err(self.unexpected(other)),
                }
                let value = self.parse_value()?;
                // Duplicate keys: the last one wins
                members.insert(key, value);

                match self.expect_next()? {
                    Token::Comma => self.reject_trailing_comma(Token::ObjectEnd)?,
                    Token::ObjectEnd => break,
                    other => return Err(self.unexpected(other)),
                }
            }
        }

        self.exit_container();
        Ok(Value::Object(members))
    }

    fn expect_next(&mut self) -> Result<Token<'a>, ParseError> {
        match self.tokenizer.next()? {
            Some(token) => Ok(token),
            None => Err(ParseError::UnexpectedEndOfInput {
                position: self.tokenizer.position(),
            }),
        }
    }

    /// A comma must be followed by another element, never by the closer.
    fn reject_trailing_comma(&mut self, closer: Token<'a>) -> Result<(), ParseError> {
        if self.tokenizer.peek()? == Some(closer) {
            return Err(ParseError::TrailingComma {
                position: self.tokenizer.token_position(),
            });
        }
        Ok(())
    }

    fn unexpected(&self, token: Token<'a>) -> ParseError {
        ParseError::UnexpectedToken {
            token: token.describe(),
            position: self.tokenizer.token_position(),
        }
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::MaxDepthReached {
                limit: self.config.max_depth,
                position: self.tokenizer.token_position(),
            });
        }
        self.depth += 1;
        log::trace!(
            "Parser: enter container at {}, depth {}",
            self.tokenizer.token_position(),
            self.depth
        );
        Ok(())
    }

    fn exit_container(&mut self) {
        log::trace!("Parser: exit container, depth {}", self.depth);
        self.depth = self.depth.saturating_sub(1);
    }
}
