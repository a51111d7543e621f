// SPDX-License-Identifier: Apache-2.0

//! A small JSON parser that builds an owned [`Value`] tree.
//!
//! Parsing runs in two layers: a [`Tokenizer`] that splits the input into
//! tokens borrowing from the input slice, and a recursive descent [`Parser`]
//! that resolves string escapes, evaluates numbers and assembles the tree.
//!
//! ```
//! use jsontree::{parse_str, Value};
//!
//! let value = parse_str(r#"{"k": 1, "m": [2, 3]}"#).unwrap();
//! assert_eq!(value["k"], Value::Number(1.0));
//! assert_eq!(value["m"][1].as_f64(), Some(3.0));
//! ```
//!
//! The crate is `no_std` and needs only `alloc`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};

pub mod escape_processor;

pub mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::Parser;

mod slice_input_buffer;

pub mod tokenizer;
pub use tokenizer::{Token, Tokenizer};

mod value;
pub use value::{Map, Value};

/// Parses a complete JSON document with the default configuration.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Same as [`parse`], for text that is already a `str`.
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

/// Parses with an explicit [`ParserConfig`].
pub fn parse_with_config(input: &[u8], config: ParserConfig) -> Result<Value, ParseError> {
    Parser::with_config(input, config).parse()
}
