// SPDX-License-Identifier: Apache-2.0

/// Default limit on how deeply arrays and objects may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Runtime parser configuration.
///
/// `ParserConfig::default()` accepts trailing content after the top-level
/// value, unless the crate is built with the `strict` feature.
///
/// # Example
/// ```
/// use jsontree::{parse_with_config, ParseError, ParserConfig};
///
/// let config = ParserConfig::new().with_max_depth(2);
/// assert!(parse_with_config(b"[[1]]", config).is_ok());
/// assert!(matches!(
///     parse_with_config(b"[[[1]]]", config),
///     Err(ParseError::MaxDepthReached { limit: 2, .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested arrays/objects. Exceeding it fails the parse
    /// with `MaxDepthReached` instead of recursing further.
    pub max_depth: usize,
    /// Fail with `TrailingContent` when anything but whitespace follows the
    /// top-level value.
    pub reject_trailing_content: bool,
}

impl ParserConfig {
    /// Default depth limit; trailing content follows the `strict` feature.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing_content: cfg!(feature = "strict"),
        }
    }

    /// Default depth limit, trailing content rejected.
    pub const fn strict() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing_content: true,
        }
    }

    /// Replaces the nesting limit.
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Sets whether content after the top-level value is an error.
    pub const fn with_reject_trailing_content(self, reject_trailing_content: bool) -> Self {
        Self {
            reject_trailing_content,
            ..self
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
