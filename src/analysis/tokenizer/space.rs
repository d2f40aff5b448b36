//! Space tokenizer implementation.
//!
//! This module provides a tokenizer that splits text on the ASCII space
//! character, implemented as an explicit character scan rather than a call to
//! a library split primitive. Only `' '` is a delimiter; tabs, newlines, and
//! other whitespace are ordinary word characters.
//!
//! # Examples
//!
//! ```
//! use wordscan::analysis::tokenizer::Tokenizer;
//! use wordscan::analysis::tokenizer::space::SpaceTokenizer;
//!
//! let tokenizer = SpaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("  leading and trailing  ").unwrap().collect();
//!
//! // Runs of spaces collapse; no empty token is ever produced
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "leading");
//! assert_eq!(tokens[1].text, "and");
//! assert_eq!(tokens[2].text, "trailing");
//! ```

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// The single delimiter character recognized by [`SpaceTokenizer`].
pub const DELIMITER: char = ' ';

/// A tokenizer that splits text on the ASCII space character.
///
/// The scan is a single linear pass over the input. Characters accumulate
/// into the current word until a space is reached; a non-empty accumulator is
/// then emitted as a token and reset. Consecutive, leading, and trailing
/// spaces therefore produce no tokens at all, and the token count always
/// equals the number of maximal runs of non-space characters in the input.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut position = 0;
        let mut start = 0;

        for (offset, ch) in text.char_indices() {
            if ch == DELIMITER {
                if !current.is_empty() {
                    let token =
                        Token::with_offsets(std::mem::take(&mut current), position, start, offset);
                    tokens.push(token);
                    position += 1;
                }
            } else {
                if current.is_empty() {
                    start = offset;
                }
                current.push(ch);
            }
        }

        // The input may end mid-word; the accumulator still holds that word.
        if !current.is_empty() {
            let token = Token::with_offsets(current, position, start, text.len());
            tokens.push(token);
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
