//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer knows nothing beyond digits and the two operator symbols.
//! Every byte is either whitespace or part of exactly one token, and the
//! sequence always ends with a single `Eof` marker.

use crate::error::{CompileError, CompileResult};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Punctuator,
  Num,
  Eof,
}

/// Lexical information needed by the emitter and for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub kind: TokenKind,
  /// Parsed literal, set for `Num` tokens.
  pub value: Option<i64>,
  /// Operator character, set for `Punctuator` tokens.
  pub symbol: Option<char>,
  /// Byte offset of the token in the original input.
  pub loc: usize,
}

impl Token {
  pub fn number(value: i64, loc: usize) -> Self {
    Self {
      kind: TokenKind::Num,
      value: Some(value),
      symbol: None,
      loc,
    }
  }

  pub fn punctuator(symbol: char, loc: usize) -> Self {
    Self {
      kind: TokenKind::Punctuator,
      value: None,
      symbol: Some(symbol),
      loc,
    }
  }

  pub fn eof(loc: usize) -> Self {
    Self {
      kind: TokenKind::Eof,
      value: None,
      symbol: None,
      loc,
    }
  }

  /// True if this is the punctuator `op`.
  pub fn is_punct(&self, op: char) -> bool {
    self.kind == TokenKind::Punctuator && self.symbol == Some(op)
  }
}

// Matches C's `isspace`, which also accepts vertical tab.
fn is_space(c: u8) -> bool {
  c.is_ascii_whitespace() || c == b'\x0b'
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if is_space(c) {
      i += 1;
      continue;
    }

    if c == b'+' || c == b'-' {
      tokens.push(Token::punctuator(char::from(c), i));
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      // `add`/`sub` only take a sign-extended 32-bit immediate.
      let value = input[start..i]
        .parse::<i32>()
        .map_err(|err| CompileError::at(input, start, format!("invalid number: {err}")))?;
      tokens.push(Token::number(i64::from(value), start));
      continue;
    }

    return Err(CompileError::at(input, i, "expected a number"));
  }

  tokens.push(Token::eof(input.len()));
  Ok(tokens)
}
