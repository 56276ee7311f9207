//! Shared error utilities used across the translation pipeline.
//!
//! Diagnostics echo the input and point at the offending byte with a caret,
//! in the style of chibicc.

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
pub enum CompileError {
  #[snafu(display("{expr_line}\n{marker} {message}"))]
  WithLocation {
    expr_line: String,
    marker: String,
    message: String,
    loc: usize,
  },
}

impl CompileError {
  /// Construct an error anchored at a specific byte offset in the source.
  pub fn at(expr: &str, loc: usize, message: impl Into<String>) -> Self {
    let expr_line = expr.to_string();
    let safe_loc = loc.min(expr.len());
    let char_offset = expr[..safe_loc].chars().count();
    let marker = format!("{}^", " ".repeat(char_offset));
    Self::WithLocation {
      expr_line,
      marker,
      message: message.into(),
      loc: safe_loc,
    }
  }

  /// Byte offset into the original input the error points at.
  pub fn loc(&self) -> usize {
    match self {
      Self::WithLocation { loc, .. } => *loc,
    }
  }

  pub fn message(&self) -> &str {
    match self {
      Self::WithLocation { message, .. } => message,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caret_sits_under_offending_byte() {
    let err = CompileError::at("1 ? 2", 2, "expected a number");
    assert_eq!(err.to_string(), "1 ? 2\n  ^ expected a number");
    assert_eq!(err.loc(), 2);
    assert_eq!(err.message(), "expected a number");
  }

  #[test]
  fn offset_past_end_is_clamped() {
    let err = CompileError::at("1 +", 10, "expected a number");
    assert_eq!(err.loc(), 3);
    assert_eq!(err.to_string(), "1 +\n   ^ expected a number");
  }

  #[test]
  fn caret_counts_characters_not_bytes() {
    let err = CompileError::at("é1", 2, "oops");
    assert_eq!(err.to_string(), "é1\n ^ oops");
  }
}
