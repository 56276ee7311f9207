//! Code generation: stream the token sequence straight into AT&T x86-64
//! assembly.
//!
//! There is no tree. A cursor walks the tokens once, left to right, and every
//! `+`/`-` step becomes exactly one instruction against `%rax`, which holds the
//! running value and is also the function's return value.

use crate::error::{CompileError, CompileResult};
use crate::tokenizer::{Token, TokenKind};

/// Forward-only position in the token sequence. It never moves backward and
/// stops once it reaches the `Eof` token.
struct TokenCursor<'a> {
  tokens: &'a [Token],
  source: &'a str,
  pos: usize,
}

impl<'a> TokenCursor<'a> {
  fn new(tokens: &'a [Token], source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn current(&self) -> Option<&'a Token> {
    self.tokens.get(self.pos)
  }

  /// Byte offset used for diagnostics about the current token.
  fn loc(&self) -> usize {
    self.current().map_or(self.source.len(), |token| token.loc)
  }

  /// Advance past `op` if it is the current token.
  fn consume(&mut self, op: char) -> bool {
    if self.current().is_some_and(|token| token.is_punct(op)) {
      self.pos += 1;
      return true;
    }
    false
  }

  /// Advance past `op`, or fail at the current token.
  fn expect(&mut self, op: char) -> CompileResult<()> {
    if self.consume(op) {
      Ok(())
    } else {
      Err(CompileError::at(
        self.source,
        self.loc(),
        format!("expected '{op}'"),
      ))
    }
  }

  /// Return the current number and advance past it.
  fn expect_number(&mut self) -> CompileResult<i64> {
    if let Some(token) = self.current()
      && token.kind == TokenKind::Num
      && let Some(value) = token.value
    {
      self.pos += 1;
      return Ok(value);
    }
    Err(CompileError::at(self.source, self.loc(), "expected a number"))
  }

  fn at_eof(&self) -> bool {
    match self.current() {
      Some(token) => token.kind == TokenKind::Eof,
      None => true,
    }
  }
}

/// Emit a complete `main` function computing the expression in `tokens`.
pub fn generate(tokens: &[Token], source: &str) -> CompileResult<String> {
  let mut cursor = TokenCursor::new(tokens, source);
  let mut asm = String::new();
  asm.push_str(".att_syntax prefix\n");
  asm.push_str(".globl main\n");
  asm.push_str("main:\n");

  emit_start(&mut cursor, &mut asm)?;
  emit_accumulate(&mut cursor, &mut asm)?;

  asm.push_str("    ret\n");
  Ok(asm)
}

/// The expression must open with a number, which seeds the result register.
fn emit_start(cursor: &mut TokenCursor, asm: &mut String) -> CompileResult<()> {
  let first = cursor.expect_number()?;
  asm.push_str(&format!("    mov ${first}, %rax\n"));
  Ok(())
}

/// Fold each `<op> <number>` pair into `%rax` until the end of input.
fn emit_accumulate(cursor: &mut TokenCursor, asm: &mut String) -> CompileResult<()> {
  while !cursor.at_eof() {
    if cursor.consume('+') {
      let value = cursor.expect_number()?;
      asm.push_str(&format!("    add ${value}, %rax\n"));
      continue;
    }

    // The tokenizer only produces `+` and `-`, so anything reaching here that
    // is not `-` is a number in operator position. New operator symbols need
    // their own branch above.
    cursor.expect('-')?;
    let value = cursor.expect_number()?;
    asm.push_str(&format!("    sub ${value}, %rax\n"));
  }
  Ok(())
}
