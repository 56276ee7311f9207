//! Crate root: wires together the translation pipeline.
//!
//! Data flows one way through two stages:
//! - `tokenizer` scans the raw argument into a flat token sequence.
//! - `codegen` walks that sequence once, left to right, emitting one
//!   instruction per arithmetic step.
//! - `error` holds the caret-style diagnostics shared by both stages.

pub mod codegen;
pub mod error;
pub mod tokenizer;

pub use error::{CompileError, CompileResult};

/// Translate an expression such as `12 + 34 - 5` into AT&T assembly.
pub fn generate_assembly(expr: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  codegen::generate(&tokens, expr)
}
