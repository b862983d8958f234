//! Calculator core.
//!
//! This module provides:
//! - The math table for operators and scientific functions
//! - A tokenizer and grammar for the display buffer
//! - Evaluation and result formatting
//! - Copying results to the clipboard

mod clipboard;
mod error;
pub mod evaluation;
pub mod expression;
pub mod operations;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use error::CalcError;
pub use evaluation::{ERROR_TEXT, evaluate, evaluate_expression, format_result};
pub use operations::{BinaryOp, Function};
