//! Diagnostics for the cairn compiler.
//!
//! A [`Diagnostic`] carries an [`ErrorCode`] for searchability, a message,
//! labeled spans, and notes. Emitters render them; the terminal emitter
//! resolves spans to `file:line:col` and prints the source line.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{cyclic_inheritance, parse_error, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
