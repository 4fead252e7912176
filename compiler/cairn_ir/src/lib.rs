//! Cairn IR - program trees for the cairn compiler passes.
//!
//! This crate contains the data structures every pass works on:
//! - [`Ast`]: struct-of-arrays node arena rooted at a `Top` node
//! - [`Kind`]: the closed set of node kinds
//! - [`NodeId`]: copyable handles used for every cross-tree reference
//! - [`Name`] / [`StringInterner`]: interned identifiers
//! - Slot accessors and [`Ast::validate`] for node shapes
//! - The S-expression text form ([`parse_program`], [`Ast::dump`])
//!
//! # Design
//!
//! - **Handles, not pointers**: definitions, bindings, and scheduler
//!   dependents all hold `NodeId`s into one arena.
//! - **Append-only arena**: replaced nodes stay allocated, so a handle never
//!   dangles while a pass is mid-traversal.
//! - **Identifiers on nodes**: a node's identifier is data, not a child, so
//!   slot positions are the same for named and unnamed kinds.

mod ast;
mod interner;
mod kind;
mod name;
mod node_id;
mod print;
mod sexp;
mod shape;
mod span;

pub use ast::{Ast, Children};
pub use interner::{InternError, StringInterner};
pub use kind::Kind;
pub use name::Name;
pub use node_id::NodeId;
pub use sexp::{parse_program, ParseError};
pub use shape::ShapeError;
pub use span::{Span, SpanError};
