//! Name resolution services used by tree-rewriting passes.
//!
//! - [`resolve_fq`]: resolve a fully qualified type reference to the
//!   definition it names, together with the type arguments bound to that
//!   definition's (and its enclosing definitions') type parameters.
//! - [`conflict`]: decide whether two same-named members would clash if
//!   both lived in one class body.

mod conflict;
mod lookup;
mod resolve;

pub use conflict::conflict;
pub use lookup::{Bindings, Lookup};
pub use resolve::resolve_fq;
