//! Member signature conflicts.
//!
//! Fields are read through accessor functions taking the receiver as the
//! only parameter, so a field occupies the same slot as any one-parameter
//! function of its name.

use cairn_ir::{Ast, Kind, NodeId};

/// Whether members `a` and `b` (assumed to share a name) would clash in one
/// class body.
///
/// - field / field: always
/// - function / function: same arity and same `ref`-ness
/// - field / function: the function takes exactly one parameter
/// - anything else (type parameters, nested definitions): never
pub fn conflict(ast: &Ast, a: NodeId, b: NodeId) -> bool {
    if a == b {
        return false;
    }
    let (ka, kb) = (ast.kind(a), ast.kind(b));
    match (ka, kb) {
        (Kind::Function, Kind::Function) => {
            ast.arity(a) == ast.arity(b) && ast.is_ref_function(a) == ast.is_ref_function(b)
        }
        (Kind::Function, _) if kb.is_field() => ast.arity(a) == 1,
        (_, Kind::Function) if ka.is_field() => ast.arity(b) == 1,
        _ => ka.is_field() && kb.is_field(),
    }
}
