//! Fully qualified type resolution.
//!
//! An `FQType` names its target by a path from the program root:
//!
//! ```text
//! (fqtype (typepath (typeclassname Outer (typeargs ...)))
//!         (typeclassname Inner (typeargs ...)))
//! ```
//!
//! Each step looks the next name up with [`Ast::lookdown`] in the definition
//! the previous step reached, keeping only definitions of the kind the name
//! node asks for. Type arguments at each step are bound positionally to the
//! reached definition's type parameters.

use cairn_ir::{Ast, Kind, NodeId};

use crate::{Bindings, Lookup};

/// Resolve a qualified type reference.
///
/// Returns an unresolved lookup (`def == None`) if `fq` is not an `FQType`
/// or any step of its path names nothing.
pub fn resolve_fq(ast: &Ast, fq: NodeId) -> Lookup {
    if ast.kind(fq) != Kind::FQType {
        return Lookup::unresolved();
    }

    let mut lookup = Lookup::new(ast.root());
    let steps = ast
        .children(ast.fq_path(fq))
        .iter()
        .copied()
        .chain(std::iter::once(ast.fq_name(fq)));

    for step in steps {
        let Some(scope) = lookup.def else {
            return Lookup::unresolved();
        };
        let Some(def) = find_definition(ast, scope, step) else {
            tracing::trace!(?fq, ?step, "qualified type does not resolve");
            return Lookup::unresolved();
        };
        bind_type_args(ast, &mut lookup.bindings, def, step);
        lookup.def = Some(def);
    }

    lookup
}

/// Definition of the kind `name` refers to, named like `name`, inside `scope`.
fn find_definition(ast: &Ast, scope: NodeId, name: NodeId) -> Option<NodeId> {
    let expected = ast.kind(name).definition_for_name()?;
    ast.lookdown(scope, ast.name(name))
        .into_iter()
        .find(|&def| ast.kind(def) == expected)
}

/// Bind `def`'s type parameters to the type arguments on `name`.
///
/// Surplus parameters or arguments are left unbound.
fn bind_type_args(ast: &Ast, bindings: &mut Bindings, def: NodeId, name: NodeId) {
    let params = ast.type_params(def);
    let args = ast.type_args(name);
    if !params.is_valid() || !args.is_valid() {
        return;
    }
    for (&param, &arg) in ast.children(params).iter().zip(ast.children(args)) {
        bindings.insert(param, arg);
    }
}

#[cfg(test)]
mod tests;
