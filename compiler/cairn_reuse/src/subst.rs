//! Type-parameter substitution in copied members.
//!
//! A member copied from `trait T[X]` into `class C : T[I32]` still refers to
//! `T`'s parameter `X`. Substitution replaces every qualified reference to a
//! bound parameter with a copy of its argument. Parameters the bindings do
//! not mention are left alone; they belong to an enclosing scope.

use cairn_ir::{Ast, Kind, NodeId};
use cairn_resolve::{resolve_fq, Bindings};
use cairn_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

/// Substitute below `node` (never `node` itself). Returns the number of
/// references replaced.
///
/// Children are handled in order, each to a local fixpoint before its own
/// subtree is visited: a reference whose argument is itself a bound
/// parameter reference is replaced again. A parameter that resurfaces at
/// the same position is left in place to keep self-referential bindings
/// from looping.
pub fn substitute(ast: &mut Ast, bindings: &Bindings, node: NodeId) -> usize {
    ensure_sufficient_stack(|| {
        let mut changes = 0;
        let mut index = 0;

        while index < ast.children(node).len() {
            let mut child = ast.children(node)[index];
            let mut seen: SmallVec<[NodeId; 2]> = SmallVec::new();

            while ast.is_type_param_ref(child) {
                let Some(param) = resolve_fq(ast, child).def else {
                    break;
                };
                let Some(&bound) = bindings.get(&param) else {
                    break;
                };
                if seen.contains(&param) {
                    tracing::trace!(?param, "type parameter bound to itself");
                    break;
                }
                seen.push(param);

                let mut replacement = ast.deep_clone(bound);
                if ast.kind(replacement) == Kind::Type {
                    let inner = ast.child(replacement, 0);
                    if inner.is_valid() {
                        replacement = inner;
                    }
                }

                ast.set_child(node, index, replacement);
                tracing::trace!(?param, ?child, ?replacement, "substituted type parameter");
                child = replacement;
                changes += 1;
            }

            changes += substitute(ast, bindings, child);
            index += 1;
        }

        changes
    })
}
