//! Member copying with explicit-wins conflict filtering.

use cairn_ir::{Ast, Kind, Name, NodeId};
use cairn_resolve::{conflict, Lookup};

use crate::subst::substitute;

/// Copy `from`'s inheritable members into `class`'s body.
///
/// Members are visited in declaration order. A member is skipped when it is
/// not a field or function, when it is a function without a body, or when
/// an explicit member of `class` conflicts with it. Copies are marked
/// `Implicit` and have `from`'s type arguments substituted in.
///
/// Only explicit members take part in the conflict check, so two sources
/// contributing the same name both land in the body.
///
/// Returns one change per copied member plus the substitutions made.
pub(crate) fn inherit_members(ast: &mut Ast, class: NodeId, from: &Lookup) -> usize {
    let Some(source) = from.def else {
        return 0;
    };
    let source_body = ast.class_body(source);
    let body = ast.class_body(class);
    if !source_body.is_valid() || !body.is_valid() {
        return 0;
    }

    let candidates: Vec<NodeId> = ast.children(source_body).to_vec();
    let mut changes = 0;

    for member in candidates {
        if !ast.kind(member).is_member() || ast.is_abstract(member) {
            continue;
        }
        if overridden(ast, class, member) {
            tracing::trace!(?class, ?member, "explicit member wins");
            continue;
        }

        let copy = ast.deep_clone(member);
        let marker_span = ast.span(ast.member_marker(copy));
        let implicit = ast.alloc(Kind::Implicit, Name::EMPTY, marker_span);
        ast.set_child(copy, 0, implicit);
        ast.push_child(body, copy);
        changes += 1;

        changes += substitute(ast, &from.bindings, copy);
        tracing::trace!(?class, ?member, ?copy, "inherited member");
    }

    changes
}

/// Whether an explicit member of `class` conflicts with `candidate`.
fn overridden(ast: &Ast, class: NodeId, candidate: NodeId) -> bool {
    ast.lookdown(class, ast.name(candidate))
        .into_iter()
        .filter(|&existing| !ast.is_implicit(existing))
        .any(|existing| conflict(ast, candidate, existing))
}
