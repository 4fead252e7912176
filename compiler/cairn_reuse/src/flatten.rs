//! Inheritance worklist: from an `Inherit` type to a flat list of sources.
//!
//! A class's inheritance type may be an intersection, may name aliases, and
//! may name classes or traits through qualified references. The worklist
//! expands all of that into [`Lookup`]s of traits and classes, each carrying
//! the type arguments bound on the way there.
//!
//! The worklist is a stack. Children of a `Type` or `TypeIsect` are pushed
//! left to right and therefore popped right to left: `T1 & T2` yields the
//! sources `[T2, T1]`. Member copying follows this order, so it decides
//! which of two same-named inherited members comes first in the body.

use cairn_ir::{Ast, Kind, NodeId};
use cairn_resolve::{resolve_fq, Lookup};

use crate::schedule::Scheduler;

/// Record `class`'s member sources and the classes it must wait for, then
/// queue it if it waits for none.
///
/// `class` must have an `Inherit(Type)` slot. No members are copied here.
pub(crate) fn scan_class(ast: &Ast, scheduler: &mut Scheduler, class: NodeId) {
    let inherit_type = ast.child(ast.inherit(class), 0);
    let mut worklist = vec![Lookup::new(inherit_type)];
    scheduler.record(class);

    while let Some(lookup) = worklist.pop() {
        // Unresolved references contribute nothing.
        let Some(def) = lookup.def else {
            continue;
        };

        match ast.kind(def) {
            Kind::FQType => {
                let mut resolved = resolve_fq(ast, def);
                resolved.merge_from(&lookup.bindings);
                worklist.push(resolved);
            }
            Kind::Type | Kind::TypeIsect => {
                for &ty in ast.children(def) {
                    worklist.push(lookup.make(ty));
                }
            }
            // Aliases are transparent: carry the type arguments forward.
            Kind::TypeAlias => worklist.push(lookup.make(ast.alias_type(def))),
            Kind::Trait => scheduler.add_inherit(class, lookup),
            Kind::Class => {
                if ast.has_pending_inherit(def) {
                    scheduler.add_dependency(class, def);
                }
                scheduler.add_inherit(class, lookup);
            }
            other => {
                tracing::trace!(?class, kind = %other, "nothing to inherit from");
            }
        }
    }

    scheduler.finish_scan(class);
}
