//! Code reuse: flatten inherited members into class bodies.
//!
//! After this pass every class whose `Inherit` slot held a type carries its
//! inherited fields and functions directly in its `ClassBody`, marked
//! `Implicit`, and its `Inherit` slot holds the `DontCare` sentinel. Later
//! passes never look inheritance up.
//!
//! # Phases
//!
//! 1. **Scan** ([`Pass::rewrite`], top-down, once per class): expand the
//!    class's inheritance type into member sources and record which
//!    not-yet-flattened classes it waits for. See `flatten`.
//! 2. **Drain** ([`Pass::post`]): pop ready classes, mark them flattened,
//!    copy members from their sources (explicit members win), substitute
//!    type arguments into the copies, then release their dependents. See
//!    `schedule`, `inherit`, and `subst`.
//!
//! Because the scan sees every class before the drain starts, a class is
//! always drained after every class it inherits from, regardless of source
//! order.
//!
//! # Cyclic inheritance
//!
//! Classes on an inheritance cycle never become ready. They are left
//! unflattened and dropped with the rest of the scheduler state; the pass
//! reports no error for them. Their ids are available from
//! [`CodeReuse::stranded`] so the caller can diagnose them.

mod flatten;
mod inherit;
mod schedule;
mod subst;

pub use subst::substitute;

use cairn_ir::{Ast, Kind, Name, NodeId};
use cairn_pass::Pass;

use crate::schedule::Scheduler;

/// The code-reuse pass.
///
/// Scheduler state lives only between a round's first `rewrite` and the end
/// of its `post`; each round starts from an empty table.
#[derive(Debug, Default)]
pub struct CodeReuse {
    scheduler: Scheduler,
    flattened: Vec<NodeId>,
    stranded: Vec<NodeId>,
}

impl CodeReuse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes flattened by the most recent round, in drain order.
    pub fn flattened(&self) -> &[NodeId] {
        &self.flattened
    }

    /// Classes the most recent round could not flatten because they wait,
    /// directly or transitively, on an inheritance cycle.
    pub fn stranded(&self) -> &[NodeId] {
        &self.stranded
    }

    /// Flatten one ready class. Returns the changes made.
    fn flatten_class(&mut self, ast: &mut Ast, class: NodeId) -> usize {
        let inherit = ast.inherit(class);
        let span = ast.span(inherit);
        let sentinel = ast.alloc(Kind::DontCare, Name::EMPTY, span);
        ast.set_child(inherit, 0, sentinel);
        let mut changes = 1;

        for from in self.scheduler.take_inherit(class) {
            changes += inherit::inherit_members(ast, class, &from);
        }

        let readied = self.scheduler.complete(class);
        tracing::debug!(?class, changes, readied, "flattened class");
        changes
    }
}

impl Pass for CodeReuse {
    fn name(&self) -> &'static str {
        "codereuse"
    }

    fn rewrite(&mut self, ast: &mut Ast, node: NodeId) -> usize {
        if ast.kind(node) == Kind::Class && ast.has_pending_inherit(node) {
            flatten::scan_class(ast, &mut self.scheduler, node);
        }
        0
    }

    #[tracing::instrument(level = "debug", skip_all)]
    fn post(&mut self, ast: &mut Ast) -> usize {
        let mut changes = 0;
        self.flattened.clear();

        while let Some(class) = self.scheduler.pop_ready() {
            changes += self.flatten_class(ast, class);
            self.flattened.push(class);
        }

        self.stranded = self.scheduler.clear();
        if !self.stranded.is_empty() {
            tracing::debug!(count = self.stranded.len(), "classes left unflattened");
        }
        changes
    }
}
