//! Pass driver.
//!
//! A [`Pass`] is a rule applied to nodes during one top-down traversal,
//! followed by a post-traversal hook. Both report how many changes they
//! made; [`run_to_fixpoint`] repeats the traversal until a round makes none.
//!
//! # Traversal
//!
//! [`run_once`] visits every node reachable from the root exactly once, in
//! pre-order. A node's children are read *after* the rule ran on the node,
//! so a rule may rewrite its node's children and the traversal descends into
//! the rewritten ones. Nodes the rule appends elsewhere in the tree are not
//! visited in the same round.

use cairn_ir::{Ast, NodeId};

/// A tree-rewriting pass.
pub trait Pass {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Apply the pass's rule to `node`. Returns the number of changes made.
    fn rewrite(&mut self, ast: &mut Ast, node: NodeId) -> usize;

    /// Run after each traversal. Returns the number of changes made.
    fn post(&mut self, _ast: &mut Ast) -> usize {
        0
    }
}

/// Fixpoint limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassConfig {
    /// Rounds allowed before [`run_to_fixpoint`] gives up.
    pub max_iterations: usize,
}

impl Default for PassConfig {
    fn default() -> Self {
        PassConfig { max_iterations: 64 }
    }
}

/// What a fixpoint run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixpointStats {
    /// Rounds run, including the final round that changed nothing.
    pub iterations: usize,
    /// Changes summed over all rounds.
    pub changes: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PassError {
    #[error("pass `{pass}` still changing the tree after {iterations} rounds")]
    NoFixpoint {
        pass: &'static str,
        iterations: usize,
        changes: usize,
    },
}

/// One top-down traversal followed by the post hook.
#[tracing::instrument(level = "debug", skip_all, fields(pass = pass.name()))]
pub fn run_once<P: Pass + ?Sized>(ast: &mut Ast, pass: &mut P) -> usize {
    let mut changes = 0;
    let mut stack = vec![ast.root()];

    while let Some(node) = stack.pop() {
        changes += pass.rewrite(ast, node);
        stack.extend(ast.children(node).iter().rev().copied());
    }

    changes += pass.post(ast);
    tracing::debug!(changes, "round complete");
    changes
}

/// Repeat [`run_once`] until a round reports no changes.
pub fn run_to_fixpoint<P: Pass + ?Sized>(
    ast: &mut Ast,
    pass: &mut P,
    config: &PassConfig,
) -> Result<FixpointStats, PassError> {
    let mut stats = FixpointStats::default();

    while stats.iterations < config.max_iterations {
        stats.iterations += 1;
        let changes = run_once(ast, pass);
        stats.changes += changes;
        if changes == 0 {
            tracing::debug!(pass = pass.name(), ?stats, "fixpoint reached");
            return Ok(stats);
        }
    }

    Err(PassError::NoFixpoint {
        pass: pass.name(),
        iterations: stats.iterations,
        changes: stats.changes,
    })
}
