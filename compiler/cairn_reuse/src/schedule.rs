//! Reference-counted dependency scheduler.
//!
//! Every class with an inheritance type gets one [`Pending`] record during
//! the scan. A record counts the classes it inherits from that have not been
//! flattened yet (`rc`) and lists the classes waiting on it (`deps`). A class
//! enters the ready queue exactly once: at the end of its scan if nothing
//! blocks it, or when completing its last blocker drops `rc` to zero.
//!
//! The ready queue is LIFO.

use cairn_ir::NodeId;
use cairn_resolve::Lookup;
use rustc_hash::FxHashMap;

/// Bookkeeping for one class awaiting flattening.
#[derive(Clone, Debug, Default)]
pub(crate) struct Pending {
    /// Inherited-from classes not yet flattened.
    pub rc: usize,
    /// Traits and classes to copy members from, in worklist order.
    pub inherit: Vec<Lookup>,
    /// Classes that inherit from this one and wait for it.
    pub deps: Vec<NodeId>,
}

/// Pending table plus ready queue, scoped to one pass round.
#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    pending: FxHashMap<NodeId, Pending>,
    ready: Vec<NodeId>,
}

impl Scheduler {
    /// The record for `class`, created empty on first use.
    pub fn record(&mut self, class: NodeId) -> &mut Pending {
        self.pending.entry(class).or_default()
    }

    #[cfg(test)]
    pub fn get(&self, class: NodeId) -> Option<&Pending> {
        self.pending.get(&class)
    }

    /// Queue `from` as a source of members for `class`.
    pub fn add_inherit(&mut self, class: NodeId, from: Lookup) {
        self.record(class).inherit.push(from);
    }

    /// `class` must wait until `blocker` has been flattened.
    pub fn add_dependency(&mut self, class: NodeId, blocker: NodeId) {
        self.record(blocker).deps.push(class);
        self.record(class).rc += 1;
    }

    /// End of `class`'s scan: make it ready if nothing blocks it.
    pub fn finish_scan(&mut self, class: NodeId) {
        if self.record(class).rc == 0 {
            self.ready.push(class);
        }
    }

    /// Most recently readied class.
    pub fn pop_ready(&mut self) -> Option<NodeId> {
        self.ready.pop()
    }

    /// Hand over `class`'s member sources. The record keeps its counters.
    pub fn take_inherit(&mut self, class: NodeId) -> Vec<Lookup> {
        self.pending
            .get_mut(&class)
            .map(|pend| std::mem::take(&mut pend.inherit))
            .unwrap_or_default()
    }

    /// `class` is flattened: release its dependents. Returns how many became ready.
    pub fn complete(&mut self, class: NodeId) -> usize {
        let deps = self
            .pending
            .get_mut(&class)
            .map(|pend| std::mem::take(&mut pend.deps))
            .unwrap_or_default();

        let mut readied = 0;
        for dep in deps {
            let Some(pend) = self.pending.get_mut(&dep) else {
                continue;
            };
            debug_assert!(pend.rc > 0, "dependent released more often than it was blocked");
            pend.rc = pend.rc.saturating_sub(1);
            if pend.rc == 0 {
                self.ready.push(dep);
                readied += 1;
            }
        }
        readied
    }

    /// Discard all state. Returns the classes that never became ready,
    /// in handle order.
    pub fn clear(&mut self) -> Vec<NodeId> {
        let mut stranded: Vec<NodeId> = self
            .pending
            .iter()
            .filter(|(_, pend)| pend.rc > 0)
            .map(|(&class, _)| class)
            .collect();
        stranded.sort_unstable();
        self.pending.clear();
        self.ready.clear();
        stranded
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.ready.is_empty()
    }
}

#[cfg(test)]
mod tests;
