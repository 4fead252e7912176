//! Resolved type references.

use cairn_ir::NodeId;
use rustc_hash::FxHashMap;

/// Type-parameter definition → the `Type` supplied for it at a reference site.
pub type Bindings = FxHashMap<NodeId, NodeId>;

/// A resolved type reference: the definition it denotes and the type
/// arguments bound along the way.
///
/// `def` is `None` when the reference did not resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lookup {
    pub def: Option<NodeId>,
    pub bindings: Bindings,
}

impl Lookup {
    /// A lookup of `def` with no bindings.
    pub fn new(def: NodeId) -> Self {
        Lookup {
            def: def.is_valid().then_some(def),
            bindings: Bindings::default(),
        }
    }

    /// A lookup that resolved to nothing.
    pub fn unresolved() -> Self {
        Lookup::default()
    }

    /// A lookup of `def` carrying this lookup's bindings forward.
    #[must_use]
    pub fn make(&self, def: NodeId) -> Self {
        Lookup {
            def: def.is_valid().then_some(def),
            bindings: self.bindings.clone(),
        }
    }

    /// Add `other`'s bindings for parameters this lookup does not bind yet.
    ///
    /// Existing bindings win: keys are distinct type-parameter definitions, so
    /// a collision means both sides already agree on the parameter's owner.
    pub fn merge_from(&mut self, other: &Bindings) {
        for (&param, &arg) in other {
            self.bindings.entry(param).or_insert(arg);
        }
    }

    /// Type bound to a type-parameter definition, if any.
    pub fn binding(&self, param: NodeId) -> Option<NodeId> {
        self.bindings.get(&param).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_keeps_bindings() {
        let mut l = Lookup::new(NodeId::new(1));
        l.bindings.insert(NodeId::new(10), NodeId::new(20));
        let m = l.make(NodeId::new(2));
        assert_eq!(m.def, Some(NodeId::new(2)));
        assert_eq!(m.binding(NodeId::new(10)), Some(NodeId::new(20)));
    }

    #[test]
    fn test_merge_keeps_existing() {
        let mut l = Lookup::new(NodeId::new(1));
        l.bindings.insert(NodeId::new(10), NodeId::new(20));
        let mut other = Bindings::default();
        other.insert(NodeId::new(10), NodeId::new(99));
        other.insert(NodeId::new(11), NodeId::new(21));
        l.merge_from(&other);
        assert_eq!(l.binding(NodeId::new(10)), Some(NodeId::new(20)));
        assert_eq!(l.binding(NodeId::new(11)), Some(NodeId::new(21)));
    }

    #[test]
    fn test_invalid_def_is_unresolved() {
        assert_eq!(Lookup::new(NodeId::INVALID).def, None);
        assert_eq!(Lookup::unresolved().def, None);
    }
}
