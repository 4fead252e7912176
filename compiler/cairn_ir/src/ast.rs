//! Node arena.
//!
//! [`Ast`] owns every node of a program in struct-of-arrays form (parallel
//! `kinds`, `names`, `spans`, `parents`, `children` arrays indexed by
//! [`NodeId`]). Nodes are never freed: replacing a child detaches the old
//! node but leaves it readable, so handles held by a pass stay valid.

use smallvec::SmallVec;

use crate::{Kind, Name, NodeId, Span};

/// Child list. Most nodes have at most four children.
pub type Children = SmallVec<[NodeId; 4]>;

/// Arena of tree nodes rooted at a single `Top` node.
#[derive(Clone, Debug)]
pub struct Ast {
    kinds: Vec<Kind>,
    names: Vec<Name>,
    spans: Vec<Span>,
    parents: Vec<NodeId>,
    children: Vec<Children>,
    root: NodeId,
}

/// Convert an arena length to a `NodeId`.
///
/// # Panics
/// Panics if the arena exceeds `u32::MAX - 1` nodes.
#[inline]
fn to_node_id(len: usize) -> NodeId {
    match u32::try_from(len) {
        Ok(raw) if raw != u32::MAX => NodeId::new(raw),
        _ => panic!("node arena exceeded capacity: {len} nodes"),
    }
}

impl Ast {
    /// Create an arena holding just an empty `Top` root.
    pub fn new() -> Self {
        let mut ast = Ast {
            kinds: Vec::new(),
            names: Vec::new(),
            spans: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
            root: NodeId::INVALID,
        };
        ast.root = ast.leaf(Kind::Top);
        ast
    }

    /// Create an arena pre-allocated for a program of `source_len` bytes.
    ///
    /// The text form spends roughly twelve bytes per node.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 12;
        let mut ast = Ast {
            kinds: Vec::with_capacity(estimated),
            names: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
            parents: Vec::with_capacity(estimated),
            children: Vec::with_capacity(estimated),
            root: NodeId::INVALID,
        };
        ast.root = ast.leaf(Kind::Top);
        ast
    }

    /// The `Top` node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Allocate a detached node with no children.
    pub fn alloc(&mut self, kind: Kind, name: Name, span: Span) -> NodeId {
        let id = to_node_id(self.kinds.len());
        self.kinds.push(kind);
        self.names.push(name);
        self.spans.push(span);
        self.parents.push(NodeId::INVALID);
        self.children.push(Children::new());
        id
    }

    /// Allocate an unnamed, spanless node.
    pub fn leaf(&mut self, kind: Kind) -> NodeId {
        self.alloc(kind, Name::EMPTY, Span::DUMMY)
    }

    /// Allocate a node and attach `children` to it in order.
    pub fn node(&mut self, kind: Kind, name: Name, children: &[NodeId]) -> NodeId {
        let id = self.alloc(kind, name, Span::DUMMY);
        for &child in children {
            self.push_child(id, child);
        }
        id
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> Kind {
        self.kinds[id.index()]
    }

    /// Identifier of a node, [`Name::EMPTY`] for unnamed kinds.
    #[inline]
    pub fn name(&self, id: NodeId) -> Name {
        self.names[id.index()]
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    pub fn set_span(&mut self, id: NodeId, span: Span) {
        self.spans[id.index()] = span;
    }

    /// Parent of a node, `NodeId::INVALID` for the root and detached nodes.
    #[inline]
    pub fn parent(&self, id: NodeId) -> NodeId {
        self.parents[id.index()]
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.index()]
    }

    /// The `index`th child, or `NodeId::INVALID` when there is none.
    #[inline]
    pub fn child(&self, id: NodeId, index: usize) -> NodeId {
        self.children[id.index()]
            .get(index)
            .copied()
            .unwrap_or(NodeId::INVALID)
    }

    /// Kind of the `index`th child, if present.
    #[inline]
    pub fn child_kind(&self, id: NodeId, index: usize) -> Option<Kind> {
        let child = self.child(id, index);
        child.is_valid().then(|| self.kind(child))
    }

    /// Number of allocated nodes, including detached ones.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Append `child` to `parent`'s children.
    pub fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.children[parent.index()].push(child);
        self.parents[child.index()] = parent;
    }

    /// Put `new` in `parent`'s `index`th slot, returning the detached old child.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_child(&mut self, parent: NodeId, index: usize, new: NodeId) -> NodeId {
        let old = std::mem::replace(&mut self.children[parent.index()][index], new);
        self.parents[old.index()] = NodeId::INVALID;
        self.parents[new.index()] = parent;
        old
    }

    /// Replace `old` with `new` among `parent`'s children.
    ///
    /// Returns `false` (and changes nothing) if `old` is not a child of `parent`.
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> bool {
        let Some(index) = self.children[parent.index()]
            .iter()
            .position(|&c| c == old)
        else {
            return false;
        };
        self.set_child(parent, index, new);
        true
    }

    /// Deep-copy the subtree at `id`. The copy is detached.
    ///
    /// Copies keep the kinds, names, and spans of their originals.
    pub fn deep_clone(&mut self, id: NodeId) -> NodeId {
        let copy = self.alloc(self.kind(id), self.name(id), self.span(id));
        let mut stack: Vec<(NodeId, NodeId)> = self
            .children(id)
            .iter()
            .rev()
            .map(|&child| (child, copy))
            .collect();

        while let Some((src, dst_parent)) = stack.pop() {
            let dst = self.alloc(self.kind(src), self.name(src), self.span(src));
            self.push_child(dst_parent, dst);
            stack.extend(self.children(src).iter().rev().map(|&child| (child, dst)));
        }

        copy
    }

    /// Definitions named `name` directly inside `scope`, in tree order.
    ///
    /// Classes and traits expose their type parameters and class-body
    /// members, aliases their type parameters, and `Top` its children.
    /// Other kinds define nothing.
    pub fn lookdown(&self, scope: NodeId, name: Name) -> SmallVec<[NodeId; 2]> {
        let mut found: SmallVec<[NodeId; 2]> = SmallVec::new();
        let mut search = |container: NodeId| {
            if container.is_valid() {
                found.extend(
                    self.children(container)
                        .iter()
                        .copied()
                        .filter(|&def| self.name(def) == name),
                );
            }
        };

        match self.kind(scope) {
            Kind::Top => search(scope),
            Kind::Class | Kind::Trait => {
                search(self.type_params(scope));
                search(self.class_body(scope));
            }
            Kind::TypeAlias => search(self.type_params(scope)),
            _ => {}
        }

        found
    }

    /// Pre-order list of the subtree rooted at `id` (including `id`).
    pub fn preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        order
    }
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}
