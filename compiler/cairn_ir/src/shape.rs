//! Node shapes: slot accessors and structural validation.
//!
//! Slot layout (identifiers live on the node, never as a child):
//!
//! ```text
//! Class      TypeParams Inherit TypePred ClassBody
//! Trait      TypeParams ClassBody
//! TypeAlias  TypeParams TypePred Type
//! Inherit    Type | DontCare
//! FieldLet   Implicit|Explicit Type Block|DontCare
//! FieldVar   Implicit|Explicit Type Block|DontCare
//! Function   Implicit|Explicit Ref|DontCare TypeParams Params Type TypePred Block|DontCare
//! Param      Type
//! Let        Type
//! FQType     TypePath <type name>
//! <name>     TypeArgs
//! ```
//!
//! Accessors return `NodeId::INVALID` when a node does not have the slot,
//! so callers working on partially built trees can test `is_valid()`.

use crate::{Ast, Kind, NodeId, Span};

/// A node whose children do not match its kind's layout.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed `{kind}` node: {reason}")]
pub struct ShapeError {
    pub kind: Kind,
    pub span: Span,
    pub reason: String,
}

const MARKER: &[Kind] = &[Kind::Implicit, Kind::Explicit];
const BODY: &[Kind] = &[Kind::Block, Kind::DontCare];
const TYPE: &[Kind] = &[Kind::Type];
const TYPE_EXPR: &[Kind] = &[Kind::FQType, Kind::TypeIsect, Kind::TypeTrue, Kind::Type];
const TYPE_NAME: &[Kind] = &[
    Kind::TypeClassName,
    Kind::TypeTraitName,
    Kind::TypeAliasName,
    Kind::TypeParamName,
];

impl Ast {
    /// `TypeParams` of a class, trait, alias, or function.
    pub fn type_params(&self, def: NodeId) -> NodeId {
        match self.kind(def) {
            Kind::Class | Kind::Trait | Kind::TypeAlias => self.child(def, 0),
            Kind::Function => self.child(def, 2),
            _ => NodeId::INVALID,
        }
    }

    /// `ClassBody` of a class or trait.
    pub fn class_body(&self, def: NodeId) -> NodeId {
        match self.kind(def) {
            Kind::Class => self.child(def, 3),
            Kind::Trait => self.child(def, 1),
            _ => NodeId::INVALID,
        }
    }

    /// `Inherit` slot of a class.
    pub fn inherit(&self, class: NodeId) -> NodeId {
        match self.kind(class) {
            Kind::Class => self.child(class, 1),
            _ => NodeId::INVALID,
        }
    }

    /// Whether a class still carries an unflattened inheritance type.
    pub fn has_pending_inherit(&self, class: NodeId) -> bool {
        let inherit = self.inherit(class);
        inherit.is_valid() && self.child_kind(inherit, 0) == Some(Kind::Type)
    }

    /// The aliased `Type` of a type alias.
    pub fn alias_type(&self, alias: NodeId) -> NodeId {
        match self.kind(alias) {
            Kind::TypeAlias => self.child(alias, 2),
            _ => NodeId::INVALID,
        }
    }

    /// `Implicit` / `Explicit` marker slot of a field or function.
    pub fn member_marker(&self, member: NodeId) -> NodeId {
        if self.kind(member).is_member() {
            self.child(member, 0)
        } else {
            NodeId::INVALID
        }
    }

    /// Whether a member was copied in by inheritance.
    pub fn is_implicit(&self, member: NodeId) -> bool {
        self.kind(member).is_member() && self.child_kind(member, 0) == Some(Kind::Implicit)
    }

    /// Declared type of a field, or return type of a function.
    pub fn member_type(&self, member: NodeId) -> NodeId {
        match self.kind(member) {
            Kind::FieldLet | Kind::FieldVar => self.child(member, 1),
            Kind::Function => self.child(member, 4),
            _ => NodeId::INVALID,
        }
    }

    /// Body of a function or initializer of a field (`Block` or `DontCare`).
    pub fn member_body(&self, member: NodeId) -> NodeId {
        match self.kind(member) {
            Kind::FieldLet | Kind::FieldVar => self.child(member, 2),
            Kind::Function => self.child(member, 6),
            _ => NodeId::INVALID,
        }
    }

    /// Whether a function has no implementation.
    pub fn is_abstract(&self, function: NodeId) -> bool {
        self.kind(function) == Kind::Function && self.child_kind(function, 6) != Some(Kind::Block)
    }

    /// Whether a function is declared `ref`.
    pub fn is_ref_function(&self, function: NodeId) -> bool {
        self.kind(function) == Kind::Function && self.child_kind(function, 1) == Some(Kind::Ref)
    }

    pub fn params(&self, function: NodeId) -> NodeId {
        match self.kind(function) {
            Kind::Function => self.child(function, 3),
            _ => NodeId::INVALID,
        }
    }

    /// Number of parameters of a function, zero for anything else.
    pub fn arity(&self, function: NodeId) -> usize {
        let params = self.params(function);
        if params.is_valid() {
            self.children(params).len()
        } else {
            0
        }
    }

    /// `TypePath` of a qualified type.
    pub fn fq_path(&self, fq: NodeId) -> NodeId {
        match self.kind(fq) {
            Kind::FQType => self.child(fq, 0),
            _ => NodeId::INVALID,
        }
    }

    /// Final name node of a qualified type.
    pub fn fq_name(&self, fq: NodeId) -> NodeId {
        match self.kind(fq) {
            Kind::FQType => self.child(fq, 1),
            _ => NodeId::INVALID,
        }
    }

    /// Whether `node` is a qualified reference to a type parameter.
    pub fn is_type_param_ref(&self, node: NodeId) -> bool {
        self.kind(node) == Kind::FQType && self.child_kind(node, 1) == Some(Kind::TypeParamName)
    }

    /// `TypeArgs` of a type-name node.
    pub fn type_args(&self, name: NodeId) -> NodeId {
        if self.kind(name).is_type_name() {
            self.child(name, 0)
        } else {
            NodeId::INVALID
        }
    }

    /// Check that every node reachable from the root has its kind's layout.
    pub fn validate(&self) -> Result<(), ShapeError> {
        self.preorder(self.root())
            .into_iter()
            .try_for_each(|id| self.validate_node(id))
    }

    fn validate_node(&self, id: NodeId) -> Result<(), ShapeError> {
        let kind = self.kind(id);
        if kind.is_named() && self.name(id).is_empty() {
            return Err(self.malformed(id, "missing identifier".to_owned()));
        }
        match kind {
            Kind::Top => self.expect_all(
                id,
                &[Kind::Class, Kind::Trait, Kind::TypeAlias],
                0,
            ),
            Kind::Class => self.expect_slots(
                id,
                &[&[Kind::TypeParams], &[Kind::Inherit], &[Kind::TypePred], &[Kind::ClassBody]],
            ),
            Kind::Trait => self.expect_slots(id, &[&[Kind::TypeParams], &[Kind::ClassBody]]),
            Kind::TypeAlias => {
                self.expect_slots(id, &[&[Kind::TypeParams], &[Kind::TypePred], TYPE])
            }
            Kind::TypeParams => self.expect_all(id, &[Kind::TypeParam], 0),
            Kind::Inherit => self.expect_slots(id, &[&[Kind::Type, Kind::DontCare]]),
            Kind::TypePred | Kind::Param | Kind::Let => self.expect_slots(id, &[TYPE]),
            Kind::ClassBody => self.expect_all(
                id,
                &[
                    Kind::FieldLet,
                    Kind::FieldVar,
                    Kind::Function,
                    Kind::Class,
                    Kind::Trait,
                    Kind::TypeAlias,
                ],
                0,
            ),
            Kind::FieldLet | Kind::FieldVar => self.expect_slots(id, &[MARKER, TYPE, BODY]),
            Kind::Function => self.expect_slots(
                id,
                &[
                    MARKER,
                    &[Kind::Ref, Kind::DontCare],
                    &[Kind::TypeParams],
                    &[Kind::Params],
                    TYPE,
                    &[Kind::TypePred],
                    BODY,
                ],
            ),
            Kind::Params => self.expect_all(id, &[Kind::Param], 0),
            Kind::Block => self.expect_all(id, &[Kind::Let, Kind::Int, Kind::Block], 0),
            Kind::Type => self.expect_slots(id, &[TYPE_EXPR]),
            Kind::TypeIsect => self.expect_all(id, TYPE_EXPR, 1),
            Kind::FQType => self.expect_slots(id, &[&[Kind::TypePath], TYPE_NAME]),
            Kind::TypePath => self.expect_all(id, TYPE_NAME, 0),
            Kind::TypeArgs => self.expect_all(id, TYPE, 0),
            Kind::TypeClassName | Kind::TypeTraitName | Kind::TypeAliasName | Kind::TypeParamName => {
                self.expect_slots(id, &[&[Kind::TypeArgs]])
            }
            Kind::TypeParam
            | Kind::Int
            | Kind::Implicit
            | Kind::Explicit
            | Kind::Ref
            | Kind::DontCare
            | Kind::TypeTrue => self.expect_slots(id, &[]),
        }
    }

    /// Exactly one child per slot, each of one of the slot's kinds.
    fn expect_slots(&self, id: NodeId, slots: &[&[Kind]]) -> Result<(), ShapeError> {
        let children = self.children(id);
        if children.len() != slots.len() {
            return Err(self.malformed(
                id,
                format!("expected {} children, found {}", slots.len(), children.len()),
            ));
        }
        for (index, (&child, allowed)) in children.iter().zip(slots).enumerate() {
            if !allowed.contains(&self.kind(child)) {
                return Err(self.malformed(
                    id,
                    format!("unexpected `{}` in slot {index}", self.kind(child)),
                ));
            }
        }
        Ok(())
    }

    /// Any number (at least `min`) of children, each of one of `allowed`.
    fn expect_all(&self, id: NodeId, allowed: &[Kind], min: usize) -> Result<(), ShapeError> {
        let children = self.children(id);
        if children.len() < min {
            return Err(self.malformed(
                id,
                format!("expected at least {min} children, found {}", children.len()),
            ));
        }
        match children.iter().find(|&&child| !allowed.contains(&self.kind(child))) {
            Some(&child) => Err(self.malformed(
                id,
                format!("unexpected `{}` child", self.kind(child)),
            )),
            None => Ok(()),
        }
    }

    fn malformed(&self, id: NodeId, reason: String) -> ShapeError {
        ShapeError {
            kind: self.kind(id),
            span: self.span(id),
            reason,
        }
    }
}

#[cfg(test)]
mod tests;
