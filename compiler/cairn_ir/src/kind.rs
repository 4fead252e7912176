//! Closed set of node kinds.
//!
//! Every node in the [`Ast`](crate::Ast) carries exactly one `Kind`. The set
//! is fixed: passes dispatch on it with exhaustive `match`es instead of
//! inspecting node contents at runtime.

use std::fmt;

/// Kind of a tree node.
///
/// Identifiers are stored on the node itself (see [`Ast::name`](crate::Ast::name)),
/// so none of these kinds wrap an identifier child.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Program root. Children are top-level definitions.
    Top,

    // Definitions
    Class,
    Trait,
    TypeAlias,
    TypeParams,
    TypeParam,
    Inherit,
    TypePred,
    ClassBody,

    // Members
    FieldLet,
    FieldVar,
    Function,
    Params,
    Param,

    // Bodies
    Block,
    Let,
    Int,

    // Markers
    Implicit,
    Explicit,
    Ref,
    DontCare,

    // Types
    Type,
    TypeIsect,
    TypeTrue,
    FQType,
    TypePath,
    TypeArgs,
    TypeClassName,
    TypeTraitName,
    TypeAliasName,
    TypeParamName,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 31] = [
        Kind::Top,
        Kind::Class,
        Kind::Trait,
        Kind::TypeAlias,
        Kind::TypeParams,
        Kind::TypeParam,
        Kind::Inherit,
        Kind::TypePred,
        Kind::ClassBody,
        Kind::FieldLet,
        Kind::FieldVar,
        Kind::Function,
        Kind::Params,
        Kind::Param,
        Kind::Block,
        Kind::Let,
        Kind::Int,
        Kind::Implicit,
        Kind::Explicit,
        Kind::Ref,
        Kind::DontCare,
        Kind::Type,
        Kind::TypeIsect,
        Kind::TypeTrue,
        Kind::FQType,
        Kind::TypePath,
        Kind::TypeArgs,
        Kind::TypeClassName,
        Kind::TypeTraitName,
        Kind::TypeAliasName,
        Kind::TypeParamName,
    ];

    /// Keyword used for this kind in the S-expression text form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Top => "top",
            Kind::Class => "class",
            Kind::Trait => "trait",
            Kind::TypeAlias => "typealias",
            Kind::TypeParams => "typeparams",
            Kind::TypeParam => "typeparam",
            Kind::Inherit => "inherit",
            Kind::TypePred => "typepred",
            Kind::ClassBody => "classbody",
            Kind::FieldLet => "fieldlet",
            Kind::FieldVar => "fieldvar",
            Kind::Function => "function",
            Kind::Params => "params",
            Kind::Param => "param",
            Kind::Block => "block",
            Kind::Let => "let",
            Kind::Int => "int",
            Kind::Implicit => "implicit",
            Kind::Explicit => "explicit",
            Kind::Ref => "ref",
            Kind::DontCare => "dontcare",
            Kind::Type => "type",
            Kind::TypeIsect => "typeisect",
            Kind::TypeTrue => "typetrue",
            Kind::FQType => "fqtype",
            Kind::TypePath => "typepath",
            Kind::TypeArgs => "typeargs",
            Kind::TypeClassName => "typeclassname",
            Kind::TypeTraitName => "typetraitname",
            Kind::TypeAliasName => "typealiasname",
            Kind::TypeParamName => "typeparamname",
        }
    }

    /// Look up a kind by its text-form keyword.
    pub fn from_keyword(keyword: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.as_str() == keyword)
    }

    /// Whether nodes of this kind carry an identifier.
    pub const fn is_named(self) -> bool {
        matches!(
            self,
            Kind::Class
                | Kind::Trait
                | Kind::TypeAlias
                | Kind::TypeParam
                | Kind::FieldLet
                | Kind::FieldVar
                | Kind::Function
                | Kind::Param
                | Kind::Let
                | Kind::Int
                | Kind::TypeClassName
                | Kind::TypeTraitName
                | Kind::TypeAliasName
                | Kind::TypeParamName
        )
    }

    /// Fields and functions: the members a class body can inherit.
    pub const fn is_member(self) -> bool {
        matches!(self, Kind::FieldLet | Kind::FieldVar | Kind::Function)
    }

    pub const fn is_field(self) -> bool {
        matches!(self, Kind::FieldLet | Kind::FieldVar)
    }

    /// Name nodes that can end an `FQType` or appear in a `TypePath`.
    pub const fn is_type_name(self) -> bool {
        matches!(
            self,
            Kind::TypeClassName | Kind::TypeTraitName | Kind::TypeAliasName | Kind::TypeParamName
        )
    }

    /// Definition kind a type-name node refers to.
    pub const fn definition_for_name(self) -> Option<Kind> {
        match self {
            Kind::TypeClassName => Some(Kind::Class),
            Kind::TypeTraitName => Some(Kind::Trait),
            Kind::TypeAliasName => Some(Kind::TypeAlias),
            Kind::TypeParamName => Some(Kind::TypeParam),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
