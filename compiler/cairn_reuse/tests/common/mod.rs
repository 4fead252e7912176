//! Shared program builders for the code-reuse integration tests.
//!
//! Programs are assembled from S-expression snippets. Type references are
//! produced as bare `fqtype`/`typeisect` forms; wrap them with [`ty`] where a
//! `type` slot is expected. Type arguments passed to the `*_ref` builders
//! are bare too; each one is wrapped once when the `typeargs` list is built.

#![allow(dead_code, reason = "Each test binary uses a subset of the helpers")]
#![allow(clippy::expect_used, reason = "Tests can panic")]

use cairn_ir::{parse_program, Ast, Kind, NodeId, StringInterner};
use cairn_pass::{run_to_fixpoint, FixpointStats, PassConfig};
use cairn_reuse::CodeReuse;

pub const PRED: &str = "(typepred (type (typetrue)))";

pub fn ty(inner: &str) -> String {
    format!("(type {inner})")
}

fn type_args(args: &[&str]) -> String {
    let args: Vec<String> = args.iter().map(|arg| ty(arg)).collect();
    format!("(typeargs {})", args.join(" "))
}

fn fq(kind: &str, name: &str, args: &[&str]) -> String {
    format!("(fqtype (typepath) ({kind} {name} {}))", type_args(args))
}

pub fn class_ref(name: &str, args: &[&str]) -> String {
    fq("typeclassname", name, args)
}

pub fn trait_ref(name: &str, args: &[&str]) -> String {
    fq("typetraitname", name, args)
}

pub fn alias_ref(name: &str, args: &[&str]) -> String {
    fq("typealiasname", name, args)
}

/// Reference to type parameter `param` of top-level trait `owner`.
pub fn trait_param(owner: &str, param: &str) -> String {
    format!(
        "(fqtype (typepath (typetraitname {owner} (typeargs))) (typeparamname {param} (typeargs)))"
    )
}

/// Reference to type parameter `param` of top-level class `owner`.
pub fn class_param(owner: &str, param: &str) -> String {
    format!(
        "(fqtype (typepath (typeclassname {owner} (typeargs))) (typeparamname {param} (typeargs)))"
    )
}

/// Reference to type parameter `param` of top-level alias `owner`.
pub fn alias_param(owner: &str, param: &str) -> String {
    format!(
        "(fqtype (typepath (typealiasname {owner} (typeargs))) (typeparamname {param} (typeargs)))"
    )
}

pub fn isect(parts: &[&str]) -> String {
    format!("(typeisect {})", parts.join(" "))
}

fn type_params(params: &[&str]) -> String {
    let params: Vec<String> = params.iter().map(|p| format!("(typeparam {p})")).collect();
    format!("(typeparams {})", params.join(" "))
}

/// A class; `inherit` is a type expression, `None` for `(dontcare)`.
pub fn class(name: &str, params: &[&str], inherit: Option<&str>, members: &[String]) -> String {
    let inherit = inherit.map_or_else(|| "(dontcare)".to_owned(), ty);
    format!(
        "(class {name} {} (inherit {inherit}) {PRED} (classbody {}))",
        type_params(params),
        members.join(" ")
    )
}

pub fn trait_(name: &str, params: &[&str], members: &[String]) -> String {
    format!("(trait {name} {} (classbody {}))", type_params(params), members.join(" "))
}

pub fn alias(name: &str, params: &[&str], aliased: &str) -> String {
    format!("(typealias {name} {} {PRED} {})", type_params(params), ty(aliased))
}

/// An explicit function taking `arity` receiver-typed parameters. A `None`
/// body makes it abstract.
pub fn function(name: &str, arity: usize, ret: &str, body: Option<&str>) -> String {
    let params: Vec<String> = (0..arity)
        .map(|i| format!("(param p{i} {})", ty(&class_ref("I32", &[]))))
        .collect();
    format!(
        "(function {name} (explicit) (dontcare) (typeparams) (params {}) {} {PRED} {})",
        params.join(" "),
        ty(ret),
        body.unwrap_or("(dontcare)")
    )
}

/// An explicit `let` field without an initializer.
pub fn field(name: &str, field_type: &str) -> String {
    format!("(fieldlet {name} (explicit) {} (dontcare))", ty(field_type))
}

/// The `I32` class most programs use as a concrete argument.
pub fn i32_class() -> String {
    class("I32", &[], None, &[])
}

/// One class-body member as seen by the assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub kind: Kind,
    pub name: &'static str,
    pub implicit: bool,
}

pub fn explicit(kind: Kind, name: &'static str) -> Member {
    Member {
        kind,
        name,
        implicit: false,
    }
}

pub fn implicit(kind: Kind, name: &'static str) -> Member {
    Member {
        kind,
        name,
        implicit: true,
    }
}

pub struct Program {
    pub ast: Ast,
    pub interner: StringInterner,
}

impl Program {
    pub fn parse(defs: &[String]) -> Self {
        let interner = StringInterner::new();
        let src = format!("(top\n{})", defs.join("\n"));
        let ast = parse_program(&src, &interner).expect("test program reads");
        Program { ast, interner }
    }

    /// Run code reuse to a fixpoint with the default limits.
    pub fn run(&mut self) -> (FixpointStats, CodeReuse) {
        let mut pass = CodeReuse::new();
        let stats = run_to_fixpoint(&mut self.ast, &mut pass, &PassConfig::default())
            .expect("code reuse reaches a fixpoint");
        (stats, pass)
    }

    /// Top-level definition named `name`.
    pub fn def(&self, name: &str) -> NodeId {
        self.ast.lookdown(self.ast.root(), self.interner.intern(name))[0]
    }

    pub fn body(&self, class: &str) -> Vec<Member> {
        let body = self.ast.class_body(self.def(class));
        self.ast
            .children(body)
            .iter()
            .map(|&m| Member {
                kind: self.ast.kind(m),
                name: self.interner.lookup(self.ast.name(m)),
                implicit: self.ast.is_implicit(m),
            })
            .collect()
    }

    /// Members of `class` named `name`, in body order.
    pub fn members(&self, class: &str, name: &str) -> Vec<NodeId> {
        let body = self.ast.class_body(self.def(class));
        let name = self.interner.intern(name);
        self.ast
            .children(body)
            .iter()
            .copied()
            .filter(|&m| self.ast.name(m) == name)
            .collect()
    }

    /// `kind name` of the type a member declares, e.g. `typeclassname I32`,
    /// or the printed form when it is not a single qualified reference.
    pub fn member_type(&self, member: NodeId) -> String {
        let ty = self.ast.member_type(member);
        let fq = self.ast.child(ty, 0);
        if self.ast.kind(fq) != Kind::FQType {
            return self.compact(ty);
        }
        let name = self.ast.fq_name(fq);
        format!("{} {}", self.ast.kind(name), self.interner.lookup(self.ast.name(name)))
    }

    /// Printed subtree on one line.
    pub fn compact(&self, id: NodeId) -> String {
        self.ast
            .dump_node(id, &self.interner)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn inherit_kind(&self, class: &str) -> Kind {
        self.ast.kind(self.ast.child(self.ast.inherit(self.def(class)), 0))
    }

    pub fn names(&self, ids: &[NodeId]) -> Vec<&'static str> {
        ids.iter()
            .map(|&id| self.interner.lookup(self.ast.name(id)))
            .collect()
    }
}
