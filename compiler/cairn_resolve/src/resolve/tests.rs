use super::*;
use cairn_ir::{parse_program, StringInterner};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "(top
  (class I32 (typeparams) (inherit (dontcare)) (typepred (type (typetrue))) (classbody))
  (trait Pair (typeparams (typeparam A) (typeparam B)) (classbody))
  (class Outer (typeparams (typeparam X)) (inherit (dontcare)) (typepred (type (typetrue)))
    (classbody
      (class Inner (typeparams (typeparam Y)) (inherit (dontcare)) (typepred (type (typetrue))) (classbody))))
  (typealias Alias (typeparams) (typepred (type (typetrue)))
    (type (fqtype (typepath) (typeclassname I32 (typeargs)))))
  (typealias Refs (typeparams) (typepred (type (typetrue)))
    (type (typeisect
      (fqtype (typepath) (typetraitname Pair
        (typeargs (type (fqtype (typepath) (typeclassname I32 (typeargs)))))))
      (fqtype (typepath (typeclassname Outer
        (typeargs (type (fqtype (typepath) (typeclassname I32 (typeargs)))))))
        (typeclassname Inner (typeargs (type (fqtype (typepath) (typealiasname Alias (typeargs)))))))
      (fqtype (typepath (typetraitname Pair (typeargs))) (typeparamname B (typeargs)))
      (fqtype (typepath) (typetraitname I32 (typeargs)))
      (fqtype (typepath) (typeclassname Missing (typeargs)))))))";

struct Fixture {
    ast: Ast,
    interner: StringInterner,
}

impl Fixture {
    fn new() -> Self {
        let interner = StringInterner::new();
        let ast = parse_program(PROGRAM, &interner).unwrap();
        Fixture { ast, interner }
    }

    fn top(&self, name: &str) -> NodeId {
        self.ast.lookdown(self.ast.root(), self.interner.intern(name))[0]
    }

    fn param(&self, def: NodeId, name: &str) -> NodeId {
        self.ast.lookdown(def, self.interner.intern(name))[0]
    }

    /// The `index`th qualified type of the `Refs` intersection.
    fn reference(&self, index: usize) -> NodeId {
        let isect = self.ast.children(self.ast.alias_type(self.top("Refs")))[0];
        self.ast.children(isect)[index]
    }
}

#[test]
fn test_resolves_trait_with_partial_args() {
    let f = Fixture::new();
    let lookup = resolve_fq(&f.ast, f.reference(0));
    let pair = f.top("Pair");
    assert_eq!(lookup.def, Some(pair));

    // Only `A` is supplied; `B` stays unbound.
    let a_arg = lookup.binding(f.param(pair, "A")).unwrap();
    assert_eq!(f.ast.kind(a_arg), Kind::Type);
    assert_eq!(lookup.binding(f.param(pair, "B")), None);
    assert_eq!(lookup.bindings.len(), 1);
}

#[test]
fn test_resolves_nested_class_through_path() {
    let f = Fixture::new();
    let lookup = resolve_fq(&f.ast, f.reference(1));
    let outer = f.top("Outer");
    let inner = f.param(outer, "Inner");
    assert_eq!(lookup.def, Some(inner));

    // Arguments on both the path step and the final name are bound.
    assert!(lookup.binding(f.param(outer, "X")).is_some());
    assert!(lookup.binding(f.param(inner, "Y")).is_some());
}

#[test]
fn test_resolves_type_param() {
    let f = Fixture::new();
    let lookup = resolve_fq(&f.ast, f.reference(2));
    let pair = f.top("Pair");
    assert_eq!(lookup.def, Some(f.param(pair, "B")));
    assert_eq!(f.ast.kind(lookup.def.unwrap()), Kind::TypeParam);
}

#[test]
fn test_kind_mismatch_does_not_resolve() {
    // `I32` is a class, but the reference asks for a trait.
    let f = Fixture::new();
    assert_eq!(resolve_fq(&f.ast, f.reference(3)), Lookup::unresolved());
}

#[test]
fn test_missing_name_does_not_resolve() {
    let f = Fixture::new();
    assert_eq!(resolve_fq(&f.ast, f.reference(4)).def, None);
}

#[test]
fn test_non_fq_does_not_resolve() {
    let f = Fixture::new();
    assert_eq!(resolve_fq(&f.ast, f.top("Refs")).def, None);
}
