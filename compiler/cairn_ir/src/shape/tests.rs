use crate::{parse_program, Kind, ParseError, StringInterner};

fn read(src: &str) -> Result<crate::Ast, ParseError> {
    parse_program(src, &StringInterner::new())
}

#[test]
fn test_class_accessors() {
    let ast = read(
        "(top (class C (typeparams) (inherit (type (typetrue))) (typepred (type (typetrue)))
           (classbody
             (function f (explicit) (ref) (typeparams) (params (param self (type (typetrue))))
               (type (typetrue)) (typepred (type (typetrue))) (dontcare)))))",
    )
    .unwrap();
    let class = ast.children(ast.root())[0];
    assert_eq!(ast.kind(ast.inherit(class)), Kind::Inherit);
    assert!(ast.has_pending_inherit(class));

    let function = ast.children(ast.class_body(class))[0];
    assert!(ast.is_abstract(function));
    assert!(ast.is_ref_function(function));
    assert_eq!(ast.arity(function), 1);
    assert!(!ast.is_implicit(function));
    assert_eq!(ast.kind(ast.member_type(function)), Kind::Type);
}

#[test]
fn test_accessors_on_wrong_kind_are_invalid() {
    let ast = read("(top)").unwrap();
    let root = ast.root();
    assert!(!ast.inherit(root).is_valid());
    assert!(!ast.class_body(root).is_valid());
    assert!(!ast.fq_name(root).is_valid());
    assert_eq!(ast.arity(root), 0);
}

#[test]
fn test_fq_type_param_ref() {
    let ast = read(
        "(top (typealias A (typeparams (typeparam X)) (typepred (type (typetrue)))
           (type (fqtype (typepath (typealiasname A (typeargs))) (typeparamname X (typeargs))))))",
    )
    .unwrap();
    let alias = ast.children(ast.root())[0];
    let fq = ast.children(ast.alias_type(alias))[0];
    assert!(ast.is_type_param_ref(fq));
    assert_eq!(ast.kind(ast.fq_path(fq)), Kind::TypePath);
    assert_eq!(ast.kind(ast.type_args(ast.fq_name(fq))), Kind::TypeArgs);
}

#[test]
fn test_rejects_missing_slot() {
    let err = read("(top (class C (typeparams) (inherit (dontcare)) (classbody)))").unwrap_err();
    match err {
        ParseError::Shape(shape) => {
            assert_eq!(shape.kind, Kind::Class);
            assert_eq!(shape.reason, "expected 4 children, found 3");
        }
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn test_rejects_wrong_slot_kind() {
    let err = read("(top (class C (typeparams) (inherit (typetrue)) (typepred (type (typetrue))) (classbody)))")
        .unwrap_err();
    assert!(matches!(err, ParseError::Shape(ref shape) if shape.kind == Kind::Inherit));
}

#[test]
fn test_rejects_empty_intersection() {
    let err = read(
        "(top (class C (typeparams) (inherit (type (typeisect))) (typepred (type (typetrue))) (classbody)))",
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::Shape(ref shape) if shape.kind == Kind::TypeIsect));
}
