//! Printer for the S-expression text form.
//!
//! Output reads back through [`parse_program`](crate::parse_program). Nodes
//! without children print on one line; others put each child on its own
//! line, indented two spaces, with closing parens gathered on the last line.

use std::fmt::Write;

use cairn_stack::ensure_sufficient_stack;

use crate::{Ast, NodeId, StringInterner};

impl Ast {
    /// Print the whole program.
    pub fn dump(&self, interner: &StringInterner) -> String {
        self.dump_node(self.root(), interner)
    }

    /// Print the subtree rooted at `id`.
    pub fn dump_node(&self, id: NodeId, interner: &StringInterner) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id, interner, 0);
        out.push('\n');
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, interner: &StringInterner, depth: usize) {
        ensure_sufficient_stack(|| {
            let kind = self.kind(id);
            let _ = write!(out, "({kind}");
            if kind.is_named() {
                let _ = write!(out, " {}", interner.lookup(self.name(id)));
            }
            for &child in self.children(id) {
                out.push('\n');
                for _ in 0..=depth {
                    out.push_str("  ");
                }
                self.write_node(out, child, interner, depth + 1);
            }
            out.push(')');
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_program, StringInterner};
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_nested_forms() {
        let interner = StringInterner::new();
        let src = "(top (class C (typeparams) (inherit (dontcare)) (typepred (type (typetrue))) (classbody)))";
        let ast = parse_program(src, &interner).unwrap();
        assert_eq!(
            ast.dump(&interner),
            "(top
  (class C
    (typeparams)
    (inherit
      (dontcare))
    (typepred
      (type
        (typetrue)))
    (classbody)))
"
        );
    }

    #[test]
    fn printed_program_reads_back() {
        let interner = StringInterner::new();
        let src = "(top
          (trait T (typeparams (typeparam X))
            (classbody
              (fieldlet v (explicit)
                (type (fqtype (typepath (typetraitname T (typeargs))) (typeparamname X (typeargs))))
                (dontcare)))))";
        let ast = parse_program(src, &interner).unwrap();
        let printed = ast.dump(&interner);
        let reread = parse_program(&printed, &interner).unwrap();
        assert_eq!(reread.dump(&interner), printed);
    }
}
