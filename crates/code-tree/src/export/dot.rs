use crate::tree::CodeTree;
use std::io::{self, Write};

/// Render the tree as a Graphviz digraph with one labeled node per code
pub fn write_dot<W: Write>(tree: &CodeTree, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph codes {{")?;
    writeln!(out, "    rankdir=TD;")?;

    for node in tree.nodes() {
        writeln!(
            out,
            "    n{} [label=\"{}\\n{}\"];",
            node.id.value(),
            escape(&node.name),
            node.level
        )?;
    }

    for (parent, child) in tree.edges() {
        writeln!(out, "    n{} -> n{};", parent.value(), child.value())?;
    }

    writeln!(out, "}}")
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_dot_rendering() {
        let mut tree = CodeTree::new();
        tree.insert_names(&["A", "B"]);
        tree.insert_names(&["C"]);

        let mut out = Vec::new();
        write_dot(&tree, &mut out).unwrap();
        let dot = String::from_utf8(out).unwrap();

        assert_snapshot!(dot, @r###"
        digraph codes {
            rankdir=TD;
            n0 [label="epsilon\n0"];
            n1 [label="A\n1"];
            n2 [label="B\n2"];
            n3 [label="C\n1"];
            n0 -> n1;
            n0 -> n3;
            n1 -> n2;
        }
        "###);
    }

    #[test]
    fn test_labels_are_escaped() {
        assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
    }
}
