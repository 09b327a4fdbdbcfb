use crate::tree::CodeTree;
use std::io::{self, Write};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">
  <key id="key0" for="node" attr.name="id" attr.type="int" />
  <key id="key1" for="node" attr.name="level" attr.type="double" />
  <key id="key2" for="node" attr.name="name" attr.type="string" />
  <graph id="G" edgedefault="directed" parse.nodeids="canonical" parse.edgeids="canonical" parse.order="nodesfirst">
"#;

const FOOTER: &str = "  </graph>\n</graphml>\n";

/// Write the tree as a directed GraphML document
///
/// Nodes appear in id order as `n<id>` carrying `id`, `level` and `name`;
/// edges follow as `e<k>` from parent to child.
pub fn write_graphml<W: Write>(tree: &CodeTree, out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;

    for node in tree.nodes() {
        let id = node.id.value();
        writeln!(out, "    <node id=\"n{}\">", id)?;
        writeln!(out, "      <data key=\"key0\">{}</data>", id)?;
        writeln!(out, "      <data key=\"key1\">{}</data>", node.level)?;
        writeln!(out, "      <data key=\"key2\">{}</data>", escape(&node.name))?;
        writeln!(out, "    </node>")?;
    }

    for (index, (parent, child)) in tree.edges().enumerate() {
        writeln!(
            out,
            "    <edge id=\"e{}\" source=\"n{}\" target=\"n{}\">\n    </edge>",
            index,
            parent.value(),
            child.value()
        )?;
    }

    out.write_all(FOOTER.as_bytes())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
