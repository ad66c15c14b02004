//! html5ever serialization for ArenaDom.

use std::io;

use html5ever::QualName;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId};

/// A node paired with the arena it lives in, for html5ever's serializer.
struct SerializableNode<'a> {
    dom: &'a ArenaDom,
    id: ArenaNodeId,
}

enum SerializeOp {
    Open(ArenaNodeId),
    Close(QualName),
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        // Stack of pending operations, top at the end.
        let mut ops = Vec::new();
        match traversal_scope {
            TraversalScope::IncludeNode => ops.push(SerializeOp::Open(self.id)),
            TraversalScope::ChildrenOnly(_) => {
                let mut children: Vec<_> = self.dom.children(self.id).collect();
                children.reverse();
                ops.extend(children.into_iter().map(SerializeOp::Open));
            }
        }

        while let Some(op) = ops.pop() {
            let id = match op {
                SerializeOp::Open(id) => id,
                SerializeOp::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
            };
            let Some(node) = self.dom.get(id) else {
                continue;
            };

            match &node.data {
                ArenaNodeData::Element { name, attrs, .. } => {
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|a| (&a.name, a.value.as_str())),
                    )?;
                    ops.push(SerializeOp::Close(name.clone()));
                    let mut children: Vec<_> = self.dom.children(id).collect();
                    children.reverse();
                    ops.extend(children.into_iter().map(SerializeOp::Open));
                }
                ArenaNodeData::Doctype { name, .. } => serializer.write_doctype(name)?,
                ArenaNodeData::Text(text) => serializer.write_text(text)?,
                ArenaNodeData::Comment(text) => serializer.write_comment(text)?,
                // A document nested below the root carries nothing to write.
                ArenaNodeData::Document => {}
            }
        }

        Ok(())
    }
}

/// Serialize a whole document to HTML text.
pub fn serialize_html(dom: &ArenaDom) -> io::Result<String> {
    serialize_with_scope(dom, dom.document(), TraversalScope::ChildrenOnly(None))
}

/// Serialize one node, including its own tags, to HTML text.
pub fn serialize_node(dom: &ArenaDom, id: ArenaNodeId) -> io::Result<String> {
    serialize_with_scope(dom, id, TraversalScope::IncludeNode)
}

fn serialize_with_scope(
    dom: &ArenaDom,
    id: ArenaNodeId,
    traversal_scope: TraversalScope,
) -> io::Result<String> {
    let mut bytes = Vec::new();
    let node = SerializableNode { dom, id };
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    serialize(&mut bytes, &node, opts)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_round_trip_document() {
        let source = "<!DOCTYPE html><html><head><title>A &amp; B</title></head>\
                      <body><p class=\"x\">Hi <b>there</b></p><br></body></html>";
        let dom = parse_html(source);
        let out = serialize_html(&dom).unwrap();

        assert_eq!(
            out,
            "<!DOCTYPE html><html><head><title>A &amp; B</title></head>\
             <body><p class=\"x\">Hi <b>there</b></p><br></body></html>"
        );
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let dom = parse_html("<script>if (a < b && c) {}</script><style>a>b{}</style>");
        let out = serialize_html(&dom).unwrap();

        assert!(out.contains("<script>if (a < b && c) {}</script>"));
        assert!(out.contains("<style>a>b{}</style>"));
    }

    #[test]
    fn test_serialize_node_includes_tags() {
        let dom = parse_html("<nav class=\"fixed\"><a href=\"home.html\">Home</a></nav>");
        let nav = dom.find_by_tag("nav").unwrap();

        assert_eq!(
            serialize_node(&dom, nav).unwrap(),
            "<nav class=\"fixed\"><a href=\"home.html\">Home</a></nav>"
        );
    }

    #[test]
    fn test_detached_nodes_are_skipped() {
        let mut dom = parse_html("<body><header>x</header><main>y</main></body>");
        let header = dom.find_by_tag("header").unwrap();
        dom.detach(header);

        let out = serialize_html(&dom).unwrap();
        assert!(!out.contains("<header>"));
        assert!(out.contains("<main>y</main>"));
    }

    #[test]
    fn test_empty_attribute_value() {
        let mut dom = parse_html("<head></head>");
        let head = dom.find_by_tag("head").unwrap();
        let link = dom.create_html_element(
            "link",
            &[("rel", "preconnect"), ("href", "https://fonts.gstatic.com"), ("crossorigin", "")],
        );
        dom.append(head, link);

        let out = serialize_html(&dom).unwrap();
        assert!(out.contains(
            "<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\" crossorigin=\"\">"
        ));
    }
}
