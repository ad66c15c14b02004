//! html5ever tree builder target that fills an [`ArenaDom`].

use std::borrow::Cow;
use std::cell::{Ref, RefCell};

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName, local_name, ns};

use super::arena::{ArenaDom, ArenaNodeData, ArenaNodeId, Attribute};

/// Name reported for handles that are not elements.
static NO_NAME: QualName = QualName {
    prefix: None,
    ns: ns!(),
    local: local_name!(""),
};

/// Tree builder sink. The parser only hands out `&self`, so the arena sits
/// behind a `RefCell`.
#[derive(Default)]
pub struct ArenaSink {
    dom: RefCell<ArenaDom>,
}

impl ArenaSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_dom(self) -> ArenaDom {
        self.dom.into_inner()
    }

    fn insert(&self, parent: ArenaNodeId, child: NodeOrText<ArenaNodeId>) {
        let mut dom = self.dom.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => dom.append(parent, node),
            NodeOrText::AppendText(text) => dom.append_text(parent, &text),
        }
    }
}

impl TreeSink for ArenaSink {
    type Handle = ArenaNodeId;
    type Output = Self;
    type ElemName<'a>
        = Ref<'a, QualName>
    where
        Self: 'a;

    fn finish(self) -> Self {
        self
    }

    // Pages are mockups; malformed markup is repaired silently.
    fn parse_error(&self, _msg: Cow<'static, str>) {}

    fn get_document(&self) -> ArenaNodeId {
        self.dom.borrow().document()
    }

    fn elem_name<'a>(&'a self, target: &'a ArenaNodeId) -> Ref<'a, QualName> {
        Ref::map(self.dom.borrow(), |dom| dom.qual_name(*target).unwrap_or(&NO_NAME))
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> ArenaNodeId {
        let attrs = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();
        self.dom.borrow_mut().create_element(name, attrs)
    }

    fn create_comment(&self, text: StrTendril) -> ArenaNodeId {
        self.dom.borrow_mut().create_comment(text.to_string())
    }

    // HTML has no processing instructions; the tokenizer never produces them.
    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> ArenaNodeId {
        self.dom.borrow_mut().create_comment(data.to_string())
    }

    fn append(&self, parent: &ArenaNodeId, child: NodeOrText<ArenaNodeId>) {
        self.insert(*parent, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &ArenaNodeId,
        prev_element: &ArenaNodeId,
        child: NodeOrText<ArenaNodeId>,
    ) {
        let parent = self
            .dom
            .borrow()
            .get(*element)
            .map_or(ArenaNodeId::NONE, |n| n.parent);
        if parent.is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.insert(*prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        let mut dom = self.dom.borrow_mut();
        let doctype = dom.create_doctype(
            name.to_string(),
            public_id.to_string(),
            system_id.to_string(),
        );
        let doc = dom.document();
        dom.append(doc, doctype);
    }

    // Template contents are kept inline under the `<template>` element.
    fn get_template_contents(&self, target: &ArenaNodeId) -> ArenaNodeId {
        *target
    }

    fn same_node(&self, x: &ArenaNodeId, y: &ArenaNodeId) -> bool {
        x == y
    }

    // Quirks mode does not change how pages are rewritten or serialized.
    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &ArenaNodeId, new_node: NodeOrText<ArenaNodeId>) {
        let mut dom = self.dom.borrow_mut();
        let node = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => {
                // Merge into a preceding text node, as `append` does.
                let prev = dom.get(*sibling).map_or(ArenaNodeId::NONE, |n| n.prev_sibling);
                if let Some(ArenaNodeData::Text(existing)) =
                    dom.get_mut(prev).map(|n| &mut n.data)
                {
                    existing.push_str(&text);
                    return;
                }
                dom.create_text(text.to_string())
            }
        };
        dom.insert_before(*sibling, node);
    }

    fn add_attrs_if_missing(&self, target: &ArenaNodeId, attrs: Vec<Html5Attribute>) {
        let mut dom = self.dom.borrow_mut();
        for attr in attrs {
            let name = attr.name.local.as_ref();
            if dom.get_attr(*target, name).is_none() {
                dom.set_attr(*target, name, &attr.value);
            }
        }
    }

    fn remove_from_parent(&self, target: &ArenaNodeId) {
        self.dom.borrow_mut().detach(*target);
    }

    fn reparent_children(&self, node: &ArenaNodeId, new_parent: &ArenaNodeId) {
        let mut dom = self.dom.borrow_mut();
        let children: Vec<_> = dom.children(*node).collect();
        for child in children {
            dom.detach(child);
            dom.append(*new_parent, child);
        }
    }
}
