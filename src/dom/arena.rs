//! Arena-based DOM for HTML pages.
//!
//! html5ever parses into this tree, the rewrite passes mutate it in place, and
//! the serializer walks it back out. Nodes are never freed: detaching a node
//! only unlinks it, so ids stay valid for the lifetime of the arena.

use html5ever::{LocalName, QualName, ns};

/// Unique identifier for a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaNodeId(pub u32);

impl ArenaNodeId {
    /// Sentinel value for no node.
    pub const NONE: ArenaNodeId = ArenaNodeId(u32::MAX);

    /// Check if this is a valid node ID.
    pub fn is_some(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Check if this is the sentinel value.
    pub fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// Node type in the arena DOM.
#[derive(Debug, Clone)]
pub enum ArenaNodeData {
    /// Document root.
    Document,
    /// Element with name and attributes.
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
        /// Class tokens, kept in sync with the `class` attribute.
        classes: Vec<String>,
    },
    /// Text content.
    Text(String),
    Comment(String),
    /// Document type declaration.
    Doctype {
        name: String,
        public_id: String,
        system_id: String,
    },
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

impl Attribute {
    /// Build a plain (namespace-less) attribute.
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: attr_name(name),
            value: value.into(),
        }
    }
}

/// Qualified name for an element in the HTML namespace.
pub fn html_name(local: &str) -> QualName {
    QualName::new(None, ns!(html), LocalName::from(local))
}

/// Qualified name for an attribute without namespace.
pub fn attr_name(local: &str) -> QualName {
    QualName::new(None, ns!(), LocalName::from(local))
}

/// A node in the arena DOM.
#[derive(Debug, Clone)]
pub struct ArenaNode {
    pub data: ArenaNodeData,
    pub parent: ArenaNodeId,
    pub first_child: ArenaNodeId,
    pub last_child: ArenaNodeId,
    pub prev_sibling: ArenaNodeId,
    pub next_sibling: ArenaNodeId,
}

impl ArenaNode {
    /// Create a new node with the given data.
    fn new(data: ArenaNodeData) -> Self {
        Self {
            data,
            parent: ArenaNodeId::NONE,
            first_child: ArenaNodeId::NONE,
            last_child: ArenaNodeId::NONE,
            prev_sibling: ArenaNodeId::NONE,
            next_sibling: ArenaNodeId::NONE,
        }
    }
}

/// Arena-based DOM tree.
///
/// All nodes are stored in a contiguous vector. Parent/child/sibling links
/// use indices into this vector.
#[derive(Debug, Clone)]
pub struct ArenaDom {
    nodes: Vec<ArenaNode>,
    document: ArenaNodeId,
}

impl ArenaDom {
    /// Create a new empty DOM with a document root.
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: ArenaNodeId::NONE,
        };
        dom.document = dom.alloc(ArenaNode::new(ArenaNodeData::Document));
        dom
    }

    fn alloc(&mut self, node: ArenaNode) -> ArenaNodeId {
        let id = ArenaNodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get the document root ID.
    pub fn document(&self) -> ArenaNodeId {
        self.document
    }

    /// Get a node by ID.
    pub fn get(&self, id: ArenaNodeId) -> Option<&ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    pub fn get_mut(&mut self, id: ArenaNodeId) -> Option<&mut ArenaNode> {
        if id.is_none() {
            return None;
        }
        self.nodes.get_mut(id.0 as usize)
    }

    /// Create a new element node.
    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> ArenaNodeId {
        let classes = attrs
            .iter()
            .find(|a| a.name.local.as_ref() == "class")
            .map(|a| split_classes(&a.value))
            .unwrap_or_default();

        self.alloc(ArenaNode::new(ArenaNodeData::Element {
            name,
            attrs,
            classes,
        }))
    }

    /// Create an HTML element from a tag name and `(name, value)` pairs.
    pub fn create_html_element(&mut self, tag: &str, attrs: &[(&str, &str)]) -> ArenaNodeId {
        let attrs = attrs
            .iter()
            .map(|(name, value)| Attribute::new(name, *value))
            .collect();
        self.create_element(html_name(tag), attrs)
    }

    /// Create a new text node.
    pub fn create_text(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Text(text)))
    }

    /// Create a new comment node.
    pub fn create_comment(&mut self, text: String) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Comment(text)))
    }

    /// Create a doctype node.
    pub fn create_doctype(
        &mut self,
        name: String,
        public_id: String,
        system_id: String,
    ) -> ArenaNodeId {
        self.alloc(ArenaNode::new(ArenaNodeData::Doctype {
            name,
            public_id,
            system_id,
        }))
    }

    /// Append a child to a parent node.
    pub fn append(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = parent;
            child_node.prev_sibling = last_child;
            child_node.next_sibling = ArenaNodeId::NONE;
        }

        if last_child.is_some()
            && let Some(last_node) = self.get_mut(last_child)
        {
            last_node.next_sibling = child;
        }

        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = child;
            }
            parent_node.last_child = child;
        }
    }

    /// Insert a child as the first child of a parent node.
    pub fn prepend(&mut self, parent: ArenaNodeId, child: ArenaNodeId) {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        if first.is_some() {
            self.insert_before(first, child);
        } else {
            self.append(parent, child);
        }
    }

    /// Insert a node before a sibling.
    pub fn insert_before(&mut self, sibling: ArenaNodeId, new_node: ArenaNodeId) {
        let parent = self
            .get(sibling)
            .map(|n| n.parent)
            .unwrap_or(ArenaNodeId::NONE);
        let prev = self
            .get(sibling)
            .map(|n| n.prev_sibling)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(new) = self.get_mut(new_node) {
            new.parent = parent;
            new.prev_sibling = prev;
            new.next_sibling = sibling;
        }

        if let Some(sib) = self.get_mut(sibling) {
            sib.prev_sibling = new_node;
        }

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = new_node;
            }
        } else if let Some(par) = self.get_mut(parent) {
            par.first_child = new_node;
        }
    }

    /// Unlink a node from its parent. The node and its subtree stay in the
    /// arena and can be re-attached.
    pub fn detach(&mut self, id: ArenaNodeId) {
        let (parent, prev, next) = match self.get(id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if prev.is_some() {
            if let Some(p) = self.get_mut(prev) {
                p.next_sibling = next;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.first_child = next;
        }

        if next.is_some() {
            if let Some(n) = self.get_mut(next) {
                n.prev_sibling = prev;
            }
        } else if let Some(p) = self.get_mut(parent) {
            p.last_child = prev;
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = ArenaNodeId::NONE;
            node.prev_sibling = ArenaNodeId::NONE;
            node.next_sibling = ArenaNodeId::NONE;
        }
    }

    /// Detach every child of a node.
    pub fn clear_children(&mut self, parent: ArenaNodeId) {
        let children: Vec<_> = self.children(parent).collect();
        for child in children {
            self.detach(child);
        }
    }

    /// Append text to an existing text node, or create new if last child isn't text.
    pub fn append_text(&mut self, parent: ArenaNodeId, text: &str) {
        let last_child = self
            .get(parent)
            .map(|n| n.last_child)
            .unwrap_or(ArenaNodeId::NONE);

        if let Some(last) = self.get_mut(last_child)
            && let ArenaNodeData::Text(ref mut existing) = last.data
        {
            existing.push_str(text);
            return;
        }

        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Replace all children of a node with a single text node.
    pub fn set_text(&mut self, parent: ArenaNodeId, text: &str) {
        self.clear_children(parent);
        let text_node = self.create_text(text.to_string());
        self.append(parent, text_node);
    }

    /// Set (or add) an attribute on an element.
    pub fn set_attr(&mut self, id: ArenaNodeId, attr: &str, value: &str) {
        let Some(node) = self.get_mut(id) else {
            return;
        };
        let ArenaNodeData::Element { attrs, classes, .. } = &mut node.data else {
            return;
        };

        match attrs.iter_mut().find(|a| a.name.local.as_ref() == attr) {
            Some(existing) => existing.value = value.to_string(),
            None => attrs.push(Attribute::new(attr, value)),
        }
        if attr == "class" {
            *classes = split_classes(value);
        }
    }

    /// Replace an element's class list, rewriting the `class` attribute.
    pub fn set_classes(&mut self, id: ArenaNodeId, classes: &[String]) {
        self.set_attr(id, "class", &classes.join(" "));
    }

    /// Copy a subtree from another arena into this one.
    ///
    /// Returns the id of the detached copy of `root`.
    pub fn import_subtree(&mut self, source: &ArenaDom, root: ArenaNodeId) -> ArenaNodeId {
        let Some(node) = source.get(root) else {
            return ArenaNodeId::NONE;
        };
        let copy = self.alloc(ArenaNode::new(node.data.clone()));
        for child in source.children(root) {
            let child_copy = self.import_subtree(source, child);
            self.append(copy, child_copy);
        }
        copy
    }

    /// Get the number of nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the DOM is empty (only has document root).
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Iterate over children of a node.
    pub fn children(&self, parent: ArenaNodeId) -> ChildrenIter<'_> {
        let first = self
            .get(parent)
            .map(|n| n.first_child)
            .unwrap_or(ArenaNodeId::NONE);
        ChildrenIter {
            dom: self,
            current: first,
        }
    }

    /// Iterate over all attached descendants of a node in document order.
    pub fn descendants(&self, root: ArenaNodeId) -> DescendantsIter<'_> {
        let mut stack: Vec<_> = self.children(root).collect();
        stack.reverse();
        DescendantsIter { dom: self, stack }
    }

    /// Find the first element matching a predicate (DFS).
    pub fn find<F>(&self, predicate: F) -> Option<ArenaNodeId>
    where
        F: Fn(&ArenaNode) -> bool,
    {
        let doc = self.document;
        if self.get(doc).is_some_and(&predicate) {
            return Some(doc);
        }
        self.descendants(doc)
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// Find element by tag name (first match).
    pub fn find_by_tag(&self, tag: &str) -> Option<ArenaNodeId> {
        self.find(|node| {
            if let ArenaNodeData::Element { name, .. } = &node.data {
                name.local.as_ref() == tag
            } else {
                false
            }
        })
    }

    /// Collect every attached element with the given tag name, in document order.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<ArenaNodeId> {
        self.descendants(self.document)
            .filter(|&id| self.is_tag(id, tag))
            .collect()
    }

    /// First child element of `parent` with the given tag name.
    pub fn child_by_tag(&self, parent: ArenaNodeId, tag: &str) -> Option<ArenaNodeId> {
        self.children(parent).find(|&id| self.is_tag(id, tag))
    }
}

impl Default for ArenaDom {
    fn default() -> Self {
        Self::new()
    }
}

fn split_classes(value: &str) -> Vec<String> {
    value.split_whitespace().map(|s| s.to_string()).collect()
}

/// Iterator over children of a node.
pub struct ChildrenIter<'a> {
    dom: &'a ArenaDom,
    current: ArenaNodeId,
}

impl<'a> Iterator for ChildrenIter<'a> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }
        let id = self.current;
        self.current = self
            .dom
            .get(id)
            .map(|n| n.next_sibling)
            .unwrap_or(ArenaNodeId::NONE);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantsIter<'a> {
    dom: &'a ArenaDom,
    stack: Vec<ArenaNodeId>,
}

impl<'a> Iterator for DescendantsIter<'a> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let mut children: Vec<_> = self.dom.children(id).collect();
        children.reverse();
        self.stack.extend(children);
        Some(id)
    }
}

/// Convenience methods for element nodes.
impl ArenaDom {
    /// Get element's qualified name.
    pub fn qual_name(&self, id: ArenaNodeId) -> Option<&QualName> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { name, .. } => Some(name),
            _ => None,
        })
    }

    /// Get element's local name (tag).
    pub fn element_name(&self, id: ArenaNodeId) -> Option<&LocalName> {
        self.qual_name(id).map(|name| &name.local)
    }

    /// Check if a node is an element with the given tag name.
    pub fn is_tag(&self, id: ArenaNodeId, tag: &str) -> bool {
        self.element_name(id).is_some_and(|n| n.as_ref() == tag)
    }

    /// Get an attribute value.
    pub fn get_attr(&self, id: ArenaNodeId, attr_name: &str) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        })
    }

    /// Get element's attributes as `(name, value)` pairs.
    pub fn attrs(&self, id: ArenaNodeId) -> Vec<(&str, &str)> {
        match self.get(id).map(|n| &n.data) {
            Some(ArenaNodeData::Element { attrs, .. }) => attrs
                .iter()
                .map(|a| (a.name.local.as_ref(), a.value.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Get element's classes.
    pub fn element_classes(&self, id: ArenaNodeId) -> &[String] {
        static EMPTY: &[String] = &[];
        self.get(id)
            .and_then(|n| match &n.data {
                ArenaNodeData::Element { classes, .. } => Some(classes.as_slice()),
                _ => None,
            })
            .unwrap_or(EMPTY)
    }

    /// Get text content of a text node.
    pub fn text_content(&self, id: ArenaNodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.data {
            ArenaNodeData::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Text of an element whose only child is a single text node.
    pub fn single_text_child(&self, id: ArenaNodeId) -> Option<&str> {
        let mut children = self.children(id);
        let only = children.next()?;
        if children.next().is_some() {
            return None;
        }
        self.text_content(only)
    }

    /// Flatten the text of every descendant text node, joined by `separator`.
    pub fn collect_text(&self, id: ArenaNodeId, separator: &str) -> String {
        self.descendants(id)
            .filter_map(|d| self.text_content(d))
            .collect::<Vec<_>>()
            .join(separator)
    }
}
