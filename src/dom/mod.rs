//! Owned document tree that regions are rendered into.
//!
//! Nodes live in an arena addressed by [`NodeId`]. Removed nodes free their
//! slot; a freed slot bumps its generation so that ids held from before the
//! removal stop resolving instead of pointing at whatever reuses the slot.

mod parse;
mod serialize;

use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document whose root is a `<body>` element.
    pub fn new() -> Self {
        let mut doc = Document {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        };
        doc.root = doc.alloc(NodeKind::Element(Element {
            name: "body".to_string(),
            attrs: Vec::new(),
        }));
        doc
    }

    /// Parse markup into a detached document whose root holds the parsed
    /// nodes as children.
    pub fn parse_fragment(markup: &str) -> Self {
        let mut doc = Document::new();
        let root = doc.root;
        doc.append_markup(root, markup);
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let node = Node {
            kind,
            parent: None,
            children: Vec::new(),
        };
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Whether `id` still refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.kind(id) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn create_element(&mut self, name: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.alloc(NodeKind::Element(Element {
            name: name.to_ascii_lowercase(),
            attrs: attrs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        }))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeKind::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.alloc(NodeKind::Comment(text.to_string()))
    }

    /// Append `child` as the last child of `parent`. Adjacent text nodes are
    /// kept separate, the way the HTML tree builder leaves them.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        if let Some(old_parent) = self.parent(child) {
            if let Some(node) = self.node_mut(old_parent) {
                node.children.retain(|c| *c != child);
            }
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.create_element(name, attrs);
        self.append_child(parent, id);
        id
    }

    /// Parse `markup` and append the resulting nodes to `parent`.
    pub fn append_markup(&mut self, parent: NodeId, markup: &str) {
        parse::append_markup(self, parent, markup);
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
            else {
                continue;
            };
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
            }
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(current.index);
        }
    }

    /// Remove and free every child of `id`.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = match self.node_mut(id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        trace!("Freeing {} child subtrees", children.len());
        for child in children {
            self.free_subtree(child);
        }
    }

    /// Concatenated text of every text node below `id` in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            Some(NodeKind::Text(text)) | Some(NodeKind::Comment(text)) => text.clone(),
            Some(NodeKind::Element(_)) => {
                let mut out = String::new();
                self.collect_text(id, &mut out);
                out
            }
            None => String::new(),
        }
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        for &child in self.children(id) {
            match self.kind(child) {
                Some(NodeKind::Text(text)) => out.push_str(text),
                Some(NodeKind::Element(_)) => self.collect_text(child, out),
                _ => {}
            }
        }
    }

    /// Replace every child of an element with a single text node, or set the
    /// data of a text node.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        let is_element = match self.node_mut(id).map(|n| &mut n.kind) {
            Some(NodeKind::Text(data)) | Some(NodeKind::Comment(data)) => {
                *data = text.to_string();
                false
            }
            Some(NodeKind::Element(_)) => true,
            None => false,
        };
        if is_element {
            self.clear_children(id);
            if !text.is_empty() {
                let text = self.create_text(text);
                self.append_child(id, text);
            }
        }
    }

    /// Set an attribute, replacing an existing value in place. Returns
    /// `false` when `id` is not a live element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> bool {
        let Some(Node {
            kind: NodeKind::Element(el),
            ..
        }) = self.node_mut(id)
        else {
            return false;
        };
        match el.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(attr) => attr.1 = value.to_string(),
            None => el.attrs.push((name.to_string(), value.to_string())),
        }
        true
    }

    /// Every element below `id` in document order, `id` itself excluded.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            if self.element(current).is_some() {
                out.push(current);
                stack.extend(self.children(current).iter().rev().copied());
            }
        }
        out
    }

    /// First element below `id` carrying `class`.
    pub fn find_by_class(&self, id: NodeId, class: &str) -> Option<NodeId> {
        self.descendant_elements(id)
            .into_iter()
            .find(|&el| self.element(el).is_some_and(|e| e.has_class(class)))
    }

    /// Structural equality in the sense of DOM `isEqualNode`: same kind and
    /// name, same attribute set regardless of order, and pairwise equal
    /// children. `a` belongs to `self`, `b` to `other`.
    pub fn is_equal_node(&self, a: NodeId, other: &Document, b: NodeId) -> bool {
        let (Some(left), Some(right)) = (self.node(a), other.node(b)) else {
            return false;
        };
        let same_kind = match (&left.kind, &right.kind) {
            (NodeKind::Element(x), NodeKind::Element(y)) => {
                x.name == y.name
                    && x.attrs.len() == y.attrs.len()
                    && x.attrs.iter().all(|(n, v)| y.attr(n) == Some(v.as_str()))
            }
            (NodeKind::Text(x), NodeKind::Text(y)) => x == y,
            (NodeKind::Comment(x), NodeKind::Comment(y)) => x == y,
            _ => false,
        };
        same_kind
            && left.children.len() == right.children.len()
            && left
                .children
                .iter()
                .zip(&right.children)
                .all(|(&x, &y)| self.is_equal_node(x, other, y))
    }

    /// Serialized markup of the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            serialize::write_node(self, child, &mut out);
        }
        out
    }

    /// Serialized markup of `id` itself.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        serialize::write_node(self, id, &mut out);
        out
    }
}
