use std::collections::BTreeMap;

use indextree::{Arena, NodeId};

use super::capability::Platform;
use super::dom::{Bounds, Dom, Selector, Viewport};

#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub bounds: Bounds,
}

impl MemoryElement {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.attributes
            .get("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    fn matches(&self, selector: Selector) -> bool {
        match selector {
            Selector::Class(c) => self.has_class(c),
            Selector::Id(id) => self.attributes.get("id").is_some_and(|v| v == id),
            Selector::Attr(a) => self.attributes.contains_key(a),
            Selector::Tag(t) => self.tag == t,
        }
    }
}

/// An arena-backed document with explicit layout, for headless hosts and
/// tests. Geometry is whatever the caller says it is; nothing is laid out.
pub struct MemoryDom {
    arena: Arena<MemoryElement>,
    body: NodeId,
    viewport: Viewport,
    reduced_motion: bool,
    coarse_pointer: bool,
    writes: usize,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}

impl MemoryDom {
    pub fn new(width: f64, height: f64) -> Self {
        let mut arena = Arena::new();
        let body = arena.new_node(MemoryElement::new("body"));
        Self {
            arena,
            body,
            viewport: Viewport {
                scroll_y: 0.0,
                width,
                height,
                document_height: height,
            },
            reduced_motion: false,
            coarse_pointer: false,
            writes: 0,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Appends a `tag` element under `parent`. Attributes are `(name, value)`.
    pub fn append(&mut self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let mut element = MemoryElement::new(tag);
        for (name, value) in attributes {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
        let id = self.arena.new_node(element);
        parent.append(id, &mut self.arena);
        id
    }

    /// Sets a node's layout box and grows the document to contain it.
    pub fn set_bounds(&mut self, node: NodeId, top: f64, height: f64) {
        if let Some(n) = self.arena.get_mut(node) {
            n.get_mut().bounds = Bounds { top, height };
        }
        let bottom = top + height;
        if bottom > self.viewport.document_height {
            self.viewport.document_height = bottom;
        }
    }

    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.viewport.scroll_y = scroll_y;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn set_coarse_pointer(&mut self, coarse: bool) {
        self.coarse_pointer = coarse;
    }

    /// Nodes currently attached under the body, the body included.
    pub fn node_count(&self) -> usize {
        self.body.descendants(&self.arena).count()
    }

    /// Number of style and text writes applied so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn element(&self, node: NodeId) -> Option<&MemoryElement> {
        self.arena.get(node).map(|n| n.get())
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|e| e.style.get(property))
            .map(String::as_str)
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.text.as_str())
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        node.children(&self.arena).collect()
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        node.ancestors(&self.arena).any(|a| a == self.body)
    }
}

impl Platform for MemoryDom {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn coarse_pointer(&self) -> bool {
        self.coarse_pointer
    }

    fn viewport_width(&self) -> f64 {
        self.viewport.width
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        self.body
    }

    fn query_all(&self, selector: Selector) -> Vec<NodeId> {
        self.body
            .descendants(&self.arena)
            .filter(|id| self.arena[*id].get().matches(selector))
            .collect()
    }

    fn find_id(&self, id: &str) -> Option<NodeId> {
        self.body.descendants(&self.arena).find(|n| {
            self.arena[*n]
                .get()
                .attributes
                .get("id")
                .is_some_and(|v| v == id)
        })
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.arena.get(*node)?.parent()
    }

    fn closest(&self, node: &NodeId, selector: Selector) -> Option<NodeId> {
        node.ancestors(&self.arena)
            .find(|n| self.arena[*n].get().matches(selector))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.element(*node)?.attributes.get(name).cloned()
    }

    fn inline_style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.style(*node, property).map(str::to_string)
    }

    fn computed_position(&self, node: &NodeId) -> String {
        self.style(*node, "position").unwrap_or("static").to_string()
    }

    fn bounds(&self, node: &NodeId) -> Bounds {
        self.element(*node).map(|e| e.bounds).unwrap_or_default()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_element(&mut self, tag: &str) -> Option<NodeId> {
        Some(self.arena.new_node(MemoryElement::new(tag)))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(n) = self.arena.get_mut(*node) {
            n.get_mut()
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        if let Some(n) = self.arena.get_mut(*node) {
            n.get_mut()
                .style
                .insert(property.to_string(), value.to_string());
            self.writes += 1;
        }
    }

    fn remove_style(&mut self, node: &NodeId, property: &str) {
        if let Some(n) = self.arena.get_mut(*node) {
            n.get_mut().style.remove(property);
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        if let Some(n) = self.arena.get_mut(*node) {
            n.get_mut().text = text.to_string();
            self.writes += 1;
        }
    }

    fn prepend_child(&mut self, parent: &NodeId, child: &NodeId) {
        parent.prepend(*child, &mut self.arena);
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        parent.append(*child, &mut self.arena);
    }

    fn remove(&mut self, node: &NodeId) {
        let live = self.arena.get(*node).is_some_and(|n| !n.is_removed());
        if live {
            node.remove_subtree(&mut self.arena);
        }
    }
}
