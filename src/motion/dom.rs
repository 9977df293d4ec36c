use std::borrow::Cow;
use std::fmt::Debug;

/// The small selector language the orchestrator speaks. Anything richer is
/// the host's business; catalog rows only ever need one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Class(&'static str),
    Id(&'static str),
    Attr(&'static str),
    Tag(&'static str),
}

impl Selector {
    pub fn css(&self) -> Cow<'static, str> {
        match self {
            Selector::Class(c) => Cow::Owned(format!(".{c}")),
            Selector::Id(id) => Cow::Owned(format!("#{id}")),
            Selector::Attr(a) => Cow::Owned(format!("[{a}]")),
            Selector::Tag(t) => Cow::Borrowed(t),
        }
    }
}

/// Layout box in document coordinates (independent of scroll position and
/// of any transform the orchestrator has written).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

/// One snapshot of the scroll state, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

/// The document surface the orchestrator drives. Reads take `&self`,
/// writes take `&mut self`; the frame loop never interleaves them.
pub trait Dom {
    type Node: Clone + PartialEq + Debug;

    /// The page root decorative page-level nodes are attached to.
    fn root(&self) -> Self::Node;
    /// All matches in document order.
    fn query_all(&self, selector: Selector) -> Vec<Self::Node>;
    fn find_id(&self, id: &str) -> Option<Self::Node>;
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Nearest ancestor (or the node itself) matching `selector`.
    fn closest(&self, node: &Self::Node, selector: Selector) -> Option<Self::Node>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn inline_style(&self, node: &Self::Node, property: &str) -> Option<String>;
    fn computed_position(&self, node: &Self::Node) -> String;
    fn bounds(&self, node: &Self::Node) -> Bounds;
    fn viewport(&self) -> Viewport;

    fn create_element(&mut self, tag: &str) -> Option<Self::Node>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    fn remove_style(&mut self, node: &Self::Node, property: &str);
    fn set_text(&mut self, node: &Self::Node, text: &str);
    fn prepend_child(&mut self, parent: &Self::Node, child: &Self::Node);
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
    fn remove(&mut self, node: &Self::Node);
}

/// A deferred mutation produced during the read phase of a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Write<N> {
    Style {
        node: N,
        property: &'static str,
        value: String,
    },
    Text {
        node: N,
        text: String,
    },
}

impl<N: Clone + PartialEq + Debug> Write<N> {
    pub fn apply<D: Dom<Node = N>>(self, dom: &mut D) {
        match self {
            Write::Style {
                node,
                property,
                value,
            } => dom.set_style(&node, property, &value),
            Write::Text { node, text } => dom.set_text(&node, &text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_css() {
        assert_eq!(Selector::Class("gsap-exp-card").css(), ".gsap-exp-card");
        assert_eq!(Selector::Id("home").css(), "#home");
        assert_eq!(Selector::Attr("data-gsap-heading").css(), "[data-gsap-heading]");
        assert_eq!(Selector::Tag("footer").css(), "footer");
    }
}
