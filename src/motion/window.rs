//! Activation windows: where on the page an effect starts and finishes.
//!
//! An [`Anchor`] reads like a scroll-trigger position: "the element's top
//! edge reaches 80% of the viewport height". Anchors are fractions of the
//! viewport, never pixels, so a window means the same thing at any
//! resolution.

use super::dom::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Offset from the viewport top, as a fraction of viewport height.
    pub viewport: f64,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport: f64) -> Self {
        Self { edge, viewport }
    }

    /// Scroll offset at which the anchor condition holds exactly.
    pub fn scroll_position(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        let edge = match self.edge {
            Edge::Top => bounds.top,
            Edge::Center => bounds.top + bounds.height / 2.0,
            Edge::Bottom => bounds.top + bounds.height,
        };
        edge - self.viewport * viewport_height
    }
}

/// "top top"
pub const TOP_TOP: Anchor = Anchor::new(Edge::Top, 0.0);
/// "top bottom": the element starts entering from below.
pub const TOP_BOTTOM: Anchor = Anchor::new(Edge::Top, 1.0);
/// "bottom top": the element has fully left above.
pub const BOTTOM_TOP: Anchor = Anchor::new(Edge::Bottom, 0.0);
/// "bottom bottom"
pub const BOTTOM_BOTTOM: Anchor = Anchor::new(Edge::Bottom, 1.0);

/// Reveal threshold: the element's top edge at `percent`% from the viewport top.
pub const fn top_at(percent: f64) -> Anchor {
    Anchor::new(Edge::Top, percent / 100.0)
}

pub const fn bottom_at(percent: f64) -> Anchor {
    Anchor::new(Edge::Bottom, percent / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub start: Anchor,
    pub end: Anchor,
}

impl ScrollWindow {
    pub const fn new(start: Anchor, end: Anchor) -> Self {
        Self { start, end }
    }

    pub fn resolve(&self, bounds: Bounds, viewport_height: f64) -> Span {
        Span {
            start: self.start.scroll_position(bounds, viewport_height),
            end: self.end.scroll_position(bounds, viewport_height),
        }
    }
}

/// A window resolved against cached geometry, in scroll pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn at(position: f64) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Progress through the window, clamped to `[0, 1]`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.end <= self.start {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn reached(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start
    }
}
