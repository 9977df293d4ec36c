//! Browser bindings: [`WebDom`] puts the orchestrator on a real document,
//! [`ScrollDriver`] feeds it timers, scroll and resize events and
//! animation frames.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use leptos::{ev, prelude::*};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::capability::Platform;
use super::config::MotionConfig;
use super::dom::{Bounds, Dom, Selector, Viewport};
use super::lifecycle::{MountOutcome, Orchestrator, SettleTicket, Teardown};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document body")]
    NoDocument,
    #[error("failed to schedule callback: {0}")]
    Schedule(String),
}

fn schedule_error(err: JsValue) -> MotionError {
    MotionError::Schedule(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct WebDom {
    window: Window,
    document: Document,
    body: HtmlElement,
}

impl WebDom {
    pub fn new() -> Result<Self, MotionError> {
        let window = web_sys::window().ok_or(MotionError::NoWindow)?;
        let document = window.document().ok_or(MotionError::NoDocument)?;
        let body = document.body().ok_or(MotionError::NoDocument)?;
        Ok(Self {
            window,
            document,
            body,
        })
    }

    /// Milliseconds on the page clock.
    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map_or(0.0, |p| p.now())
    }

    fn media(&self, query: &str) -> bool {
        self.window
            .match_media(query)
            .ok()
            .flatten()
            .is_some_and(|m| m.matches())
    }

    fn inner_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default()
    }
}

impl Platform for WebDom {
    fn prefers_reduced_motion(&self) -> bool {
        self.media("(prefers-reduced-motion: reduce)")
    }

    fn coarse_pointer(&self) -> bool {
        self.media("(pointer: coarse)")
    }

    fn viewport_width(&self) -> f64 {
        self.inner_width()
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn root(&self) -> Element {
        self.body.clone().into()
    }

    fn query_all(&self, selector: Selector) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&selector.css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn find_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn closest(&self, node: &Element, selector: Selector) -> Option<Element> {
        node.closest(&selector.css()).ok().flatten()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn inline_style(&self, node: &Element, property: &str) -> Option<String> {
        node.dyn_ref::<HtmlElement>()?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn computed_position(&self, node: &Element) -> String {
        self.window
            .get_computed_style(node)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("position").ok())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "static".to_string())
    }

    /// Layout position from the offset chain, so transforms written by
    /// the orchestrator never feed back into its own geometry.
    fn bounds(&self, node: &Element) -> Bounds {
        let Some(el) = node.dyn_ref::<HtmlElement>() else {
            let rect = node.get_bounding_client_rect();
            let scroll_y = self.window.scroll_y().unwrap_or_default();
            return Bounds {
                top: rect.top() + scroll_y,
                height: rect.height(),
            };
        };
        let height = el.offset_height() as f64;
        let mut top = 0.0;
        let mut current = Some(el.clone());
        while let Some(el) = current {
            top += el.offset_top() as f64;
            current = el
                .offset_parent()
                .and_then(|p| p.dyn_into::<HtmlElement>().ok());
        }
        Bounds { top, height }
    }

    fn viewport(&self) -> Viewport {
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let document_height = self
            .document
            .document_element()
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(height);
        Viewport {
            scroll_y: self.window.scroll_y().unwrap_or_default(),
            width: self.inner_width(),
            height,
            document_height,
        }
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn remove_style(&mut self, node: &Element, property: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().remove_property(property);
        }
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn prepend_child(&mut self, parent: &Element, child: &Element) {
        let _ = parent.prepend_with_node_1(child);
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }
}

struct DriverState {
    orchestrator: RefCell<Orchestrator<WebDom>>,
    settle: Cell<Option<TimeoutHandle>>,
    refresh: Cell<Option<TimeoutHandle>>,
    frame: Cell<Option<AnimationFrameRequestHandle>>,
    listeners: RefCell<Vec<WindowListenerHandle>>,
}

impl DriverState {
    fn now(&self) -> f64 {
        self.orchestrator.borrow().dom().now()
    }

    fn on_settle(self: &Rc<Self>, ticket: SettleTicket) {
        self.settle.set(None);
        if !self.orchestrator.borrow_mut().settle(ticket) {
            return;
        }
        let scroll = Rc::downgrade(self);
        let resize = Rc::downgrade(self);
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(window_event_listener(ev::scroll, move |_| {
            if let Some(state) = scroll.upgrade() {
                state.request_frame();
            }
        }));
        listeners.push(window_event_listener(ev::resize, move |_| {
            if let Some(state) = resize.upgrade() {
                state.on_resize();
            }
        }));
        drop(listeners);
        self.request_frame();
    }

    fn request_frame(self: &Rc<Self>) {
        if self.frame.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(self);
        match request_animation_frame_with_handle(move || on_frame(weak)) {
            Ok(handle) => self.frame.set(Some(handle)),
            Err(err) => log::warn!("scroll animation frame not scheduled: {}", schedule_error(err)),
        }
    }

    fn on_resize(self: &Rc<Self>) {
        let now = self.now();
        let Some(delay) = self.orchestrator.borrow_mut().request_refresh(now) else {
            return;
        };
        if let Some(pending) = self.refresh.take() {
            pending.clear();
        }
        let weak = Rc::downgrade(self);
        let scheduled = set_timeout_with_handle(
            move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                state.refresh.set(None);
                let now = state.now();
                if state.orchestrator.borrow_mut().poll_refresh(now) {
                    state.request_frame();
                }
            },
            delay,
        );
        match scheduled {
            Ok(handle) => self.refresh.set(Some(handle)),
            Err(err) => log::warn!("resize refresh not scheduled: {}", schedule_error(err)),
        }
    }

    /// Stops every callback source, then tears the page decorations down.
    /// Safe to call more than once.
    fn shutdown(&self) -> Teardown {
        for listener in self.listeners.borrow_mut().drain(..) {
            listener.remove();
        }
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
        if let Some(refresh) = self.refresh.take() {
            refresh.clear();
        }
        if let Some(settle) = self.settle.take() {
            settle.clear();
        }
        self.orchestrator.borrow_mut().unmount()
    }
}

fn on_frame(weak: Weak<DriverState>) {
    let Some(state) = weak.upgrade() else {
        return;
    };
    state.frame.set(None);
    let now = state.now();
    let running = state.orchestrator.borrow_mut().frame(now);
    if running {
        state.request_frame();
    }
}

/// A mounted orchestrator bound to the browser. Dropping the driver
/// without calling [`ScrollDriver::unmount`] also tears it down.
pub struct ScrollDriver {
    state: Rc<DriverState>,
}

impl ScrollDriver {
    /// Snapshots capabilities and schedules the deferred setup.
    pub fn mount(config: MotionConfig) -> Result<Self, MotionError> {
        let dom = WebDom::new()?;
        let mut orchestrator = Orchestrator::new(dom, config);
        let outcome = orchestrator.mount();
        let state = Rc::new(DriverState {
            orchestrator: RefCell::new(orchestrator),
            settle: Cell::new(None),
            refresh: Cell::new(None),
            frame: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        if let MountOutcome::Settle { ticket, delay } = outcome {
            let weak = Rc::downgrade(&state);
            let handle = set_timeout_with_handle(
                move || {
                    if let Some(state) = weak.upgrade() {
                        state.on_settle(ticket);
                    }
                },
                delay,
            )
            .map_err(schedule_error)?;
            state.settle.set(Some(handle));
        }
        Ok(Self { state })
    }

    pub fn active_observers(&self) -> usize {
        self.state.orchestrator.borrow().active_observers()
    }

    pub fn unmount(self) -> Teardown {
        self.state.shutdown()
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        let _ = self.state.shutdown();
    }
}
