//! Thin lookups over the live document. Anything missing comes back as
//! `None` or an empty list.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::nav::{AnchorId, SectionBox, Viewport};

pub const SECTION_SELECTOR: &str = "section[id]";

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn viewport(window: &Window) -> Option<Viewport> {
    let inner_height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    Some(Viewport { inner_height, scroll_y })
}

/// Current boxes of every `section[id]`, in document order.
pub fn section_boxes(document: &Document) -> Vec<SectionBox> {
    query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|element| {
            let id = AnchorId::new(element.id())?;
            let rect = element.get_bounding_client_rect();
            Some(SectionBox { id, top: rect.top(), bottom: rect.bottom() })
        })
        .collect()
}

pub fn scroll_to_section(id: &AnchorId) {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id.as_str())) else {
        log::debug!("no section for {}, skipping scroll", id.href());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// A `window` event listener that is removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn new(event: &'static str, f: impl Fn() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(f);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        log::debug!("listening for {}", event);
        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Runs `f` on page load, or right away when the document has already loaded.
pub fn on_load(f: impl Fn() + 'static) -> Option<WindowListener> {
    let loaded = document().map_or(false, |d| d.ready_state() == "complete");
    if loaded {
        f();
        None
    } else {
        WindowListener::new("load", f)
    }
}
