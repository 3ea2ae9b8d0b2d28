//! Staggered fade-in for `.fade-up` elements.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom;

pub const REVEAL_SELECTOR: &str = ".fade-up";
pub const SHOWN_CLASS: &str = "show";

/// How far above the viewport bottom an element's top must be to count as in view.
pub const VIEW_OFFSET: f64 = 100.0;
pub const LOAD_STEP_MS: u32 = 100;
pub const SCROLL_STEP_MS: u32 = 150;

pub fn in_view(top: f64, inner_height: f64) -> bool {
    top <= inner_height - VIEW_OFFSET
}

/// Delay for the element at `index` (document order) given a cascade step.
pub fn cascade_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Reveals every element on page load, independent of position.
pub fn reveal_all(document: &Document) {
    for (index, element) in dom::query_all(document, REVEAL_SELECTOR).into_iter().enumerate() {
        schedule_show(element, cascade_delay(index, LOAD_STEP_MS));
    }
}

/// Reveals the elements that have scrolled into view.
pub fn reveal_in_view(document: &Document, inner_height: f64) {
    for (index, element) in dom::query_all(document, REVEAL_SELECTOR).into_iter().enumerate() {
        let top = element.get_bounding_client_rect().top();
        if in_view(top, inner_height) {
            schedule_show(element, cascade_delay(index, SCROLL_STEP_MS));
        }
    }
}

// Timers are never cancelled; adding the class twice is harmless.
fn schedule_show(element: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let _ = element.class_list().add_1(SHOWN_CLASS);
    })
    .forget();
}
