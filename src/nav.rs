use std::rc::Rc;
use yew::prelude::*;

/// Point used to decide which section is "current", as a fraction of the
/// viewport height measured from the top.
pub const REFERENCE_FRACTION: f64 = 0.25;

/// Delay before the extra recomputation that corrects for late layout shifts.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Identifier shared by a page section and the nav entry pointing at it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(String);

impl AnchorId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Parses an anchor href such as `#about`.
    pub fn from_href(href: &str) -> Option<Self> {
        Self::new(href.strip_prefix('#').unwrap_or(href))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub id: AnchorId,
    pub label: &'static str,
}

/// Viewport-relative box of a `section[id]`, read fresh on every event.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: AnchorId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBox {
    fn contains(&self, point: f64) -> bool {
        self.top <= point && self.bottom > point
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub inner_height: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub fn reference_point(&self) -> f64 {
        self.inner_height * REFERENCE_FRACTION
    }
}

/// Picks the section under the reference point. Sections are expected in
/// document order; the first containing one wins.
pub fn locate_active(sections: &[SectionBox], viewport: Viewport) -> Option<AnchorId> {
    let point = viewport.reference_point();
    if let Some(section) = sections.iter().find(|s| s.contains(point)) {
        return Some(section.id.clone());
    }
    if viewport.scroll_y == 0.0 {
        return sections.first().map(|s| s.id.clone());
    }
    None
}

pub enum NavAction {
    /// The user clicked an entry, either on the anchor or on its button.
    Select(AnchorId),
    /// Result of a scroll-driven recomputation; `None` is the gap state.
    Scrolled(Option<AnchorId>),
}

/// Owner of the active marker. Every mutation goes through `reduce`, so at
/// most one entry is active at any time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    active: Option<AnchorId>,
}

impl NavState {
    pub fn active(&self) -> Option<&AnchorId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &AnchorId) -> bool {
        self.active.as_ref() == Some(id)
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Select(id) => Some(id),
            NavAction::Scrolled(id) => id,
        };
        if next == self.active {
            return self;
        }
        Rc::new(NavState { active: next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(s: &str) -> AnchorId {
        AnchorId::new(s).unwrap()
    }

    fn section(name: &str, top: f64, bottom: f64) -> SectionBox {
        SectionBox { id: id(name), top, bottom }
    }

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport { inner_height: 800.0, scroll_y }
    }

    fn page(offset: f64) -> Vec<SectionBox> {
        vec![
            section("home", -offset, 700.0 - offset),
            section("about", 700.0 - offset, 1500.0 - offset),
            section("contact", 1500.0 - offset, 2200.0 - offset),
        ]
    }

    #[test]
    fn href_parsing() {
        assert_eq!(AnchorId::from_href("#about"), Some(id("about")));
        assert_eq!(AnchorId::from_href("about"), Some(id("about")));
        assert_eq!(AnchorId::from_href("#"), None);
        assert_eq!(id("contact").href(), "#contact");
    }

    #[test]
    fn section_under_reference_point_is_active() {
        // reference point is 200px down
        assert_eq!(locate_active(&page(0.0), viewport(0.0)), Some(id("home")));
        assert_eq!(locate_active(&page(600.0), viewport(600.0)), Some(id("about")));
        assert_eq!(locate_active(&page(1400.0), viewport(1400.0)), Some(id("contact")));
    }

    #[test]
    fn bottom_edge_is_exclusive() {
        let sections = vec![section("home", -500.0, 200.0), section("about", 200.0, 900.0)];
        assert_eq!(locate_active(&sections, viewport(500.0)), Some(id("about")));
    }

    #[test]
    fn overlapping_sections_resolve_in_document_order() {
        let sections = vec![section("first", 0.0, 400.0), section("second", 100.0, 500.0)];
        assert_eq!(locate_active(&sections, viewport(50.0)), Some(id("first")));
    }

    #[test]
    fn top_of_page_falls_back_to_first_section() {
        let sections = vec![section("home", 300.0, 900.0), section("about", 900.0, 1600.0)];
        assert_eq!(locate_active(&sections, viewport(0.0)), Some(id("home")));
    }

    #[test]
    fn gap_away_from_top_clears_selection() {
        let sections = vec![section("home", -900.0, -100.0), section("about", 300.0, 900.0)];
        assert_eq!(locate_active(&sections, viewport(900.0)), None);
        assert_eq!(locate_active(&[], viewport(0.0)), None);
    }

    #[test]
    fn click_overrides_scroll_derived_state() {
        let state = Rc::new(NavState::default());
        let state = state.reduce(NavAction::Scrolled(locate_active(&page(0.0), viewport(0.0))));
        assert!(state.is_active(&id("home")));

        let state = state.reduce(NavAction::Select(id("about")));
        assert!(state.is_active(&id("about")));
        assert!(!state.is_active(&id("home")));
        assert!(!state.is_active(&id("contact")));
    }

    #[test]
    fn gap_recompute_clears_previous_click() {
        let state = Rc::new(NavState::default()).reduce(NavAction::Select(id("about")));
        let state = state.reduce(NavAction::Scrolled(None));
        assert_eq!(state.active(), None);
    }

    #[test]
    fn unchanged_state_keeps_the_same_allocation() {
        let state = Rc::new(NavState::default()).reduce(NavAction::Select(id("home")));
        let again = state.clone().reduce(NavAction::Scrolled(Some(id("home"))));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[derive(Clone, Debug)]
    enum UiEvent {
        Click(usize),
        Scroll(f64),
    }

    fn event_strategy() -> impl Strategy<Value = UiEvent> {
        prop_oneof![
            (0usize..3).prop_map(UiEvent::Click),
            (0.0f64..2500.0).prop_map(UiEvent::Scroll),
        ]
    }

    proptest! {
        #[test]
        fn at_most_one_entry_is_active(events in prop::collection::vec(event_strategy(), 0..40)) {
            let ids = [id("home"), id("about"), id("contact")];
            let mut state = Rc::new(NavState::default());
            for event in events {
                let action = match event {
                    UiEvent::Click(i) => NavAction::Select(ids[i].clone()),
                    UiEvent::Scroll(y) => NavAction::Scrolled(locate_active(&page(y), viewport(y))),
                };
                state = state.reduce(action);
                let marked = ids.iter().filter(|i| state.is_active(i)).count();
                prop_assert!(marked <= 1);
            }
        }

        #[test]
        fn recompute_is_idempotent(scroll in 0.0f64..2500.0, height in 200.0f64..1200.0) {
            let vp = Viewport { inner_height: height, scroll_y: scroll };
            let sections = page(scroll);
            let first = Rc::new(NavState::default()).reduce(NavAction::Scrolled(locate_active(&sections, vp)));
            let second = first.clone().reduce(NavAction::Scrolled(locate_active(&sections, vp)));
            prop_assert_eq!(first.active(), second.active());
        }
    }
}
