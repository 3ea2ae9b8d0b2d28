use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::dom::{self, WindowListener};
use crate::nav::{locate_active, AnchorId, NavAction, NavEntry, NavState, SETTLE_DELAY_MS};

fn recompute_active_from_scroll(dispatcher: &UseReducerDispatcher<NavState>) {
    let Some(window) = dom::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(viewport) = dom::viewport(&window) else { return };
    let sections = dom::section_boxes(&document);
    dispatcher.dispatch(NavAction::Scrolled(locate_active(&sections, viewport)));
}

/// Keeps the active nav entry in sync with the scroll position.
#[hook]
pub fn use_nav_highlighter() -> UseReducerHandle<NavState> {
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listen = |event: &'static str| {
                    let dispatcher = dispatcher.clone();
                    WindowListener::new(event, move || recompute_active_from_scroll(&dispatcher))
                };
                let listeners: Vec<WindowListener> = [
                    listen("scroll"),
                    listen("resize"),
                    dom::on_load({
                        let dispatcher = dispatcher.clone();
                        move || recompute_active_from_scroll(&dispatcher)
                    }),
                ]
                .into_iter()
                .flatten()
                .collect();

                // Late layout shifts (images) move the sections after load.
                let settle = Timeout::new(SETTLE_DELAY_MS, move || {
                    recompute_active_from_scroll(&dispatcher)
                });

                log::info!("nav highlighter attached ({} listeners)", listeners.len());
                move || {
                    drop(settle);
                    drop(listeners);
                }
            },
            (),
        );
    }

    state
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub entries: Vec<NavEntry>,
    pub active: Option<AnchorId>,
    pub on_select: Callback<AnchorId>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let NavBarProps { entries, active, on_select } = props;

    html! {
        <nav class="nav">
            { for entries.iter().map(|entry| {
                let on_nav_click = {
                    let id = entry.id.clone();
                    let on_select = on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        dom::scroll_to_section(&id);
                        on_select.emit(id.clone());
                    })
                };
                // Direct clicks on the inner button only mark it.
                let on_direct_button_click = {
                    let id = entry.id.clone();
                    let on_select = on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                };
                let is_active = active.as_ref() == Some(&entry.id);
                html! {
                    <a href={entry.id.href()} onclick={on_nav_click}>
                        <button class={classes!("nav-button", is_active.then(|| "active"))} onclick={on_direct_button_click}>
                            {entry.label}
                        </button>
                    </a>
                }
            }) }
        </nav>
    }
}
