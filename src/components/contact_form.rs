use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::RelayConfig;
use crate::contact::{ContactAction, ContactState, Field, FAILURE_ALERT};
use crate::dom;
use crate::relay;

const POPUP_ID: &str = "popup";

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(ContactState::default);

    let on_input = |field: Field| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(ContactAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if state.sending {
                return;
            }
            let fields = state.fields.clone();
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(ContactAction::Submitted);
            spawn_local(async move {
                log::info!("sending contact form to relay");
                match relay::send_form(&RelayConfig::default(), &fields).await {
                    Ok(()) => {
                        log::info!("contact form delivered");
                        dispatcher.dispatch(ContactAction::Delivered);
                    }
                    Err(e) => {
                        gloo_console::error!("EmailJS Error:", e.to_string());
                        dom::alert(FAILURE_ALERT);
                        dispatcher.dispatch(ContactAction::Failed);
                    }
                }
            });
        })
    };

    let close_popup = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ContactAction::ClosePopup))
    };

    // Only clicks on the dimmed backdrop itself close the popup.
    let on_overlay_click = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e
                .target_dyn_into::<Element>()
                .map_or(false, |el| el.id() == POPUP_ID);
            if on_backdrop {
                dispatcher.dispatch(ContactAction::ClosePopup);
            }
        })
    };

    let popup_style = if state.popup_open { "display: flex;" } else { "display: none;" };

    html! {
        <>
            <form class="contact-form" {onsubmit}>
                <input
                    type="text"
                    name="name"
                    placeholder="Your name"
                    required=true
                    value={state.fields.name.clone()}
                    oninput={on_input(Field::Name)}
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your email"
                    required=true
                    value={state.fields.email.clone()}
                    oninput={on_input(Field::Email)}
                />
                <textarea
                    name="message"
                    placeholder="Your message"
                    required=true
                    value={state.fields.message.clone()}
                    oninput={on_input(Field::Message)}
                />
                <button type="submit" class="send-button" disabled={state.sending}>
                    { if state.sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
            <div id={POPUP_ID} class="popup" style={popup_style} onclick={on_overlay_click}>
                <div class="popup-content">
                    <h3>{"Thank you!"}</h3>
                    <p>{"Your message has been sent. We'll get back to you soon."}</p>
                    <button id="closePopup" class="popup-close" onclick={close_popup}>{"Close"}</button>
                </div>
            </div>
        </>
    }
}
