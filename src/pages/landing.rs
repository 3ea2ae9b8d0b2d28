use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::{use_nav_highlighter, NavBar};
use crate::dom::{self, WindowListener};
use crate::nav::{AnchorId, NavAction, NavEntry};
use crate::reveal;

fn nav_entries() -> Vec<NavEntry> {
    [("#home", "Home"), ("#about", "About"), ("#services", "Services"), ("#contact", "Contact")]
        .into_iter()
        .filter_map(|(href, label)| Some(NavEntry { id: AnchorId::from_href(href)?, label }))
        .collect()
}

#[hook]
fn use_fade_reveal() {
    use_effect_with_deps(
        move |_| {
            let on_scroll = WindowListener::new("scroll", || {
                let Some(window) = dom::window() else { return };
                let Some(document) = window.document() else { return };
                let Some(viewport) = dom::viewport(&window) else { return };
                reveal::reveal_in_view(&document, viewport.inner_height);
            });
            let on_load = dom::on_load(|| {
                if let Some(document) = dom::document() {
                    reveal::reveal_all(&document);
                }
            });
            move || {
                drop(on_scroll);
                drop(on_load);
            }
        },
        (),
    );
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let entries = use_memo(|_| nav_entries(), ());
    let nav = use_nav_highlighter();
    use_fade_reveal();

    let on_select = {
        let dispatcher = nav.dispatcher();
        Callback::from(move |id: AnchorId| dispatcher.dispatch(NavAction::Select(id)))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        padding: 1rem 0;
                        background: rgba(26, 26, 26, 0.95);
                        z-index: 10;
                    }
                    .nav-button {
                        background: none;
                        border: none;
                        color: #ddd;
                        font-size: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .nav-button.active {
                        background: #1E90FF;
                        color: #fff;
                    }
                    section {
                        min-height: 100vh;
                        padding: 6rem 2rem 2rem;
                    }
                    .fade-up {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .fade-up.show {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 480px;
                    }
                    .popup {
                        position: fixed;
                        inset: 0;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.6);
                        z-index: 20;
                    }
                    .popup-content {
                        background: #1a1a1a;
                        color: #fff;
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: center;
                    }
                "#}
            </style>
            <NavBar entries={(*entries).clone()} active={nav.active().cloned()} {on_select} />

            <section id="home" class="hero">
                <h1 class="fade-up">{"Design that moves people"}</h1>
                <p class="fade-up">{"We build fast, accessible websites for small businesses."}</p>
            </section>

            <section id="about">
                <h2 class="fade-up">{"About us"}</h2>
                <p class="fade-up">
                    {"A small studio of designers and engineers who care about the details."}
                </p>
            </section>

            <section id="services">
                <h2 class="fade-up">{"Services"}</h2>
                <ul class="fade-up">
                    <li>{"Web design"}</li>
                    <li>{"Front-end development"}</li>
                    <li>{"Hosting and maintenance"}</li>
                </ul>
            </section>

            <section id="contact">
                <h2 class="fade-up">{"Get in touch"}</h2>
                <ContactForm />
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_targets_a_distinct_section() {
        let entries = nav_entries();
        let hrefs: Vec<String> = entries.iter().map(|e| e.id.href()).collect();
        assert_eq!(hrefs, vec!["#home", "#about", "#services", "#contact"]);
    }
}
