use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::components::search::SearchBox;
use crate::utils::scroll::scroll_to_section;

const SECTIONS: &[(&str, &str)] = &[
    ("Features", "features"),
    ("Templates", "templates"),
    ("Testimonials", "testimonials"),
    ("FAQ", "faq"),
    ("Contact", "contact"),
];

fn nav_links() -> Html {
    html! {
        { for SECTIONS.iter().map(|&(label, section_id)| {
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(section_id);
            });
            html! {
                <a href={format!("#{}", section_id)} class="nav-link" {onclick}>{label}</a>
            }
        })}
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state_eq(|| false);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Close the mobile menu when a click lands outside both the menu and its
    // toggle button.
    {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let on_document_click = Closure::wrap(Box::new(move |event: MouseEvent| {
                    let target = match event
                        .target()
                        .and_then(|target| target.dyn_into::<Node>().ok())
                    {
                        Some(target) => target,
                        None => return,
                    };
                    let contains = |node_ref: &NodeRef| {
                        node_ref
                            .cast::<Node>()
                            .map(|node| node.contains(Some(&target)))
                            .unwrap_or(false)
                    };
                    if !contains(&menu_ref) && !contains(&toggle_ref) {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let _ = document.add_event_listener_with_callback(
                        "click",
                        on_document_click.as_ref().unchecked_ref(),
                    );
                }
                on_document_click.forget();

                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="#" class="logo">{"SiteCraft"}</a>
                <div class="nav-links">
                    { nav_links() }
                </div>
                <SearchBox />
                <button
                    ref={toggle_ref.clone()}
                    class={classes!("mobile-menu-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation menu"
                    onclick={on_toggle}
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
            <div
                ref={menu_ref.clone()}
                class={classes!("mobile-menu", (*menu_open).then_some("active"))}
            >
                { nav_links() }
            </div>
        </nav>
    }
}
