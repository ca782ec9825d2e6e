use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{Notifier, Severity};
use crate::utils::validate::is_valid_email;

// Stand-in for the subscription API round trip.
const SUBSCRIBE_DELAY_MS: u32 = 2_000;

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let submitting = use_state(|| false);
    let notifier = use_context::<Notifier>().expect("notifier context missing");

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submitting = submitting.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let address = (*email).trim().to_string();
            if !is_valid_email(&address) {
                // Invalid input stays in the field untouched.
                notifier.notify("Please enter a valid email address.", Severity::Error);
                return;
            }
            submitting.set(true);
            let email = email.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBSCRIBE_DELAY_MS).await;
                notifier.notify("Successfully subscribed to our newsletter!", Severity::Success);
                email.set(String::new());
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <input
                type="email"
                class="newsletter-input"
                placeholder="Enter your email"
                value={(*email).clone()}
                {oninput}
            />
            <button type="submit" disabled={*submitting}>
                { if *submitting { "Subscribing..." } else { "Subscribe" } }
            </button>
        </form>
    }
}
