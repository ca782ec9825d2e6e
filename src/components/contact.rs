use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{Notifier, Severity};

// Stand-in for the contact API round trip; submissions always succeed.
const SEND_DELAY_MS: u32 = 2_000;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let notifier = use_context::<Notifier>().expect("notifier context missing");

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let sending = sending.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            sending.set(true);
            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let sending = sending.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                TimeoutFuture::new(SEND_DELAY_MS).await;
                notifier.notify(
                    "Thank you! Your message has been sent successfully.",
                    Severity::Success,
                );
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
                sending.set(false);
            });
        })
    };

    html! {
        <form class="form contact-form-fields" {onsubmit}>
            <input
                type="text"
                name="name"
                placeholder="Your name"
                value={(*name).clone()}
                oninput={on_name_input}
            />
            <input
                type="email"
                name="email"
                placeholder="Your email"
                value={(*email).clone()}
                oninput={on_email_input}
            />
            <textarea
                name="message"
                placeholder="How can we help?"
                rows="5"
                value={(*message).clone()}
                oninput={on_message_input}
            />
            <button type="submit" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
