#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use sitecraft_frontend::components::newsletter::NewsletterForm;
use sitecraft_frontend::components::notification::{NotificationManager, Notifier, Severity};
use sitecraft_frontend::components::search::perform_search;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn toast_count(document: &Document) -> u32 {
    document.query_selector_all(".notification").unwrap().length()
}

fn toast_message(document: &Document) -> String {
    document
        .query_selector(".notification-message")
        .unwrap()
        .expect("no notification on the page")
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn second_notify_replaces_first() {
    let document = document();
    let mut manager = NotificationManager::new(document.clone());

    manager.notify("first", Severity::Info);
    manager.notify("second", Severity::Success);

    assert_eq!(toast_count(&document), 1);
    let toast = document.query_selector(".notification").unwrap().unwrap();
    assert!(toast.class_name().contains("notification-success"));
    assert_eq!(toast_message(&document), "second");

    manager.dismiss();
    assert_eq!(toast_count(&document), 0);
}

#[wasm_bindgen_test]
fn dismiss_is_idempotent() {
    let document = document();
    let mut manager = NotificationManager::new(document.clone());

    manager.dismiss();
    manager.notify("once", Severity::Info);
    manager.dismiss();
    manager.dismiss();

    assert_eq!(toast_count(&document), 0);
}

#[wasm_bindgen_test]
async fn auto_dismiss_removes_toast() {
    let document = document();
    let mut manager = NotificationManager::with_dismiss_after(document.clone(), 50);

    manager.notify("going away", Severity::Success);
    assert_eq!(toast_count(&document), 1);

    TimeoutFuture::new(250).await;
    assert_eq!(toast_count(&document), 0);

    manager.dismiss();
}

#[wasm_bindgen_test]
async fn replacement_toast_outlives_previous_deadline() {
    let document = document();
    let mut manager = NotificationManager::with_dismiss_after(document.clone(), 300);

    manager.notify("first", Severity::Info);
    TimeoutFuture::new(100).await;
    manager.notify("second", Severity::Info);

    // Past the first toast's original deadline the replacement is still up.
    TimeoutFuture::new(250).await;
    assert_eq!(toast_count(&document), 1);
    assert_eq!(toast_message(&document), "second");

    TimeoutFuture::new(300).await;
    assert_eq!(toast_count(&document), 0);
}

#[wasm_bindgen_test]
fn close_click_removes_toast_immediately() {
    let document = document();
    let mut manager = NotificationManager::new(document.clone());

    manager.notify("dismiss me", Severity::Error);
    let close = document
        .query_selector(".notification-close")
        .unwrap()
        .unwrap();
    close.dyn_ref::<HtmlElement>().unwrap().click();

    assert_eq!(toast_count(&document), 0);

    // A later dismiss against the detached element stays a no-op.
    manager.dismiss();
    assert_eq!(toast_count(&document), 0);
}

#[wasm_bindgen_test]
fn empty_search_raises_error_toast() {
    let document = document();
    let notifier = Notifier::with_manager(NotificationManager::new(document.clone()));

    perform_search(&notifier, "");

    let toast = document.query_selector(".notification").unwrap().unwrap();
    assert!(toast.class_name().contains("notification-error"));
    assert_eq!(toast_message(&document), "Please enter a search term.");

    notifier.dismiss();
}

#[wasm_bindgen_test]
fn search_query_is_echoed_in_info_toast() {
    let document = document();
    let notifier = Notifier::with_manager(NotificationManager::new(document.clone()));

    perform_search(&notifier, "laptop");

    let toast = document.query_selector(".notification").unwrap().unwrap();
    assert!(toast.class_name().contains("notification-info"));
    assert!(toast_message(&document).contains("laptop"));

    notifier.dismiss();
}

#[derive(Properties, PartialEq)]
struct NewsletterHarnessProps {
    notifier: Notifier,
}

#[function_component(NewsletterHarness)]
fn newsletter_harness(props: &NewsletterHarnessProps) -> Html {
    html! {
        <ContextProvider<Notifier> context={props.notifier.clone()}>
            <NewsletterForm />
        </ContextProvider<Notifier>>
    }
}

struct MountedNewsletter {
    mount: Element,
    notifier: Notifier,
    handle: yew::AppHandle<NewsletterHarness>,
}

impl MountedNewsletter {
    async fn render(document: &Document) -> Self {
        let mount = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&mount).unwrap();
        let notifier = Notifier::with_manager(NotificationManager::new(document.clone()));
        let handle = yew::Renderer::<NewsletterHarness>::with_root_and_props(
            mount.clone(),
            NewsletterHarnessProps {
                notifier: notifier.clone(),
            },
        )
        .render();
        TimeoutFuture::new(50).await;
        Self {
            mount,
            notifier,
            handle,
        }
    }

    fn input(&self) -> HtmlInputElement {
        self.mount
            .query_selector(".newsletter-input")
            .unwrap()
            .unwrap()
            .unchecked_into()
    }

    async fn type_email(&self, email: &str) {
        let input = self.input();
        input.set_value(email);
        input.dispatch_event(&bubbling_event("input")).unwrap();
        TimeoutFuture::new(50).await;
    }

    async fn submit(&self) {
        let form = self.mount.query_selector(".newsletter-form").unwrap().unwrap();
        form.dispatch_event(&bubbling_event("submit")).unwrap();
        TimeoutFuture::new(50).await;
    }

    fn unmount(self) {
        self.notifier.dismiss();
        self.handle.destroy();
        self.mount.remove();
    }
}

fn bubbling_event(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

#[wasm_bindgen_test]
async fn newsletter_rejects_invalid_email_and_keeps_input() {
    let document = document();
    let form = MountedNewsletter::render(&document).await;

    form.type_email("not-an-email").await;
    form.submit().await;

    let toast = document.query_selector(".notification").unwrap().unwrap();
    assert!(toast.class_name().contains("notification-error"));
    assert_eq!(toast_message(&document), "Please enter a valid email address.");
    assert_eq!(form.input().value(), "not-an-email");

    form.unmount();
}

#[wasm_bindgen_test]
async fn newsletter_clears_field_after_successful_subscribe() {
    let document = document();
    let form = MountedNewsletter::render(&document).await;

    form.type_email("user@example.com").await;
    form.submit().await;

    // No toast during the simulated round trip; the button shows progress.
    assert_eq!(toast_count(&document), 0);
    let button = form
        .mount
        .query_selector(".newsletter-form button")
        .unwrap()
        .unwrap();
    assert_eq!(button.text_content().unwrap_or_default(), "Subscribing...");
    assert!(button.has_attribute("disabled"));

    TimeoutFuture::new(2_300).await;

    let toast = document.query_selector(".notification").unwrap().unwrap();
    assert!(toast.class_name().contains("notification-success"));
    assert_eq!(
        toast_message(&document),
        "Successfully subscribed to our newsletter!"
    );
    assert_eq!(form.input().value(), "");

    form.unmount();
}

#[wasm_bindgen_test]
fn toast_styles_register_once() {
    let document = document();
    let _first = NotificationManager::new(document.clone());
    let _second = NotificationManager::new(document.clone());

    assert_eq!(
        document
            .query_selector_all("#notification-styles")
            .unwrap()
            .length(),
        1
    );
}
