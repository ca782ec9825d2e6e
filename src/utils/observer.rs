use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const REVEAL_SELECTOR: &str = ".feature-card, .template-card, .testimonial-card, .device-card";

/// Tags every card matching the reveal selector with `animate-in` once it
/// first scrolls into view. Call once after the page has rendered.
pub fn init_scroll_reveal(document: &Document) -> Result<(), JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("animate-in");
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    )?;
    on_intersect.forget();

    observe_all(document, &observer, REVEAL_SELECTOR)
}

/// Swaps `data-src` into `src` on each `img.lazy` the first time it scrolls
/// into view, then stops watching it.
pub fn init_lazy_loading(document: &Document) -> Result<(), JsValue> {
    let on_intersect = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Ok(image) = entry.target().dyn_into::<HtmlImageElement>() {
                        if let Some(src) = image.get_attribute("data-src") {
                            image.set_src(&src);
                        }
                        let _ = image.class_list().remove_1("lazy");
                        observer.unobserve(&image);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
    on_intersect.forget();

    observe_all(document, &observer, "img[data-src]")
}

fn observe_all(
    document: &Document,
    observer: &IntersectionObserver,
    selector: &str,
) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(selector)?;
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                observer.observe(&element);
            }
        }
    }
    Ok(())
}
