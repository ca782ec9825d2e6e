use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

// Height allowance for the fixed navbar.
const NAV_OFFSET_PX: f64 = 100.0;

/// Smoothly scrolls the window so the section with `section_id` lands just
/// below the fixed navbar. Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let target = window
        .document()
        .and_then(|document| document.get_element_by_id(section_id));
    let target = match target {
        Some(target) => target,
        None => return,
    };
    if let Some(element) = target.dyn_ref::<HtmlElement>() {
        let options = ScrollToOptions::new();
        options.set_top(f64::from(element.offset_top()) - NAV_OFFSET_PX);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
