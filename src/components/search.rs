use gloo_console::log;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::components::notification::{Notifier, Severity};

/// Resolves a submitted search query into a toast. Real search is not wired
/// up yet; the query is surfaced verbatim so the flow is visible end to end.
pub fn perform_search(notifier: &Notifier, query: &str) {
    if query.is_empty() {
        notifier.notify("Please enter a search term.", Severity::Error);
        return;
    }
    notifier.notify(&format!("Searching for: {}", query), Severity::Info);
}

// Threshold counts UTF-16 units, matching the `query.length > 2` check the
// page originally ran in the browser.
fn wants_suggestions(query: &str) -> bool {
    query.encode_utf16().count() > 2
}

#[function_component(SearchBox)]
pub fn search_box() -> Html {
    let query = use_state(String::new);
    let notifier = use_context::<Notifier>().expect("notifier context missing");

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            // Suggestion hook: diagnostics only, no lookup behind it.
            if wants_suggestions(value.trim()) {
                log!("Searching for:", value.trim().to_string());
            }
            query.set(value);
        })
    };

    let onkeypress = {
        let query = query.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                perform_search(&notifier, (*query).trim());
            }
        })
    };

    let onclick = {
        let query = query.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            perform_search(&notifier, (*query).trim());
        })
    };

    html! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder="Search templates..."
                value={(*query).clone()}
                {oninput}
                {onkeypress}
            />
            <button class="search-btn" {onclick}>{"Search"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_threshold_needs_more_than_two_units() {
        assert!(!wants_suggestions(""));
        assert!(!wants_suggestions("ab"));
        assert!(wants_suggestions("abc"));
    }

    #[test]
    fn suggestion_threshold_counts_utf16_units_not_bytes() {
        // Two accented characters are four UTF-8 bytes but two UTF-16 units.
        assert!(!wants_suggestions("éé"));
        assert!(wants_suggestions("ééé"));
        // An astral-plane character alone is two UTF-16 units.
        assert!(wants_suggestions("🎨é"));
    }
}
