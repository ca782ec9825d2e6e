use yew::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::notification::Notifier;
use crate::pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    // One notifier for the whole page; constructing it registers the toast
    // styles on the document.
    let notifier = use_state(Notifier::new);

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            <Navbar />
            <Home />
        </ContextProvider<Notifier>>
    }
}
