use web_sys::MouseEvent;
use yew::prelude::*;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need to know how to code?",
        answer: "No. Every SiteCraft template is fully visual: pick a template, swap in \
                 your text and images, and publish. The underlying code stays out of sight \
                 unless you go looking for it.",
    },
    FaqEntry {
        question: "Can I use my own domain name?",
        answer: "Yes. Connect a domain you already own in a couple of clicks, or register \
                 a new one during setup. Free plans publish under a sitecraft.app subdomain.",
    },
    FaqEntry {
        question: "Will my site work on phones and tablets?",
        answer: "Every template is responsive out of the box. The editor previews phone, \
                 tablet and desktop layouts so you can check each one before publishing.",
    },
    FaqEntry {
        question: "Can I switch templates after launching?",
        answer: "You can change templates at any time. Your content carries over; only the \
                 layout and styling change.",
    },
    FaqEntry {
        question: "What happens if I cancel my subscription?",
        answer: "Your site stays online until the end of the billing period, and you can \
                 export your content at any time. We never delete anything without warning.",
    },
];

/// Accordion transition: activating an item expands it and collapses every
/// other one; re-activating the open item collapses it. At most one item is
/// expanded at a time.
pub fn next_open(open: Option<usize>, activated: usize) -> Option<usize> {
    if open == Some(activated) {
        None
    } else {
        Some(activated)
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| {
                    let is_open = *open == Some(index);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| {
                            open.set(next_open(*open, index));
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then_some("active"))}>
                            <button class="faq-question" {onclick}>
                                <span class="question-text">{entry.question}</span>
                                <span class="faq-toggle">{ if is_open { "\u{2212}" } else { "+" } }</span>
                            </button>
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
