use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::faq::FaqSection;
use crate::components::newsletter::NewsletterForm;
use crate::utils::observer;
use crate::utils::scroll::scroll_to_section;

struct Feature {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "🎨",
        title: "Designer-made templates",
        blurb: "Start from layouts built by working designers, not filler pages. Every \
                template ships with real section structure you can keep or rearrange.",
    },
    Feature {
        icon: "⚡",
        title: "Instant publishing",
        blurb: "One click takes your edits live on our global CDN. No build queues, no \
                waiting around.",
    },
    Feature {
        icon: "📱",
        title: "Responsive by default",
        blurb: "Phone, tablet and desktop layouts come tuned out of the box, with live \
                previews for each.",
    },
    Feature {
        icon: "🔍",
        title: "SEO essentials built in",
        blurb: "Clean markup, fast pages and editable metadata so search engines can \
                actually find you.",
    },
];

const TEMPLATES: &[(&str, &str, &str)] = &[
    ("Atelier", "Portfolio for photographers and studios", "/assets/templates/atelier.jpg"),
    ("Storefront", "Product landing page with pricing sections", "/assets/templates/storefront.jpg"),
    ("Bistro", "Restaurant site with menu and booking blocks", "/assets/templates/bistro.jpg"),
];

const DEVICES: &[(&str, &str)] = &[
    ("💻", "Desktop"),
    ("📱", "Mobile"),
    ("🖥️", "Tablet & beyond"),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "SiteCraft took our bakery online in an afternoon. I still haven't written a \
         line of code and I don't plan to.",
        "Maria Keller",
        "Owner, Keller & Crumb",
    ),
    (
        "We replaced an agency retainer with a SiteCraft subscription and our site has \
         never looked better.",
        "Dev Patel",
        "Founder, Northloop Coffee",
    ),
    (
        "The templates are good enough that my clients assume I designed them from \
         scratch. I just customize and ship.",
        "Jonas Lindqvist",
        "Freelance marketer",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top on initial mount, then arm the scroll-reveal and
    // lazy-image observers now that the cards exist in the DOM.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        if let Err(err) = observer::init_scroll_reveal(&document) {
                            log::warn!("scroll reveal unavailable: {:?}", err);
                        }
                        if let Err(err) = observer::init_lazy_loading(&document) {
                            log::warn!("lazy image loading unavailable: {:?}", err);
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_browse_templates = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("templates");
    });

    html! {
        <main class="home-page">
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Build a website you're proud of, in an afternoon"}</h1>
                    <p class="hero-subtitle">
                        {"SiteCraft pairs designer-made templates with an editor anyone can use. \
                          Pick a template, make it yours, publish."}
                    </p>
                    <button class="hero-cta" onclick={on_browse_templates}>
                        {"Browse Templates"}
                    </button>
                </div>
            </header>

            <section id="features" class="features-section">
                <h2>{"Everything a small site needs"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <span class="feature-icon">{feature.icon}</span>
                            <h3>{feature.title}</h3>
                            <p>{feature.blurb}</p>
                        </div>
                    })}
                </div>
            </section>

            <section id="templates" class="templates-section">
                <h2>{"Start from a template"}</h2>
                <div class="templates-grid">
                    { for TEMPLATES.iter().map(|&(name, blurb, image)| html! {
                        <div class="template-card">
                            <img class="lazy" data-src={image} alt={format!("{} template preview", name)} />
                            <h3>{name}</h3>
                            <p>{blurb}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="devices-section">
                <h2>{"Looks right on every screen"}</h2>
                <div class="devices-grid">
                    { for DEVICES.iter().map(|&(icon, label)| html! {
                        <div class="device-card">
                            <span class="device-icon">{icon}</span>
                            <p>{label}</p>
                        </div>
                    })}
                </div>
            </section>

            <section id="testimonials" class="testimonials-section">
                <h2>{"What builders say"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|&(quote, author, role)| html! {
                        <div class="testimonial-card">
                            <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", quote)}</p>
                            <span class="testimonial-author">{author}</span>
                            <span class="testimonial-role">{role}</span>
                        </div>
                    })}
                </div>
            </section>

            <FaqSection />

            <section class="newsletter-section">
                <h2>{"Template drops, monthly"}</h2>
                <p>{"New templates and editor updates in your inbox. No spam, unsubscribe anytime."}</p>
                <NewsletterForm />
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Talk to us"}</h2>
                <p>{"Questions about plans, templates or migrations? We answer within a day."}</p>
                <div class="contact-form">
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <span>{"© 2025 SiteCraft. All rights reserved."}</span>
            </footer>
        </main>
    }
}
