//! The single marketing page: hero, services, about, and the consultation
//! form, with `.fade-in` sections revealed as they scroll into view.

use leptos::prelude::*;

use crate::components::consultation_form::ConsultationForm;
use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;

const SERVICES: [(&str, &str); 3] = [
    (
        "Product Engineering",
        "Design and delivery of web products, from first commit to first customer.",
    ),
    (
        "Legacy Rescue",
        "Stabilize, document, and modernize the system nobody wants to touch.",
    ),
    (
        "Technical Due Diligence",
        "Independent review of architecture, code health, and team practices.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    // Reveal observation waits until the sections exist in the DOM.
    #[cfg(feature = "hydrate")]
    Effect::new(|| {
        crate::util::reveal::observe_fade_ins();
    });

    view! {
        <Navbar/>
        <main id="home">
            <section class="hero fade-in">
                <h1>"Software that ships."</h1>
                <p class="hero__tagline">
                    "Clearline Consulting helps small teams build, rescue, and scale "
                    "their products without the agency overhead."
                </p>
                <a class="hero__cta" href="#contact">"Request a Free Consultation"</a>
            </section>
            <section id="services" class="services fade-in">
                <h2>"Services"</h2>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="services__card">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section id="about" class="about fade-in">
                <h2>"About"</h2>
                <p>
                    "One senior engineer, a small bench of trusted specialists, and "
                    "fifteen years of shipping. No account managers, no hand-offs: the "
                    "person you talk to is the person who writes the code."
                </p>
            </section>
            <section id="contact" class="contact fade-in">
                <h2>"Request a Free Consultation"</h2>
                <p>
                    "Tell us where the project stands and where it needs to go. "
                    "We reply within one business day."
                </p>
                <ConsultationForm/>
            </section>
        </main>
        <footer class="footer">
            <p>"Clearline Consulting"</p>
        </footer>
        <ToastHost/>
    }
}
