use yew::prelude::*;

use crate::components::{
    contact_cta::ContactCta, faq::Faq, footer::Footer, hero::Hero,
    quote_calculator::QuoteCalculator, services::Services, testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <Hero />
            <Services />
            <QuoteCalculator />
            <Testimonials />
            <Faq />
            <ContactCta />
            <Footer />
        </div>
    }
}
