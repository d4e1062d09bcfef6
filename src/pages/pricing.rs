use yew::prelude::*;

use crate::components::{contact_cta::ContactCta, footer::Footer, pricing_table::PricingTable};

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
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
        <div class="pricing-page">
            <section class="pricing-banner">
                <h1>
                    <span class="banner-line">{"Good Design Is"}</span>
                    <span class="banner-line dim">{"Good Business"}</span>
                </h1>
                <p class="banner-sub">{"Invest in your digital presence"}</p>
            </section>

            <PricingTable />
            <ContactCta />
            <Footer />

            <style>
                {r#"
                .pricing-banner {
                    padding: 10rem 2rem 3rem;
                    text-align: center;
                }

                .pricing-banner h1 {
                    font-size: clamp(2.5rem, 7vw, 5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.03em;
                    line-height: 0.9;
                    margin: 0 0 2rem;
                }

                .banner-line {
                    display: block;
                }

                .banner-line.dim {
                    color: #52525b;
                }

                .banner-sub {
                    display: inline-block;
                    font-family: monospace;
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #00ff41;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    padding: 0.6rem 1.2rem;
                    background: rgba(255, 255, 255, 0.04);
                }
                "#}
            </style>
        </div>
    }
}
