use yew::prelude::*;

use crate::config;

#[function_component(ContactCta)]
pub fn contact_cta() -> Html {
    html! {
        <section class="contact-cta">
            <h2 class="cta-headline">
                <span class="cta-line">{"Ready To Get"}</span>
                <span class="cta-line dim">{"Fully Booked?"}</span>
            </h2>
            <p class="cta-sub">
                {"One call. No pressure. We map out exactly what your shop needs and what \
                  it costs, then you decide."}
            </p>
            <div class="cta-actions">
                <a class="cta-button" href={config::BOOKING_URL} target="_blank">
                    {"Book a Free Call"}
                </a>
                <a class="ghost-button" href={config::mailto_link()}>
                    {config::CONTACT_EMAIL}
                </a>
            </div>

            <style>
                {r#"
                .contact-cta {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .cta-headline {
                    font-size: clamp(3rem, 9vw, 7rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.04em;
                    line-height: 0.85;
                    margin: 0 0 2rem;
                }

                .cta-line {
                    display: block;
                }

                .cta-line.dim {
                    color: #3f3f46;
                }

                .cta-sub {
                    max-width: 420px;
                    margin: 0 auto 2.5rem;
                    font-size: 0.85rem;
                    color: #999;
                    line-height: 1.7;
                }

                .cta-actions {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                "#}
            </style>
        </section>
    }
}
