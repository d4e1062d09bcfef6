use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

fn local_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let time = use_state(local_time);

    {
        let time = time.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || {
                    time.set(local_time());
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <div class="hero-top">
                <div class="hero-brand">
                    <span class="brand-name">{config::SITE_NAME}{"."}</span>
                    <span class="brand-status">
                        <span class="status-dot"></span>
                        {"Accepting Detailer Clients"}
                    </span>
                </div>
                <div class="hero-clock">
                    {"LOCAL TIME"}<br />{(*time).clone()}
                </div>
            </div>

            <h1 class="hero-title">
                <span class="hero-line">{"Fully"}</span>
                <span class="hero-line dim">{"Booked."}</span>
            </h1>

            <div class="hero-sub">
                <h2>{"Automated Booking Systems for Mobile Car Detailers & Cafes"}</h2>
                <p>
                    {"Stop chasing clients. I build high-converting websites that automate \
                      your calendar, track revenue, and reduce no-shows so you can focus \
                      on detailing."}
                </p>
                <div class="hero-actions">
                    <a class="cta-button" href={config::BOOKING_URL} target="_blank">
                        {"Book a Free Call"}
                    </a>
                    <Link<Route> to={Route::Pricing} classes="ghost-button">
                        {"See Pricing"}
                    </Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 7rem 2rem 5rem;
                    max-width: 1280px;
                    margin: 0 auto;
                }

                .hero-top {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 4rem;
                }

                .brand-name {
                    display: block;
                    font-weight: 800;
                    font-size: 1.4rem;
                    letter-spacing: -0.03em;
                }

                .brand-status {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 0.4rem;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #999;
                }

                .status-dot {
                    width: 7px;
                    height: 7px;
                    border-radius: 50%;
                    background: #00ff41;
                    box-shadow: 0 0 8px #00ff41;
                }

                .hero-clock {
                    font-family: monospace;
                    font-size: 0.7rem;
                    color: #666;
                    text-align: right;
                    line-height: 1.6;
                }

                .hero-title {
                    font-size: clamp(4rem, 14vw, 12rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.04em;
                    line-height: 0.82;
                    margin: 0;
                }

                .hero-line {
                    display: block;
                }

                .hero-line.dim {
                    color: #3f3f46;
                }

                .hero-sub {
                    max-width: 460px;
                    margin-top: 3rem;
                }

                .hero-sub h2 {
                    font-size: 1.1rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1.3;
                    margin: 0 0 1rem;
                }

                .hero-sub p {
                    font-size: 0.85rem;
                    color: #999;
                    line-height: 1.7;
                    margin: 0 0 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                @media (max-width: 768px) {
                    .hero {
                        padding: 6rem 1rem 4rem;
                        text-align: center;
                    }

                    .hero-clock {
                        display: none;
                    }

                    .hero-sub {
                        margin-left: auto;
                        margin-right: auto;
                    }

                    .hero-actions {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
