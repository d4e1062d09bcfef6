use yew::prelude::*;

struct Service {
    title: &'static str,
    blurb: &'static str,
    tag: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        title: "MOBILE DETAILING",
        blurb: "Auto-sync calendar & deposit systems.",
        tag: "01",
    },
    Service {
        title: "CERAMIC COATING",
        blurb: "Showcase expensive packages efficiently.",
        tag: "02",
    },
    Service {
        title: "CAFES & DINING",
        blurb: "QR menus & commission-free ordering.",
        tag: "03",
    },
    Service {
        title: "GROWTH & SEO",
        blurb: "Dominate local search results.",
        tag: "04",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <div class="section-kicker">{"// WHO I BUILD FOR //"}</div>
            <h2 class="section-heading">{"Websites That "}<span class="accent">{"Work Shifts"}</span></h2>

            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <span class="service-tag">{service.tag}</span>
                        <h3>{service.title}</h3>
                        <p>{service.blurb}</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .services {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .services .accent {
                    color: #52525b;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .service-card {
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 20px;
                    padding: 2rem;
                    transition: all 0.3s ease;
                }

                .service-card:hover {
                    transform: translateY(-5px);
                    border-color: rgba(0, 255, 65, 0.35);
                }

                .service-tag {
                    font-family: monospace;
                    font-size: 0.65rem;
                    color: #00ff41;
                    letter-spacing: 0.2em;
                }

                .service-card h3 {
                    font-size: 1.2rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.01em;
                    margin: 1rem 0 0.6rem;
                }

                .service-card p {
                    font-size: 0.8rem;
                    color: #999;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
