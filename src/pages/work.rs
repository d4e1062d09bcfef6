use yew::prelude::*;

use crate::components::{contact_cta::ContactCta, footer::Footer};

struct Project {
    title: &'static str,
    category: &'static str,
    blurb: &'static str,
    link: &'static str,
}

const PROJECTS: [Project; 6] = [
    Project {
        title: "BLSSD BARBERSHOP",
        category: "UI/UX • LANDING PAGE",
        blurb: "A modern, masculine landing page for a premium barbershop featuring \
                appointment scheduling and gallery.",
        link: "https://blssd-barber-shop.vercel.app/",
    },
    Project {
        title: "Beany Barista",
        category: "BRANDING • WEB DESIGN",
        blurb: "Minimalist coffee shop interface focusing on menu discovery and atmosphere.",
        link: "https://beanybarsita-demo.vercel.app/",
    },
    Project {
        title: "Balt Coffee Co.",
        category: "ECOMMERCE • SHOPIFY",
        blurb: "Dark-themed ecommerce experience for premium coffee bean subscriptions.",
        link: "https://balt-bakeries.vercel.app/",
    },
    Project {
        title: "Cafe Matinal",
        category: "APP DESIGN • LOYALTY",
        blurb: "Mobile app interface for a busy city cafe chain with order-ahead functionality.",
        link: "https://luxury-cafe-demo.vercel.app/",
    },
    Project {
        title: "NoteZen App",
        category: "VISUAL IDENTITY",
        blurb: "Fresh, organic web design for a specialty matcha tea cafe.",
        link: "https://notezenn.vercel.app/",
    },
    Project {
        title: "The Jelly Donuts",
        category: "DEVELOPMENT • FRAMER",
        blurb: "Experimental design layout for a coffee workshop and training center.",
        link: "https://jelly-donut.vercel.app/",
    },
];

#[function_component(Work)]
pub fn work() -> Html {
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
        <div class="work-page">
            <section class="work-grid-section">
                <div class="section-kicker">{"// SELECTED WORK //"}</div>
                <h1 class="section-heading">{"Things I've "}<span class="accent">{"Shipped"}</span></h1>

                <div class="project-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <a class="project-card" href={project.link} target="_blank">
                            <span class="project-category">{project.category}</span>
                            <h3>{project.title}</h3>
                            <p>{project.blurb}</p>
                            <span class="project-visit">{"Visit Site ↗"}</span>
                        </a>
                    }) }
                </div>
            </section>

            <ContactCta />
            <Footer />

            <style>
                {r#"
                .work-grid-section {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 10rem 2rem 4rem;
                }

                .work-grid-section .accent {
                    color: #52525b;
                }

                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .project-card {
                    display: flex;
                    flex-direction: column;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 20px;
                    padding: 2rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .project-card:hover {
                    transform: translateY(-5px);
                    border-color: rgba(0, 255, 65, 0.35);
                }

                .project-category {
                    font-family: monospace;
                    font-size: 0.6rem;
                    letter-spacing: 0.2em;
                    color: #00ff41;
                }

                .project-card h3 {
                    font-size: 1.3rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    margin: 1rem 0 0.6rem;
                }

                .project-card p {
                    font-size: 0.78rem;
                    color: #999;
                    line-height: 1.6;
                    margin: 0 0 1.5rem;
                    flex-grow: 1;
                }

                .project-visit {
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #777;
                }

                .project-card:hover .project-visit {
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}
