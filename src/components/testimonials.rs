use yew::prelude::*;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    title: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "CLEAN UI, SMOOTH INTERACTIONS, AND THOUGHTFUL DETAILS, IT'S EXACTLY WHAT WE NEEDED.",
        name: "Thiago Alcatara",
        title: "MARKETING MANAGEMENT, ABC JSC",
    },
    Testimonial {
        quote: "WORKING WITH LAYOUTORY WAS A GAME-CHANGER. THE DESIGN WAS BEAUTIFUL AND SUPER INTUITIVE.",
        name: "Bobby Clarkson",
        title: "CEO FOUNDER, AGENCIFY",
    },
    Testimonial {
        quote: "10 POINTS!!! NOTHING TO SAY. BEST DESIGNER WITH ME.",
        name: "Nathan Drake",
        title: "DESIGN LEAD, BRUNO",
    },
    Testimonial {
        quote: "BIGGER, BOLDER & BETTER. HE TURNED OUR VAGUE IDEAS INTO A PIXEL-PERFECT PRODUCT.",
        name: "Lukas Franklin",
        title: "HEAD OF PRODUCT, AIXOR",
    },
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="section-kicker">{"// CLIENT FEEDBACK //"}</div>
            <h2 class="section-heading">{"Word On "}<span class="accent">{"The Street"}</span></h2>

            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <figure class="testimonial-card">
                        <blockquote>{"\u{201c}"}{t.quote}{"\u{201d}"}</blockquote>
                        <figcaption>
                            <span class="avatar">{initials(t.name)}</span>
                            <div>
                                <span class="client-name">{t.name}</span>
                                <span class="client-title">{t.title}</span>
                            </div>
                        </figcaption>
                    </figure>
                }) }
            </div>

            <style>
                {r#"
                .testimonials {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .testimonials .accent {
                    color: #52525b;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .testimonial-card {
                    margin: 0;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 20px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }

                .testimonial-card blockquote {
                    margin: 0 0 2rem;
                    font-size: 0.9rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    line-height: 1.6;
                }

                .testimonial-card figcaption {
                    display: flex;
                    align-items: center;
                    gap: 0.9rem;
                }

                .avatar {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: rgba(0, 255, 65, 0.1);
                    border: 1px solid rgba(0, 255, 65, 0.3);
                    color: #00ff41;
                    font-size: 0.7rem;
                    font-weight: 700;
                }

                .client-name {
                    display: block;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }

                .client-title {
                    display: block;
                    font-family: monospace;
                    font-size: 0.6rem;
                    color: #777;
                    text-transform: uppercase;
                    margin-top: 0.2rem;
                }
                "#}
            </style>
        </section>
    }
}
