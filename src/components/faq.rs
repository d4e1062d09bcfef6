use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [FaqEntry; 7] = [
    FaqEntry {
        question: "I'M NOT TECH SAVVY. IS THIS HARD TO MANAGE?",
        answer: "Not at all. I build the system to run on autopilot. Clients book online, \
                 the calendar updates itself, and you get a text notification with the job \
                 details. If you can use a smartphone, you can manage this site.",
    },
    FaqEntry {
        question: "CAN I TAKE DEPOSITS TO PREVENT NO-SHOWS?",
        answer: "Yes. This is a standard feature I build. We can require a partial deposit \
                 (e.g., $30) or full payment upfront via Stripe or Square. This drastically \
                 reduces last-minute cancellations and protects your time.",
    },
    FaqEntry {
        question: "DO I HAVE TO PAY MONTHLY FEES FOR BOOKING SOFTWARE?",
        answer: "No. Unlike generic apps like Calendly or Vagaro that charge monthly \
                 subscriptions, I build a custom booking solution that you own 100%. You \
                 avoid those recurring SaaS fees forever.",
    },
    FaqEntry {
        question: "WILL THIS HELP ME RANK ON GOOGLE MAPS?",
        answer: "Absolutely. I code your site with 'Local SEO' schemas. This tells Google \
                 exactly which cities you serve, helping you appear higher when customers \
                 search 'Mobile Detailing near me' or 'Cafe in [City]'.",
    },
    FaqEntry {
        question: "HOW LONG DOES IT TAKE TO LAUNCH?",
        answer: "A high-conversion Detailer Landing Page with booking is usually ready in \
                 5-7 days. Larger sites for Cafes or Detail Shops with e-commerce products \
                 typically take about 2 weeks.",
    },
    FaqEntry {
        question: "I ALSO OWN A CAFE. CAN YOU DO DIGITAL MENUS?",
        answer: "Yes! For my cafe clients, I build fast-loading digital menus linked to QR \
                 codes. I can also set up simple online ordering systems for pickup, \
                 bypassing expensive delivery app fees.",
    },
    FaqEntry {
        question: "WHAT DO I NEED TO GET STARTED?",
        answer: "Just your service list, pricing, and photos of your work (cars or coffee). \
                 I handle the technical heavy lifting, from domain setup to writing the \
                 sales copy that converts visitors into bookers.",
    },
];

/// FAQ accordion. One item open at a time: opening an item closes whichever
/// other item was open, and clicking the open item closes it.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| Some(0_usize));

    html! {
        <section class="faq">
            <div class="section-kicker">{"// COMMON QUESTIONS //"}</div>
            <h2 class="section-heading">{"Asked & "}<span class="accent">{"Answered"}</span></h2>

            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(index, entry)| {
                    let is_open = *open_index == Some(index);
                    let toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open_index.set(if *open_index == Some(index) {
                                None
                            } else {
                                Some(index)
                            });
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" onclick={toggle}>
                                <span class="faq-index">{format!("{:02}", index + 1)}</span>
                                <span class="question-text">{entry.question}</span>
                                <span class="toggle-icon">{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            <div class="faq-answer">
                                <p>{entry.answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <p class="faq-contact">
                {"Can't find the answer? "}
                <a href={config::mailto_link()}>{"Contact me directly"}</a>
            </p>

            <style>
                {r#"
                .faq {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .faq .accent {
                    color: #52525b;
                }

                .faq-list {
                    margin-top: 3rem;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 1.2rem;
                    background: none;
                    border: none;
                    color: #999;
                    text-align: left;
                    font-size: 0.95rem;
                    font-weight: 700;
                    padding: 1.4rem 0;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: #fff;
                }

                .faq-item.open .faq-question {
                    color: #fff;
                }

                .faq-index {
                    font-family: monospace;
                    font-size: 0.7rem;
                    color: #555;
                }

                .faq-item.open .faq-index {
                    color: #00ff41;
                }

                .question-text {
                    flex-grow: 1;
                }

                .toggle-icon {
                    font-size: 1.3rem;
                    color: #00ff41;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                }

                .faq-answer p {
                    color: #999;
                    font-size: 0.82rem;
                    line-height: 1.7;
                    margin: 0;
                    padding: 0 0 1.4rem 2.4rem;
                }

                .faq-contact {
                    margin-top: 3rem;
                    text-align: center;
                    font-family: monospace;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #777;
                }

                .faq-contact a {
                    color: #fff;
                }

                .faq-contact a:hover {
                    color: #00ff41;
                }
                "#}
            </style>
        </section>
    }
}
