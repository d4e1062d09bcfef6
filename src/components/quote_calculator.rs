use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::pricing::catalog::{GroupMode, BASE_PRICE_USD, QUOTE_GROUPS, QUOTE_PRICE_CAP_USD};
use crate::pricing::currency::{format_amount, Currency};
use crate::pricing::quote::{compute_total, SelectionState};

/// Interactive quote builder. Selections live for the page visit only, and
/// the running total is tracked and shown in USD. Currency conversion only
/// happens on the pricing tables.
#[function_component(QuoteCalculator)]
pub fn quote_calculator() -> Html {
    let selections = use_state(|| SelectionState::new(&QUOTE_GROUPS));

    let total = compute_total(
        BASE_PRICE_USD,
        &selections,
        &QUOTE_GROUPS,
        Some(QUOTE_PRICE_CAP_USD),
    );
    let unclamped = compute_total(BASE_PRICE_USD, &selections, &QUOTE_GROUPS, None);
    let cap_applied = unclamped > total;

    html! {
        <section class="quote-calculator">
            <div class="calc-header">
                <div class="section-kicker">{"// INTERACTIVE CALCULATOR //"}</div>
                <h2 class="section-heading">{"Build Your "}<span class="accent">{"Perfect Setup"}</span></h2>
                <p class="calc-intro">
                    {"Don't pay for features you don't need. Select your requirements below \
                      to get an instant estimated investment range."}
                </p>
            </div>

            <div class="calc-grid">
                <div class="calc-steps">
                    { for QUOTE_GROUPS.iter().map(|group| html! {
                        <div class="calc-step">
                            <div class="step-heading">
                                <h3>{group.title}</h3>
                                <p>{group.blurb}</p>
                            </div>
                            <div class="step-options">
                                { for group.options.iter().map(|option| {
                                    let selected = selections.is_selected(group.id, option.id);
                                    let onclick = {
                                        let selections = selections.clone();
                                        let mode = group.mode;
                                        let group_id = group.id;
                                        let option_id = option.id;
                                        Callback::from(move |e: MouseEvent| {
                                            e.prevent_default();
                                            let mut next = (*selections).clone();
                                            match mode {
                                                GroupMode::Single => next.select_single(group_id, option_id),
                                                GroupMode::Multi => next.toggle_multi(group_id, option_id),
                                            }
                                            selections.set(next);
                                        })
                                    };
                                    let price_tag = if option.base_price_usd == 0 {
                                        "INCLUDED".to_string()
                                    } else {
                                        format!("+{}", format_amount(Currency::Usd, option.base_price_usd))
                                    };
                                    html! {
                                        <button
                                            class={classes!("option-card", selected.then(|| "selected"))}
                                            {onclick}
                                        >
                                            <span class="option-label">{option.label}</span>
                                            <span class="option-blurb">{option.blurb}</span>
                                            <span class="option-price">{price_tag}</span>
                                        </button>
                                    }
                                }) }
                            </div>
                        </div>
                    }) }
                </div>

                <aside class="calc-summary">
                    <p class="summary-label">{"Estimated Investment"}</p>
                    <div class="summary-total">
                        {format_amount(Currency::Usd, total)}
                        <span class="summary-currency">{"USD"}</span>
                    </div>
                    {
                        if cap_applied {
                            html! {
                                <p class="cap-note">
                                    {format!("Core features capped at {}",
                                        format_amount(Currency::Usd, QUOTE_PRICE_CAP_USD))}
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }

                    <h4>{"Selected Features"}</h4>
                    <ul class="summary-list">
                        <li class="base-row">
                            <span>{"Base Package"}</span>
                            <span>{format_amount(Currency::Usd, BASE_PRICE_USD)}</span>
                        </li>
                        { for QUOTE_GROUPS.iter().flat_map(|group| {
                            let selections = selections.clone();
                            group.options.iter().filter_map(move |option| {
                                let selected = selections.is_selected(group.id, option.id);
                                (selected && option.base_price_usd > 0).then(|| html! {
                                    <li>
                                        <span>{"+ "}{option.label}</span>
                                        <span>{format_amount(Currency::Usd, option.base_price_usd)}</span>
                                    </li>
                                })
                            })
                        }) }
                    </ul>

                    <a class="cta-button summary-cta" href={config::BOOKING_URL} target="_blank">
                        {"Book Call to Confirm"}
                    </a>
                    <p class="summary-footnote">{"No payment required to book call."}</p>
                </aside>
            </div>

            <style>
                {r#"
                .quote-calculator {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }

                .quote-calculator .accent {
                    color: #52525b;
                }

                .calc-header {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 4rem;
                }

                .calc-intro {
                    font-size: 0.85rem;
                    color: #999;
                    line-height: 1.7;
                }

                .calc-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }

                .calc-step {
                    margin-bottom: 3rem;
                }

                .step-heading h3 {
                    font-size: 1.05rem;
                    font-weight: 700;
                    margin: 0 0 0.3rem;
                }

                .step-heading p {
                    font-size: 0.75rem;
                    color: #777;
                    margin: 0 0 1.2rem;
                }

                .step-options {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                }

                .option-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    text-align: left;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.2rem;
                    color: inherit;
                    font: inherit;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .option-card:hover {
                    border-color: rgba(255, 255, 255, 0.3);
                }

                .option-card.selected {
                    background: rgba(0, 255, 65, 0.08);
                    border-color: #00ff41;
                }

                .option-label {
                    font-size: 0.85rem;
                    font-weight: 700;
                }

                .option-blurb {
                    font-size: 0.68rem;
                    color: #777;
                    line-height: 1.4;
                    min-height: 2.2em;
                }

                .option-price {
                    font-family: monospace;
                    font-size: 0.7rem;
                    font-weight: 700;
                    color: #666;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding-top: 0.7rem;
                }

                .option-card.selected .option-price {
                    color: #00ff41;
                }

                .calc-summary {
                    position: sticky;
                    top: 6rem;
                    background: #0f0f0f;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 24px;
                    padding: 2rem;
                }

                .summary-label {
                    font-family: monospace;
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #777;
                    margin: 0 0 0.5rem;
                }

                .summary-total {
                    font-size: 3.2rem;
                    font-weight: 900;
                    letter-spacing: -0.03em;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    padding-bottom: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .summary-currency {
                    font-size: 0.8rem;
                    font-weight: 400;
                    color: #777;
                    margin-left: 0.5rem;
                }

                .cap-note {
                    font-size: 0.7rem;
                    color: #00ff41;
                    margin: -0.8rem 0 1.2rem;
                }

                .calc-summary h4 {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    margin: 0 0 1rem;
                }

                .summary-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }

                .summary-list li {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.75rem;
                    color: #999;
                    padding: 0.4rem 0;
                }

                .summary-list .base-row {
                    color: #00ff41;
                }

                .summary-cta {
                    width: 100%;
                    text-align: center;
                }

                .summary-footnote {
                    font-size: 0.65rem;
                    color: #666;
                    text-align: center;
                    margin: 1rem 0 0;
                }

                @media (max-width: 968px) {
                    .calc-grid {
                        grid-template-columns: 1fr;
                    }

                    .calc-summary {
                        position: static;
                    }
                }
                "#}
            </style>
        </section>
    }
}
