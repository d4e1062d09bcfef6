use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::pricing::catalog::{ADD_ONS, CARE_PLANS, FEATURE_LIST, PLANS};
use crate::pricing::currency::{format_amount, Currency, CURRENCIES};
use crate::pricing::rounding::{addon_price, discounted_plan_price, plan_price};

/// Pricing tables with the currency selector. Switching currency re-renders
/// the numbers and nothing else; no selection state lives on this page.
#[function_component(PricingTable)]
pub fn pricing_table() -> Html {
    let currency = use_state(|| Currency::Usd);
    let dropdown_open = use_state(|| false);

    let active = *currency;
    let is_global = active != Currency::Inr;

    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dropdown_open.set(!*dropdown_open);
        })
    };

    let pick_currency = |target: Currency| {
        let currency = currency.clone();
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            currency.set(target);
            dropdown_open.set(false);
        })
    };

    html! {
        <section class="pricing-tables">
            <div class="pricing-bar">
                <div class="section-kicker">{"// INVESTMENT PLANS //"}</div>

                <div class="currency-picker">
                    <div class="dropdown-anchor">
                        <button
                            class={classes!("dropdown-button", is_global.then(|| "active"))}
                            onclick={toggle_dropdown}
                        >
                            { if is_global { active.label() } else { "Global" } }
                            <span class={classes!("chevron", (*dropdown_open).then(|| "up"))}>{"▾"}</span>
                        </button>
                        {
                            if *dropdown_open {
                                html! {
                                    <div class="dropdown-menu">
                                        { for CURRENCIES.iter()
                                            .filter(|c| **c != Currency::Inr)
                                            .map(|c| {
                                                let onclick = pick_currency(*c);
                                                html! {
                                                    <button class="dropdown-item" {onclick}>
                                                        {c.code()}
                                                        { if active == *c { " ✓" } else { "" } }
                                                    </button>
                                                }
                                            }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    <button
                        class={classes!("india-button", (active == Currency::Inr).then(|| "active"))}
                        onclick={pick_currency(Currency::Inr)}
                    >
                        {Currency::Inr.label()}
                    </button>
                </div>
            </div>

            <div class="plan-grid">
                { for PLANS.iter().map(|plan| {
                    let full = plan_price(active, plan.base_price_usd);
                    let discounted = plan
                        .launch_discount
                        .map(|pct| discounted_plan_price(active, plan.base_price_usd, pct));
                    html! {
                        <div class={classes!("plan-card", plan.popular.then(|| "popular"))}>
                            <div class="plan-head">
                                <div>
                                    <h3>{plan.name}</h3>
                                    <p class="plan-term">{"One-Time Pay"}</p>
                                </div>
                                { if plan.popular { html! { <span class="popular-tag">{"POPULAR"}</span> } } else { html!{} } }
                            </div>

                            <div class="plan-price">
                                {
                                    match discounted {
                                        Some(price) => html! {
                                            <>
                                                <span class="price-was">{format_amount(active, full)}</span>
                                                <span class="price-value">{format_amount(active, price)}</span>
                                                <span class="offer-tag">{"LAUNCH OFFER"}</span>
                                            </>
                                        },
                                        None => html! {
                                            <span class="price-value">{format_amount(active, full)}</span>
                                        },
                                    }
                                }
                            </div>

                            <div class="plan-specs">
                                <span>{plan.delivery}</span>
                                <span>{plan.revisions}</span>
                                <span class="pages-chip">{plan.pages}</span>
                            </div>

                            <p class="plan-blurb">{plan.blurb}</p>

                            <ul class="plan-features">
                                { for FEATURE_LIST.iter().enumerate().map(|(index, feature)| {
                                    let included = plan.included.contains(&index);
                                    html! {
                                        <li class={classes!((!included).then(|| "excluded"))}>
                                            <span class="feature-mark">{ if included { "✓" } else { "✕" } }</span>
                                            {*feature}
                                        </li>
                                    }
                                }) }
                            </ul>

                            <a class="cta-button plan-cta" href={config::BOOKING_URL} target="_blank">
                                {"Get Started"}
                            </a>
                        </div>
                    }
                }) }
            </div>

            <div class="extras-grid">
                <div class="addons">
                    <h3>{"+ Additional Services"}</h3>
                    <div class="addon-list">
                        { for ADD_ONS.iter().map(|addon| html! {
                            <div class="addon-row">
                                <div>
                                    <h4>{addon.name}</h4>
                                    <p>{addon.blurb}</p>
                                </div>
                                <span class="addon-price">
                                    {"+"}{format_amount(active, addon_price(active, addon.base_price_usd))}
                                </span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="care-plans">
                    <h3>{"Monthly Care Plans"}</h3>
                    <div class="care-grid">
                        { for CARE_PLANS.iter().map(|plan| html! {
                            <div class="care-card">
                                <h4>{plan.name}</h4>
                                <ul>
                                    { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <div class="care-price">
                                    {format_amount(active, addon_price(active, plan.base_price_usd))}
                                    <span>{"/month"}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                    <p class="pro-tip">
                        {"✨ Pro Tip: Buy the EMPIRE package and get 1 month of Maintenance for FREE!"}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .pricing-tables {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 4rem 2rem 6rem;
                }

                .pricing-bar {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .pricing-bar .section-kicker {
                    margin: 0;
                }

                .currency-picker {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #111;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 999px;
                    padding: 0.4rem 0.5rem;
                }

                .dropdown-anchor {
                    position: relative;
                }

                .dropdown-button,
                .india-button {
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 0.65rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .dropdown-button.active {
                    background: #fff;
                    color: #000;
                }

                .india-button.active {
                    background: #00ff41;
                    color: #000;
                }

                .chevron {
                    display: inline-block;
                    margin-left: 0.4rem;
                    transition: transform 0.3s ease;
                }

                .chevron.up {
                    transform: rotate(180deg);
                }

                .dropdown-menu {
                    position: absolute;
                    top: calc(100% + 0.5rem);
                    left: 0;
                    min-width: 8rem;
                    background: #1a1a1a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    overflow: hidden;
                    z-index: 50;
                }

                .dropdown-item {
                    display: block;
                    width: 100%;
                    text-align: left;
                    background: none;
                    border: none;
                    color: #999;
                    font-size: 0.65rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    padding: 0.8rem 1rem;
                    cursor: pointer;
                }

                .dropdown-item:hover {
                    background: #fff;
                    color: #000;
                }

                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    margin-bottom: 5rem;
                    align-items: start;
                }

                .plan-card {
                    display: flex;
                    flex-direction: column;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 24px;
                    padding: 2rem;
                    transition: transform 0.4s ease;
                }

                .plan-card:hover {
                    transform: translateY(-6px);
                }

                .plan-card.popular {
                    border-color: rgba(0, 255, 65, 0.3);
                }

                .plan-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                    padding-bottom: 1.2rem;
                    margin-bottom: 1.5rem;
                }

                .plan-head h3 {
                    font-size: 1.1rem;
                    font-weight: 800;
                    margin: 0;
                }

                .plan-term {
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #777;
                    margin: 0.4rem 0 0;
                }

                .popular-tag {
                    background: #fff;
                    color: #000;
                    font-size: 0.6rem;
                    font-weight: 800;
                    padding: 0.3rem 0.6rem;
                    border-radius: 6px;
                }

                .plan-price {
                    margin-bottom: 1.2rem;
                }

                .price-value {
                    font-size: 3rem;
                    font-weight: 900;
                    letter-spacing: -0.03em;
                }

                .price-was {
                    display: block;
                    font-family: monospace;
                    font-size: 0.9rem;
                    color: #666;
                    text-decoration: line-through;
                }

                .offer-tag {
                    display: inline-block;
                    margin-left: 0.8rem;
                    font-family: monospace;
                    font-size: 0.55rem;
                    letter-spacing: 0.2em;
                    color: #00ff41;
                    border: 1px solid rgba(0, 255, 65, 0.3);
                    border-radius: 6px;
                    padding: 0.25rem 0.5rem;
                    vertical-align: middle;
                }

                .plan-specs {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.2rem;
                }

                .plan-specs span {
                    font-family: monospace;
                    font-size: 0.6rem;
                    text-transform: uppercase;
                    color: #999;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.04);
                    border-radius: 6px;
                    padding: 0.3rem 0.6rem;
                }

                .plan-specs .pages-chip {
                    color: #00ff41;
                    border-color: rgba(0, 255, 65, 0.25);
                    background: rgba(0, 255, 65, 0.06);
                }

                .plan-blurb {
                    font-size: 0.78rem;
                    color: #999;
                    line-height: 1.6;
                    margin: 0 0 1.5rem;
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex-grow: 1;
                }

                .plan-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.7rem;
                    font-size: 0.75rem;
                    padding: 0.45rem 0;
                }

                .plan-features li.excluded {
                    color: rgba(255, 255, 255, 0.2);
                    text-decoration: line-through;
                }

                .feature-mark {
                    color: #00ff41;
                }

                .excluded .feature-mark {
                    color: rgba(255, 255, 255, 0.2);
                }

                .plan-cta {
                    text-align: center;
                }

                .extras-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .extras-grid h3 {
                    font-size: 1.2rem;
                    font-weight: 800;
                    margin: 0 0 1.5rem;
                }

                .addon-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 14px;
                    padding: 1rem 1.2rem;
                    margin-bottom: 0.8rem;
                    transition: border-color 0.3s ease;
                }

                .addon-row:hover {
                    border-color: rgba(0, 255, 65, 0.3);
                }

                .addon-row h4 {
                    font-size: 0.85rem;
                    margin: 0 0 0.2rem;
                }

                .addon-row p {
                    font-size: 0.65rem;
                    color: #777;
                    margin: 0;
                }

                .addon-price {
                    font-family: monospace;
                    font-weight: 700;
                    color: #00ff41;
                }

                .care-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .care-card {
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 14px;
                    padding: 1.5rem;
                }

                .care-card h4 {
                    font-size: 0.9rem;
                    margin: 0 0 1rem;
                }

                .care-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.2rem;
                }

                .care-card li {
                    font-size: 0.68rem;
                    color: #999;
                    padding: 0.25rem 0;
                }

                .care-price {
                    font-family: monospace;
                    font-size: 1.1rem;
                    font-weight: 700;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                    padding-top: 1rem;
                }

                .care-price span {
                    font-size: 0.65rem;
                    color: #777;
                    margin-left: 0.3rem;
                }

                .pro-tip {
                    margin-top: 1.5rem;
                    background: rgba(0, 255, 65, 0.08);
                    border: 1px solid rgba(0, 255, 65, 0.2);
                    border-radius: 14px;
                    padding: 1rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #00ff41;
                }

                @media (max-width: 968px) {
                    .extras-grid {
                        grid-template-columns: 1fr;
                    }

                    .care-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
