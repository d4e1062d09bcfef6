use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod pricing {
    pub mod catalog;
    pub mod currency;
    pub mod quote;
    pub mod rounding;
}
mod components {
    pub mod contact_cta;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod pricing_table;
    pub mod quote_calculator;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod pricing;
    pub mod work;
}

use pages::{home::Home, pricing::PricingPage, work::Work};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/work")]
    Work,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <PricingPage /> }
        }
        Route::Work => {
            info!("Rendering Work page");
            html! { <Work /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::SITE_NAME}{"."}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Work} classes="nav-link">
                            {"Work"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Pricing} classes="nav-link">
                            {"Pricing"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <a class="nav-contact-button" href={config::mailto_link()}>
                            {"Email Me"}
                        </a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease, border-color 0.3s ease;
                    border-bottom: 1px solid transparent;
                }

                .top-nav.scrolled {
                    background: rgba(5, 5, 5, 0.85);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-weight: 800;
                    font-size: 1.3rem;
                    letter-spacing: -0.03em;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #999;
                    text-decoration: none;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-contact-button {
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    padding: 0.5rem 1.2rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .nav-contact-button:hover {
                    background: #fff;
                    color: #000;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }

                .cta-button {
                    display: inline-block;
                    background: #fff;
                    color: #000;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .cta-button:hover {
                    background: #ddd;
                    transform: translateY(-2px);
                }

                .ghost-button {
                    display: inline-block;
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .ghost-button:hover {
                    background: #fff;
                    color: #000;
                }

                .section-heading {
                    font-size: clamp(2rem, 5vw, 3.5rem);
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: -0.03em;
                    line-height: 0.95;
                    margin: 0 0 1rem;
                }

                .section-kicker {
                    font-family: monospace;
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: #00ff41;
                    margin-bottom: 1.5rem;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        right: 1rem;
                        background: #111;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 12px;
                        padding: 1.5rem;
                        gap: 1.2rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global
                css={css!(
                    r#"
                    html, body {
                        margin: 0;
                        background: #050505;
                        color: #ffffff;
                        font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                        -webkit-font-smoothing: antialiased;
                    }

                    a {
                        color: inherit;
                    }
                    "#
                )}
            />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    #[cfg(debug_assertions)]
    if let Err(err) = pricing::catalog::validate(&pricing::catalog::QUOTE_GROUPS) {
        log::error!("quote catalog failed validation: {err}");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
