use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <span class="footer-brand">{config::SITE_NAME}{"."}</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Work} classes="footer-link">{"Work"}</Link<Route>>
                    <Link<Route> to={Route::Pricing} classes="footer-link">{"Pricing"}</Link<Route>>
                    <a class="footer-link" href={config::mailto_link()}>{"Contact"}</a>
                </div>
                <span class="footer-note">{format!("© {year} {}. All systems booked.", config::SITE_NAME)}</span>
            </div>

            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 2.5rem 2rem;
                }

                .footer-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }

                .footer-brand {
                    font-weight: 800;
                    font-size: 1.1rem;
                    letter-spacing: -0.03em;
                }

                .footer-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-link {
                    color: #999;
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                }

                .footer-link:hover {
                    color: #fff;
                }

                .footer-note {
                    font-family: monospace;
                    font-size: 0.6rem;
                    color: #555;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                "#}
            </style>
        </footer>
    }
}
