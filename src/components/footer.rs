use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::{is_home, section_href, NAV};
use crate::config::BRAND;
use crate::locale::{use_locale, Localized};
use crate::Route;

const RIGHTS: Localized = Localized::new("All rights reserved.", "Бүх эрх хуулиар хамгаалагдсан.");

#[function_component(Footer)]
pub fn footer() -> Html {
    let (locale, _) = use_locale();
    let route = use_route::<Route>();
    let on_home = is_home(route.as_ref());
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-copy">
                    { format!("© {} {}. {}", year, BRAND, locale.t(&RIGHTS)) }
                </div>
                <div class="footer-links">
                    { for NAV.iter().map(|item| html! {
                        <a href={section_href(on_home, item.id)}>{ locale.t(&item.label) }</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        border-top: 1px solid rgba(30, 41, 59, 1);
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 2.5rem 2rem;
                        font-size: 0.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }
                    .footer-copy {
                        opacity: 0.8;
                    }
                    .footer-links {
                        display: flex;
                        gap: 2rem;
                        opacity: 0.8;
                    }
                    .footer-links a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        opacity: 1;
                    }
                    @media (max-width: 768px) {
                        .footer-inner {
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                        .footer-links {
                            flex-wrap: wrap;
                            justify-content: center;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
