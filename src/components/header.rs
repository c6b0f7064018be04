use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config::BRAND;
use crate::hooks::use_elevated_header;
use crate::locale::{use_locale, LocaleAction, Localized};
use crate::theme::ThemePreference;
use crate::Route;

pub struct NavItem {
    pub id: &'static str,
    pub label: Localized,
}

pub const NAV: &[NavItem] = &[
    NavItem { id: "work", label: Localized::new("Work", "Төслүүд") },
    NavItem { id: "services", label: Localized::new("Services", "Үйлчилгээ") },
    NavItem { id: "results", label: Localized::new("Results", "Үр дүн") },
    NavItem { id: "process", label: Localized::new("Process", "Процесс") },
    NavItem { id: "pricing", label: Localized::new("Pricing", "Үнэ") },
];

pub const CONTACT: Localized = Localized::new("Contact", "Холбогдох");
const MENU: Localized = Localized::new("Menu", "Цэс");
pub const GET_PROPOSAL: Localized = Localized::new("Get Proposal", "Саналаа авах");

/// Section anchors only resolve on the landing page; elsewhere they go through `/`.
pub fn section_href(on_home: bool, id: &str) -> String {
    if on_home {
        format!("#{}", id)
    } else {
        format!("/#{}", id)
    }
}

/// Unmatched paths count as home so anchors stay local while the router settles.
pub fn is_home(route: Option<&Route>) -> bool {
    matches!(route, Some(Route::Home) | None)
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: ThemePreference,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (locale, dispatch) = use_locale();
    let elevated = use_elevated_header();
    let menu_open = use_bool_toggle(false);
    let route = use_route::<Route>();
    let on_home = is_home(route.as_ref());

    let toggle_language = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(LocaleAction::ToggleLanguage))
    };
    let toggle_currency = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(LocaleAction::ToggleCurrency))
    };
    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let theme_icon = if props.theme.is_dark() { "☀️" } else { "🌙" };

    let links = |on_click: Option<Callback<MouseEvent>>| -> Html {
        NAV.iter()
            .map(|item| {
                html! {
                    <a
                        href={section_href(on_home, item.id)}
                        class="nav-link"
                        onclick={on_click.clone()}
                    >
                        { locale.t(&item.label) }
                    </a>
                }
            })
            .collect()
    };

    let toggles = html! {
        <>
            <button class="pill-button" onclick={toggle_language.clone()} aria-label="Toggle language">
                { locale.language.code() }
            </button>
            <button class="pill-button" onclick={toggle_currency.clone()} aria-label="Toggle currency">
                { locale.currency.code() }
            </button>
            <button class="pill-button" onclick={toggle_theme.clone()} aria-label="Toggle theme">
                { theme_icon }
            </button>
        </>
    };

    html! {
        <header class={classes!("site-header", elevated.then_some("elevated"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="brand">
                    { BRAND }
                </Link<Route>>

                <nav class="header-nav">
                    { links(None) }
                    <Link<Route> to={Route::Apply} classes="nav-link">
                        { locale.t(&CONTACT) }
                    </Link<Route>>
                </nav>

                <div class="header-actions">
                    { toggles.clone() }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Open menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            if *menu_open {
                <>
                <div class="drawer-overlay" onclick={close_menu.clone()} />
                <aside class="drawer" aria-label="Mobile menu">
                    <div class="drawer-head">
                        <span>{ locale.t(&MENU) }</span>
                        <button class="pill-button" onclick={close_menu.clone()} aria-label="Close menu">{"✕"}</button>
                    </div>
                    <div class="drawer-toggles">{ toggles.clone() }</div>
                    <div class="drawer-links">
                        { links(Some(close_menu.clone())) }
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Apply} classes="drawer-cta">
                                { locale.t(&GET_PROPOSAL) }{" →"}
                            </Link<Route>>
                        </div>
                    </div>
                </aside>
                </>
            }

            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        backdrop-filter: blur(12px);
                        background: rgba(2, 6, 23, 0.6);
                        border-bottom: 1px solid rgba(30, 41, 59, 0.6);
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.elevated {
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.2), 0 2px 4px -2px rgba(0, 0, 0, 0.2);
                    }
                    html:not(.dark) .site-header {
                        background: rgba(255, 255, 255, 0.7);
                        border-bottom-color: rgba(226, 232, 240, 0.6);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        font-weight: 700;
                        font-size: 1.125rem;
                        letter-spacing: -0.01em;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: inherit;
                        text-decoration: none;
                    }
                    .header-nav {
                        display: flex;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .nav-link {
                        color: inherit;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        opacity: 0.8;
                    }
                    .header-actions {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .pill-button {
                        border: 1px solid rgba(148, 163, 184, 0.4);
                        border-radius: 0.75rem;
                        background: transparent;
                        color: inherit;
                        padding: 0.375rem 0.75rem;
                        font-size: 0.75rem;
                        cursor: pointer;
                    }
                    .pill-button:hover {
                        background: rgba(15, 23, 42, 0.8);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: 1px solid rgba(148, 163, 184, 0.4);
                        border-radius: 0.75rem;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        display: block;
                        width: 18px;
                        height: 2px;
                        background: currentColor;
                    }
                    .drawer-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                        animation: fade-in 0.2s ease-out;
                    }
                    .drawer {
                        position: fixed;
                        right: 0;
                        top: 0;
                        z-index: 50;
                        height: 100vh;
                        width: 20rem;
                        overflow-y: auto;
                        padding: 1.5rem;
                        background: #0f172a;
                        border-left: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.5rem 0 0 0.5rem;
                        animation: slide-in 0.35s cubic-bezier(0.2, 0.9, 0.3, 1);
                    }
                    .drawer-head {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }
                    .drawer-toggles {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .drawer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .drawer-links .nav-link {
                        border-radius: 0.5rem;
                        padding: 0.5rem;
                        font-weight: 600;
                    }
                    .drawer-cta {
                        display: inline-flex;
                        margin-top: 0.5rem;
                        border-radius: 0.75rem;
                        background: #fff;
                        color: #000;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    @keyframes slide-in {
                        from { transform: translateX(320px); }
                        to { transform: translateX(0); }
                    }
                    @keyframes fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .header-nav, .header-actions {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_route_through_home_off_the_landing_page() {
        assert_eq!(section_href(true, "pricing"), "#pricing");
        assert_eq!(section_href(false, "pricing"), "/#pricing");
    }

    #[test]
    fn only_the_landing_route_uses_local_anchors() {
        assert!(is_home(Some(&Route::Home)));
        assert!(is_home(None));
        assert!(!is_home(Some(&Route::Apply)));
        assert!(!is_home(Some(&Route::Thanks)));
        assert_eq!(section_href(is_home(Some(&Route::Apply)), "work"), "/#work");
    }

    #[test]
    fn every_section_has_both_languages() {
        for item in NAV {
            assert!(!item.label.en.is_empty() && !item.label.mn.is_empty(), "{}", item.id);
        }
    }
}
