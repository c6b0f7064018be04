use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod animation;
mod config;
mod embed;
mod hooks;
mod locale;
mod pricing;
mod theme;
mod components {
    pub mod counter;
    pub mod footer;
    pub mod header;
    pub mod magnetic;
    pub mod plan_card;
    pub mod reveal;
    pub mod starfield;
}
mod pages {
    pub mod apply;
    pub mod home;
    pub mod thanks;
}

use components::{footer::Footer, header::Header, starfield::GlobalBackground};
use locale::{LocaleContext, LocaleState};
use pages::{
    apply::Apply,
    home::Home,
    thanks::{NotFound, Thanks},
};
use theme::ThemePreference;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/apply")]
    Apply,
    #[at("/thanks")]
    Thanks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Apply => {
            info!("Rendering Apply page");
            html! { <Apply /> }
        }
        Route::Thanks => {
            info!("Rendering Thanks page");
            html! { <Thanks /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let locale = use_reducer(LocaleState::default);
    let theme = use_state_eq(theme::init);

    use_effect_with_deps(
        |theme: &ThemePreference| {
            theme::apply(*theme);
            if let Err(err) = theme::persist(*theme) {
                warn!("theme preference not saved: {}", err);
            }
            || ()
        },
        *theme,
    );

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    html! {
        <ContextProvider<LocaleContext> context={locale}>
            <BrowserRouter>
                <div class="site-root">
                    <GlobalBackground />
                    <div class="site-content">
                        <Header theme={*theme} on_toggle_theme={toggle_theme} />
                        <Switch<Route> render={switch} />
                        <Footer />
                    </div>
                </div>
            </BrowserRouter>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                        background: #fff;
                        color: #0f172a;
                    }
                    html.dark body {
                        background: #020617;
                        color: #f1f5f9;
                    }
                    .site-root {
                        min-height: 100vh;
                        position: relative;
                    }
                    .site-content {
                        position: relative;
                        z-index: 10;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        html {
                            scroll-behavior: auto;
                        }
                    }
                "#}
            </style>
        </ContextProvider<LocaleContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert!(Route::recognize("/") == Some(Route::Home));
        assert!(Route::recognize("/apply") == Some(Route::Apply));
        assert!(Route::recognize("/nope") == Some(Route::NotFound));
        assert_eq!(Route::Apply.to_path(), "/apply");
    }
}
