use log::{info, warn};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::typeform_fallback_url;
use crate::embed::EmbedSlot;
use crate::locale::{use_locale, Localized};
use crate::Route;

const HEADING: Localized = Localized::new("Apply to work with us", "Хамтран ажиллах хүсэлт");
const TROUBLE: Localized = Localized::new(
    "Having trouble loading the form? ",
    "Форм ачааллахгүй байна уу? ",
);
const OPEN_IN_TAB: Localized = Localized::new("Open it in a new tab", "Шинэ цонхонд нээх");

/// Where the visitor lands once the form reports a submission.
pub fn after_submit() -> Route {
    Route::Thanks
}

/// Something that can take the visitor to another page.
pub trait Redirect {
    fn redirect(&self, route: &Route);
}

/// How a finished application leaves the page.
pub enum SubmitTarget {
    Router(Navigator),
    /// Full page load, for when no router navigator is in scope.
    PageLoad,
}

impl From<Option<Navigator>> for SubmitTarget {
    fn from(navigator: Option<Navigator>) -> Self {
        navigator.map_or(SubmitTarget::PageLoad, SubmitTarget::Router)
    }
}

impl Redirect for SubmitTarget {
    fn redirect(&self, route: &Route) {
        match self {
            SubmitTarget::Router(navigator) => navigator.push(route),
            SubmitTarget::PageLoad => {
                if let Some(window) = web_sys::window() {
                    if let Err(err) = window.location().set_href(&route.to_path()) {
                        warn!("could not leave the apply page: {:?}", err);
                    }
                }
            }
        }
    }
}

pub fn finish_application(target: &dyn Redirect) {
    info!("application submitted");
    target.redirect(&after_submit());
}

#[function_component(Apply)]
pub fn apply() -> Html {
    let (locale, _) = use_locale();
    let container = use_node_ref();
    let navigator = use_navigator();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let slot = container.cast::<HtmlElement>().map(|el| {
                    let target = SubmitTarget::from(navigator);
                    let on_submit = Callback::from(move |_: ()| finish_application(&target));
                    EmbedSlot::mount(el, on_submit)
                });
                move || drop(slot)
            },
            (),
        );
    }

    html! {
        <main class="apply-page">
            <h1 class="apply-title">{ locale.t(&HEADING) }</h1>
            <div class="apply-frame">
                <div ref={container} class="apply-widget"></div>
            </div>
            <p class="apply-fallback">
                { locale.t(&TROUBLE) }
                <a href={typeform_fallback_url()} target="_blank" rel="noreferrer">
                    { locale.t(&OPEN_IN_TAB) }
                </a>
                {"."}
            </p>
            <style>
                {r#"
                    .apply-page {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 2.5rem 2rem;
                        position: relative;
                    }
                    .apply-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .apply-frame {
                        border: 1px solid rgba(148, 163, 184, 0.25);
                        border-radius: 1rem;
                        padding: 1rem;
                        background: rgba(15, 23, 42, 0.4);
                        backdrop-filter: blur(8px);
                    }
                    html:not(.dark) .apply-frame {
                        background: rgba(255, 255, 255, 0.7);
                    }
                    .apply-widget {
                        width: 100%;
                        height: 78vh;
                    }
                    .apply-fallback {
                        font-size: 0.75rem;
                        color: #94a3b8;
                        margin-top: 0.75rem;
                    }
                    .apply-fallback a {
                        color: inherit;
                        text-decoration: underline;
                    }
                    @media (max-width: 768px) {
                        .apply-page {
                            padding: 2.5rem 1.5rem;
                        }
                        .apply-frame {
                            padding: 0.75rem;
                        }
                    }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Route>>);

    impl Redirect for Recorder {
        fn redirect(&self, route: &Route) {
            self.0.borrow_mut().push(route.clone());
        }
    }

    #[test]
    fn finishing_the_form_redirects_once_to_thanks() {
        let target = Recorder::default();
        finish_application(&target);
        assert_eq!(target.0.borrow().len(), 1);
        assert!(target.0.borrow()[0] == Route::Thanks);
    }

    #[test]
    fn no_router_falls_back_to_a_page_load() {
        assert!(matches!(SubmitTarget::from(None), SubmitTarget::PageLoad));
    }

    #[test]
    fn submission_leads_to_thanks_page() {
        assert_eq!(after_submit().to_path(), "/thanks");
        assert!(Route::recognize("/thanks") == Some(Route::Thanks));
    }
}
