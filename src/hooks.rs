use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config::HEADER_ELEVATION_OFFSET;

pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > HEADER_ELEVATION_OFFSET
}

/// Tracks whether the page has scrolled far enough to lift the header.
#[hook]
pub fn use_elevated_header() -> bool {
    let elevated = use_state_eq(|| false);

    {
        let elevated = elevated.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = window.clone().map(|win| {
                elevated.set(is_elevated(win.scroll_y().unwrap_or(0.0)));
                Closure::wrap(Box::new(move || {
                    elevated.set(is_elevated(win.scroll_y().unwrap_or(0.0)));
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    warn!("could not watch scroll position: {:?}", err);
                }
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    *elevated
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Flips to `true` the first time `threshold` of the node is on screen, then stops watching.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(move |node: &NodeRef| {
            let observer = node
                .cast::<Element>()
                .and_then(|element| observe_once(&element, threshold, in_view));

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        }, node);
    }

    *in_view
}

fn observe_once(
    element: &Element,
    threshold: f64,
    in_view: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let on_change = in_view.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let visible = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if visible {
            on_change.set(true);
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            // No observer support: show the content rather than leave it hidden.
            warn!("IntersectionObserver unavailable: {:?}", err);
            in_view.set(true);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_flat_at_the_top() {
        assert!(!is_elevated(0.0));
    }

    #[test]
    fn elevation_boundary_is_exclusive() {
        assert!(!is_elevated(8.0));
        assert!(is_elevated(9.0));
        assert!(is_elevated(8.5));
    }

    #[test]
    fn negative_overscroll_stays_flat() {
        assert!(!is_elevated(-40.0));
    }
}
