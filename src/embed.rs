//! Typeform widget binding for the apply page.
//!
//! The embed script from `index.html` exposes `window.tf`. It loads with
//! `async`, so mounting retries for a short while before giving up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};
use web_sys::{window, HtmlElement};
use yew::Callback;

use crate::config::{TYPEFORM_FORM_ID, TYPEFORM_SOURCE};

const MOUNT_ATTEMPTS: u32 = 10;
const RETRY_MS: u32 = 300;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = tf, js_name = createWidget, catch)]
    fn create_widget(form_id: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("typeform embed script is not loaded")]
    ScriptMissing,
    #[error("could not build widget options: {0}")]
    Options(String),
    #[error("typeform refused to create the widget: {0}")]
    Rejected(String),
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions<'a> {
    pub auto_focus: bool,
    pub hidden: HiddenFields<'a>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct HiddenFields<'a> {
    pub source: &'a str,
}

impl Default for WidgetOptions<'static> {
    fn default() -> Self {
        Self {
            auto_focus: true,
            hidden: HiddenFields { source: TYPEFORM_SOURCE },
        }
    }
}

fn script_loaded() -> bool {
    window()
        .and_then(|w| Reflect::get(&w, &JsValue::from_str("tf")).ok())
        .map(|tf| !tf.is_undefined() && !tf.is_null())
        .unwrap_or(false)
}

/// A live widget. Unmounts itself when dropped.
pub struct Widget {
    handle: JsValue,
    _on_submit: Closure<dyn FnMut(JsValue)>,
}

impl Widget {
    pub fn create(container: &HtmlElement, on_submit: Callback<()>) -> Result<Self, EmbedError> {
        if !script_loaded() {
            return Err(EmbedError::ScriptMissing);
        }

        let options = serde_wasm_bindgen::to_value(&WidgetOptions::default())
            .map_err(|err| EmbedError::Options(err.to_string()))?;

        let on_submit = Closure::wrap(Box::new(move |_event: JsValue| {
            on_submit.emit(());
        }) as Box<dyn FnMut(JsValue)>);

        Reflect::set(&options, &JsValue::from_str("container"), container)
            .and_then(|_| Reflect::set(&options, &JsValue::from_str("onSubmit"), on_submit.as_ref()))
            .map_err(|err| EmbedError::Options(format!("{:?}", err)))?;

        let handle = create_widget(TYPEFORM_FORM_ID, &options)
            .map_err(|err| EmbedError::Rejected(format!("{:?}", err)))?;

        Ok(Self {
            handle,
            _on_submit: on_submit,
        })
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        let unmount = Reflect::get(&self.handle, &JsValue::from_str("unmount"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok());
        if let Some(unmount) = unmount {
            let _ = unmount.call0(&self.handle);
        }
    }
}

/// Owns the widget for one mounted apply page, including any pending retries.
pub struct EmbedSlot {
    widget: Rc<RefCell<Option<Widget>>>,
    cancelled: Rc<Cell<bool>>,
}

impl EmbedSlot {
    pub fn mount(container: HtmlElement, on_submit: Callback<()>) -> Self {
        let widget = Rc::new(RefCell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        {
            let widget = widget.clone();
            let cancelled = cancelled.clone();
            wasm_bindgen_futures::spawn_local(async move {
                for attempt in 1..=MOUNT_ATTEMPTS {
                    if cancelled.get() {
                        return;
                    }
                    match Widget::create(&container, on_submit.clone()) {
                        Ok(created) => {
                            debug!("typeform widget mounted after {} attempt(s)", attempt);
                            *widget.borrow_mut() = Some(created);
                            return;
                        }
                        Err(EmbedError::ScriptMissing) if attempt < MOUNT_ATTEMPTS => {
                            TimeoutFuture::new(RETRY_MS).await;
                        }
                        Err(err) => {
                            warn!("typeform widget not mounted: {}", err);
                            return;
                        }
                    }
                }
            });
        }

        Self { widget, cancelled }
    }
}

impl Drop for EmbedSlot {
    fn drop(&mut self) {
        self.cancelled.set(true);
        self.widget.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_source_tag_in_typeform_shape() {
        let json = serde_json::to_value(WidgetOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "autoFocus": true,
                "hidden": { "source": "website" }
            })
        );
    }

    #[test]
    fn errors_read_well_in_logs() {
        assert_eq!(
            EmbedError::ScriptMissing.to_string(),
            "typeform embed script is not loaded"
        );
        assert_eq!(
            EmbedError::Rejected("bad id".into()).to_string(),
            "typeform refused to create the widget: bad id"
        );
    }
}
