//! Bootstrap 5 modal integration.
//!
//! The widget is reached through the `bootstrap` global installed by the
//! bundle script in `index.html`. When that global is missing the dialog is
//! hidden by toggling the same classes and attributes the widget would, so
//! the component keeps working without it.

use gloo_console as console;
use gloo_events::EventListener;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};
use yew::{Callback, NodeRef};

const SHOWN_EVENT: &str = "shown.bs.modal";
const HIDDEN_EVENT: &str = "hidden.bs.modal";

/// Result of asking a modal to hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideOutcome {
    /// No element with the requested id is in the page.
    Missing,
    /// The widget is animating out; `hidden.bs.modal` follows.
    Hiding,
    /// The widget was unavailable and the element was hidden in place.
    HiddenDirectly,
}

/// Forwards the widget's shown/hidden events of the element behind
/// `modal_ref`. The listeners stay attached until the returned values drop.
pub fn watch(modal_ref: &NodeRef, on_shown: Callback<()>, on_hidden: Callback<()>) -> Vec<EventListener> {
    let Some(element) = modal_ref.cast::<Element>() else {
        return Vec::new();
    };
    vec![
        EventListener::new(&element, SHOWN_EVENT, move |_| on_shown.emit(())),
        EventListener::new(&element, HIDDEN_EVENT, move |_| on_hidden.emit(())),
    ]
}

/// Hides the modal with DOM id `modal_id`.
pub fn hide(modal_id: &str) -> HideOutcome {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(modal_id))
    else {
        return HideOutcome::Missing;
    };

    match widget_instance(&element).and_then(|instance| call_method(&instance, "hide")) {
        Ok(()) => HideOutcome::Hiding,
        Err(err) => {
            console::warn!("Bootstrap modal unavailable, hiding in place:", err);
            hide_in_place(&element);
            HideOutcome::HiddenDirectly
        }
    }
}

/// Undoes what the widget leaves on the page after a programmatic hide:
/// the backdrop overlay, the scroll lock class and the inline body styles.
pub fn restore_body() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(backdrop)) = document.query_selector(".modal-backdrop") {
        backdrop.remove();
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1("modal-open");
        let style = body.style();
        let _ = style.remove_property("overflow");
        let _ = style.remove_property("padding-right");
    }
}

/// `bootstrap.Modal.getInstance(element)`, or a new `bootstrap.Modal` bound
/// to the element when none exists yet.
fn widget_instance(element: &Element) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() {
        return Err(JsValue::from_str("bootstrap is not loaded"));
    }
    let modal_class: Function = Reflect::get(&bootstrap, &JsValue::from_str("Modal"))?.dyn_into()?;

    let get_instance: Function =
        Reflect::get(&modal_class, &JsValue::from_str("getInstance"))?.dyn_into()?;
    let existing = get_instance.call1(&modal_class, element)?;
    if !existing.is_null() && !existing.is_undefined() {
        return Ok(existing);
    }
    Reflect::construct(&modal_class, &Array::of1(element))
}

fn call_method(target: &JsValue, name: &str) -> Result<(), JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    method.call0(target).map(|_| ())
}

fn hide_in_place(element: &Element) {
    let _ = element.class_list().remove_1("show");
    let _ = element.set_attribute("aria-hidden", "true");
    let _ = element.remove_attribute("aria-modal");
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}
