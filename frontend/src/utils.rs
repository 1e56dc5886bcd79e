use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Location, Window};

use shared::types::Panel;

use crate::constants::{ID_LOGIN_BOX, ID_REGISTER_BOX, TITLE_LOGIN, TITLE_REGISTER};

pub fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_location() -> Option<Location> {
    get_window().map(|w|w.location())
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn get_value_by_query(selectors: &str) -> String {
    query_selector(selectors)
        .map(|element|get_value_from_input(JsValue::from(element)))
        .unwrap_or_default()
}

pub fn get_input_value(name: &str) -> String {
    get_value_by_query(&format!("[name={name}]"))
}

pub fn query_selector(selectors: &str) -> Option<Element> {
    get_document().and_then(|d| d.query_selector(selectors).ok()).and_then(|e|e)
}

pub fn get_html_element(el: Option<Element>) -> Option<HtmlElement> {
    el.map(|el| el.dyn_into::<HtmlElement>().ok()).and_then(|el| el)
}

pub fn get_element_from_target(target: Option<EventTarget>) -> Option<HtmlElement> {
    target
        .map(|target| JsValue::from(target).dyn_ref::<HtmlElement>().cloned())
        .and_then(|t| t)
}

pub fn panel_element_id(panel: Panel) -> &'static str {
    match panel {
        Panel::Login => ID_LOGIN_BOX,
        Panel::Register => ID_REGISTER_BOX,
    }
}

pub fn panel_title(panel: Panel) -> &'static str {
    match panel {
        Panel::Login => TITLE_LOGIN,
        Panel::Register => TITLE_REGISTER,
    }
}

/// `#register` opens the registration panel, anything else the login one.
pub fn location_panel() -> Panel {
    get_location()
        .and_then(|l| l.hash().ok())
        .and_then(|hash| hash.parse::<Panel>().ok())
        .unwrap_or_default()
}
