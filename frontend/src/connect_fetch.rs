use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::utils::get_window;

pub async fn get_json<R>(url: &str) -> Result<R, JsValue>
    where R: serde::de::DeserializeOwned
{
    let data = send(url, "GET", None).await?;
    Ok(serde_wasm_bindgen::from_value::<R>(data)?)
}

pub async fn post_json<R, T>(url: &str, data: &T) -> Result<R, JsValue>
    where
        T: serde::Serialize,
        R: serde::de::DeserializeOwned
{
    let data = serde_wasm_bindgen::to_value(data)?;
    let data = send(url, "POST", Some(data)).await?;
    Ok(serde_wasm_bindgen::from_value::<R>(data)?)
}

async fn send(url: &str, method: &str, data: Option<JsValue>) -> Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    let has_body = data.is_some();
    if let Some(data) = data {
        let body = js_sys::JSON::stringify(&data)?;
        opts.set_body(&body);
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if has_body {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = get_window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("{method} {url}: status {}", resp.status())));
    }

    JsFuture::from(resp.json()?).await
}
