use anyhow::{Result, anyhow};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Report a failure on the browser console.
pub(crate) fn console_error(e: &anyhow::Error) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[choropleth] {e:#}")));
}

/// GET `url` and return the body text; non-2xx statuses are errors.
pub(crate) async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("window not available"))?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url} failed: {e:?}"))?;

    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| anyhow!("failed to cast fetch response for {url}"))?;

    if !response.ok() {
        return Err(anyhow!("HTTP {} while fetching {url}", response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| anyhow!("response.text() failed for {url}: {e:?}"))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow!("await response text failed for {url}: {e:?}"))?;
    text_value
        .as_string()
        .ok_or_else(|| anyhow!("response text for {url} was not a string"))
}

/// Both fetches run concurrently; the first failure aborts.
pub(crate) async fn fetch_both(a: &str, b: &str) -> Result<(String, String)> {
    futures::future::try_join(fetch_text(a), fetch_text(b)).await
}
