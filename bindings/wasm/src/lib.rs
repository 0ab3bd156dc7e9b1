use wasm_bindgen::prelude::*;

use choropleth::{Config, RenderContext, parse_records, parse_topology};

mod common;
mod dom;

use common::*;

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Fetch both datasets, draw the map into the SVG matching `selector`
/// (default `.choropleth-map`), and wire the tooltip and pan/zoom.
///
/// Resolves `false` after logging to the console when loading or drawing
/// fails; nothing is drawn in that case.
#[wasm_bindgen]
pub async fn mount(selector: Option<String>, education_url: Option<String>, counties_url: Option<String>) -> bool {
    let mut config = Config::default();
    if let Some(url) = education_url { config.education_url = url }
    if let Some(url) = counties_url { config.counties_url = url }
    let selector = selector.unwrap_or_else(|| dom::DEFAULT_SELECTOR.to_string());

    match try_mount(&selector, config).await {
        Ok(()) => true,
        Err(e) => {
            console_error(&e);
            false
        }
    }
}

async fn try_mount(selector: &str, config: Config) -> anyhow::Result<()> {
    let (education, counties) = fetch_both(&config.education_url, &config.counties_url).await?;
    let context = build_context(config, &education, &counties)?;
    dom::mount(selector, context)
}

fn build_context(config: Config, education: &str, counties: &str) -> anyhow::Result<RenderContext> {
    let records = parse_records(education.as_bytes())?;
    let topology = parse_topology(counties.as_bytes())?;
    RenderContext::new(config, records, &topology)
}

/// Render already-loaded datasets to SVG text (no interactivity).
/// UI can set innerHTML or create a Blob.
#[wasm_bindgen(js_name = "render_svg")]
pub fn render_svg(education_json: &str, counties_json: &str) -> Result<String, JsValue> {
    let context = build_context(Config::default(), education_json, counties_json).map_err(js_err)?;
    context.scene().to_svg_string().map_err(js_err)
}
