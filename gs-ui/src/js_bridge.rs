//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The route map (Leaflet) and the footprint chart (D3.js) live in
//! `assets/js/*.js`. They are evaluated as globals once both libraries have
//! loaded and exposed via `window.*`. This module serializes Rust data to
//! JSON and calls those globals.

use wasm_bindgen::JsValue;

// Embed the map and chart JS files at compile time
static ROUTE_MAP_JS: &str = include_str!("../assets/js/route-map.js");
static FOOTPRINT_CHART_JS: &str = include_str!("../assets/js/footprint-chart.js");

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const D3_JS: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GreenShift JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Inject Leaflet and D3 (if the host page has not) and evaluate the map and
/// chart scripts once both are available. Call once at app startup.
///
/// The scripts are evaluated at global scope via indirect eval, then their
/// entry points are promoted to `window.*`.
pub fn init_scripts() {
    let all_js = [ROUTE_MAP_JS, FOOTPRINT_CHART_JS].join("\n");
    call_js(&format!(
        "window.__gsScripts = {};",
        js_string(&all_js)
    ));

    call_js(&format!(
        r#"
        (function() {{
            function ensure(tag, attr, url) {{
                if (document.querySelector(tag + '[' + attr + '="' + url + '"]')) return;
                var el = document.createElement(tag);
                if (tag === 'link') {{ el.rel = 'stylesheet'; }}
                el[attr] = url;
                document.head.appendChild(el);
            }}
            if (typeof L === 'undefined') {{
                ensure('link', 'href', {leaflet_css});
                ensure('script', 'src', {leaflet_js});
            }}
            if (typeof d3 === 'undefined') {{
                ensure('script', 'src', {d3_js});
            }}
            var waitForLibs = setInterval(function() {{
                if (typeof L !== 'undefined' && typeof d3 !== 'undefined') {{
                    clearInterval(waitForLibs);
                    (0, eval)(window.__gsScripts);
                    delete window.__gsScripts;
                    if (typeof renderRouteMap !== 'undefined') window.renderRouteMap = renderRouteMap;
                    if (typeof destroyRouteMap !== 'undefined') window.destroyRouteMap = destroyRouteMap;
                    if (typeof renderFootprintChart !== 'undefined') window.renderFootprintChart = renderFootprintChart;
                    window.__gsReady = true;
                    console.log('GreenShift map and chart initialized');
                }}
            }}, 100);
        }})();
        "#,
        leaflet_css = js_string(LEAFLET_CSS),
        leaflet_js = js_string(LEAFLET_JS),
        d3_js = js_string(D3_JS),
    ));
}

/// Poll until the scripts are initialized and `container_id` exists, then
/// call `window.<function>(container_id, data_json, config_json)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var id = {id};
            var poll = setInterval(function() {{
                if (window.__gsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    try {{
                        window.{function}(id, {data}, {config});
                    }} catch(e) {{ console.error('[GreenShift] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        function = function,
        data = js_string(data_json),
        config = js_string(config_json),
    ));
}

/// Draw the decoded route on a Leaflet map.
///
/// `path_json` is an array of `[lat, lon]` pairs; `config_json` carries
/// `center`, `zoom`, `color` and `weight`.
pub fn render_route_map(container_id: &str, path_json: &str, config_json: &str) {
    render_when_ready("renderRouteMap", container_id, path_json, config_json);
}

/// Draw the modal-vs-footprint bar chart.
///
/// `bars_json` is an array of `{label, value}`; `config_json` carries
/// `yAxisLabel` and `color`.
pub fn render_footprint_chart(container_id: &str, bars_json: &str, config_json: &str) {
    render_when_ready("renderFootprintChart", container_id, bars_json, config_json);
}

/// Tear down the Leaflet map (if any) attached to `container_id`.
pub fn destroy_route_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyRouteMap !== 'undefined') {{ window.destroyRouteMap({id}); }}",
        id = js_string(container_id)
    ));
}

/// Blocking browser confirmation dialog. Returns `false` if it cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            web_sys::console::warn_2(&JsValue::from_str("alert failed:"), &e);
        }
    }
}
