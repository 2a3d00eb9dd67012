//! Shared Dioxus components and JS bridge for the GreenShift web app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and D3.js chart via `js_sys::eval()`
//! - `state`: `AppState` context carrying the configured `ApiClient`
//! - `hooks`: `use_debounce` and a `setTimeout`-backed sleep
//! - `components`: RSX components (search fields, form, results, history cards)

pub mod components;
pub mod hooks;
pub mod js_bridge;
pub mod state;
