//! HTTP client for the GreenShift footprint backend.
//!
//! One [`ApiClient`] owns the configured base URL and a `reqwest::Client`;
//! the web app and the CLI both go through it, so the backend location is
//! set in exactly one place ([`ApiConfig`]). Compiles natively and to
//! `wasm32-unknown-unknown` (reqwest uses `fetch` there).

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
