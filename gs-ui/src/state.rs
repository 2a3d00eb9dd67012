//! Application state provided via Dioxus context.
//!
//! `AppState` only carries what every page needs: the backend client built
//! from the single configured base URL. View state (form, results, history)
//! belongs to the page that shows it and is dropped on navigation.

use dioxus_logger::tracing::{error, info};
use gs_api::{ApiClient, ApiConfig};

#[derive(Clone)]
pub struct AppState {
    /// Backend client (None if the base URL was unusable)
    pub api: Option<ApiClient>,
    /// Why `api` is missing
    pub config_error: Option<String>,
}

impl AppState {
    pub fn new(base_url: &str) -> Self {
        match ApiConfig::new(base_url).and_then(ApiClient::new) {
            Ok(api) => {
                info!("Using backend at {}", api.config().base_url());
                Self {
                    api: Some(api),
                    config_error: None,
                }
            }
            Err(e) => {
                error!("Backend client unavailable: {}", e);
                Self {
                    api: None,
                    config_error: Some(e.to_string()),
                }
            }
        }
    }
}
