//! Reusable Dioxus RSX components for the GreenShift pages.

mod calculator_form;
mod chart_container;
mod city_search_input;
mod error_display;
mod footer;
mod history_card;
mod loading_spinner;
mod results_display;

pub use calculator_form::CalculatorForm;
pub use chart_container::ChartContainer;
pub use city_search_input::CitySearchInput;
pub use error_display::ErrorDisplay;
pub use footer::Footer;
pub use history_card::HistoryCard;
pub use loading_spinner::LoadingSpinner;
pub use results_display::ResultsDisplay;
