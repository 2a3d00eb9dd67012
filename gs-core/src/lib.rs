//! Core types and view-state logic for the GreenShift carbon calculator.
//!
//! Everything in this crate is target independent so it compiles both into
//! the WASM frontend and the native CLI:
//! - `models`: wire types shared with the backend
//! - `polyline`: precision-5 polyline codec for route geometry
//! - `presentation`: map center and chart bars for a computed route
//! - `history`: grouping of calculation records into route cards
//! - `debounce`, `search`, `form`, `lifecycle`: the state machines the UI
//!   drives from its signals
//! - `labels`: display formatting

pub mod debounce;
pub mod form;
pub mod history;
pub mod labels;
pub mod lifecycle;
pub mod models;
pub mod polyline;
pub mod presentation;
pub mod search;

pub use models::{
    CalculationRecord, City, FootprintAnalysisEntry, LatLon, RouteRequest, RouteResult,
    SelectedCity,
};

/// Minimum number of characters before a city lookup is issued.
pub const MIN_QUERY_CHARS: usize = 3;

/// Quiet period for the search fields, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 400;
