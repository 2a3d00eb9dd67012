//! State machine behind one city search field.
//!
//! ```text
//! idle ──(debounced text ≥ 3 chars, not the confirmed name)──▶ searching
//! searching ──(≥ 1 match)──▶ results      searching ──(0 matches / error)──▶ empty
//! results ──(select)──▶ confirmed          any ──(edit)──▶ idle
//! ```
//!
//! The field never talks to the network itself. [`CitySearch::begin_query`]
//! hands out a stamped [`SearchQuery`]; the caller performs the lookup and
//! reports back through [`CitySearch::apply_results`], which ignores
//! answers to superseded queries.

use crate::lifecycle::RequestSeq;
use crate::models::{City, SelectedCity};
use crate::MIN_QUERY_CHARS;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Results(Vec<City>),
    Empty,
    Confirmed,
}

/// A lookup the caller should issue against the search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub seq: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CitySearch {
    text: String,
    selected: Option<SelectedCity>,
    phase: SearchPhase,
    seq: RequestSeq,
}

impl Default for CitySearch {
    fn default() -> Self {
        Self {
            text: String::new(),
            selected: None,
            phase: SearchPhase::Idle,
            seq: RequestSeq::default(),
        }
    }
}

/// True when `text` is long enough to be sent to the search endpoint.
pub fn is_searchable(text: &str) -> bool {
    text.chars().count() >= MIN_QUERY_CHARS
}

impl CitySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn selection(&self) -> Option<&SelectedCity> {
        self.selected.as_ref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.selected.is_some()
    }

    /// Matches of the last lookup; empty unless the list is showing results.
    pub fn results(&self) -> &[City] {
        match &self.phase {
            SearchPhase::Results(cities) => cities,
            _ => &[],
        }
    }

    /// Whether a dropdown (matches or the "no matches" hint) is visible.
    pub fn is_list_open(&self) -> bool {
        matches!(self.phase, SearchPhase::Results(_) | SearchPhase::Empty)
    }

    /// The user changed the field text.
    ///
    /// Any shown results are cleared and in-flight lookups become stale.
    /// A selection whose name no longer matches the text is dropped.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.name != self.text)
        {
            self.selected = None;
        }
        self.seq.issue();
        self.phase = if self.selected.is_some() {
            SearchPhase::Confirmed
        } else {
            SearchPhase::Idle
        };
    }

    /// The debounced text settled. Returns the lookup to perform, if any.
    ///
    /// Nothing is issued when the debounced value lags the field, when it is
    /// shorter than [`MIN_QUERY_CHARS`], or when it equals the confirmed
    /// selection's name.
    pub fn begin_query(&mut self, debounced: &str) -> Option<SearchQuery> {
        if debounced != self.text || !is_searchable(debounced) {
            return None;
        }
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.name == debounced)
        {
            return None;
        }
        let seq = self.seq.issue();
        self.phase = SearchPhase::Searching;
        Some(SearchQuery {
            seq,
            text: debounced.to_string(),
        })
    }

    /// Apply the outcome of the lookup stamped `seq`.
    ///
    /// Returns `false` when the answer is stale and was dropped. Failures
    /// degrade to an empty list; reporting them is up to the caller.
    pub fn apply_results(&mut self, seq: u64, outcome: Result<Vec<City>, String>) -> bool {
        if !self.seq.is_current(seq) {
            log::debug!("Dropping stale city search response #{}", seq);
            return false;
        }
        self.phase = match outcome {
            Ok(cities) if cities.is_empty() => SearchPhase::Empty,
            Ok(cities) => SearchPhase::Results(cities),
            Err(_) => SearchPhase::Empty,
        };
        true
    }

    /// Commit `city` as this field's endpoint.
    pub fn select(&mut self, city: &City) -> SelectedCity {
        let selected = SelectedCity::from(city);
        self.text = selected.name.clone();
        self.selected = Some(selected.clone());
        self.phase = SearchPhase::Confirmed;
        self.seq.issue();
        selected
    }

    /// Close the dropdown without touching the selection.
    pub fn dismiss(&mut self) {
        match self.phase {
            SearchPhase::Results(_) | SearchPhase::Empty | SearchPhase::Searching => {
                self.seq.issue();
                self.phase = SearchPhase::Idle;
            }
            SearchPhase::Idle | SearchPhase::Confirmed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatLon;

    fn city(name: &str) -> City {
        City {
            name: name.to_string(),
            coordinates: LatLon(-23.55, -46.63),
        }
    }

    fn typed(text: &str) -> CitySearch {
        let mut search = CitySearch::new();
        search.edit(text);
        search
    }

    #[test]
    fn short_text_never_queries() {
        for text in ["", "S", "Sa", "Sã"] {
            let mut search = typed(text);
            assert_eq!(search.begin_query(text), None, "{:?} must not search", text);
            assert_eq!(search.phase(), &SearchPhase::Idle);
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // "São" is three characters but four bytes.
        let mut search = typed("São");
        assert!(search.begin_query("São").is_some());
        assert!(!is_searchable("Sã"));
    }

    #[test]
    fn settled_text_starts_search() {
        let mut search = typed("Curi");
        let query = search.begin_query("Curi").unwrap();
        assert_eq!(query.text, "Curi");
        assert_eq!(search.phase(), &SearchPhase::Searching);
    }

    #[test]
    fn typing_alone_never_shows_searching() {
        // Only an issued query moves the field to `Searching`; a field that
        // has nothing to send its lookup to stays idle.
        let search = typed("Curitiba");
        assert_eq!(search.phase(), &SearchPhase::Idle);
        assert!(!search.is_list_open());
    }

    #[test]
    fn lagging_debounced_text_is_ignored() {
        let mut search = typed("Curitiba");
        assert_eq!(search.begin_query("Curi"), None);
    }

    #[test]
    fn results_and_empty_transitions() {
        let mut search = typed("Curi");
        let query = search.begin_query("Curi").unwrap();
        assert!(search.apply_results(query.seq, Ok(vec![city("Curitiba, PR")])));
        assert_eq!(search.results().len(), 1);
        assert!(search.is_list_open());

        search.edit("Curx");
        assert!(search.results().is_empty(), "edit clears results");
        let query = search.begin_query("Curx").unwrap();
        search.apply_results(query.seq, Ok(vec![]));
        assert_eq!(search.phase(), &SearchPhase::Empty);
    }

    #[test]
    fn failure_degrades_to_empty() {
        let mut search = typed("Natal");
        let query = search.begin_query("Natal").unwrap();
        assert!(search.apply_results(query.seq, Err("502 Bad Gateway".to_string())));
        assert_eq!(search.phase(), &SearchPhase::Empty);
        assert!(search.results().is_empty());
    }

    #[test]
    fn out_of_order_response_is_discarded() {
        let mut search = typed("Rec");
        let older = search.begin_query("Rec").unwrap();
        search.edit("Recife");
        let newer = search.begin_query("Recife").unwrap();

        assert!(search.apply_results(newer.seq, Ok(vec![city("Recife, PE")])));
        assert!(!search.apply_results(older.seq, Ok(vec![city("Recreio, MG")])));
        assert_eq!(search.results()[0].name, "Recife, PE");
    }

    #[test]
    fn selecting_sets_text_and_clears_list() {
        let mut search = typed("Curi");
        let query = search.begin_query("Curi").unwrap();
        search.apply_results(query.seq, Ok(vec![city("Curitiba, PR"), city("Curimatá, PI")]));

        let chosen = search.results()[0].clone();
        let selected = search.select(&chosen);
        assert_eq!(search.text(), "Curitiba, PR");
        assert_eq!(selected.name, "Curitiba, PR");
        assert_eq!(selected.coords, chosen.coordinates);
        assert!(search.results().is_empty());
        assert!(!search.is_list_open());
        assert_eq!(search.phase(), &SearchPhase::Confirmed);
    }

    #[test]
    fn confirmed_name_does_not_search_again() {
        let mut search = typed("Curi");
        search.select(&city("Curitiba, PR"));
        assert_eq!(search.begin_query("Curitiba, PR"), None);
        assert!(search.is_confirmed());
    }

    #[test]
    fn late_response_after_selection_is_discarded() {
        let mut search = typed("Curi");
        let query = search.begin_query("Curi").unwrap();
        search.select(&city("Curitiba, PR"));
        assert!(!search.apply_results(query.seq, Ok(vec![city("Curimatá, PI")])));
        assert_eq!(search.phase(), &SearchPhase::Confirmed);
    }

    #[test]
    fn editing_confirmed_text_invalidates_selection() {
        let mut search = typed("Curi");
        search.select(&city("Curitiba, PR"));
        search.edit("Curitiba, P");
        assert!(!search.is_confirmed());
        assert!(search.begin_query("Curitiba, P").is_some());
    }

    #[test]
    fn retyping_the_name_requires_fresh_confirmation() {
        let mut search = typed("Curi");
        search.select(&city("Curitiba, PR"));
        search.edit("Curitiba, P");
        search.edit("Curitiba, PR");
        assert!(!search.is_confirmed());
        assert!(search.begin_query("Curitiba, PR").is_some());
    }

    #[test]
    fn dismiss_closes_list_but_keeps_selection() {
        let mut search = typed("Curi");
        search.select(&city("Curitiba, PR"));
        search.dismiss();
        assert!(search.is_confirmed());
        assert_eq!(search.phase(), &SearchPhase::Confirmed);

        let mut open = typed("Natal");
        let query = open.begin_query("Natal").unwrap();
        open.apply_results(query.seq, Ok(vec![city("Natal, RN")]));
        open.dismiss();
        assert!(!open.is_list_open());
        assert_eq!(open.text(), "Natal");
    }

    #[test]
    fn dismiss_while_searching_drops_the_answer() {
        let mut search = typed("Natal");
        let query = search.begin_query("Natal").unwrap();
        search.dismiss();
        assert!(!search.apply_results(query.seq, Ok(vec![city("Natal, RN")])));
        assert!(!search.is_list_open());
    }
}
