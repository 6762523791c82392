//! Consultation session state.
//!
//! `ConsultSession` is the state behind any frontend: current search text,
//! derived suggestions, the selected symptom set, the budget ceiling, and
//! the last result list. All transitions are synchronous and infallible;
//! an empty result list is a display state, never an error.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config;
use crate::models::{Recommendation, Symptom};
use crate::recommend;

pub struct ConsultSession<'a> {
    catalog: &'a Catalog,
    search_input: String,
    suggestions: Vec<&'a Symptom>,
    /// Selected symptom names in insertion order, no duplicates.
    selected_symptoms: Vec<String>,
    max_cost: u32,
    recommendations: Vec<Recommendation<'a>>,
    /// False until the first submit; distinguishes "never searched"
    /// from "searched and found nothing".
    show_results: bool,
}

impl<'a> ConsultSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            search_input: String::new(),
            suggestions: recommend::suggest_symptoms(catalog, ""),
            selected_symptoms: Vec::new(),
            max_cost: config::INITIAL_COST_CEILING,
            recommendations: Vec::new(),
            show_results: false,
        }
    }

    /// Update the search text and re-derive suggestions from it.
    pub fn set_search_input(&mut self, value: &str) {
        self.search_input = value.to_string();
        self.suggestions = recommend::suggest_symptoms(self.catalog, value);
        debug!(query = value, matches = self.suggestions.len(), "search updated");
    }

    /// Select a symptom. Duplicates are rejected; either way the search box
    /// clears and suggestions reset to the starter list.
    pub fn add_symptom(&mut self, name: &str) -> bool {
        let added = if self.selected_symptoms.iter().any(|s| s == name) {
            false
        } else {
            self.selected_symptoms.push(name.to_string());
            true
        };
        self.search_input.clear();
        self.suggestions = recommend::suggest_symptoms(self.catalog, "");
        debug!(symptom = name, added, "symptom selection");
        added
    }

    /// Drop a symptom from the selection. Returns false when it was not
    /// selected.
    pub fn remove_symptom(&mut self, name: &str) -> bool {
        let before = self.selected_symptoms.len();
        self.selected_symptoms.retain(|s| s != name);
        self.selected_symptoms.len() != before
    }

    pub fn set_max_cost(&mut self, max_cost: u32) {
        self.max_cost = max_cost;
    }

    /// Run the matcher over the current selection. A no-op returning false
    /// when nothing is selected; previous results stay visible in that case.
    pub fn submit(&mut self) -> bool {
        if self.selected_symptoms.is_empty() {
            return false;
        }
        self.recommendations =
            recommend::recommend(self.catalog, &self.selected_symptoms, self.max_cost);
        self.show_results = true;
        info!(
            selected = self.selected_symptoms.len(),
            max_cost = self.max_cost,
            results = self.recommendations.len(),
            "consultation search"
        );
        true
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn suggestions(&self) -> &[&'a Symptom] {
        &self.suggestions
    }

    pub fn selected_symptoms(&self) -> &[String] {
        &self.selected_symptoms
    }

    pub fn max_cost(&self) -> u32 {
        self.max_cost
    }

    pub fn recommendations(&self) -> &[Recommendation<'a>] {
        &self.recommendations
    }

    pub fn show_results(&self) -> bool {
        self.show_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ConsultSession<'static> {
        ConsultSession::new(Catalog::bundled())
    }

    #[test]
    fn new_session_starts_with_starter_suggestions() {
        let session = session();
        assert_eq!(session.suggestions().len(), 5);
        assert_eq!(session.suggestions()[0].name, "신체 비대칭");
        assert!(session.selected_symptoms().is_empty());
        assert_eq!(session.max_cost(), config::INITIAL_COST_CEILING);
        assert!(!session.show_results());
    }

    #[test]
    fn search_input_drives_suggestions() {
        let mut session = session();
        session.set_search_input("골절");
        assert_eq!(session.search_input(), "골절");
        assert_eq!(session.suggestions().len(), 5);
        assert_eq!(session.suggestions()[0].name, "골절의심");
    }

    #[test]
    fn add_symptom_clears_search_and_resets_suggestions() {
        let mut session = session();
        session.set_search_input("두통");
        assert!(session.add_symptom("두통"));
        assert_eq!(session.search_input(), "");
        assert_eq!(session.suggestions()[0].name, "신체 비대칭");
        assert_eq!(session.selected_symptoms(), ["두통"]);
    }

    #[test]
    fn duplicate_add_is_rejected_but_still_clears_search() {
        let mut session = session();
        assert!(session.add_symptom("두통"));
        session.set_search_input("두");
        assert!(!session.add_symptom("두통"));
        assert_eq!(session.selected_symptoms(), ["두통"]);
        assert_eq!(session.search_input(), "");
    }

    #[test]
    fn selection_keeps_insertion_order() {
        let mut session = session();
        session.add_symptom("수면장애");
        session.add_symptom("두통");
        session.add_symptom("만성피로");
        assert_eq!(session.selected_symptoms(), ["수면장애", "두통", "만성피로"]);
    }

    #[test]
    fn remove_symptom_reports_membership() {
        let mut session = session();
        session.add_symptom("두통");
        assert!(session.remove_symptom("두통"));
        assert!(!session.remove_symptom("두통"));
        assert!(session.selected_symptoms().is_empty());
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut session = session();
        assert!(!session.submit());
        assert!(!session.show_results());
        assert!(session.recommendations().is_empty());
    }

    #[test]
    fn submit_recomputes_results_and_sets_flag() {
        let mut session = session();
        session.add_symptom("두통");
        session.set_max_cost(1_000_000);
        assert!(session.submit());
        assert!(session.show_results());
        assert_eq!(session.recommendations().len(), 11);
    }

    #[test]
    fn tight_budget_can_empty_the_results() {
        let mut session = session();
        session.add_symptom("수면장애");
        session.set_max_cost(20_000);
        assert!(session.submit());
        // cheapest initial fee is 25,000, so nothing fits; that is a
        // display state, not an error
        assert!(session.show_results());
        assert!(session.recommendations().is_empty());
    }

    #[test]
    fn results_persist_until_next_submit() {
        let mut session = session();
        session.add_symptom("두통");
        session.submit();
        let first = session.recommendations().len();
        session.remove_symptom("두통");
        assert!(!session.submit());
        assert_eq!(session.recommendations().len(), first);
    }
}
