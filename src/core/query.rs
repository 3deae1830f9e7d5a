//! URL-backed selection state
//!
//! The table keeps its sort and filter selection in the page's query string
//! so it survives navigation and reload. [`SelectionState`] reads and writes
//! those parameters and resolves them into fresh specs on every read.
//!
//! # Example
//!
//! ```
//! use usertable::prelude::*;
//!
//! let mut state = SelectionState::from_query_str("?sortByBox=idade&orderBy=Crescente");
//! state.select_filter_column("Nome");
//! state.select_operator("É");
//! state.set_query("an");
//!
//! assert_eq!(state.sort_spec(), SortSpec::new(SortColumn::Age, Direction::Ascending));
//! assert!(state.filter_spec().is_active());
//! assert_eq!(
//!     state.to_query_string(),
//!     "sortByBox=idade&orderBy=Crescente&filter=nome&status=%C3%89&value=an"
//! );
//! ```

use std::fmt;

use url::form_urlencoded;

use crate::config::{ParamKeys, TableConfig};
use crate::core::filter::FilterSpec;
use crate::core::record::{Record, RecordSet};
use crate::core::sort::SortSpec;
use crate::core::view::compute_view;

/// One of the selections kept in the query string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    SortColumn,
    Direction,
    FilterColumn,
    Operator,
    Query,
}

/// Table selection backed by URL query parameters
///
/// Parameters that do not belong to the table are kept verbatim and in
/// order, so serializing the state never drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pairs: Vec<(String, String)>,
    keys: ParamKeys,
    max_query_length: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl SelectionState {
    /// Create an empty selection
    pub fn new(config: &TableConfig) -> Self {
        Self {
            pairs: Vec::new(),
            keys: config.params.clone(),
            max_query_length: config.max_query_length,
        }
    }

    /// Parse a query string, with or without the leading `?`
    pub fn parse(query: &str, config: &TableConfig) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        Self {
            pairs,
            ..Self::new(config)
        }
    }

    /// Parse a query string using the default parameter names
    pub fn from_query_str(query: &str) -> Self {
        Self::parse(query, &TableConfig::default())
    }

    /// Serialize back to a query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    fn key(&self, selection: Selection) -> &str {
        match selection {
            Selection::SortColumn => self.keys.sort_column.as_str(),
            Selection::Direction => self.keys.direction.as_str(),
            Selection::FilterColumn => self.keys.filter_column.as_str(),
            Selection::Operator => self.keys.operator.as_str(),
            Selection::Query => self.keys.query.as_str(),
        }
    }

    /// First value stored for a selection
    pub fn get(&self, selection: Selection) -> Option<&str> {
        let key = self.key(selection);
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace a selection, keeping its position if already present
    fn set(&mut self, selection: Selection, value: String) {
        let key = self.key(selection).to_string();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Remove a selection entirely
    pub fn clear(&mut self, selection: Selection) {
        let key = self.key(selection).to_string();
        self.pairs.retain(|(k, _)| *k != key);
    }

    /// Remove the filter column, operator and query together
    pub fn reset_filter(&mut self) {
        self.clear(Selection::FilterColumn);
        self.clear(Selection::Operator);
        self.clear(Selection::Query);
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.get(Selection::SortColumn)
    }

    pub fn direction_label(&self) -> Option<&str> {
        self.get(Selection::Direction)
    }

    pub fn filter_column(&self) -> Option<&str> {
        self.get(Selection::FilterColumn)
    }

    pub fn operator_label(&self) -> Option<&str> {
        self.get(Selection::Operator)
    }

    pub fn query(&self) -> Option<&str> {
        self.get(Selection::Query)
    }

    /// Store the picked sort header, lowercased
    pub fn select_sort_column(&mut self, header: &str) {
        self.set(Selection::SortColumn, header.to_lowercase());
    }

    pub fn select_direction(&mut self, label: &str) {
        self.set(Selection::Direction, label.to_string());
    }

    /// Store the picked filter header, lowercased
    pub fn select_filter_column(&mut self, header: &str) {
        self.set(Selection::FilterColumn, header.to_lowercase());
    }

    pub fn select_operator(&mut self, label: &str) {
        self.set(Selection::Operator, label.to_string());
    }

    /// Store the typed filter text
    ///
    /// Text longer than the configured limit is cut; empty text removes the
    /// parameter.
    pub fn set_query(&mut self, text: &str) {
        if text.is_empty() {
            self.clear(Selection::Query);
            return;
        }
        let text: String = text.chars().take(self.max_query_length).collect();
        self.set(Selection::Query, text);
    }

    /// Resolve the current sort selection
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::resolve(self.sort_column(), self.direction_label())
    }

    /// Resolve the current filter selection
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec::resolve(self.filter_column(), self.operator_label(), self.query())
    }

    /// One render pass: resolve both specs and compute the view
    pub fn view(&self, records: &RecordSet) -> Vec<Record> {
        compute_view(records.records(), &self.sort_spec(), &self.filter_spec())
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::column::{FilterColumn, SortColumn};
    use crate::core::filter::Operator;
    use crate::core::sort::Direction;

    #[test]
    fn test_parse_reads_all_selections() {
        let state = SelectionState::from_query_str(
            "?sortByBox=nome&orderBy=Decrescente&filter=id&status=N%C3%A3o+%C3%89&value=+3+",
        );

        assert_eq!(state.sort_column(), Some("nome"));
        assert_eq!(state.operator_label(), Some("Não É"));
        assert_eq!(
            state.sort_spec(),
            SortSpec::new(SortColumn::FirstName, Direction::Descending)
        );
        assert_eq!(
            state.filter_spec(),
            FilterSpec::new(FilterColumn::Id, Operator::NotEquals, "3")
        );
    }

    #[test]
    fn test_empty_state_resolves_to_noops() {
        let state = SelectionState::default();
        assert_eq!(state.sort_spec(), SortSpec::none());
        assert!(!state.filter_spec().is_active());
        assert_eq!(state.to_query_string(), "");
    }

    #[test]
    fn test_set_replaces_in_place_and_drops_duplicates() {
        let mut state =
            SelectionState::from_query_str("orderBy=Crescente&page=2&orderBy=Padr%C3%A3o");
        state.select_direction("Decrescente");
        assert_eq!(state.to_query_string(), "orderBy=Decrescente&page=2");
    }

    #[test]
    fn test_unrelated_params_survive() {
        let mut state = SelectionState::from_query_str("tab=users&filter=nome");
        state.reset_filter();
        assert_eq!(state.to_query_string(), "tab=users");
    }

    #[test]
    fn test_set_query_truncates_and_clears() {
        let mut state = SelectionState::default();
        state.set_query(&"a".repeat(40));
        assert_eq!(state.query().map(|q| q.chars().count()), Some(27));

        state.set_query("");
        assert_eq!(state.query(), None);
    }

    #[test]
    fn test_custom_param_keys() {
        let config = TableConfig::from_yaml_str("params:\n  query: q\n  operator: op\n").unwrap();
        let state = SelectionState::parse("filter=idade&op=%C3%89&q=30", &config);
        assert_eq!(
            state.filter_spec(),
            FilterSpec::new(FilterColumn::Age, Operator::Equals, "30")
        );
    }
}
