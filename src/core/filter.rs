//! Filter selection and record inclusion
//!
//! A [`FilterSpec`] pairs a filterable column with an operator and the free
//! text typed by the user. [`filter`] keeps the records that satisfy it.
//! Incomplete or invalid selections disable filtering instead of failing, so
//! rendering is never interrupted.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::core::column::{Column, FilterColumn};
use crate::core::record::Record;

/// Comparison offered by the status dropdown
///
/// Only the `ID` column distinguishes between the two; other columns merely
/// require that one was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equals,
    NotEquals,
}

impl Operator {
    pub const LABELS: [&'static str; 2] = ["É", "Não É"];

    /// Parse an operator label; only the exact labels match
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "É" => Some(Operator::Equals),
            "Não É" => Some(Operator::NotEquals),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operator::Equals => Self::LABELS[0],
            Operator::NotEquals => Self::LABELS[1],
        }
    }
}

/// Current filter selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub column: Option<FilterColumn>,
    pub operator: Option<Operator>,
    pub query: String,
}

impl FilterSpec {
    pub fn new(column: FilterColumn, operator: Operator, query: impl Into<String>) -> Self {
        Self {
            column: Some(column),
            operator: Some(operator),
            query: query.into(),
        }
    }

    /// A spec that keeps every record
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolve the selected header, operator label and query text
    pub fn resolve(column: Option<&str>, operator: Option<&str>, query: Option<&str>) -> Self {
        let resolved = column
            .and_then(Column::from_header)
            .and_then(Column::filterable);
        if let (Some(header), None) = (column, resolved) {
            tracing::debug!(header, "filter column has no inclusion rule");
        }

        Self {
            column: resolved,
            operator: operator.and_then(Operator::from_label),
            query: query.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    /// Whether this spec restricts anything at all
    ///
    /// Filtering needs a column, an operator and non-blank query text.
    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.operator.is_some() && !self.query.trim().is_empty()
    }

    /// Build the inclusion test for this spec, if it restricts anything
    fn predicate(&self) -> Option<Predicate> {
        if !self.is_active() {
            return None;
        }
        let query = self.query.trim();

        match (self.column?, self.operator?) {
            (FilterColumn::Id, operator) => {
                let wanted = parse_numeric(query)?;
                Some(match operator {
                    Operator::Equals => Predicate::IdEquals(wanted),
                    Operator::NotEquals => Predicate::IdNotEquals(wanted),
                })
            }
            // operator is irrelevant for names
            (FilterColumn::FirstName, _) => Some(Predicate::NameContains(query.to_lowercase())),
            // age only has an equality rule, whatever the operator
            (FilterColumn::Age, _) => parse_numeric(query).map(Predicate::AgeEquals),
        }
    }
}

/// Typed inclusion test resolved from a [`FilterSpec`]
///
/// Numeric values are `None` when the query is all digits but too large to
/// be any record's value; such a query equals nothing.
#[derive(Debug)]
enum Predicate {
    IdEquals(Option<i64>),
    IdNotEquals(Option<i64>),
    NameContains(String),
    AgeEquals(Option<i64>),
}

impl Predicate {
    fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::IdEquals(wanted) => *wanted == Some(record.id),
            Predicate::IdNotEquals(wanted) => *wanted != Some(record.id),
            Predicate::NameContains(needle) => record.first_name.to_lowercase().contains(needle),
            Predicate::AgeEquals(wanted) => *wanted == Some(record.age),
        }
    }
}

/// Parse a query made only of ASCII digits
///
/// Returns `None` for anything else (filter disabled) and `Some(None)` for a
/// digit string that overflows.
fn parse_numeric(query: &str) -> Option<Option<i64>> {
    static NON_DIGIT: OnceLock<Regex> = OnceLock::new();
    let non_digit = NON_DIGIT.get_or_init(|| Regex::new(r"[^0-9]").expect("valid pattern"));

    if non_digit.is_match(query) {
        tracing::debug!(query, "numeric column with non-numeric query, filter disabled");
        return None;
    }
    Some(query.parse().ok())
}

/// Keep the records of `records` that satisfy `spec`, in their given order
///
/// An inactive or invalid spec returns a copy of the input unchanged.
pub fn filter(records: &[Record], spec: &FilterSpec) -> Vec<Record> {
    match spec.predicate() {
        Some(predicate) => records
            .iter()
            .filter(|record| predicate.matches(record))
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}
