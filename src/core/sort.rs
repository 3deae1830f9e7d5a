//! Sort selection and ordering
//!
//! A [`SortSpec`] is resolved from the selected header and direction label.
//! [`order`] applies it to a copy of the records; the input is never
//! touched. Every combination without a rule falls through to the source
//! order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::collate;
use crate::core::column::{Column, SortColumn};
use crate::core::record::Record;

/// Sort direction as offered by the direction dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
    /// Keep the record set order
    #[default]
    Default,
}

impl Direction {
    pub const LABELS: [&'static str; 3] = ["Crescente", "Decrescente", "Padrão"];

    /// Parse a direction label
    ///
    /// Only the exact labels match; anything else, including a
    /// differently cased label, degrades to [`Direction::Default`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "Crescente" => Direction::Ascending,
            "Decrescente" => Direction::Descending,
            _ => Direction::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => Self::LABELS[0],
            Direction::Descending => Self::LABELS[1],
            Direction::Default => Self::LABELS[2],
        }
    }
}

/// Current sort selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: Option<SortColumn>,
    pub direction: Direction,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: Direction) -> Self {
        Self {
            column: Some(column),
            direction,
        }
    }

    /// A spec that leaves records in source order
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolve the selected header and direction label
    ///
    /// Headers without an ordering rule resolve to no column. Never fails.
    pub fn resolve(column: Option<&str>, direction: Option<&str>) -> Self {
        let resolved = column
            .and_then(Column::from_header)
            .and_then(Column::sortable);
        if let (Some(header), None) = (column, resolved) {
            tracing::debug!(header, "sort column has no ordering rule, keeping source order");
        }

        Self {
            column: resolved,
            direction: direction.map(Direction::from_label).unwrap_or_default(),
        }
    }

    /// The comparison this spec applies, if any
    fn comparator(&self) -> Option<Comparator> {
        let compare: Comparator = match (self.column?, self.direction) {
            // id only has a descending rule
            (SortColumn::Id, Direction::Descending) => |a, b| b.id.cmp(&a.id),
            (SortColumn::FirstName, Direction::Ascending) => {
                |a, b| collate::compare(&a.first_name, &b.first_name)
            }
            (SortColumn::FirstName, Direction::Descending) => {
                |a, b| collate::compare(&b.first_name, &a.first_name)
            }
            (SortColumn::Age, Direction::Ascending) => |a, b| a.age.cmp(&b.age),
            (SortColumn::Age, Direction::Descending) => |a, b| b.age.cmp(&a.age),
            // no rule for this combination: keep source order
            _ => return None,
        };
        Some(compare)
    }
}

type Comparator = fn(&Record, &Record) -> Ordering;

/// Order a copy of `records` according to `spec`
///
/// The sort is stable, so records sharing a key keep their relative order.
/// Descending rules swap the comparison arguments rather than reversing the
/// result, which keeps ties in source order as well.
pub fn order(records: &[Record], spec: &SortSpec) -> Vec<Record> {
    let mut sorted = records.to_vec();
    if let Some(compare) = spec.comparator() {
        sorted.sort_by(compare);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Gender;

    fn record(id: i64, name: &str, age: i64) -> Record {
        Record::new(id, name, age, Gender::Male, "x@example.com", "0")
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::from_label("Crescente"), Direction::Ascending);
        assert_eq!(Direction::from_label("Decrescente"), Direction::Descending);
        assert_eq!(Direction::from_label("Padrão"), Direction::Default);
        assert_eq!(Direction::from_label("sideways"), Direction::Default);
    }

    #[test]
    fn test_direction_labels_are_exact() {
        assert_eq!(Direction::from_label("crescente"), Direction::Default);
        assert_eq!(Direction::from_label("DECRESCENTE"), Direction::Default);
        assert_eq!(Direction::from_label(" Crescente"), Direction::Default);

        let spec = SortSpec::resolve(Some("Idade"), Some("decrescente"));
        assert_eq!(spec.direction, Direction::Default);
        let records = vec![record(1, "a", 30), record(2, "b", 20)];
        assert_eq!(ids(&order(&records, &spec)), vec![1, 2]);
    }

    #[test]
    fn test_resolve_sortable_header() {
        let spec = SortSpec::resolve(Some("idade"), Some("Decrescente"));
        assert_eq!(spec, SortSpec::new(SortColumn::Age, Direction::Descending));
    }

    #[test]
    fn test_resolve_non_sortable_header() {
        let spec = SortSpec::resolve(Some("Email"), Some("Crescente"));
        assert_eq!(spec.column, None);
    }

    #[test]
    fn test_resolve_missing_values() {
        assert_eq!(SortSpec::resolve(None, None), SortSpec::none());
    }

    #[test]
    fn test_id_descending() {
        let records = vec![record(3, "c", 1), record(1, "a", 1), record(2, "b", 1)];
        let spec = SortSpec::new(SortColumn::Id, Direction::Descending);
        assert_eq!(ids(&order(&records, &spec)), vec![3, 2, 1]);
    }

    #[test]
    fn test_id_ascending_is_noop() {
        let records = vec![record(3, "c", 1), record(1, "a", 1), record(2, "b", 1)];
        let spec = SortSpec::new(SortColumn::Id, Direction::Ascending);
        assert_eq!(ids(&order(&records, &spec)), vec![3, 1, 2]);
    }

    #[test]
    fn test_name_both_directions() {
        let records = vec![record(1, "Bruno", 1), record(2, "álvaro", 1), record(3, "Carla", 1)];

        let asc = order(&records, &SortSpec::new(SortColumn::FirstName, Direction::Ascending));
        assert_eq!(ids(&asc), vec![2, 1, 3]);

        let desc = order(&records, &SortSpec::new(SortColumn::FirstName, Direction::Descending));
        assert_eq!(ids(&desc), vec![3, 1, 2]);
    }

    #[test]
    fn test_age_is_stable() {
        let records = vec![
            record(1, "a", 30),
            record(2, "b", 20),
            record(3, "c", 30),
            record(4, "d", 20),
        ];

        let asc = order(&records, &SortSpec::new(SortColumn::Age, Direction::Ascending));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = order(&records, &SortSpec::new(SortColumn::Age, Direction::Descending));
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_default_direction_keeps_order() {
        let records = vec![record(2, "b", 9), record(1, "a", 5)];
        for column in [SortColumn::Id, SortColumn::FirstName, SortColumn::Age] {
            let spec = SortSpec::new(column, Direction::Default);
            assert_eq!(ids(&order(&records, &spec)), vec![2, 1]);
        }
    }

    #[test]
    fn test_order_leaves_input_untouched() {
        let records = vec![record(1, "a", 1), record(2, "b", 2)];
        let before = records.clone();
        let _ = order(&records, &SortSpec::new(SortColumn::Id, Direction::Descending));
        assert_eq!(records, before);
    }
}
