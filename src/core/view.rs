//! View computation: the sequence of records the table renders

use crate::core::filter::{FilterSpec, filter};
use crate::core::record::Record;
use crate::core::sort::{SortSpec, order};

/// Sort `records`, then filter the sorted sequence
///
/// Always sorts first, so surviving records keep their sorted relative
/// order. Nothing is cached: each call recomputes from the given records and
/// specs, and identical inputs yield identical output.
///
/// # Example
///
/// ```
/// use usertable::prelude::*;
///
/// let records = vec![
///     Record::new(3, "Carla", 40, Gender::Female, "c@example.com", "3"),
///     Record::new(1, "Ana", 25, Gender::Female, "a@example.com", "1"),
///     Record::new(2, "Bruno", 25, Gender::Male, "b@example.com", "2"),
/// ];
///
/// let sort = SortSpec::new(SortColumn::Id, Direction::Descending);
/// let filter = FilterSpec::new(FilterColumn::Age, Operator::Equals, "25");
///
/// let view = compute_view(&records, &sort, &filter);
/// let ids: Vec<i64> = view.iter().map(|r| r.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub fn compute_view(records: &[Record], sort: &SortSpec, filter_spec: &FilterSpec) -> Vec<Record> {
    let sorted = order(records, sort);
    let view = filter(&sorted, filter_spec);

    tracing::debug!(
        records = records.len(),
        visible = view.len(),
        sort_column = ?sort.column,
        direction = ?sort.direction,
        filter_column = ?filter_spec.column,
        filter_active = filter_spec.is_active(),
        "computed table view"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::column::{FilterColumn, SortColumn};
    use crate::core::filter::Operator;
    use crate::core::record::Gender;
    use crate::core::sort::Direction;

    fn record(id: i64, name: &str, age: i64) -> Record {
        Record::new(id, name, age, Gender::Male, "x@example.com", "0")
    }

    #[test]
    fn test_no_specs_returns_source_order() {
        let records = vec![record(2, "b", 1), record(1, "a", 2)];
        let view = compute_view(&records, &SortSpec::none(), &FilterSpec::none());
        assert_eq!(view, records);
    }

    #[test]
    fn test_sorted_then_filtered() {
        let records = vec![
            record(1, "Ana", 30),
            record(2, "Bruno", 20),
            record(3, "Mariana", 25),
        ];
        let sort = SortSpec::new(SortColumn::Age, Direction::Ascending);
        let filter_spec = FilterSpec::new(FilterColumn::FirstName, Operator::Equals, "an");

        let ids: Vec<i64> = compute_view(&records, &sort, &filter_spec)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_non_numeric_filter_still_sorted() {
        let records = vec![record(1, "a", 30), record(2, "b", 20)];
        let sort = SortSpec::new(SortColumn::Age, Direction::Ascending);
        let filter_spec = FilterSpec::new(FilterColumn::Age, Operator::Equals, "abc");

        let ids: Vec<i64> = compute_view(&records, &sort, &filter_spec)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
