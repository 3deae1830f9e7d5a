//! Table header vocabulary
//!
//! Sort and filter selections name columns by their human-readable header.
//! Only three of them carry ordering or inclusion rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Headers in display order
pub const TABLE_HEADERS: [&str; 6] = ["ID", "Nome", "Idade", "Sexo", "Email", "Telefone"];

/// A column of the user table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Id,
    FirstName,
    Age,
    Gender,
    Email,
    Phone,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::FirstName,
        Column::Age,
        Column::Gender,
        Column::Email,
        Column::Phone,
    ];

    /// Parse a header label, ignoring case and surrounding whitespace
    ///
    /// ```
    /// use usertable::core::column::Column;
    ///
    /// assert_eq!(Column::from_header("nome"), Some(Column::FirstName));
    /// assert_eq!(Column::from_header(" IDADE "), Some(Column::Age));
    /// assert_eq!(Column::from_header("Data de Nasc."), None);
    /// ```
    pub fn from_header(header: &str) -> Option<Self> {
        let wanted = header.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|column| column.header().to_lowercase() == wanted)
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => TABLE_HEADERS[0],
            Column::FirstName => TABLE_HEADERS[1],
            Column::Age => TABLE_HEADERS[2],
            Column::Gender => TABLE_HEADERS[3],
            Column::Email => TABLE_HEADERS[4],
            Column::Phone => TABLE_HEADERS[5],
        }
    }

    /// The sortable counterpart, if this column has an ordering rule
    pub fn sortable(self) -> Option<SortColumn> {
        match self {
            Column::Id => Some(SortColumn::Id),
            Column::FirstName => Some(SortColumn::FirstName),
            Column::Age => Some(SortColumn::Age),
            // no ordering rule: sort requests on these are ignored
            Column::Gender | Column::Email | Column::Phone => None,
        }
    }

    /// The filterable counterpart, if this column has an inclusion rule
    pub fn filterable(self) -> Option<FilterColumn> {
        match self {
            Column::Id => Some(FilterColumn::Id),
            Column::FirstName => Some(FilterColumn::FirstName),
            Column::Age => Some(FilterColumn::Age),
            Column::Gender | Column::Email | Column::Phone => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Columns with a defined ordering rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    FirstName,
    Age,
}

/// Columns with a defined inclusion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterColumn {
    Id,
    FirstName,
    Age,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_header(column.header()), Some(column));
        }
    }

    #[test]
    fn test_from_header_is_case_insensitive() {
        assert_eq!(Column::from_header("id"), Some(Column::Id));
        assert_eq!(Column::from_header("TELEFONE"), Some(Column::Phone));
    }

    #[test]
    fn test_unknown_header() {
        assert_eq!(Column::from_header("firstName"), None);
        assert_eq!(Column::from_header(""), None);
    }

    #[test]
    fn test_only_three_columns_sortable_and_filterable() {
        let sortable: Vec<_> = Column::ALL.iter().filter_map(|c| c.sortable()).collect();
        let filterable: Vec<_> = Column::ALL.iter().filter_map(|c| c.filterable()).collect();

        assert_eq!(
            sortable,
            vec![SortColumn::Id, SortColumn::FirstName, SortColumn::Age]
        );
        assert_eq!(
            filterable,
            vec![FilterColumn::Id, FilterColumn::FirstName, FilterColumn::Age]
        );
    }
}
