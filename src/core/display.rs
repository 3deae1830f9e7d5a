//! Display mapping from records to table cells

use serde::Serialize;

use crate::core::record::{Gender, Record};

/// Label shown in the `Sexo` column
///
/// Anything that is not `female` is shown with the masculine label,
/// including values the users API is not expected to send.
pub fn gender_label(gender: &Gender) -> &'static str {
    match gender {
        Gender::Female => "Feminino",
        Gender::Male | Gender::Other(_) => "Masculino",
    }
}

/// A rendered table row, one cell per header in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub id: String,
    pub first_name: String,
    pub age: String,
    pub gender: &'static str,
    pub email: String,
    pub phone: String,
}

impl TableRow {
    /// Cells in the order of [`TABLE_HEADERS`](crate::core::column::TABLE_HEADERS)
    pub fn cells(&self) -> [&str; 6] {
        [
            self.id.as_str(),
            self.first_name.as_str(),
            self.age.as_str(),
            self.gender,
            self.email.as_str(),
            self.phone.as_str(),
        ]
    }
}

impl From<&Record> for TableRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.to_string(),
            first_name: record.first_name.clone(),
            age: record.age.to_string(),
            gender: gender_label(&record.gender),
            email: record.email.clone(),
            phone: record.phone.clone(),
        }
    }
}
