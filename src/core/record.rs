//! User records and the immutable record set a session works on

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::filter::FilterSpec;
use crate::core::sort::SortSpec;
use crate::core::view::compute_view;

/// Gender as reported by the users API
///
/// Values other than `male`/`female` are kept verbatim so they survive a
/// round-trip; the table still has to decide how to label them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Other(value),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => "male".to_string(),
            Gender::Female => "female".to_string(),
            Gender::Other(value) => value,
        }
    }
}

/// A single row of the user table
///
/// Only the fields the table shows are kept; anything else in the source
/// payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i64,
    pub first_name: String,
    pub age: i64,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        age: i64,
        gender: Gender,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            age,
            gender,
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// The source collection of records for the current session
///
/// Created once when records are loaded and never mutated afterwards.
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Arc<[Record]>,
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Records in source order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted-then-filtered view of this set
    pub fn view(&self, sort: &SortSpec, filter: &FilterSpec) -> Vec<Record> {
        compute_view(&self.records, sort, filter)
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_camel_case_and_ignores_extra_fields() {
        let value = json!({
            "id": 7,
            "firstName": "Ana",
            "lastName": "Silva",
            "age": 31,
            "gender": "female",
            "email": "ana@example.com",
            "phone": "+55 11 5555-0101",
            "birthDate": "1993-04-02"
        });

        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.gender, Gender::Female);
    }

    #[test]
    fn test_unexpected_gender_is_preserved() {
        let gender: Gender = serde_json::from_value(json!("nonbinary")).unwrap();
        assert_eq!(gender, Gender::Other("nonbinary".to_string()));
        assert_eq!(serde_json::to_value(&gender).unwrap(), json!("nonbinary"));
    }

    #[test]
    fn test_record_set_clone_shares_records() {
        let set = RecordSet::new(vec![Record::new(
            1,
            "Ana",
            20,
            Gender::Female,
            "a@x.com",
            "1",
        )]);
        let copy = set.clone();
        assert_eq!(copy.len(), 1);
        assert!(std::ptr::eq(set.records(), copy.records()));
    }
}
