//! Core module containing the records, selections and view engine

pub mod collate;
pub mod column;
pub mod display;
pub mod error;
pub mod filter;
pub mod query;
pub mod record;
pub mod sort;
pub mod source;
pub mod view;

pub use column::{Column, FilterColumn, SortColumn, TABLE_HEADERS};
pub use display::{TableRow, gender_label};
pub use error::TableError;
pub use filter::{FilterSpec, Operator, filter};
pub use query::{Selection, SelectionState};
pub use record::{Gender, Record, RecordSet};
pub use sort::{Direction, SortSpec, order};
pub use source::RecordSource;
pub use view::compute_view;
