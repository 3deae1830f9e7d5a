//! # usertable
//!
//! Sort and filter evaluation for an interactive table of user records.
//!
//! ## Features
//!
//! - **Typed selections**: sort and filter choices resolve from header labels
//!   into [`SortSpec`](crate::core::SortSpec) and [`FilterSpec`](crate::core::FilterSpec)
//! - **Graceful degradation**: unknown columns, labels or non-numeric queries
//!   leave the records as they are instead of failing
//! - **URL-backed state**: [`SelectionState`](crate::core::SelectionState) keeps the
//!   selection in query parameters that survive reloads
//! - **Sort, then filter**: [`compute_view`](crate::core::compute_view) is pure and
//!   recomputed on every render
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use usertable::prelude::*;
//!
//! let config = TableConfig::default();
//! let source = JsonFileRecordSource::new("users.json");
//! let records = source.fetch(config.page_size).await?;
//!
//! let state = SelectionState::parse("?sortByBox=idade&orderBy=Crescente", &config);
//! for record in state.view(&records) {
//!     println!("{:?}", TableRow::from(&record).cells());
//! }
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Records ===
    pub use crate::core::{
        record::{Gender, Record, RecordSet},
        source::RecordSource,
    };

    // === Selections ===
    pub use crate::core::{
        column::{Column, FilterColumn, SortColumn, TABLE_HEADERS},
        filter::{FilterSpec, Operator},
        query::{Selection, SelectionState},
        sort::{Direction, SortSpec},
    };

    // === Engine ===
    pub use crate::core::{
        display::{TableRow, gender_label},
        filter::filter,
        sort::order,
        view::compute_view,
    };

    // === Errors ===
    pub use crate::core::error::TableError;

    // === Storage ===
    pub use crate::storage::{InMemoryRecordSource, JsonFileRecordSource};

    // === Config ===
    pub use crate::config::{ParamKeys, TableConfig};
}
