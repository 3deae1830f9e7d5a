//! Render the user table for a query string
//!
//! ```text
//! cargo run --example render_table -- "?sortByBox=idade&orderBy=Crescente" [users.json]
//! ```
//!
//! Without a file the built-in sample records are used.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use usertable::prelude::*;

fn sample_records() -> Vec<Record> {
    [
        (1, "Emily", 28, Gender::Female, "emily.johnson", "+81 965-431-3024"),
        (2, "Michael", 35, Gender::Male, "michael.williams", "+49 258-627-6644"),
        (3, "Sophia", 42, Gender::Female, "sophia.brown", "+81 210-652-2785"),
        (4, "James", 45, Gender::Male, "james.davis", "+49 614-958-9364"),
        (5, "Emma", 28, Gender::Female, "emma.miller", "+91 759-776-1614"),
        (6, "Olivia", 22, Gender::Female, "olivia.wilson", "+91 607-295-6448"),
        (7, "Alexander", 35, Gender::Male, "alexander.jones", "+61 260-824-4986"),
        (8, "Ava", 27, Gender::Female, "ava.taylor", "+1 458-853-7877"),
    ]
    .into_iter()
    .map(|(id, name, age, gender, user, phone)| {
        Record::new(id, name, age, gender, format!("{user}@x.dummyjson.com"), phone)
    })
    .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_default();
    let config = TableConfig::default();

    let records = match args.next() {
        Some(path) => JsonFileRecordSource::new(path).fetch(config.page_size).await?,
        None => {
            InMemoryRecordSource::new(sample_records())
                .fetch(config.page_size)
                .await?
        }
    };

    let state = SelectionState::parse(&query, &config);
    let rows: Vec<TableRow> = state.view(&records).iter().map(TableRow::from).collect();

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 6]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("{}", line(TABLE_HEADERS));
    for row in &rows {
        println!("{}", line(row.cells()));
    }
    println!("\n{} of {} records", rows.len(), records.len());

    Ok(())
}
