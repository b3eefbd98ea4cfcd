// src/bin/verify.rs
//
// Read-only check of a finished load: select everything out of the `cpi`
// table and print the first rows for manual inspection.

use anyhow::{Context, Result};
use cpiloader::store;
use std::env;

const PREVIEW_ROWS: usize = 30;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let db_name = env::var("DB_NAME").context("DB_NAME not set")?;

    let conn = store::open_db(&db_name)?;
    let rows = store::read_all(&conn, store::TABLE_NAME)?;

    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "month", "index", "change_M", "change_A", "A_rate_M", "A_rate_3M", "A_rate_6M"
    );
    for row in rows.iter().take(PREVIEW_ROWS) {
        println!(
            "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            row.month.to_string(),
            fmt_opt(row.index),
            fmt_opt(row.change_m),
            fmt_opt(row.change_a),
            fmt_opt(row.a_rate_m),
            fmt_opt(row.a_rate_3m),
            fmt_opt(row.a_rate_6m),
        );
    }
    println!("\n{} rows in `{}`", rows.len(), store::TABLE_NAME);

    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.1}", x),
        None => "NULL".to_string(),
    }
}
