// src/store.rs

use crate::normalize::CpiRow;
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use tracing::info;

/// Destination table for the CPI series.
pub const TABLE_NAME: &str = "cpi";

/// Open (or create) the SQLite database file.
pub fn open_db(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).with_context(|| format!("opening database `{}`", path.display()))
}

/// Write all rows into `table`, replacing any existing table of that name.
/// Drop, create, and insert run inside one transaction, so a prior dataset
/// either survives intact or is fully replaced.
pub fn replace_table(conn: &mut Connection, table: &str, rows: &[CpiRow]) -> Result<()> {
    let tx = conn.transaction().context("starting load transaction")?;

    // `index` is a SQL keyword, hence the quoting.
    tx.execute_batch(&format!(
        r#"DROP TABLE IF EXISTS {table};
           CREATE TABLE {table} (
               month      DATE,
               "index"    REAL,
               "change_M" REAL,
               "change_A" REAL,
               "A_rate_M" REAL,
               "A_rate_3M" REAL,
               "A_rate_6M" REAL
           );"#
    ))
    .with_context(|| format!("recreating table `{}`", table))?;

    {
        let mut stmt = tx
            .prepare(&format!(
                r#"INSERT INTO {table}
                   (month, "index", "change_M", "change_A", "A_rate_M", "A_rate_3M", "A_rate_6M")
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#
            ))
            .with_context(|| format!("preparing insert into `{}`", table))?;
        for row in rows {
            stmt.execute(params![
                row.month,
                row.index,
                row.change_m,
                row.change_a,
                row.a_rate_m,
                row.a_rate_3m,
                row.a_rate_6m,
            ])
            .with_context(|| format!("inserting row for {}", row.month))?;
        }
    }

    tx.commit().context("committing load transaction")?;
    info!(rows = rows.len(), table, "table replaced");
    Ok(())
}

/// Read the whole table back, in stored order.
pub fn read_all(conn: &Connection, table: &str) -> Result<Vec<CpiRow>> {
    let mut stmt = conn
        .prepare(&format!(
            r#"SELECT month, "index", "change_M", "change_A", "A_rate_M", "A_rate_3M", "A_rate_6M"
               FROM {table}"#
        ))
        .with_context(|| format!("preparing select from `{}`", table))?;

    let rows = stmt
        .query_map([], |r| {
            Ok(CpiRow {
                month: r.get(0)?,
                index: r.get(1)?,
                change_m: r.get(2)?,
                change_a: r.get(3)?,
                a_rate_m: r.get(4)?,
                a_rate_3m: r.get(5)?,
                a_rate_6m: r.get(6)?,
            })
        })
        .with_context(|| format!("selecting from `{}`", table))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("reading rows from `{}`", table))?;

    Ok(rows)
}
