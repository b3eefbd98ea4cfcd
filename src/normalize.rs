// src/normalize.rs

use crate::reshape::MonthlyRecord;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// The marker the API uses for a missing value.
pub const MISSING: &str = ".";

/// A fully typed CPI row, ready for storage. Built once per month and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CpiRow {
    pub month: NaiveDate,
    pub index: Option<f64>,
    pub change_m: Option<f64>,
    pub change_a: Option<f64>,
    pub a_rate_m: Option<f64>,
    pub a_rate_3m: Option<f64>,
    pub a_rate_6m: Option<f64>,
}

/// Parse a field: the `"."` sentinel becomes `None`, anything else must be
/// numeric text.
fn coerce(field: &str, month: &str, name: &str) -> Result<Option<f64>> {
    if field == MISSING {
        return Ok(None);
    }
    field
        .parse::<f64>()
        .map(Some)
        .with_context(|| format!("non-numeric `{}` value `{}` for month {}", name, field, month))
}

/// Type-normalize reshaped records: month text becomes a calendar date, the
/// six value columns become nullable floats. Any residual text that is
/// neither numeric nor the missing marker aborts the run.
pub fn normalize(records: Vec<MonthlyRecord>) -> Result<Vec<CpiRow>> {
    records
        .into_iter()
        .map(|r| {
            let month = NaiveDate::parse_from_str(&r.month, "%Y-%m-%d")
                .with_context(|| format!("invalid month `{}`", r.month))?;
            Ok(CpiRow {
                month,
                index: coerce(&r.index, &r.month, "index")?,
                change_m: coerce(&r.change_m, &r.month, "change_M")?,
                change_a: coerce(&r.change_a, &r.month, "change_A")?,
                a_rate_m: coerce(&r.a_rate_m, &r.month, "A_rate_M")?,
                a_rate_3m: coerce(&r.a_rate_3m, &r.month, "A_rate_3M")?,
                a_rate_6m: coerce(&r.a_rate_6m, &r.month, "A_rate_6M")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, values: [&str; 6]) -> MonthlyRecord {
        MonthlyRecord {
            month: month.to_string(),
            index: values[0].to_string(),
            change_m: values[1].to_string(),
            change_a: values[2].to_string(),
            a_rate_m: values[3].to_string(),
            a_rate_3m: values[4].to_string(),
            a_rate_6m: values[5].to_string(),
        }
    }

    #[test]
    fn sentinel_becomes_null_and_text_becomes_float() {
        let rows = normalize(vec![record(
            "1988-05-01",
            ["100.0", ".", ".", ".", ".", "."],
        )])
        .unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.month, NaiveDate::from_ymd_opt(1988, 5, 1).unwrap());
        assert_eq!(row.index, Some(100.0));
        assert_eq!(row.change_m, None);
        assert_eq!(row.a_rate_6m, None);
    }

    #[test]
    fn all_fields_parse() {
        let rows = normalize(vec![record(
            "2022-06-01",
            ["551.0", "0.8", "8.8", "9.1", "10.2", "8.9"],
        )])
        .unwrap();
        let row = &rows[0];
        assert_eq!(row.index, Some(551.0));
        assert_eq!(row.change_m, Some(0.8));
        assert_eq!(row.change_a, Some(8.8));
        assert_eq!(row.a_rate_m, Some(9.1));
        assert_eq!(row.a_rate_3m, Some(10.2));
        assert_eq!(row.a_rate_6m, Some(8.9));
    }

    #[test]
    fn invalid_month_is_fatal() {
        let res = normalize(vec![record("1988-13-01", ["100.0", ".", ".", ".", ".", "."])]);
        assert!(res.is_err());
    }

    #[test]
    fn non_numeric_residual_is_fatal() {
        let res = normalize(vec![record("1988-05-01", ["abc", ".", ".", ".", ".", "."])]);
        let err = res.unwrap_err().to_string();
        assert!(err.contains("index"), "unexpected error: {}", err);
    }
}
