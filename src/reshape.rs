// src/reshape.rs

use crate::fetch::RawObservation;
use anyhow::{bail, Result};
use tracing::warn;

/// Number of observations the API emits per month, in fixed attribute order:
/// index, change_M, change_A, A_rate_M, A_rate_3M, A_rate_6M.
pub const ATTRS_PER_MONTH: usize = 6;

/// One month reshaped into a wide row. `month` is the ISO form of the label
/// (`1988M05` → `1988-05-01`); the six fields still hold the raw API text,
/// including the `"."` missing marker. Type coercion happens in `normalize`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    pub month: String,
    pub index: String,
    pub change_m: String,
    pub change_a: String,
    pub a_rate_m: String,
    pub a_rate_3m: String,
    pub a_rate_6m: String,
}

/// Turn the compact px-web month label `YYYYMmm` into `YYYY-MM-01`, pinning
/// the day to the first of the month.
pub fn month_label_to_iso(label: &str) -> String {
    format!("{}-01", label.replace('M', "-"))
}

fn month_label(obs: &RawObservation) -> Result<&str> {
    match obs.key.first() {
        Some(m) => Ok(m),
        None => bail!("observation has an empty key: {:?}", obs),
    }
}

fn value(obs: &RawObservation) -> Result<&str> {
    match obs.values.first() {
        Some(v) => Ok(v),
        None => bail!("observation has an empty values list: {:?}", obs),
    }
}

/// Collapse the flat observation array (six records per month) into one
/// `MonthlyRecord` per month.
///
/// Field assignment is positional: the six records of each group are taken in
/// the API's fixed attribute order. Each group is checked to carry a single
/// month label, so a reordered or truncated response fails loudly instead of
/// mixing months. A trailing partial group is dropped with a warning.
pub fn reshape(data: &[RawObservation]) -> Result<Vec<MonthlyRecord>> {
    let remainder = data.len() % ATTRS_PER_MONTH;
    if remainder != 0 {
        warn!(
            total = data.len(),
            dropped = remainder,
            "record count is not a multiple of {}; dropping trailing partial group",
            ATTRS_PER_MONTH
        );
    }

    let mut records = Vec::with_capacity(data.len() / ATTRS_PER_MONTH);
    for group in data.chunks_exact(ATTRS_PER_MONTH) {
        let label = month_label(&group[0])?;
        for obs in &group[1..] {
            let other = month_label(obs)?;
            if other != label {
                bail!(
                    "month group starting at `{}` contains a record for `{}`; \
                     response is malformed or reordered",
                    label,
                    other
                );
            }
        }

        records.push(MonthlyRecord {
            month: month_label_to_iso(label),
            index: value(&group[0])?.to_string(),
            change_m: value(&group[1])?.to_string(),
            change_a: value(&group[2])?.to_string(),
            a_rate_m: value(&group[3])?.to_string(),
            a_rate_3m: value(&group[4])?.to_string(),
            a_rate_6m: value(&group[5])?.to_string(),
        });
    }
    Ok(records)
}
