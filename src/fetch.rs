// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// Statistics Iceland px-web endpoint for the consumer price index series.
pub static API_URL: &str =
    "https://px.hagstofa.is:443/pxen/api/v1/en/Efnahagur/visitolur/1_vnv/1_vnv/VIS01000.px";

#[derive(Debug, Serialize)]
struct Query {
    query: Vec<QueryClause>,
    response: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct QueryClause {
    code: String,
    selection: Selection,
}

#[derive(Debug, Serialize)]
struct Selection {
    filter: String,
    values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    format: String,
}

/// One (month, item, attribute) triple as delivered by the API. `key` is
/// `[month_label, item_code, attribute]`; `values` holds a single text value,
/// either numeric text or `"."` for missing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawObservation {
    pub key: Vec<String>,
    pub values: Vec<String>,
}

/// The px-web response envelope. Only the `data` array matters here; the
/// metadata sections are ignored on deserialization.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub data: Vec<RawObservation>,
}

fn cpi_query() -> Query {
    Query {
        query: vec![QueryClause {
            code: "Index".to_string(),
            selection: Selection {
                filter: "item".to_string(),
                values: vec!["CPI".to_string()],
            },
        }],
        response: ResponseFormat {
            format: "json".to_string(),
        },
    }
}

/// POST the fixed CPI query and parse the JSON body. One request, no retry;
/// the API returns the entire series in a single response.
pub async fn fetch_cpi(client: &Client) -> Result<ApiResponse> {
    let url = Url::parse(API_URL).context("parsing CPI endpoint URL")?;
    let resp = client
        .post(url.clone())
        .json(&cpi_query())
        .send()
        .await
        .with_context(|| format!("POST {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status from {}", url))?
        .json::<ApiResponse>()
        .await
        .with_context(|| format!("Parsing JSON body from {}", url))?;
    Ok(resp)
}
