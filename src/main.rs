use anyhow::Result;
use cpiloader::{config, fetch, normalize, reshape, store, Config};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configuration ────────────────────────────────────────────
    dotenvy::dotenv().ok();
    let cfg = Config::from_env()?;
    match config::change_dir(&cfg.working_dir) {
        Some(dir) => info!(dir = %dir.display(), "working directory"),
        None => info!("continuing from current directory"),
    }

    // ─── 3) fetch ────────────────────────────────────────────────────
    let client = Client::new();
    let resp = fetch::fetch_cpi(&client).await?;
    info!(observations = resp.data.len(), "fetched CPI series");

    // ─── 4) reshape + normalize ──────────────────────────────────────
    let records = reshape::reshape(&resp.data)?;
    let rows = normalize::normalize(records)?;
    info!(months = rows.len(), "reshaped and normalized");

    // ─── 5) load ─────────────────────────────────────────────────────
    let mut conn = store::open_db(&cfg.db_name)?;
    store::replace_table(&mut conn, store::TABLE_NAME, &rows)?;

    info!("all done");
    Ok(())
}
