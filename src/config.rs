// src/config.rs

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the pipeline runs from (`WORKING_DIR`).
    pub working_dir: PathBuf,
    /// SQLite database file (`DB_NAME`).
    pub db_name: String,
}

impl Config {
    /// Build a `Config` from the process environment. Both variables are
    /// required; a missing one is a configuration error, not a default.
    pub fn from_env() -> Result<Self> {
        let working_dir = env::var("WORKING_DIR")
            .context("WORKING_DIR not set")?
            .into();
        let db_name = env::var("DB_NAME").context("DB_NAME not set")?;
        Ok(Config {
            working_dir,
            db_name,
        })
    }
}

/// Change the current working directory. Failure is soft: the pipeline can
/// proceed from any directory as long as the database path resolves, so a
/// failed chdir logs a warning and returns `None` instead of aborting.
pub fn change_dir(path: &Path) -> Option<PathBuf> {
    match env::set_current_dir(path) {
        Ok(()) => env::current_dir().ok(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not change working directory");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn from_env_requires_both_vars() {
        env::remove_var("WORKING_DIR");
        env::remove_var("DB_NAME");
        assert!(Config::from_env().is_err());

        env::set_var("WORKING_DIR", "/tmp");
        assert!(Config::from_env().is_err());

        env::set_var("DB_NAME", "cpi.db");
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.working_dir, PathBuf::from("/tmp"));
        assert_eq!(cfg.db_name, "cpi.db");
    }

    #[test]
    fn change_dir_soft_fails_on_missing_path() {
        assert!(change_dir(Path::new("/definitely/not/a/real/dir")).is_none());
    }

    #[test]
    fn change_dir_returns_new_cwd() {
        let tmp = tempdir().unwrap();
        let got = change_dir(tmp.path()).unwrap();
        assert_eq!(
            got.canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }
}
