//! `teitags fetch <url>` – download a document to local disk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use teitags_core::config::TeiConfig;
use teitags_core::fetch;
use teitags_core::url_model::derive_filename;

pub fn run_fetch(cfg: &TeiConfig, url: &str, out: Option<PathBuf>) -> Result<()> {
    let dest = destination(url, out, &std::env::current_dir()?);
    let bytes = fetch::fetch(url, &dest, &cfg.fetch).with_context(|| format!("fetch {}", url))?;
    tracing::debug!(bytes, dest = %dest.display(), "fetch command done");
    println!("{}", dest.display());
    Ok(())
}

/// `--out` when given, else the URL's file name under `cwd`.
pub(crate) fn destination(url: &str, out: Option<PathBuf>, cwd: &Path) -> PathBuf {
    out.unwrap_or_else(|| cwd.join(derive_filename(url)))
}
