//! CLI command handlers, one file per subcommand.

mod completions;
mod count;
mod fetch;
mod script;

pub use completions::run_completions;
pub use count::run_count;
#[cfg(test)]
pub(crate) use count::render_rows;
#[cfg(test)]
pub(crate) use fetch::destination;
pub use fetch::run_fetch;
pub use script::run_script;

use anyhow::{Context, Result};
use std::path::Path;
use teitags_core::TagFrequencyAnalyzer;

/// Fetch `url` to `path` when given, then count the tags of `path`.
fn analyze(analyzer: &mut TagFrequencyAnalyzer, path: &Path, url: Option<&str>) -> Result<()> {
    if let Some(url) = url {
        analyzer
            .fetch(url, path)
            .with_context(|| format!("fetch {}", url))?;
    }
    analyzer
        .compute_tag_frequencies(path)
        .with_context(|| format!("count tags in {}", path.display()))?;
    Ok(())
}
