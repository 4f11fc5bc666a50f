//! `teitags count <path>` – print tag frequencies.

use anyhow::Result;
use std::fmt::Write;
use std::path::Path;
use teitags_core::config::TeiConfig;
use teitags_core::{TagCount, TagFrequencyAnalyzer};

use super::analyze;
use crate::cli::{OutputFormat, SortOrder};

pub fn run_count(
    cfg: &TeiConfig,
    path: &Path,
    url: Option<&str>,
    sort: SortOrder,
    format: OutputFormat,
) -> Result<()> {
    let mut analyzer = TagFrequencyAnalyzer::new(cfg.clone());
    analyze(&mut analyzer, path, url)?;
    let Some(table) = analyzer.table() else {
        return Ok(());
    };

    let rows = match sort {
        SortOrder::Count => table.by_count(),
        SortOrder::Tag => table.by_tag(),
    };
    print!("{}", render_rows(&rows, table.total(), format)?);
    Ok(())
}

/// Format rows as an aligned `TAG COUNT` table with a total line, or as a JSON array.
pub(crate) fn render_rows(rows: &[TagCount<'_>], total: u64, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(rows)?);
            out.push('\n');
        }
        OutputFormat::Table => {
            let width = rows
                .iter()
                .map(|r| r.tag.chars().count())
                .max()
                .unwrap_or(0)
                .max("total".len());
            writeln!(out, "{:<width$}  {}", "TAG", "COUNT")?;
            for r in rows {
                writeln!(out, "{:<width$}  {}", r.tag, r.count)?;
            }
            writeln!(out, "{:<width$}  {}", "total", total)?;
        }
    }
    Ok(out)
}
