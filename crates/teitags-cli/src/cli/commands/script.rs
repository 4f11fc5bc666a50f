//! `teitags script <path>` – print the checklist script for a document's tags.

use anyhow::Result;
use std::path::Path;
use teitags_core::config::TeiConfig;
use teitags_core::TagFrequencyAnalyzer;

use super::analyze;

pub fn run_script(cfg: &TeiConfig, path: &Path, url: Option<&str>) -> Result<()> {
    let mut analyzer = TagFrequencyAnalyzer::new(cfg.clone());
    analyze(&mut analyzer, path, url)?;
    if let Some(js) = analyzer.render_tag_checklist_script() {
        print!("{}", js);
    }
    Ok(())
}
