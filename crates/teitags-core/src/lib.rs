pub mod config;
pub mod logging;

pub mod analyzer;
pub mod counter;
pub mod error;
pub mod fetch;
pub mod script;
pub mod url_model;

pub use analyzer::TagFrequencyAnalyzer;
pub use counter::{TagCount, TagCountTable};
pub use error::{ErrorKind, ParseError, TeiError, TransportError};
pub use script::{render_tag_checklist_script, ChecklistSelectors};
