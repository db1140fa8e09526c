//! Startup loading of the persona's source documents.
//!
//! Three fixed files under the data directory: `summary.txt` (plain text),
//! `linkedin.pdf` and `resume.pdf`. A file that cannot be opened is fatal;
//! a PDF page that fails text extraction degrades to an empty string.

use anyhow::{Context as _, Result};
use lopdf::Document;
use std::fs;
use std::path::Path;

/// Text extracted from the persona's source documents.
#[derive(Debug, Clone)]
pub struct PersonaDocs {
    pub summary: String,
    pub linkedin: String,
    pub resume: String,
}

/// Load all three documents. Any unreadable file aborts startup.
pub fn load(data_dir: &Path) -> Result<PersonaDocs> {
    let summary_path = data_dir.join("summary.txt");
    let summary = fs::read_to_string(&summary_path)
        .with_context(|| format!("cannot read {}", summary_path.display()))?;

    let linkedin = extract_pdf_text(&data_dir.join("linkedin.pdf"))?;
    let resume = extract_pdf_text(&data_dir.join("resume.pdf"))?;

    Ok(PersonaDocs {
        summary,
        linkedin,
        resume,
    })
}

/// Extract text from every page of a PDF, page by page. A page whose
/// extraction errors contributes nothing rather than failing the load.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let doc = Document::load(path).with_context(|| format!("cannot open {}", path.display()))?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                eprintln!("[documents] page {} of {}: {}", page_number, path.display(), e);
            }
        }
    }
    Ok(text)
}
