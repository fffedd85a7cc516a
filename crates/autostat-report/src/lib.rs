//! Report rendering for the automobile analysis
//!
//! A [`Report`] is an ordered list of titled sections holding tables, text,
//! SVG figures or the message of a failed analysis. It renders to HTML, PDF
//! and JSON, and its tables export to CSV.

mod error;
mod html;
mod pdf;
mod report;
mod table;

pub use error::{Error, Result};
pub use html::{render_html, write_html};
pub use pdf::{write_pdf, PdfOptions};
pub use report::{Report, Section, SectionBody};
pub use table::{write_csv, TableView};

/// Serialize the report as pretty JSON
pub fn write_json(report: &Report, path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
