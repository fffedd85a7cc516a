//! PDF rendering with genpdf
//!
//! genpdf embeds TrueType fonts, so a font family has to be found on disk.
//! Figures are listed by caption only; the charts themselves are in the
//! HTML rendering.

use crate::{Error, Report, Result, SectionBody, TableView};
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::style::{Style, StyledString};
use genpdf::{Document, Element as _, SimplePageDecorator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Font lookup and page layout for PDF output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Family name; files are expected as `{family}-Regular.ttf` etc.
    pub font_family: String,
    /// Directories searched in order
    pub font_dirs: Vec<PathBuf>,
    pub font_size: u8,
    pub margins: u8,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            font_family: "LiberationSans".to_string(),
            font_dirs: vec![
                PathBuf::from("/usr/share/fonts/truetype/liberation"),
                PathBuf::from("/usr/share/fonts/liberation-sans"),
                PathBuf::from("/usr/share/fonts/liberation"),
                PathBuf::from("/Library/Fonts"),
            ],
            font_size: 9,
            margins: 15,
        }
    }
}

fn load_fonts(options: &PdfOptions) -> Result<genpdf::fonts::FontFamily<genpdf::fonts::FontData>> {
    for dir in &options.font_dirs {
        match genpdf::fonts::from_files(dir, &options.font_family, None) {
            Ok(family) => {
                debug!(dir = %dir.display(), family = %options.font_family, "loaded fonts");
                return Ok(family);
            }
            Err(err) => debug!(dir = %dir.display(), error = %err, "font lookup failed"),
        }
    }
    Err(Error::Font {
        family: options.font_family.clone(),
        searched: options.font_dirs.clone(),
    })
}

fn table_layout(table: &TableView) -> Result<TableLayout> {
    let mut layout = TableLayout::new(vec![1; table.column_count().max(1)]);
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let header_style = Style::new().bold();
    let mut header = layout.row();
    for title in &table.headers {
        header.push_element(
            Paragraph::new(StyledString::new(title.clone(), header_style)).padded(1),
        );
    }
    header.push().map_err(|e| Error::Pdf(e.to_string()))?;

    for cells in &table.rows {
        let mut row = layout.row();
        for cell in cells {
            row.push_element(Paragraph::new(cell.as_str()).padded(1));
        }
        row.push().map_err(|e| Error::Pdf(e.to_string()))?;
    }
    Ok(layout)
}

/// Render the report to a PDF file
///
/// # Errors
/// `Font` if the configured family is not found in any font directory.
pub fn write_pdf(report: &Report, path: &Path, options: &PdfOptions) -> Result<()> {
    let fonts = load_fonts(options)?;

    let mut doc = Document::new(fonts);
    doc.set_title(report.title.clone());
    doc.set_font_size(options.font_size);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(options.margins);
    doc.set_page_decorator(decorator);

    doc.push(Paragraph::new(StyledString::new(
        report.title.clone(),
        Style::new().bold().with_font_size(18),
    )));
    doc.push(Break::new(1));

    let heading = Style::new().bold().with_font_size(13);
    for section in &report.sections {
        doc.push(Paragraph::new(StyledString::new(section.title.clone(), heading)));
        doc.push(Break::new(0.5));

        match &section.body {
            SectionBody::Table(table) if table.rows.is_empty() => {
                doc.push(Paragraph::new("No rows"));
            }
            SectionBody::Table(table) => doc.push(table_layout(table)?),
            SectionBody::Text(text) => {
                for paragraph in text.split("\n\n").filter(|p| !p.trim().is_empty()) {
                    doc.push(Paragraph::new(paragraph.trim()));
                }
            }
            SectionBody::Figure { caption, .. } => {
                doc.push(Paragraph::new(format!("Figure: {caption}")));
            }
            SectionBody::Failure { message } => {
                doc.push(Paragraph::new(StyledString::new(
                    format!("Analysis failed: {message}"),
                    Style::new().italic(),
                )));
            }
        }
        doc.push(Break::new(1));
    }

    doc.render_to_file(path)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    info!(path = %path.display(), "wrote PDF report");
    Ok(())
}
