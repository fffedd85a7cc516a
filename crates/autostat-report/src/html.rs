//! Standalone HTML rendering

use crate::{Report, Result, SectionBody, TableView};
use std::path::Path;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn styles() -> &'static str {
    r#"
        body {
            font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
            margin: 24px auto;
            max-width: 1100px;
            color: #222;
        }
        h1 { border-bottom: 2px solid #2c5282; padding-bottom: 8px; }
        h2 { margin-top: 32px; color: #2c5282; }
        table { border-collapse: collapse; margin: 8px 0; font-size: 14px; }
        th, td { border: 1px solid #cbd5e0; padding: 4px 10px; text-align: right; }
        th { background: #edf2f7; }
        td:first-child, th:first-child { text-align: left; }
        tr:nth-child(even) { background: #f7fafc; }
        figure { margin: 8px 0; }
        figcaption { font-size: 13px; color: #555; }
        .failure {
            border-left: 4px solid #c53030;
            background: #fff5f5;
            padding: 8px 12px;
        }
        .empty { color: #777; font-style: italic; }
    "#
}

fn render_table(table: &TableView) -> String {
    if table.rows.is_empty() {
        return "    <p class=\"empty\">No rows</p>\n".to_string();
    }

    let mut html = String::new();
    html.push_str("    <table>\n        <tr>");
    for header in &table.headers {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n");
    for row in &table.rows {
        html.push_str("        <tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("    </table>\n");
    html
}

/// Render the report as a single HTML document with inline SVG figures
pub fn render_html(report: &Report) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "    <title>{}</title>\n",
        escape_html(&report.title)
    ));
    html.push_str("    <style>");
    html.push_str(styles());
    html.push_str("</style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str(&format!("    <h1>{}</h1>\n", escape_html(&report.title)));

    for section in &report.sections {
        html.push_str(&format!("    <h2>{}</h2>\n", escape_html(&section.title)));
        match &section.body {
            SectionBody::Table(table) => html.push_str(&render_table(table)),
            SectionBody::Text(text) => {
                for paragraph in text.split("\n\n").filter(|p| !p.trim().is_empty()) {
                    html.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph.trim())));
                }
            }
            SectionBody::Figure { caption, svg } => {
                html.push_str("    <figure>\n");
                html.push_str(svg);
                html.push_str(&format!(
                    "\n        <figcaption>{}</figcaption>\n    </figure>\n",
                    escape_html(caption)
                ));
            }
            SectionBody::Failure { message } => {
                html.push_str(&format!(
                    "    <div class=\"failure\">Analysis failed: {}</div>\n",
                    escape_html(message)
                ));
            }
        }
    }

    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

pub fn write_html(report: &Report, path: &Path) -> Result<()> {
    std::fs::write(path, render_html(report))?;
    Ok(())
}
