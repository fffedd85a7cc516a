//! Report document model

use crate::TableView;
use serde::Serialize;

/// Content of one report section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    Table(TableView),
    Text(String),
    /// An SVG chart with its caption
    Figure { caption: String, svg: String },
    /// An analysis that could not be completed
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

/// Ordered sections under one title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, title: impl Into<String>, body: SectionBody) -> &mut Self {
        self.sections.push(Section {
            title: title.into(),
            body,
        });
        self
    }

    pub fn push_table(&mut self, title: impl Into<String>, table: TableView) -> &mut Self {
        self.push(title, SectionBody::Table(table))
    }

    pub fn push_text(&mut self, title: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.push(title, SectionBody::Text(text.into()))
    }

    pub fn push_figure(
        &mut self,
        title: impl Into<String>,
        caption: impl Into<String>,
        svg: String,
    ) -> &mut Self {
        self.push(
            title,
            SectionBody::Figure {
                caption: caption.into(),
                svg,
            },
        )
    }

    pub fn push_failure(&mut self, title: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.push(
            title,
            SectionBody::Failure {
                message: message.into(),
            },
        )
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Sections whose analysis failed
    pub fn failures(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|s| matches!(s.body, SectionBody::Failure { .. }))
    }

    /// Table sections with their titles, in report order
    pub fn tables(&self) -> impl Iterator<Item = (&str, &TableView)> {
        self.sections.iter().filter_map(|s| match &s.body {
            SectionBody::Table(table) => Some((s.title.as_str(), table)),
            _ => None,
        })
    }
}
