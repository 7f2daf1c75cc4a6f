//! Tabular report model and its Excel/PDF renderers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reports page turns fetched records into a `ReportTable` through a
//! list of `Column<T>` descriptors, previews it as HTML, and hands it to
//! `excel::render` or `pdf::render` for download.
//!
//! DESIGN
//! ======
//! Cells keep their typed value (`CellValue`) until a renderer decides how
//! to present it; `format_cell` is the single text rendering used by the
//! preview and the PDF. Excel writes currency as a number instead.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

pub mod excel;
pub mod pdf;

use chrono::{NaiveDate, NaiveDateTime};

use crate::util::format;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No se pudo generar el archivo Excel: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
    #[error("No se pudo generar el PDF: {0}")]
    Pdf(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Date,
    Currency,
    Boolean,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Date(NaiveDate),
    Number(f64),
    Bool(bool),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::from)
    }
}

impl From<Option<NaiveDate>> for CellValue {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Empty, Self::Date)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Declarative column: header, kind, relative width and how to read a row.
pub struct Column<T> {
    pub title: &'static str,
    pub kind: ColumnKind,
    pub width: f32,
    pub value: fn(&T) -> CellValue,
}

impl<T> Column<T> {
    pub const fn new(title: &'static str, kind: ColumnKind, width: f32, value: fn(&T) -> CellValue) -> Self {
        Self { title, kind, width, value }
    }
}

/// Column metadata detached from the row type.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnHeader {
    pub title: &'static str,
    pub kind: ColumnKind,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub generated_at: NaiveDateTime,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Vec<CellValue>>,
}

impl ReportTable {
    pub fn build<T>(title: impl Into<String>, generated_at: NaiveDateTime, columns: &[Column<T>], rows: &[T]) -> Self {
        Self {
            title: title.into(),
            generated_at,
            columns: columns
                .iter()
                .map(|c| ColumnHeader { title: c.title, kind: c.kind, width: c.width })
                .collect(),
            rows: rows
                .iter()
                .map(|row| columns.iter().map(|c| (c.value)(row)).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows rendered to display text, column by column.
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.columns)
                    .map(|(cell, col)| format_cell(col.kind, cell))
                    .collect()
            })
            .collect()
    }

    /// Base filename (without extension) for downloads.
    pub fn file_stem(&self) -> String {
        let slug: String = self
            .title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let slug = slug.split('_').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("_");
        format!("{slug}_{}", self.generated_at.format("%Y%m%d"))
    }
}

/// Render one cell as display text according to its column kind.
pub fn format_cell(kind: ColumnKind, cell: &CellValue) -> String {
    match (kind, cell) {
        (_, CellValue::Empty) => String::new(),
        (_, CellValue::Date(d)) => format::date(*d),
        (ColumnKind::Currency, CellValue::Number(n)) => format::currency(*n),
        (_, CellValue::Number(n)) => n.to_string(),
        (_, CellValue::Bool(b)) => format::yes_no(*b).to_owned(),
        (_, CellValue::Text(s)) => s.clone(),
    }
}
