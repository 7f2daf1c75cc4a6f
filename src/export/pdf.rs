//! PDF rendering of a `ReportTable`: A4 landscape, Helvetica, header row
//! repeated on every page.
//!
//! DESIGN
//! ======
//! Layout math (column widths, truncation, page breaks) is kept in plain
//! functions so it can be tested without producing a document.

#[cfg(test)]
#[path = "pdf_test.rs"]
mod pdf_test;

use std::ops::Range;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::{ExportError, ReportTable};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 12.0;
const TITLE_SIZE: f32 = 14.0;
const SUBTITLE_SIZE: f32 = 9.0;
const CELL_SIZE: f32 = 8.0;
const ROW_HEIGHT: f32 = 6.0;
const CELL_PADDING: f32 = 1.5;
/// Top of the header row, below title and generation date.
const TABLE_TOP: f32 = PAGE_HEIGHT - MARGIN - 20.0;
/// Average Helvetica glyph width as a fraction of the point size, in mm.
const GLYPH_MM_PER_PT: f32 = 0.3528 * 0.5;

/// # Errors
///
/// `ExportError::Pdf` when a font cannot be registered or the document
/// cannot be serialized.
pub fn render(table: &ReportTable) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(document_title(&table.title), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Contenido");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;

    let widths = column_widths(table, PAGE_WIDTH - 2.0 * MARGIN);
    let text_rows = table.text_rows();
    let pages = page_ranges(text_rows.len(), rows_per_page());
    let page_count = pages.len();

    for (index, range) in pages.into_iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Contenido");
            doc.get_page(page).get_layer(layer)
        };

        layer.use_text(table.title.as_str(), TITLE_SIZE, Mm(MARGIN), Mm(PAGE_HEIGHT - MARGIN - 5.0), &bold);
        let subtitle = format!(
            "Generado el {} - Página {} de {}",
            table.generated_at.format("%d/%m/%Y %H:%M"),
            index + 1,
            page_count
        );
        layer.use_text(subtitle, SUBTITLE_SIZE, Mm(MARGIN), Mm(PAGE_HEIGHT - MARGIN - 11.0), &regular);

        let headers: Vec<&str> = table.columns.iter().map(|c| c.title).collect();
        draw_row(&layer, &headers, &widths, TABLE_TOP, &bold);

        let mut y = TABLE_TOP - ROW_HEIGHT;
        for row in &text_rows[range] {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            draw_row(&layer, &cells, &widths, y, &regular);
            y -= ROW_HEIGHT;
        }
    }

    doc.save_to_bytes().map_err(pdf_err)
}

fn pdf_err(err: printpdf::Error) -> ExportError {
    ExportError::Pdf(format!("{err:?}"))
}

fn draw_row(layer: &PdfLayerReference, cells: &[&str], widths: &[f32], y: f32, font: &IndirectFontRef) {
    let mut x = MARGIN;
    for (cell, width) in cells.iter().zip(widths) {
        let text = truncate(cell, max_chars(*width, CELL_SIZE));
        if !text.is_empty() {
            layer.use_text(text, CELL_SIZE, Mm(x + CELL_PADDING), Mm(y - ROW_HEIGHT + 2.0), font);
        }
        x += width;
    }
}

/// Split the usable width across columns by their relative weights.
pub fn column_widths(table: &ReportTable, usable: f32) -> Vec<f32> {
    let total: f32 = table.columns.iter().map(|c| c.width.max(0.1)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    table.columns.iter().map(|c| usable * c.width.max(0.1) / total).collect()
}

/// Title for the document info dictionary, which printpdf writes as raw
/// bytes: Spanish letters are folded to ASCII and other non-ASCII dropped.
pub fn document_title(title: &str) -> String {
    title
        .chars()
        .filter_map(|c| match c {
            'á' | 'à' | 'ä' => Some('a'),
            'é' | 'è' | 'ë' => Some('e'),
            'í' | 'ì' | 'ï' => Some('i'),
            'ó' | 'ò' | 'ö' => Some('o'),
            'ú' | 'ù' | 'ü' => Some('u'),
            'Á' | 'À' | 'Ä' => Some('A'),
            'É' | 'È' | 'Ë' => Some('E'),
            'Í' | 'Ì' | 'Ï' => Some('I'),
            'Ó' | 'Ò' | 'Ö' => Some('O'),
            'Ú' | 'Ù' | 'Ü' => Some('U'),
            'ñ' => Some('n'),
            'Ñ' => Some('N'),
            c if c.is_ascii() => Some(c),
            _ => None,
        })
        .collect()
}

/// How many characters fit in a cell of `width` mm at `font_size` pt.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn max_chars(width: f32, font_size: f32) -> usize {
    let usable = (width - 2.0 * CELL_PADDING).max(0.0);
    (usable / (font_size * GLYPH_MM_PER_PT)).floor() as usize
}

/// Cut `text` to `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Data rows that fit below the header on one page.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rows_per_page() -> usize {
    (((TABLE_TOP - ROW_HEIGHT - MARGIN) / ROW_HEIGHT).floor() as usize).max(1)
}

/// Row ranges per page; an empty table still yields one (header-only) page.
pub fn page_ranges(rows: usize, per_page: usize) -> Vec<Range<usize>> {
    if rows == 0 {
        return vec![0..0];
    }
    let per_page = per_page.max(1);
    (0..rows).step_by(per_page).map(|start| start..(start + per_page).min(rows)).collect()
}
