//! Three-pass placeholder merge.
//!
//! Pass 1 replaces inline `[KEY]` markers in running text (top-level
//! paragraphs first, then table cells). Pass 2 resolves block markers that
//! occupy a whole paragraph: non-empty values replace the paragraph
//! content, empty values delete the paragraph. The cost-table marker is
//! resolved inside pass 2 by inserting a real table. Block markers are
//! invisible to pass 1 so an empty block value still deletes its
//! paragraph.

use mietwerk_core::{RenderContext, keys};
use tracing::debug;

use crate::container::DocxFile;
use crate::document::{Block, Document, Paragraph, Table, TableCell, TableRow};
use crate::error::DocxError;

// Cost-table geometry, in twips (1 cm = 567 twips).
const COL_LABEL_TWIPS: u32 = 7088; // 12.5 cm
const COL_AMOUNT_TWIPS: u32 = 2268; // 4.0 cm
const ROW_HEADER_TWIPS: u32 = 538; // 0.95 cm
const ROW_BODY_TWIPS: u32 = 708; // 1.25 cm
const ROW_LAST_TWIPS: u32 = 538; // 0.95 cm

/// Load a template, merge the context, and return the final bytes.
pub fn render(template: &[u8], ctx: &RenderContext) -> Result<Vec<u8>, DocxError> {
    let mut docx = DocxFile::from_bytes(template)?;
    merge(&mut docx, ctx);
    docx.to_bytes()
}

/// Apply all merge passes to a loaded template.
pub fn merge(docx: &mut DocxFile, ctx: &RenderContext) {
    inline_pass(&mut docx.document, ctx);
    block_pass(&mut docx.document, ctx);
}

// ── Pass 1: inline markers ──

fn inline_pass(doc: &mut Document, ctx: &RenderContext) {
    let mut replaced = 0usize;
    for block in &mut doc.body {
        replaced += inline_block(block, ctx);
    }
    debug!(paragraphs = replaced, "inline pass done");
}

fn inline_block(block: &mut Block, ctx: &RenderContext) -> usize {
    match block {
        Block::Paragraph(p) => usize::from(inline_paragraph(p, ctx)),
        Block::Table(table) => {
            let mut replaced = 0;
            for row in &mut table.rows {
                for cell in &mut row.cells {
                    for inner in &mut cell.blocks {
                        replaced += inline_block(inner, ctx);
                    }
                }
            }
            if replaced > 0 {
                table.touch();
            }
            replaced
        }
        Block::Raw(_) => 0,
    }
}

/// Replace every inline marker in one paragraph. Returns whether anything
/// changed; changed paragraphs collapse to a single run, untouched ones
/// keep their structure.
fn inline_paragraph(paragraph: &mut Paragraph, ctx: &RenderContext) -> bool {
    let mut text = paragraph.text();
    if text.is_empty() {
        return false;
    }

    let mut changed = false;
    for (key, value) in ctx.texts() {
        // Block markers own their paragraph and belong to pass 2.
        if keys::is_block_key(key) {
            continue;
        }
        let marker = format!("[{key}]");
        if text.contains(&marker) {
            text = text.replace(&marker, value);
            changed = true;
        }
    }

    if changed {
        paragraph.set_text(text);
    }
    changed
}

// ── Pass 2: block markers ──

fn block_pass(doc: &mut Document, ctx: &RenderContext) {
    let mut i = 0;
    while i < doc.body.len() {
        let Block::Paragraph(p) = &doc.body[i] else {
            i += 1;
            continue;
        };
        let trimmed = p.text().trim().to_string();

        if trimmed == format!("[{}]", keys::MIETE_BK_TABELLE) {
            let rows = ctx.table(keys::MIETE_BK_TABELLE);
            doc.body.remove(i);
            if !rows.is_empty() {
                doc.body.insert(i, Block::Table(cost_table(rows)));
                i += 1;
            }
            continue;
        }

        match block_key_for(&trimmed) {
            Some(key) => {
                let value = ctx.text(key);
                if value.trim().is_empty() {
                    doc.body.remove(i);
                } else {
                    let Block::Paragraph(p) = &mut doc.body[i] else {
                        unreachable!("checked above");
                    };
                    p.set_text(value);
                    i += 1;
                }
            }
            None => i += 1,
        }
    }
}

fn block_key_for(paragraph_text: &str) -> Option<&'static str> {
    keys::BLOCK_KEYS
        .iter()
        .copied()
        .find(|key| paragraph_text == format!("[{key}]"))
}

// ── Cost-table construction ──

/// Build the § 5 cost table: header plus one row per (label, amount)
/// pair, fixed column widths, full borders, centered vertical alignment,
/// exact row heights with a distinct header/body/last-row profile.
fn cost_table(rows: &[(String, String)]) -> Table {
    let mut table = Table {
        props: Some(table_props()),
        grid: Some(format!(
            "<w:tblGrid><w:gridCol w:w=\"{COL_LABEL_TWIPS}\"/><w:gridCol w:w=\"{COL_AMOUNT_TWIPS}\"/></w:tblGrid>"
        )),
        rows: Vec::with_capacity(rows.len() + 1),
        raw: None,
    };

    table
        .rows
        .push(table_row("Beschreibung", "Betrag (EUR)", ROW_HEADER_TWIPS));
    for (idx, (label, amount)) in rows.iter().enumerate() {
        let height = if idx + 1 == rows.len() {
            ROW_LAST_TWIPS
        } else {
            ROW_BODY_TWIPS
        };
        table.rows.push(table_row(label, amount, height));
    }

    table
}

fn table_props() -> String {
    let mut borders = String::from("<w:tblBorders>");
    for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
        borders.push_str(&format!(
            "<w:{edge} w:val=\"single\" w:sz=\"8\" w:space=\"0\" w:color=\"000000\"/>"
        ));
    }
    borders.push_str("</w:tblBorders>");
    format!("<w:tblPr><w:tblW w:w=\"0\" w:type=\"auto\"/>{borders}</w:tblPr>")
}

fn table_row(label: &str, amount: &str, height_twips: u32) -> TableRow {
    TableRow {
        props: Some(format!(
            "<w:trPr><w:trHeight w:val=\"{height_twips}\" w:hRule=\"exact\"/></w:trPr>"
        )),
        cells: vec![
            table_cell(label, COL_LABEL_TWIPS),
            table_cell(amount, COL_AMOUNT_TWIPS),
        ],
    }
}

fn table_cell(text: &str, width_twips: u32) -> TableCell {
    let mut cell = TableCell::from_text(text);
    cell.props = Some(format!(
        "<w:tcPr><w:tcW w:w=\"{width_twips}\" w:type=\"dxa\"/><w:vAlign w:val=\"center\"/></w:tcPr>"
    ));
    cell
}
