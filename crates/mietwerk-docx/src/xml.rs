//! WordprocessingML parsing and serialization for `word/document.xml`.
//!
//! Parsing is two-phase: a first reader slices the body into raw element
//! snippets (so unmodified content can be written back verbatim), then
//! each snippet is parsed into the tree. Property elements (`pPr`, `rPr`,
//! `tblPr`, ...) are never interpreted, only carried as raw XML.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::document::{Block, Document, ParaChild, Paragraph, Run, Table, TableCell, TableRow};
use crate::error::DocxError;

pub(crate) fn parse_document(xml: &str) -> Result<Document, DocxError> {
    let mut reader = reader_for(xml);

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"body" => {
                let after_start = reader.buffer_position() as usize;
                let span = reader.read_to_end(e.name())?;
                let body = parse_blocks(&xml[span.start as usize..span.end as usize])?;
                return Ok(Document {
                    prefix: xml[..after_start].to_string(),
                    suffix: xml[span.end as usize..].to_string(),
                    body,
                });
            }
            Event::Eof => {
                return Err(DocxError::Malformed(format!(
                    "no body element found (scanned {before} bytes)"
                )));
            }
            _ => {}
        }
    }
}

/// Parse a sequence of body-level (or cell-level) elements.
pub(crate) fn parse_blocks(xml: &str) -> Result<Vec<Block>, DocxError> {
    let mut reader = reader_for(xml);
    let mut blocks = Vec::new();

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                reader.read_to_end(e.name())?;
                let raw = &xml[before..reader.buffer_position() as usize];
                blocks.push(match name.as_slice() {
                    b"p" => Block::Paragraph(parse_paragraph(raw)?),
                    b"tbl" => Block::Table(parse_table(raw)?),
                    _ => Block::Raw(raw.to_string()),
                });
            }
            Event::Empty(e) => {
                let raw = &xml[before..reader.buffer_position() as usize];
                if e.local_name().as_ref() == b"p" {
                    blocks.push(Block::Paragraph(Paragraph {
                        props: None,
                        children: Vec::new(),
                        raw: Some(raw.to_string()),
                    }));
                } else {
                    blocks.push(Block::Raw(raw.to_string()));
                }
            }
            Event::Eof => return Ok(blocks),
            _ => {}
        }
    }
}

fn parse_paragraph(raw: &str) -> Result<Paragraph, DocxError> {
    let inner = element_content(raw)?;
    let mut reader = reader_for(inner);
    let mut props = None;
    let mut children = Vec::new();

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                reader.read_to_end(e.name())?;
                let snippet = &inner[before..reader.buffer_position() as usize];
                match name.as_slice() {
                    b"pPr" => props = Some(snippet.to_string()),
                    b"r" => children.push(ParaChild::Run(parse_run(snippet)?)),
                    _ => children.push(ParaChild::Raw(snippet.to_string())),
                }
            }
            Event::Empty(_) => {
                let snippet = &inner[before..reader.buffer_position() as usize];
                children.push(ParaChild::Raw(snippet.to_string()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Paragraph { props, children, raw: Some(raw.to_string()) })
}

fn parse_run(raw: &str) -> Result<Run, DocxError> {
    let inner = element_content(raw)?;
    let mut reader = reader_for(inner);
    let mut props = None;
    let mut text = String::new();

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"rPr" => {
                    reader.read_to_end(e.name())?;
                    props = Some(inner[before..reader.buffer_position() as usize].to_string());
                }
                b"t" => {
                    let raw_text = reader.read_text(e.name())?;
                    text.push_str(
                        &quick_xml::escape::unescape(&raw_text).map_err(quick_xml::Error::from)?,
                    );
                }
                _ => {
                    reader.read_to_end(e.name())?;
                }
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"br" | b"cr" => text.push('\n'),
                b"tab" => text.push('\t'),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(Run { props, text })
}

fn parse_table(raw: &str) -> Result<Table, DocxError> {
    let inner = element_content(raw)?;
    let mut reader = reader_for(inner);
    let mut table = Table { raw: Some(raw.to_string()), ..Table::default() };

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                reader.read_to_end(e.name())?;
                let snippet = &inner[before..reader.buffer_position() as usize];
                match name.as_slice() {
                    b"tblPr" => table.props = Some(snippet.to_string()),
                    b"tblGrid" => table.grid = Some(snippet.to_string()),
                    b"tr" => table.rows.push(parse_row(snippet)?),
                    _ => {}
                }
            }
            Event::Eof => return Ok(table),
            _ => {}
        }
    }
}

fn parse_row(raw: &str) -> Result<TableRow, DocxError> {
    let inner = element_content(raw)?;
    let mut reader = reader_for(inner);
    let mut row = TableRow::default();

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                reader.read_to_end(e.name())?;
                let snippet = &inner[before..reader.buffer_position() as usize];
                match name.as_slice() {
                    b"trPr" => row.props = Some(snippet.to_string()),
                    b"tc" => {
                        let cell_inner = element_content(snippet)?;
                        let mut cell = TableCell::default();
                        let mut cell_reader = reader_for(cell_inner);
                        let mut rest_start = 0usize;
                        // tcPr, if present, is the first child.
                        if let Ok(Event::Start(first)) = cell_reader.read_event() {
                            if first.local_name().as_ref() == b"tcPr" {
                                cell_reader.read_to_end(first.name())?;
                                let end = cell_reader.buffer_position() as usize;
                                cell.props = Some(cell_inner[..end].to_string());
                                rest_start = end;
                            }
                        }
                        cell.blocks = parse_blocks(&cell_inner[rest_start..])?;
                        row.cells.push(cell);
                    }
                    _ => {}
                }
            }
            Event::Eof => return Ok(row),
            _ => {}
        }
    }
}

/// Content of an element snippet: everything between the end of its start
/// tag and the start of its closing tag. Empty elements have no content.
fn element_content(raw: &str) -> Result<&str, DocxError> {
    let open_end = raw
        .find('>')
        .ok_or_else(|| DocxError::Malformed("unterminated start tag".into()))?;
    if raw[..=open_end].ends_with("/>") {
        return Ok("");
    }
    let close_start = raw
        .rfind("</")
        .ok_or_else(|| DocxError::Malformed("missing closing tag".into()))?;
    Ok(&raw[open_end + 1..close_start])
}

fn reader_for(xml: &str) -> Reader<&[u8]> {
    Reader::from_reader(xml.as_bytes())
}

// ── Serialization ──

pub(crate) fn serialize_document(doc: &Document) -> String {
    let mut out = String::with_capacity(doc.prefix.len() + doc.suffix.len() + 4096);
    out.push_str(&doc.prefix);
    for block in &doc.body {
        serialize_block(block, &mut out);
    }
    out.push_str(&doc.suffix);
    out
}

pub(crate) fn serialize_block(block: &Block, out: &mut String) {
    match block {
        Block::Paragraph(p) => serialize_paragraph(p, out),
        Block::Table(t) => serialize_table(t, out),
        Block::Raw(raw) => out.push_str(raw),
    }
}

fn serialize_paragraph(p: &Paragraph, out: &mut String) {
    if let Some(raw) = &p.raw {
        out.push_str(raw);
        return;
    }
    out.push_str("<w:p>");
    if let Some(props) = &p.props {
        out.push_str(props);
    }
    for child in &p.children {
        match child {
            ParaChild::Run(run) => serialize_run(run, out),
            ParaChild::Raw(raw) => out.push_str(raw),
        }
    }
    out.push_str("</w:p>");
}

fn serialize_run(run: &Run, out: &mut String) {
    out.push_str("<w:r>");
    if let Some(props) = &run.props {
        out.push_str(props);
    }
    // Newlines become explicit breaks, tabs tab marks.
    let mut first = true;
    for line in run.text.split('\n') {
        if !first {
            out.push_str("<w:br/>");
        }
        first = false;
        let mut first_seg = true;
        for seg in line.split('\t') {
            if !first_seg {
                out.push_str("<w:tab/>");
            }
            first_seg = false;
            if !seg.is_empty() {
                out.push_str("<w:t xml:space=\"preserve\">");
                push_escaped(seg, out);
                out.push_str("</w:t>");
            }
        }
    }
    out.push_str("</w:r>");
}

fn serialize_table(t: &Table, out: &mut String) {
    if let Some(raw) = &t.raw {
        out.push_str(raw);
        return;
    }
    out.push_str("<w:tbl>");
    if let Some(props) = &t.props {
        out.push_str(props);
    }
    if let Some(grid) = &t.grid {
        out.push_str(grid);
    }
    for row in &t.rows {
        out.push_str("<w:tr>");
        if let Some(props) = &row.props {
            out.push_str(props);
        }
        for cell in &row.cells {
            out.push_str("<w:tc>");
            if let Some(props) = &cell.props {
                out.push_str(props);
            }
            if cell.blocks.is_empty() {
                // A cell must contain at least one paragraph.
                out.push_str("<w:p/>");
            }
            for block in &cell.blocks {
                serialize_block(block, out);
            }
            out.push_str("</w:tc>");
        }
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
}

fn push_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        r#"<w:body>"#,
        r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:rPr><w:b/></w:rPr><w:t>Mietvertrag</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t xml:space="preserve">Miete: </w:t></w:r><w:r><w:t>[RENT_AMOUNT]</w:t></w:r></w:p>"#,
        r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr>"#,
        r#"</w:body></w:document>"#,
    );

    #[test]
    fn parse_splits_paragraphs_and_raw_blocks() {
        let doc = parse_document(DOC).unwrap();
        assert_eq!(doc.body.len(), 3);
        assert_eq!(doc.paragraph_count(), 2);
        let texts: Vec<String> = doc.paragraphs().map(|p| p.text()).collect();
        assert_eq!(texts[0], "Mietvertrag");
        assert_eq!(texts[1], "Miete: [RENT_AMOUNT]");
        assert!(matches!(&doc.body[2], Block::Raw(raw) if raw.starts_with("<w:sectPr")));
    }

    #[test]
    fn untouched_document_round_trips_byte_for_byte() {
        let doc = parse_document(DOC).unwrap();
        assert_eq!(serialize_document(&doc), DOC);
    }

    #[test]
    fn mutated_paragraph_is_rebuilt_with_breaks() {
        let mut doc = parse_document(DOC).unwrap();
        if let Block::Paragraph(p) = &mut doc.body[1] {
            p.set_text("Zeile 1\nZeile 2");
        }
        let xml = serialize_document(&doc);
        assert!(xml.contains("<w:t xml:space=\"preserve\">Zeile 1</w:t><w:br/>"));
        assert!(xml.contains("<w:t xml:space=\"preserve\">Zeile 2</w:t>"));
        // The untouched heading keeps its exact original form.
        assert!(xml.contains(r#"<w:pPr><w:jc w:val="center"/></w:pPr>"#));
    }

    #[test]
    fn text_entities_are_unescaped_and_reescaped() {
        let xml = r#"<w:body><w:p><w:r><w:t>Tom &amp; Jerry</w:t></w:r></w:p></w:body>"#;
        let blocks = parse_blocks(&xml[8..xml.len() - 9]).unwrap();
        let Block::Paragraph(mut p) = blocks.into_iter().next().unwrap() else {
            panic!("expected paragraph");
        };
        assert_eq!(p.text(), "Tom & Jerry");
        p.set_text("A < B & C");
        let mut out = String::new();
        serialize_block(&Block::Paragraph(p), &mut out);
        assert!(out.contains("A &lt; B &amp; C"));
    }

    #[test]
    fn table_cells_expose_paragraphs() {
        let xml = concat!(
            r#"<w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/></w:tblPr>"#,
            r#"<w:tblGrid><w:gridCol w:w="4000"/></w:tblGrid>"#,
            r#"<w:tr><w:tc><w:tcPr><w:tcW w:w="4000" w:type="dxa"/></w:tcPr>"#,
            r#"<w:p><w:r><w:t>[IBAN]</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        );
        let table = parse_table(xml).unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells.len(), 1);
        let Block::Paragraph(p) = &table.rows[0].cells[0].blocks[0] else {
            panic!("expected paragraph in cell");
        };
        assert_eq!(p.text(), "[IBAN]");
    }

    #[test]
    fn missing_body_is_malformed() {
        let err = parse_document("<w:document/>").unwrap_err();
        assert!(matches!(err, DocxError::Malformed(_)));
    }
}
