//! DOCX (OOXML) container handling.
//!
//! A DOCX file is a ZIP archive; only `word/document.xml` is interpreted.
//! Every other entry passes through unmodified on write, so styles,
//! numbering, headers, and relationships survive the merge untouched.

use std::io::{Cursor, Read, Write};

use tracing::debug;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::document::Document;
use crate::error::DocxError;
use crate::xml;

const DOCUMENT_PART: &str = "word/document.xml";

/// A loaded DOCX template: the parsed main document plus the untouched
/// remaining archive entries in their original order.
#[derive(Debug)]
pub struct DocxFile {
    pub document: Document,
    entries: Vec<(String, Vec<u8>)>,
}

impl DocxFile {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut entries = Vec::with_capacity(archive.len());
        let mut document_xml = None;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            if name == DOCUMENT_PART {
                document_xml = Some(String::from_utf8(data).map_err(|e| {
                    DocxError::Malformed(format!("document part is not UTF-8: {e}"))
                })?);
            } else {
                entries.push((name, data));
            }
        }

        let document_xml =
            document_xml.ok_or_else(|| DocxError::MissingPart(DOCUMENT_PART.to_string()))?;
        let document = xml::parse_document(&document_xml)?;
        debug!(entries = entries.len(), paragraphs = document.paragraph_count(), "template loaded");

        Ok(Self { document, entries })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DocxError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file(DOCUMENT_PART, options)?;
        writer.write_all(xml::serialize_document(&self.document).as_bytes())?;

        for (name, data) in &self.entries {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(data)?;
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Names of the pass-through archive entries.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}
