//! DOCX template handling: container read/write, an owned mutable document
//! tree, and the three-pass placeholder merge.

mod container;
mod document;
mod error;
mod merge;
mod xml;

pub use container::DocxFile;
pub use document::{Block, Document, ParaChild, Paragraph, Run, Table, TableCell, TableRow};
pub use error::DocxError;
pub use merge::{merge, render};
