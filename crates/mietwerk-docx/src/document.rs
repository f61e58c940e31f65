//! Owned mutable document tree.
//!
//! Paragraphs own runs, tables own rows own cells own blocks. Every parsed
//! node keeps the original XML slice it came from and serializes it back
//! byte-for-byte until the node is mutated; only then is the XML rebuilt
//! from the tree. Deleting a paragraph removes the node from its parent's
//! child list — structural absence, not blanked text.

/// Parsed `word/document.xml`: everything outside `<w:body>` is preserved
/// verbatim, the body is an editable block list.
#[derive(Debug, Clone)]
pub struct Document {
    /// XML up to and including the `<w:body>` start tag.
    pub(crate) prefix: String,
    /// XML from `</w:body>` to the end of the part.
    pub(crate) suffix: String,
    pub body: Vec<Block>,
}

/// One top-level (or cell-level) body child.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    /// Anything else (`w:sectPr`, bookmarks, ...) passes through untouched.
    Raw(String),
}

#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Raw `<w:pPr>…</w:pPr>` element, kept verbatim.
    pub(crate) props: Option<String>,
    pub(crate) children: Vec<ParaChild>,
    /// Original XML of the whole paragraph; dropped on first mutation.
    pub(crate) raw: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ParaChild {
    Run(Run),
    /// Non-run paragraph content (bookmarks, proofing marks, ...).
    Raw(String),
}

#[derive(Debug, Clone, Default)]
pub struct Run {
    /// Raw `<w:rPr>…</w:rPr>` element, kept verbatim.
    pub(crate) props: Option<String>,
    /// Run text with `<w:br/>` as `\n` and `<w:tab/>` as `\t`.
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Raw `<w:tblPr>…</w:tblPr>`.
    pub(crate) props: Option<String>,
    /// Raw `<w:tblGrid>…</w:tblGrid>`.
    pub(crate) grid: Option<String>,
    pub rows: Vec<TableRow>,
    pub(crate) raw: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TableRow {
    /// Raw `<w:trPr>…</w:trPr>`.
    pub(crate) props: Option<String>,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default)]
pub struct TableCell {
    /// Raw `<w:tcPr>…</w:tcPr>`.
    pub(crate) props: Option<String>,
    pub blocks: Vec<Block>,
}

impl Paragraph {
    /// Concatenated text of all runs, break and tab characters included.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                ParaChild::Run(run) => Some(run.text.as_str()),
                ParaChild::Raw(_) => None,
            })
            .collect()
    }

    /// Replace the paragraph content with a single run carrying `text`.
    ///
    /// The first run's formatting survives; the paragraph's own properties
    /// are untouched. Any non-run children are dropped with the runs.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let props = self.children.iter().find_map(|child| match child {
            ParaChild::Run(run) => Some(run.props.clone()),
            ParaChild::Raw(_) => None,
        });
        self.children = vec![ParaChild::Run(Run {
            props: props.flatten(),
            text: text.into(),
        })];
        self.raw = None;
    }

    /// A fresh paragraph with one unformatted run.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            props: None,
            children: vec![ParaChild::Run(Run { props: None, text: text.into() })],
            raw: None,
        }
    }
}

impl Table {
    /// Mark the table as mutated so serialization rebuilds it.
    pub(crate) fn touch(&mut self) {
        self.raw = None;
    }
}

impl TableCell {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            props: None,
            blocks: vec![Block::Paragraph(Paragraph::from_text(text))],
        }
    }
}

impl Document {
    /// Top-level paragraphs, in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Count of top-level paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_text_concatenates_runs() {
        let p = Paragraph {
            props: None,
            children: vec![
                ParaChild::Run(Run { props: None, text: "Miete: ".into() }),
                ParaChild::Raw("<w:proofErr w:type=\"spellStart\"/>".into()),
                ParaChild::Run(Run { props: None, text: "[RENT_AMOUNT]".into() }),
            ],
            raw: Some("<w:p/>".into()),
        };
        assert_eq!(p.text(), "Miete: [RENT_AMOUNT]");
    }

    #[test]
    fn set_text_collapses_to_first_runs_formatting() {
        let mut p = Paragraph {
            props: None,
            children: vec![
                ParaChild::Run(Run {
                    props: Some("<w:rPr><w:b/></w:rPr>".into()),
                    text: "a".into(),
                }),
                ParaChild::Run(Run { props: None, text: "b".into() }),
            ],
            raw: Some("<w:p/>".into()),
        };
        p.set_text("ersetzt");
        assert_eq!(p.children.len(), 1);
        assert_eq!(p.text(), "ersetzt");
        match &p.children[0] {
            ParaChild::Run(run) => {
                assert_eq!(run.props.as_deref(), Some("<w:rPr><w:b/></w:rPr>"));
            }
            ParaChild::Raw(_) => panic!("expected a run"),
        }
        assert!(p.raw.is_none());
    }
}
