use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("template archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("document xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive part missing: {0}")]
    MissingPart(String),

    #[error("malformed document xml: {0}")]
    Malformed(String),
}
