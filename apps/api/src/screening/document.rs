//! Document intake: upload validation (extension, size, magic bytes) and flat text extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detects the real file type from its leading bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        FILE_SIGNATURES
            .iter()
            .find(|(sig, _)| bytes.starts_with(sig))
            .map(|(_, kind)| *kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
        }
    }
}

const FILE_SIGNATURES: &[(&[u8], DocumentKind)] = &[
    (b"%PDF", DocumentKind::Pdf),
    (&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1], DocumentKind::Doc),
    (b"PK\x03\x04", DocumentKind::Docx),
];

#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("Invalid file type. Please upload a PDF, DOC, or DOCX resume.")]
    UnsupportedExtension,

    #[error("File too large ({size_mb:.1} MB). Maximum allowed size is {max_mb} MB.")]
    TooLarge { size_mb: f64, max_mb: usize },

    #[error("File format not recognised. Please upload a valid PDF or Word document.")]
    UnrecognizedFormat,

    #[error("File extension \".{ext}\" does not match the actual file contents ({}).", .actual.as_str())]
    ExtensionMismatch { ext: String, actual: DocumentKind },
}

const BYTES_PER_MB: usize = 1024 * 1024;

/// Validates an uploaded file before any text is read from it.
///
/// Checks run in order: extension, size, magic bytes, then strict agreement
/// between the extension and the detected kind.
pub fn validate_upload(
    filename: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<DocumentKind, DocumentError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    let claimed = DocumentKind::from_extension(&ext).ok_or(DocumentError::UnsupportedExtension)?;

    if bytes.len() > max_bytes {
        return Err(DocumentError::TooLarge {
            size_mb: bytes.len() as f64 / BYTES_PER_MB as f64,
            max_mb: max_bytes / BYTES_PER_MB,
        });
    }

    let actual = DocumentKind::sniff(bytes).ok_or(DocumentError::UnrecognizedFormat)?;
    if actual != claimed {
        return Err(DocumentError::ExtensionMismatch { ext, actual });
    }

    Ok(actual)
}

/// Extracts flat text from a validated document.
///
/// Only PDFs are decoded; Word formats yield empty text, which the screening
/// pipeline reports as unreadable. Extraction failures are logged, not raised.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> String {
    match kind {
        DocumentKind::Pdf => match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("PDF text extraction failed: {e}");
                String::new()
            }
        },
        DocumentKind::Doc | DocumentKind::Docx => {
            debug!("No text decoder for {} documents", kind.as_str());
            String::new()
        }
    }
}
