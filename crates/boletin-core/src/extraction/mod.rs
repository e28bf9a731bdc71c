pub mod pdftotext;

use crate::error::BoletinError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
///
/// Implementations must be usable from concurrent per-bulletin units, so
/// the trait is `Send + Sync`; a unit that needs an exclusive handle should
/// construct its own backend instance instead.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, BoletinError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
