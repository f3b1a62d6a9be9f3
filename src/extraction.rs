//! PDF text extraction
//!
//! One parsing pass yields both the concatenated text and the page count,
//! so the pipeline never has to reopen the staged file once cleanup has run.

use std::path::Path;

use crate::error::{Error, Result};

/// Result of a successful extraction pass
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Concatenated page text, single-space separated, trimmed
    pub text: String,
    /// Number of pages in the document
    pub page_count: u32,
}

/// PDF text extractor backed by lopdf
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text and page count from a PDF on disk
    pub fn extract(path: &Path) -> Result<ExtractedDocument> {
        if !path.exists() {
            return Err(Error::extraction(format!(
                "file does not exist: {}",
                path.display()
            )));
        }

        let doc = lopdf::Document::load(path)
            .map_err(|e| Error::extraction(format!("failed to load PDF: {}", e)))?;

        Self::extract_document(&doc)
    }

    /// Extract text and page count from in-memory PDF bytes
    pub fn extract_bytes(data: &[u8]) -> Result<ExtractedDocument> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(format!("failed to load PDF: {}", e)))?;

        Self::extract_document(&doc)
    }

    fn extract_document(doc: &lopdf::Document) -> Result<ExtractedDocument> {
        let pages = doc.get_pages();
        let page_count = pages.len() as u32;

        let mut text = String::new();
        for &page_number in pages.keys() {
            let page_text = match doc.extract_text(&[page_number]) {
                Ok(t) => t,
                Err(e) => {
                    tracing::debug!("No text from page {}: {}", page_number, e);
                    continue;
                }
            };
            let page_text = page_text.replace('\0', "");
            let page_text = page_text.trim();
            // A page with no text contributes nothing, not even a separator
            if page_text.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(page_text);
        }

        let text = text.trim().to_string();
        tracing::info!("Extracted {} chars from {} pages", text.len(), page_count);

        if text.is_empty() {
            return Err(Error::extraction("no text extracted"));
        }

        Ok(ExtractedDocument { text, page_count })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a minimal PDF where each entry in `page_texts` becomes one page;
    /// `None` produces a page with an empty content stream.
    pub(crate) fn build_pdf(page_texts: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in page_texts {
            let operations = match page_text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![50.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
