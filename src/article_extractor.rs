/*!
 * Content-region extraction and reinsertion for HTML documents.
 *
 * The translatable body of a document is the first `<article>` element.
 * Extraction returns it serialized with its own tag wrapper; reinsertion
 * swaps a translated region back into the original document. Tag identity
 * is matched by name only and the first match wins - a document is assumed
 * to contain at most one content region.
 */

use dom_query::Document;

use crate::errors::ExtractError;

/// Tag name delimiting the translatable body of a document.
pub const CONTENT_REGION_TAG: &str = "article";

/// Extractor for the document content region
pub struct ArticleExtractor;

impl ArticleExtractor {
    /// Extract the content region, serialized including its tag wrapper.
    ///
    /// A document without the region is a hard error: continuing without one
    /// would spend translation calls on nothing.
    pub fn extract(document: &str) -> Result<String, ExtractError> {
        let doc = Document::from(document);
        let region = doc.select_single(CONTENT_REGION_TAG);

        if !region.exists() {
            return Err(ExtractError::RegionNotFound {
                tag: CONTENT_REGION_TAG,
            });
        }

        Ok(region.html().to_string())
    }

    /// Replace the content region with `new_region` and re-serialize the document.
    ///
    /// The replacement must itself parse back to the expected element;
    /// otherwise the caller gets an error and the original document stays
    /// untouched. The caller decides whether that is fatal.
    pub fn replace(document: &str, new_region: &str) -> Result<String, ExtractError> {
        let doc = Document::from(document);
        let region = doc.select_single(CONTENT_REGION_TAG);

        if !region.exists() {
            return Err(ExtractError::RegionNotFound {
                tag: CONTENT_REGION_TAG,
            });
        }

        let fragment = Document::from(new_region);
        if !fragment.select_single(CONTENT_REGION_TAG).exists() {
            return Err(ExtractError::InvalidReplacement {
                tag: CONTENT_REGION_TAG,
            });
        }

        region.replace_with_html(new_region);
        Ok(doc.html().to_string())
    }
}
