/*!
 * Tests for content-region extraction and reinsertion
 */

use yawtai::article_extractor::ArticleExtractor;
use yawtai::errors::ExtractError;

use crate::common::sample_document;

#[test]
fn test_extract_withPresentRegion_shouldReturnItWithTagWrapper() {
    let document = sample_document("<h1>Title</h1><p>Body text.</p>");
    let region = ArticleExtractor::extract(&document).unwrap();

    assert!(region.starts_with("<article"));
    assert!(region.ends_with("</article>"));
    assert!(region.contains("<p>Body text.</p>"));
    assert!(!region.contains("site header"));
}

#[test]
fn test_extract_withMissingRegion_shouldReturnRegionNotFound() {
    let document = "<html><body><div>no article here</div></body></html>";
    let result = ArticleExtractor::extract(document);

    assert!(matches!(
        result,
        Err(ExtractError::RegionNotFound { tag: "article" })
    ));
}

#[test]
fn test_extract_withTwoRegions_shouldReturnTheFirstMatch() {
    let document =
        "<html><body><article><p>first</p></article><article><p>second</p></article></body></html>";
    let region = ArticleExtractor::extract(document).unwrap();

    assert!(region.contains("first"));
    assert!(!region.contains("second"));
}

#[test]
fn test_replace_withValidRegion_shouldSwapItInPlace() {
    let document = sample_document("<p>original body</p>");
    let updated =
        ArticleExtractor::replace(&document, "<article><p>翻譯後的內容</p></article>").unwrap();

    assert!(updated.contains("翻譯後的內容"));
    assert!(!updated.contains("original body"));
    // The rest of the document survives the swap
    assert!(updated.contains("site header"));
    assert!(updated.contains("site footer"));
    assert!(updated.contains("Sample Post"));
}

#[test]
fn test_replace_withUnparseableRegion_shouldErrorAndLeaveDocumentAlone() {
    let document = sample_document("<p>original body</p>");
    let result = ArticleExtractor::replace(&document, "<div>not an article</div>");

    assert!(matches!(
        result,
        Err(ExtractError::InvalidReplacement { tag: "article" })
    ));
}

#[test]
fn test_replace_withMissingRegion_shouldErrorWithoutTouchingDocument() {
    let document = "<html><body><p>no region</p></body></html>";
    let result = ArticleExtractor::replace(document, "<article><p>new</p></article>");

    assert!(matches!(
        result,
        Err(ExtractError::RegionNotFound { tag: "article" })
    ));
}

#[test]
fn test_extract_thenReplace_withSameRegion_shouldKeepBodyText() {
    let document = sample_document("<p>round trip body</p>");
    let region = ArticleExtractor::extract(&document).unwrap();
    let updated = ArticleExtractor::replace(&document, &region).unwrap();

    assert!(updated.contains("round trip body"));
    assert!(updated.contains("site header"));
}
