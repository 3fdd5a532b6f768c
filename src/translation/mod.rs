/*!
 * Chunked translation of a document content region.
 *
 * This module contains the pipeline that turns an extracted content region
 * into its translated counterpart. It is split into several submodules:
 *
 * - `core`: Translation service and the bounded concurrent dispatcher
 * - `chunking`: Fixed-size splitting of the region into request-sized chunks
 * - `normalize`: Cleanup of model responses (fence markers, script variants)
 * - `prompts`: The fixed conversation template sent with every chunk
 */

// Re-export main types for easier usage
pub use self::chunking::split_into_chunks;
pub use self::core::TranslationService;
pub use self::normalize::normalize_response;

// Submodules
pub mod chunking;
pub mod core;
pub mod normalize;
pub mod prompts;
