/*!
 * # yawtai - Yet Another Web-Article Translator with AI
 *
 * A Rust library for translating the content region of web articles into
 * Traditional Chinese using an AI completion service, and for parsing
 * heading-delimited book outlines into structured records.
 *
 * ## Features
 *
 * - Extract the `<article>` content region from an HTML document
 * - Split the region into fixed-size chunks and translate them concurrently
 * - Normalize model responses (fence markers, simplified-to-traditional script)
 * - Reinsert the translated region and write the updated document
 * - Classify and normalize outline headings into ordered records
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `article_extractor`: Content-region extraction and reinsertion
 * - `translation`: AI-powered translation pipeline:
 *   - `translation::core`: Translation service and concurrent dispatcher
 *   - `translation::chunking`: Fixed-size chunk splitting
 *   - `translation::normalize`: Response cleanup
 *   - `translation::prompts`: Conversation template
 * - `outline_parser`: Heading classification and record extraction
 * - `file_utils`: File system and document-source operations
 * - `app_controller`: Main application controller
 * - `providers`: Client implementation for the completion service:
 *   - `providers::openai`: OpenAI-style chat completions client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod article_extractor;
pub mod errors;
pub mod file_utils;
pub mod outline_parser;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use article_extractor::ArticleExtractor;
pub use errors::{AppError, ExtractError, ProviderError, TranslationError};
pub use outline_parser::{OutlineCategory, OutlineRecord, parse_outline};
pub use translation::TranslationService;
