/*!
 * Common test utilities for the yawtai test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;


/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds a complete HTML document around the given article body
pub fn sample_document(article_body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Sample Post</title></head>\
         <body><header>site header</header>\
         <article>{}</article>\
         <footer>site footer</footer></body></html>",
        article_body
    )
}

/// Builds a sample outline document for parser tests
pub fn sample_outline() -> &'static str {
    "# A\n## B\n### C\n#### D\n##### E"
}
