use anyhow::{Context, Result, anyhow};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

// @module: File and document-source utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: HTML file extension
    pub fn is_html_file<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("html"))
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a translated document
    // @params: input_name, output_dir
    pub fn generate_output_path<P: AsRef<Path>>(input_name: &str, output_dir: P) -> PathBuf {
        output_dir.as_ref().join(format!("Translated_{}", input_name))
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file, creating the parent directory if absent
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}

/// A document source given on the command line: a local HTML file or a remote URL.
///
/// The boundary contract is "produce the document as one complete string";
/// there is no streaming.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Local file path
    File(PathBuf),
    /// Remote http(s) URL
    Remote(Url),
}

impl DocumentSource {
    /// Parse and validate a source argument.
    ///
    /// File inputs must exist and carry an `.html` extension; anything that
    /// looks like a URL must parse as http(s). Invalid input is an error
    /// before any work happens.
    pub fn parse(input: &str) -> Result<Self> {
        if input.starts_with("http://") || input.starts_with("https://") {
            let url = Url::parse(input).with_context(|| format!("Malformed URL: {}", input))?;
            return Ok(Self::Remote(url));
        }

        let path = PathBuf::from(input);
        if !FileManager::file_exists(&path) {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }
        if !FileManager::is_html_file(&path) {
            return Err(anyhow!("Input file must be an .html file: {:?}", path));
        }
        Ok(Self::File(path))
    }

    /// Produce the whole document as a single string.
    pub async fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                let document = FileManager::read_to_string(path)?;
                info!("Read document from {:?}", path);
                Ok(document)
            }
            Self::Remote(url) => {
                let response = reqwest::get(url.clone())
                    .await
                    .with_context(|| format!("Failed to fetch {}", url))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(anyhow!("Failed to fetch {}: HTTP {}", url, status));
                }

                let document = response
                    .text()
                    .await
                    .with_context(|| format!("Failed to read response body from {}", url))?;
                info!("Fetched document from {}", url);
                Ok(document)
            }
        }
    }

    /// Derive the output file name for this source.
    pub fn file_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| "article.html".to_string()),
            Self::Remote(url) => {
                let segment = url
                    .path_segments()
                    .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
                    .unwrap_or("");
                if segment.is_empty() {
                    "article.html".to_string()
                } else if segment.to_ascii_lowercase().ends_with(".html") {
                    segment.to_string()
                } else {
                    format!("{}.html", segment)
                }
            }
        }
    }
}
