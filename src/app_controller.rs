use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::article_extractor::ArticleExtractor;
use crate::file_utils::{DocumentSource, FileManager};
use crate::outline_parser;
use crate::translation::TranslationService;

// @module: Application controller for document translation and outline parsing

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the chunked translation pipeline for one document source.
    ///
    /// Reads the document, extracts the content region, translates it chunk
    /// by chunk, reinserts the translated region and writes the result to
    /// the output directory. Returns the written path.
    pub async fn run_translate(&self, input: &str) -> Result<PathBuf> {
        let source = DocumentSource::parse(input)?;
        let document = source.read().await?;

        // Hard failure before any network spend: a document without the
        // region has nothing to translate.
        let region = ArticleExtractor::extract(&document)
            .context("Failed to extract the content region from the document")?;

        let service = TranslationService::new(self.config.clone())?;
        let translated_region = service
            .translate_article(&region)
            .await
            .context("Translation failed")?;

        let output = match ArticleExtractor::replace(&document, &translated_region) {
            Ok(updated) => updated,
            Err(e) => {
                // Diagnostic only: writing the untouched original beats
                // writing a corrupted document.
                warn!("Could not reinsert the translated region: {}", e);
                document
            }
        };

        let output_path =
            FileManager::generate_output_path(&source.file_name(), Path::new(&self.config.output_dir));
        FileManager::write_to_file(&output_path, &output)?;
        info!("Translated document written to {:?}", output_path);

        Ok(output_path)
    }

    /// Run the outline parser over a heading-delimited document.
    ///
    /// Writes the ordered record sequence as JSON to `output`, or to stdout
    /// when no output path is given.
    pub fn run_outline(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        let content = FileManager::read_to_string(input)?;

        let records = outline_parser::parse_outline(&content);
        info!("Parsed {} outline record(s) from {:?}", records.len(), input);

        let json = serde_json::to_string_pretty(&records)
            .context("Failed to serialize outline records")?;

        match output {
            Some(path) => {
                FileManager::write_to_file(path, &json)?;
                info!("Outline written to {:?}", path);
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}
