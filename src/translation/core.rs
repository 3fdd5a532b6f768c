/*!
 * Core translation service implementation.
 *
 * This module contains the TranslationService struct and the bounded
 * concurrent dispatcher that drives one completion request per chunk.
 */

use futures::stream::{self, StreamExt};
use log::{error, info};
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::{ProviderError, TranslationError};
use crate::providers::Provider;
use crate::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};

use super::chunking::split_into_chunks;
use super::normalize::normalize_response;
use super::prompts::build_translation_messages;

/// Naive per-1k-character price used for the pre-dispatch cost preview.
const COST_PER_THOUSAND_CHARS: f64 = 0.002;

/// Translation service driving chunked completion requests
pub struct TranslationService<P = OpenAI>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    /// Provider client shared by all in-flight workers
    provider: Arc<P>,

    /// Configuration for the translation service
    pub config: Config,
}

impl<P> Clone for TranslationService<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: self.config.clone(),
        }
    }
}

impl TranslationService<OpenAI> {
    /// Create a new translation service with the given configuration.
    ///
    /// The API credential is resolved here and handed to the client as an
    /// explicit constructor argument; a missing credential is an immediate
    /// error rather than a failed request later.
    pub fn new(config: Config) -> Result<Self, TranslationError> {
        let api_key = config.translation.api_key_or_env();
        if api_key.is_empty() {
            return Err(TranslationError::Provider(
                ProviderError::AuthenticationError(
                    "No API key configured; set translation.api_key in the config file \
                     or the OPENAI_API_KEY environment variable"
                        .to_string(),
                ),
            ));
        }

        let client = OpenAI::new(
            api_key,
            config.translation.endpoint.clone(),
            config.translation.timeout_secs,
        );

        Ok(Self::with_provider(config, client))
    }
}

impl<P> TranslationService<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse> + 'static,
{
    /// Create a service around an existing provider client.
    pub fn with_provider(config: Config, provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Test the connection to the completion service.
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.provider.test_connection().await
    }

    /// Translate a content region: split, dispatch, reassemble in order.
    pub async fn translate_article(&self, region: &str) -> Result<String, TranslationError> {
        let char_count = region.chars().count();
        info!("Content region length: {} characters", char_count);
        info!(
            "Estimated cost: ${:.4}",
            char_count as f64 / 1000.0 * COST_PER_THOUSAND_CHARS
        );

        let chunks = split_into_chunks(region, self.config.chunk_size)?;
        if chunks.is_empty() {
            return Ok(String::new());
        }

        info!(
            "Submitting {} chunk(s) with up to {} concurrent request(s)",
            chunks.len(),
            self.config.max_workers
        );

        let translated = self.dispatch_chunks(chunks).await?;
        Ok(translated.concat())
    }

    /// Run translate-then-normalize over all chunks on a bounded pool.
    ///
    /// Completion order is unconstrained; each result is re-associated with
    /// its chunk index through a single-assignment slot vector, so
    /// `results[i]` always corresponds to `chunks[i]`. The first fatal chunk
    /// error aborts the whole dispatch and drops outstanding requests.
    async fn dispatch_chunks(&self, chunks: Vec<String>) -> Result<Vec<String>, TranslationError> {
        let total = chunks.len();
        let mut slots: Vec<Option<String>> = Vec::new();
        slots.resize_with(total, || None);

        let mut in_flight = stream::iter(chunks.into_iter().enumerate().map(|(index, chunk)| {
            let service = self.clone();
            async move {
                let result = service.translate_chunk(&chunk, index, total).await;
                (index, result.map(|raw| normalize_response(&raw)))
            }
        }))
        .buffer_unordered(self.config.max_workers.max(1));

        while let Some((index, result)) = in_flight.next().await {
            match result {
                Ok(text) => {
                    info!("Chunk {}/{} done", index + 1, total);
                    slots[index] = Some(text);
                }
                Err(e) => {
                    error!("Chunk {}/{} failed: {}", index + 1, total, e);
                    // Dropping the stream cancels the remaining in-flight requests
                    return Err(e);
                }
            }
        }

        let mut ordered = Vec::with_capacity(total);
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(text) => ordered.push(text),
                None => return Err(TranslationError::MissingChunk { index }),
            }
        }
        Ok(ordered)
    }

    /// Submit one chunk for completion and return the raw response text.
    async fn translate_chunk(
        &self,
        chunk: &str,
        index: usize,
        total: usize,
    ) -> Result<String, TranslationError> {
        info!("Translating chunk {}/{}", index + 1, total);

        let request = OpenAIRequest::new(&self.config.translation.model)
            .with_messages(build_translation_messages(chunk, index, total))
            .temperature(self.config.translation.temperature);

        let response = self.provider.complete(request).await?;

        response
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or(TranslationError::EmptyResponse)
    }
}
