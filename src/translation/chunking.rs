/*!
 * Fixed-size chunk splitting for remote translation requests.
 */

use crate::errors::TranslationError;

/// Split `text` into ordered windows of at most `chunk_size` characters.
///
/// The split is purely positional - windows are counted in Unicode scalar
/// values and a markup tag may land across two chunks. Concatenating the
/// returned chunks in order reproduces `text` exactly; every chunk has
/// `chunk_size` characters except possibly the last.
pub fn split_into_chunks(text: &str, chunk_size: usize) -> Result<Vec<String>, TranslationError> {
    if chunk_size == 0 {
        return Err(TranslationError::InvalidChunkSize);
    }

    let chars: Vec<char> = text.chars().collect();
    Ok(chars
        .chunks(chunk_size)
        .map(|window| window.iter().collect())
        .collect())
}
