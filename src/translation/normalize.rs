/*!
 * Response normalization.
 *
 * The model tends to wrap its output in triple-backtick fences and to emit
 * stray boundary newlines, and occasionally answers in simplified script.
 * Both cleanups are pure, total functions with no failure mode.
 */

use zhconv::{Variant, zhconv};

/// Fence marker the model sometimes wraps responses in.
const FENCE: &str = "```";

/// Strip one leading and one trailing fence marker, each independently.
///
/// Interior fence-like substrings are left alone.
pub fn strip_fences(response: &str) -> &str {
    let mut text = response;
    if let Some(stripped) = text.strip_prefix(FENCE) {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix(FENCE) {
        text = stripped;
    }
    text
}

/// Convert simplified-script characters to their traditional equivalents.
///
/// Traditional-only input passes through unchanged, so the conversion is
/// idempotent.
pub fn to_traditional(text: &str) -> String {
    zhconv(text, Variant::ZhHant)
}

/// Clean one raw model response: fences, boundary newlines, script variants.
pub fn normalize_response(response: &str) -> String {
    let text = strip_fences(response);
    let text = text.trim_matches('\n');
    to_traditional(text)
}
