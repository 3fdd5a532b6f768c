/*!
 * Outline parsing for heading-delimited documents.
 *
 * Walks a document line by line, derives a heading depth from the number of
 * marker characters, and emits one classified, whitespace-normalized record
 * per recognized heading. Classification and text cleanup are separate pure
 * functions composed by `parse_outline`. The parser performs no hierarchy
 * checking - a depth-4 heading before any depth-1 heading is accepted.
 */

use serde::{Deserialize, Serialize};

/// Character whose repetition count encodes heading depth.
pub const HEADING_MARKER: char = '#';

/// Heading depth category derived from the marker repetition count
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutlineCategory {
    // @depth: 1 marker
    Head,
    // @depth: 2 markers
    Title,
    // @depth: 3 markers
    Subtitle,
    // @depth: 4 markers
    Chapter,
}

impl OutlineCategory {
    /// Map a marker count to a category. Counts outside 1..=4 classify as nothing.
    pub fn from_marker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Head),
            2 => Some(Self::Title),
            3 => Some(Self::Subtitle),
            4 => Some(Self::Chapter),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutlineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Head => "head",
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Chapter => "chapter",
        };
        write!(f, "{}", name)
    }
}

/// One classified, normalized heading line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutlineRecord {
    /// 1-based line number in the source document
    pub id: usize,

    /// Heading depth category
    pub category: OutlineCategory,

    /// Heading text with markers removed and whitespace collapsed
    pub content: String,
}

/// Classify a line by its heading-marker occurrence count.
pub fn classify(line: &str) -> Option<OutlineCategory> {
    OutlineCategory::from_marker_count(line.matches(HEADING_MARKER).count())
}

/// Strip marker characters and collapse whitespace runs to single spaces.
pub fn normalize_heading(line: &str) -> String {
    line.replace(HEADING_MARKER, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a document into its ordered sequence of outline records.
pub fn parse_outline(document: &str) -> Vec<OutlineRecord> {
    document
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            classify(line).map(|category| OutlineRecord {
                id: index + 1,
                category,
                content: normalize_heading(line),
            })
        })
        .collect()
}
