/*!
 * Tests for fixed-size chunk splitting
 */

use yawtai::translation::split_into_chunks;

#[test]
fn test_split_withVariousSizes_shouldRoundTripExactly() {
    let text = "The quick brown fox jumps over the lazy dog";
    for size in [1, 2, 3, 7, 10, 43, 44, 100] {
        let chunks = split_into_chunks(text, size).unwrap();
        assert_eq!(chunks.concat(), text, "round trip failed for size {}", size);
    }
}

#[test]
fn test_split_withVariousSizes_shouldYieldCeilCount() {
    let text = "abcdefghij"; // 10 characters
    let cases = [(1, 10), (2, 5), (3, 4), (4, 3), (10, 1), (11, 1)];
    for (size, expected) in cases {
        let chunks = split_into_chunks(text, size).unwrap();
        assert_eq!(chunks.len(), expected, "wrong count for size {}", size);
    }
}

#[test]
fn test_split_withExactMultiple_shouldHaveNoShortChunk() {
    let chunks = split_into_chunks("abcdef", 3).unwrap();
    assert_eq!(chunks, vec!["abc".to_string(), "def".to_string()]);
}

#[test]
fn test_split_withArticleSizedInput_shouldMatchExpectedWindowSizes() {
    // 7500 characters at chunk size 3500 -> 3500, 3500, 500
    let text: String = (0..7500)
        .map(|i| char::from(b'a' + (i % 26) as u8))
        .collect();
    let chunks = split_into_chunks(&text, 3500).unwrap();

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].chars().count(), 3500);
    assert_eq!(chunks[1].chars().count(), 3500);
    assert_eq!(chunks[2].chars().count(), 500);
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_split_withMarkupInput_shouldIgnoreTagBoundaries() {
    // A tag may land across two chunks; the split is purely positional
    let chunks = split_into_chunks("<p>hello</p>", 5).unwrap();
    assert_eq!(
        chunks,
        vec!["<p>he".to_string(), "llo</".to_string(), "p>".to_string()]
    );
}

#[test]
fn test_split_withEveryChunkButLast_shouldBeFullSize() {
    let text = "x".repeat(95);
    let chunks = split_into_chunks(&text, 10).unwrap();
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.chars().count(), 10);
    }
    assert_eq!(chunks.last().unwrap().chars().count(), 5);
}
