//! Greedy word-wrapping for list entry text.
//!
//! Words are whitespace-separated tokens; segments are built by appending
//! words (joined by single spaces) while the segment stays within the
//! width. A single word longer than the width occupies its own segment
//! unsplit — overlong tokens (URLs, identifiers) are never force-broken.
//! Widths are measured in characters, not bytes.

/// Wrap `text` into segments of at most `width` characters.
///
/// Consecutive whitespace in the input collapses to single spaces.
/// Empty or whitespace-only input yields no segments.
pub fn fill(text: &str, width: usize) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            segments.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_short_text_is_single_segment() {
        assert_eq!(fill("hello world", 79), vec!["hello world"]);
    }

    #[test]
    fn fill_breaks_at_word_boundaries() {
        let segments = fill("one two three four", 9);
        assert_eq!(segments, vec!["one two", "three", "four"]);
    }

    #[test]
    fn fill_packs_exactly_to_width() {
        // "aaa bbb" is exactly 7 characters
        assert_eq!(fill("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn fill_word_one_past_width_breaks() {
        // "aaa bbbb" would be 8 characters
        assert_eq!(fill("aaa bbbb", 7), vec!["aaa", "bbbb"]);
    }

    #[test]
    fn fill_oversized_word_occupies_own_segment_unsplit() {
        let segments = fill("a verylongunbreakabletoken b", 10);
        assert_eq!(segments, vec!["a", "verylongunbreakabletoken", "b"]);
    }

    #[test]
    fn fill_collapses_internal_whitespace() {
        assert_eq!(fill("a  \t b", 79), vec!["a b"]);
    }

    #[test]
    fn fill_empty_input_yields_no_segments() {
        assert!(fill("", 79).is_empty());
        assert!(fill("   ", 79).is_empty());
    }

    #[test]
    fn fill_measures_characters_not_bytes() {
        // Five two-byte characters fit a width of 5
        assert_eq!(fill("ééééé", 5), vec!["ééééé"]);
    }
}
