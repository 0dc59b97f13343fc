use serde::{Deserialize, Serialize};

/// Statistics for a block of text.
///
/// `chars` counts the raw, untrimmed input; `words` and `lines` treat
/// whitespace-only input as empty. Reading time assumes 200 words per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
}

/// Compute word, character, and line statistics. Always succeeds.
pub fn analyze(text: &str) -> TextStats {
    let words = if text.trim().is_empty() {
        0
    } else {
        text.split_whitespace().count()
    };
    let lines = if text.trim().is_empty() {
        0
    } else {
        text.split('\n').count()
    };

    TextStats {
        words,
        chars: text.chars().count(),
        lines,
        reading_time_minutes: words.div_ceil(200),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_basic() {
        let stats = analyze("hello world");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.chars, 11);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.reading_time_minutes, 1);
    }

    #[test]
    fn test_analyze_untrimmed_input() {
        // chars is the raw length; repeated whitespace is a single separator
        let stats = analyze("  hello   world  ");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.chars, 17);
        assert_eq!(stats.lines, 1);
    }

    #[test]
    fn test_analyze_empty() {
        let stats = analyze("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 0);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.reading_time_minutes, 0);
    }

    #[test]
    fn test_analyze_whitespace_only() {
        let stats = analyze("   \n  ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars, 6);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.reading_time_minutes, 0);
    }

    #[test]
    fn test_analyze_multiline() {
        let stats = analyze("one\ntwo\nthree");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.lines, 3);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        assert_eq!(analyze(&text).reading_time_minutes, 2);

        let text = vec!["word"; 200].join(" ");
        assert_eq!(analyze(&text).reading_time_minutes, 1);
    }
}
