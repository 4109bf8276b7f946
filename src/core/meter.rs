//! Word-level stress heuristic.
//!
//! This is an approximation for demo output, not prosody: words longer than
//! three characters contribute two symbols, alternating `+-` / `-+` by
//! position, and short words contribute one symbol depending on whether they
//! are function words. The resulting pattern can therefore be longer than the
//! line's word count, and [`render_parse_text`] walks it cyclically.

use crate::domain::model::Parse;

pub const STRESSED: char = '+';
pub const UNSTRESSED: char = '-';

const STOP_WORDS: [&str; 9] = ["the", "a", "an", "of", "to", "in", "for", "and", "but"];
const SHORT_WORD_MAX_CHARS: usize = 3;

fn is_stop_word(word: &str) -> bool {
    let lowered = word.to_lowercase();
    STOP_WORDS.contains(&lowered.as_str())
}

pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

pub fn word_count(line: &str) -> usize {
    words(line).count()
}

pub fn compute_meter(line: &str) -> String {
    let mut meter = String::new();

    for (i, word) in words(line).enumerate() {
        if word.chars().count() > SHORT_WORD_MAX_CHARS {
            meter.push_str(if i % 2 == 0 { "+-" } else { "-+" });
        } else if is_stop_word(word) {
            meter.push(UNSTRESSED);
        } else {
            meter.push(STRESSED);
        }
    }

    // Unreachable with the alphabet above; kept so the pattern always ends on a stress symbol.
    if meter.chars().count() > 1 && !meter.ends_with(&[STRESSED, UNSTRESSED][..]) {
        meter.push(UNSTRESSED);
    }

    meter
}

/// Re-cases each word of `line` from `meter`, reusing the pattern from the
/// start when it is shorter than the word list. An empty `meter` leaves
/// every word lower-cased.
pub fn render_parse_text(line: &str, meter: &str) -> String {
    let symbols: Vec<char> = meter.chars().collect();
    let mut cursor = 0;

    let rendered: Vec<String> = words(line)
        .map(|word| {
            let stressed = symbols.get(cursor) == Some(&STRESSED);
            cursor += 1;
            if cursor >= symbols.len() {
                cursor = 0;
            }
            if stressed {
                word.to_uppercase()
            } else {
                word.to_lowercase()
            }
        })
        .collect();

    rendered.join(" ")
}

pub fn scan_line(line: &str) -> Parse {
    let meter = compute_meter(line);
    let parse_txt = render_parse_text(line, &meter);
    Parse {
        text: line.to_string(),
        meter,
        parse_txt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_words_are_stressed() {
        assert_eq!(compute_meter("Hi you"), "++");
        assert_eq!(compute_meter("cat sat on mat"), "++++");
        assert_eq!(compute_meter("I see you"), "+++");
    }

    #[test]
    fn test_stop_words_are_unstressed_in_any_case() {
        assert_eq!(compute_meter("the cat"), "-+");
        assert_eq!(compute_meter("THE AND But"), "---");
    }

    #[test]
    fn test_long_words_alternate_by_position() {
        // "woods" at index 1 gives -+, "these" at index 2 gives +-, "think" at 5 gives -+.
        assert_eq!(compute_meter("Whose woods these are I think"), "+--++-++-+");
        assert_eq!(compute_meter("Hello world"), "+--+");
        assert_eq!(compute_meter("river"), "+-");
        assert_eq!(compute_meter("a river"), "--+");
    }

    #[test]
    fn test_long_word_lines_are_twice_the_word_count() {
        for line in ["Stopping woods", "quiet river flowing slowly onward", "snowy"] {
            assert_eq!(compute_meter(line).len(), 2 * word_count(line), "line: {}", line);
        }
    }

    #[test]
    fn test_short_non_stop_lines_are_all_stressed() {
        for line in ["Hi", "I go now", "sky sea sun ice"] {
            let meter = compute_meter(line);
            assert_eq!(meter.len(), word_count(line));
            assert!(meter.chars().all(|c| c == STRESSED));
        }
    }

    #[test]
    fn test_punctuation_counts_towards_length() {
        // "know." is four characters, so it takes the long-word branch.
        assert_eq!(compute_meter("I know."), "+-+");
    }

    #[test]
    fn test_empty_and_blank_lines() {
        assert_eq!(compute_meter(""), "");
        assert_eq!(compute_meter("   \t "), "");
        assert_eq!(render_parse_text("", "+-"), "");
    }

    #[test]
    fn test_render_parse_text() {
        assert_eq!(render_parse_text("Hello world", "++"), "HELLO WORLD");
        assert_eq!(render_parse_text("Hello world", "+--+"), "HELLO world");
        assert_eq!(render_parse_text("the cat", "-+"), "the CAT");
    }

    #[test]
    fn test_render_wraps_short_meter() {
        assert_eq!(render_parse_text("one two three four five", "+-"), "ONE two THREE four FIVE");
    }

    #[test]
    fn test_render_with_empty_meter_lowercases() {
        assert_eq!(render_parse_text("Bright STAR", ""), "bright star");
    }

    #[test]
    fn test_render_collapses_whitespace() {
        assert_eq!(render_parse_text("  the   cat\tsat ", "-++"), "the CAT SAT");
    }

    #[test]
    fn test_render_keeps_word_count_and_words() {
        let line = "Whose woods these are I think I know.";
        let meter = compute_meter(line);
        let rendered = render_parse_text(line, &meter);

        let source: Vec<&str> = words(line).collect();
        let tokens: Vec<&str> = rendered.split(' ').collect();
        assert_eq!(tokens.len(), source.len());
        for (token, word) in tokens.iter().zip(source) {
            assert!(token.eq_ignore_ascii_case(word));
        }
    }

    #[test]
    fn test_scan_line_keeps_text_unmodified() {
        let parse = scan_line("  Hi you");
        assert_eq!(parse.text, "  Hi you");
        assert_eq!(parse.meter, "++");
        assert_eq!(parse.parse_txt, "HI YOU");
    }
}
