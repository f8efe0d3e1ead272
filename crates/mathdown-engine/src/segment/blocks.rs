use regex::Regex;
use std::sync::OnceLock;

/// A block-level unit produced by blank-line splitting.
///
/// Units borrow from the input. Both variants carry text that is already
/// whitespace-trimmed at the block edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockUnit<'a> {
    /// An ATX heading: 1-6 `#` marks, whitespace, then text.
    ///
    /// `text` is the remainder of the heading's first line only; anything
    /// after an embedded line break is not heading text.
    Heading { level: u8, text: &'a str },
    /// Anything else. Single line breaks inside the block are preserved.
    Body { text: &'a str },
}

/// Matches the run of blank lines separating two blocks.
fn block_gap_regex() -> &'static Regex {
    static BLOCK_GAP: OnceLock<Regex> = OnceLock::new();
    BLOCK_GAP.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid block gap regex"))
}

/// Matches an ATX heading at the start of a trimmed block.
///
/// Group 1 is the `#` run, group 2 the rest of the first line. `.` stops
/// at a line break, and seven or more `#` marks fail the match entirely.
fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)").expect("Invalid heading regex"))
}

/// Splits raw content on blank lines into heading and body units.
///
/// Fragments that are empty or whitespace-only after trimming produce no
/// unit, so runs of blank lines can't manufacture empty paragraphs.
pub fn split_blocks(text: &str) -> Vec<BlockUnit<'_>> {
    let mut units = Vec::new();
    for fragment in block_gap_regex().split(text) {
        let block = fragment.trim();
        if block.is_empty() {
            continue;
        }
        units.push(classify(block));
    }
    units
}

/// Classifies one trimmed, non-empty block as heading or body.
fn classify(block: &str) -> BlockUnit<'_> {
    if let Some(caps) = heading_regex().captures(block) {
        let level = caps[1].len() as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        return BlockUnit::Heading { level, text };
    }
    BlockUnit::Body { text: block }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Top", 1, "Top")]
    #[case("## Section", 2, "Section")]
    #[case("### Theorem 4.1", 3, "Theorem 4.1")]
    #[case("###### Fine print", 6, "Fine print")]
    fn detects_atx_headings(#[case] input: &str, #[case] level: u8, #[case] text: &str) {
        assert_eq!(split_blocks(input), vec![BlockUnit::Heading { level, text }]);
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(
            split_blocks("####### too deep"),
            vec![BlockUnit::Body {
                text: "####### too deep"
            }]
        );
    }

    #[test]
    fn hash_without_whitespace_is_body() {
        assert_eq!(
            split_blocks("#hashtag"),
            vec![BlockUnit::Body { text: "#hashtag" }]
        );
    }

    #[test]
    fn hashes_alone_are_body() {
        assert_eq!(split_blocks("## "), vec![BlockUnit::Body { text: "##" }]);
    }

    #[test]
    fn splits_on_runs_of_blank_lines() {
        let units = split_blocks("first\n\nsecond\n\n\n\nthird");
        assert_eq!(
            units,
            vec![
                BlockUnit::Body { text: "first" },
                BlockUnit::Body { text: "second" },
                BlockUnit::Body { text: "third" },
            ]
        );
    }

    #[test]
    fn single_newline_stays_inside_a_block() {
        assert_eq!(
            split_blocks("line one\nline two"),
            vec![BlockUnit::Body {
                text: "line one\nline two"
            }]
        );
    }

    #[test]
    fn heading_text_stops_at_the_first_line_break() {
        let units = split_blocks("### Lemma\ncontinuation line");
        assert_eq!(
            units,
            vec![BlockUnit::Heading {
                level: 3,
                text: "Lemma"
            }]
        );
    }

    #[test]
    fn empty_input_yields_no_units() {
        assert_eq!(split_blocks(""), vec![]);
    }

    #[test]
    fn whitespace_only_input_yields_no_units() {
        assert_eq!(split_blocks("  \n\n \t \n\n  "), vec![]);
    }

    #[test]
    fn surrounding_blank_lines_are_dropped() {
        assert_eq!(
            split_blocks("\n\nonly\n\n"),
            vec![BlockUnit::Body { text: "only" }]
        );
    }

    #[test]
    fn extra_whitespace_after_hashes_is_consumed() {
        assert_eq!(
            split_blocks("##   Spaced out"),
            vec![BlockUnit::Heading {
                level: 2,
                text: "Spaced out"
            }]
        );
    }
}
