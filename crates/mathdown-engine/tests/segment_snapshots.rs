use mathdown_engine::segment::{ContentNode, InlineSpan, segment};

/// Renders nodes as a compact outline, one line per node or span, for
/// snapshotting. Span payloads use `Debug` formatting so whitespace and
/// escapes stay visible.
fn outline(nodes: &[ContentNode]) -> String {
    let mut lines = Vec::new();
    for node in nodes {
        match node {
            ContentNode::Heading { level, text } => {
                lines.push(format!("heading({level}) {text}"));
            }
            ContentNode::Paragraph { spans } => {
                lines.push("paragraph".to_string());
                for span in spans {
                    match span {
                        InlineSpan::Text(text) => lines.push(format!("  text {text:?}")),
                        InlineSpan::InlineMath { expr } => lines.push(format!("  math {expr:?}")),
                    }
                }
            }
            ContentNode::BlockMath { expr } => {
                lines.push(format!("display {expr:?}"));
            }
        }
    }
    lines.join("\n")
}

#[test]
fn lemma_walkthrough() {
    let content = "### Lemma 2\n\nFix $e_k$ and let $T$ be compact.\n\n$$T^4 = I$$\n\nThen \\(rank(T) = 4\\) holds.";
    insta::assert_snapshot!(outline(&segment(content)), @r#"
    heading(3) Lemma 2
    paragraph
      text "Fix "
      math "e_k"
      text " and let "
      math "T"
      text " be compact."
    display "T^4 = I"
    paragraph
      text "Then "
      math "rank(T) = 4"
      text " holds."
    "#);
}

#[test]
fn malformed_delimiters_downgrade() {
    let content = "Price is $10 total.\n\n$$unclosed\n\n### #1 issue";
    insta::assert_snapshot!(outline(&segment(content)), @r#"
    paragraph
      text "Price is $10 total."
    paragraph
      text "$$unclosed"
    heading(3) #1 issue
    "#);
}

#[test]
fn all_four_delimiter_forms() {
    let content = "\\[ A \\cup B \\] then \\( A \\cap B \\) and $C$ plus $$D$$";
    insta::assert_snapshot!(outline(&segment(content)), @r#"
    display "A \\cup B"
    paragraph
      text "then "
      math "A \\cap B"
      text " and "
      math "C"
      text " plus"
    display "D"
    "#);
}
