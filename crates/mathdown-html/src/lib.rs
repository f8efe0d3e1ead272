//! # HTML Rendering
//!
//! Renders segmented content nodes as an HTML fragment. Math is emitted in
//! the delimiter form MathJax/KaTeX auto-render expects (`\(...\)` inline,
//! `\[...\]` display) inside classed elements, and every payload passes
//! through text escaping, so expressions containing `<`, `>` or `&` can't
//! break the markup.

use mathdown_engine::segment::{ContentNode, InlineSpan, segment};

/// Renders a node sequence as an HTML fragment, one block element per line.
pub fn render_nodes(nodes: &[ContentNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(node, &mut out);
        out.push('\n');
    }
    out
}

/// Segments raw content and renders it in one step.
pub fn render(content: &str) -> String {
    render_nodes(&segment(content))
}

fn render_node(node: &ContentNode, out: &mut String) {
    match node {
        ContentNode::Heading { level, text } => {
            out.push_str(&format!("<h{level}>"));
            out.push_str(&html_escape::encode_text(text));
            out.push_str(&format!("</h{level}>"));
        }
        ContentNode::Paragraph { spans } => {
            out.push_str("<p>");
            for span in spans {
                match span {
                    InlineSpan::Text(text) => out.push_str(&html_escape::encode_text(text)),
                    InlineSpan::InlineMath { expr } => {
                        out.push_str(r#"<span class="math inline">\("#);
                        out.push_str(&html_escape::encode_text(expr));
                        out.push_str(r"\)</span>");
                    }
                }
            }
            out.push_str("</p>");
        }
        ContentNode::BlockMath { expr } => {
            out.push_str(r#"<p class="math display">\["#);
            out.push_str(&html_escape::encode_text(expr));
            out.push_str(r"\]</p>");
        }
    }
}
