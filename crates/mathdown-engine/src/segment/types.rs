use serde::{Deserialize, Serialize};

/// One renderable unit of segmented content, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentNode {
    /// An ATX heading: 1-6 `#` marks, whitespace, then the heading text.
    Heading { level: u8, text: String },
    /// A run of prose with inline math substituted in place.
    Paragraph { spans: Vec<InlineSpan> },
    /// A display math expression, rendered centered on its own line.
    /// `expr` carries no delimiters and no surrounding whitespace.
    BlockMath { expr: String },
}

/// A piece of paragraph content, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    /// Literal prose, kept verbatim.
    Text(String),
    /// An inline math expression flowing with the surrounding text.
    /// `expr` carries no delimiters and no surrounding whitespace.
    InlineMath { expr: String },
}

impl ContentNode {
    /// Renders this node back to source form with canonical delimiters:
    /// `$...$` for inline math and `$$...$$` for display math, regardless
    /// of which convention the source used. Canonicalization is lossy for
    /// payloads the dollar forms cannot carry: an expression containing a
    /// bare `$`, or one that trimmed to empty.
    pub fn to_text(&self) -> String {
        match self {
            ContentNode::Heading { level, text } => {
                format!("{} {}", "#".repeat(*level as usize), text)
            }
            ContentNode::Paragraph { spans } => {
                let mut out = String::new();
                for span in spans {
                    match span {
                        InlineSpan::Text(text) => out.push_str(text),
                        InlineSpan::InlineMath { expr } => {
                            out.push('$');
                            out.push_str(expr);
                            out.push('$');
                        }
                    }
                }
                out
            }
            ContentNode::BlockMath { expr } => format!("$${expr}$$"),
        }
    }
}

/// Renders a node sequence back to source text, blocks separated by blank
/// lines.
///
/// Re-segmenting the result yields the same nodes as long as every math
/// payload survives the canonical dollar forms: an expression containing a
/// bare `$` (possible in `\(...\)` and `\[...\]` sources) or trimmed to
/// empty re-tokenizes differently.
pub fn nodes_to_text(nodes: &[ContentNode]) -> String {
    nodes
        .iter()
        .map(ContentNode::to_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}
