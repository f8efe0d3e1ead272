//! # Content Segmentation
//!
//! Content arrives as one raw string interleaving prose, ATX headings,
//! paragraph breaks, and LaTeX math in four delimiter conventions. This
//! module turns such a string into a flat, ordered sequence of
//! [`ContentNode`]s that a rendering layer can map directly onto markup.
//!
//! ## Pipeline
//!
//! Segmentation runs three pure stages:
//!
//! - **`blocks`**: blank-line splitting into heading and body units
//! - **`math`**: a single left-to-right scan per body unit, classifying
//!   math spans against literal text
//! - **`assemble`**: folding tokens into nodes, buffering inline spans
//!   into paragraphs around display math
//!
//! ## Fail-soft guarantee
//!
//! Segmentation never fails. An opener with no matching closer is not an
//! error; it stays in the text verbatim and only that span degrades to
//! plain prose.

pub mod assemble;
pub mod blocks;
pub mod cursor;
pub mod math;
pub mod types;

pub use assemble::{Assembler, assemble};
pub use blocks::{BlockUnit, split_blocks};
pub use math::{RawToken, tokenize};
pub use types::{ContentNode, InlineSpan, nodes_to_text};

/// Segments raw content into an ordered sequence of renderable nodes.
///
/// # Examples
///
/// ```
/// use mathdown_engine::segment::{ContentNode, segment};
///
/// let nodes = segment("### Theorem\n\nLet $x > 0$.");
/// assert_eq!(nodes.len(), 2);
/// assert!(matches!(&nodes[0], ContentNode::Heading { level: 3, .. }));
/// ```
pub fn segment(text: &str) -> Vec<ContentNode> {
    let mut nodes = Vec::new();
    for unit in split_blocks(text) {
        nodes.extend(assemble(unit));
    }
    nodes
}
