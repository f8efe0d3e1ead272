pub mod segment;

// Re-export key types for easier usage
pub use segment::{ContentNode, InlineSpan, nodes_to_text, segment};
