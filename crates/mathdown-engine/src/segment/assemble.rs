use super::{
    blocks::BlockUnit,
    math::{RawToken, tokenize},
    types::{ContentNode, InlineSpan},
};

/// Folds tokens into content nodes with explicit paragraph buffering.
///
/// Inline spans accumulate in a buffer; display math flushes the buffer as
/// a `Paragraph` before emitting its own `BlockMath` node, so emission
/// order always follows source order.
#[derive(Default)]
pub struct Assembler {
    buf: Vec<InlineSpan>,
    out: Vec<ContentNode>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one token into the assembler.
    pub fn push(&mut self, token: RawToken<'_>) {
        match token {
            RawToken::BlockMath(raw) => {
                self.flush_paragraph();
                self.out.push(ContentNode::BlockMath {
                    expr: strip_delimiters(raw, 2).to_string(),
                });
            }
            RawToken::ParenInlineMath(raw) => self.buf.push(InlineSpan::InlineMath {
                expr: strip_delimiters(raw, 2).to_string(),
            }),
            RawToken::DollarInlineMath(raw) => self.buf.push(InlineSpan::InlineMath {
                expr: strip_delimiters(raw, 1).to_string(),
            }),
            RawToken::Plain(raw) => self.buf.push(InlineSpan::Text(raw.to_string())),
        }
    }

    /// Flushes any buffered paragraph and returns the assembled nodes.
    pub fn finish(mut self) -> Vec<ContentNode> {
        self.flush_paragraph();
        self.out
    }

    /// Emits the buffered spans as a `Paragraph`, if anything remains
    /// after edge trimming.
    ///
    /// Only the paragraph's outer edges get trimmed. Whitespace adjacent
    /// to inline math inside the paragraph is meaningful and stays.
    fn flush_paragraph(&mut self) {
        if let Some(InlineSpan::Text(text)) = self.buf.first_mut() {
            *text = text.trim_start().to_string();
        }
        if let Some(InlineSpan::Text(text)) = self.buf.last_mut() {
            *text = text.trim_end().to_string();
        }
        self.buf
            .retain(|span| !matches!(span, InlineSpan::Text(text) if text.is_empty()));
        if !self.buf.is_empty() {
            self.out.push(ContentNode::Paragraph {
                spans: std::mem::take(&mut self.buf),
            });
        }
    }
}

/// Strips `width` delimiter bytes from each side and trims the interior.
/// Math tokens always carry both delimiters, so this can't underflow.
fn strip_delimiters(raw: &str, width: usize) -> &str {
    raw[width..raw.len() - width].trim()
}

/// Assembles one block unit into content nodes.
///
/// Heading units pass through as a single node; their text is never
/// scanned for math. Body units are tokenized and folded through an
/// [`Assembler`].
pub fn assemble(unit: BlockUnit<'_>) -> Vec<ContentNode> {
    match unit {
        BlockUnit::Heading { level, text } => vec![ContentNode::Heading {
            level,
            text: text.to_string(),
        }],
        BlockUnit::Body { text } => {
            let mut asm = Assembler::new();
            for token in tokenize(text) {
                asm.push(token);
            }
            asm.finish()
        }
    }
}
