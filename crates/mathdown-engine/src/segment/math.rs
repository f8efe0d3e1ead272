use super::cursor::Cursor;

/// Display math fence, `$$`.
const BLOCK_DOLLARS: &[u8] = b"$$";
/// Display math brackets, `\[` and `\]`.
const BRACKET_OPEN: &[u8] = br"\[";
const BRACKET_CLOSE: &[u8] = br"\]";
/// Inline math parens, `\(` and `\)`.
const PAREN_OPEN: &[u8] = br"\(";
const PAREN_CLOSE: &[u8] = br"\)";
/// Inline math dollar, `$`.
const DOLLAR: u8 = b'$';

/// One classified span from a tokenizer pass over a block body.
///
/// Every token borrows the exact source text it matched. Math tokens carry
/// their delimiters; stripping happens at assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    /// `$$...$$` or `\[...\]` display math.
    BlockMath(&'a str),
    /// `\(...\)` inline math.
    ParenInlineMath(&'a str),
    /// `$...$` inline math: single line, non-empty interior.
    DollarInlineMath(&'a str),
    /// Literal text between math spans. Never empty.
    Plain(&'a str),
}

/// Tokenizes one block body into math and plain-text spans.
///
/// A single left-to-right scan tries the delimiter forms in precedence
/// order at each position: `$$...$$`, then `\[...\]`, then `\(...\)`,
/// then `$...$`. An opener with no matching closer is not an error; the
/// scan moves one byte forward and the opener ends up inside a `Plain`
/// token.
pub fn tokenize(body: &str) -> Vec<RawToken<'_>> {
    let mut cur = Cursor::new(body);
    let mut out = vec![];
    let mut plain_start = 0;

    // Helper to flush accumulated literal text as a Plain token
    fn flush_plain<'a>(out: &mut Vec<RawToken<'a>>, body: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(RawToken::Plain(&body[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(raw) = try_parse_delimited(&mut cur, BLOCK_DOLLARS, BLOCK_DOLLARS) {
            flush_plain(&mut out, body, plain_start, start);
            out.push(RawToken::BlockMath(raw));
            plain_start = cur.pos();
            continue;
        }
        if let Some(raw) = try_parse_delimited(&mut cur, BRACKET_OPEN, BRACKET_CLOSE) {
            flush_plain(&mut out, body, plain_start, start);
            out.push(RawToken::BlockMath(raw));
            plain_start = cur.pos();
            continue;
        }
        if let Some(raw) = try_parse_delimited(&mut cur, PAREN_OPEN, PAREN_CLOSE) {
            flush_plain(&mut out, body, plain_start, start);
            out.push(RawToken::ParenInlineMath(raw));
            plain_start = cur.pos();
            continue;
        }
        if let Some(raw) = try_parse_dollar_inline(&mut cur) {
            flush_plain(&mut out, body, plain_start, start);
            out.push(RawToken::DollarInlineMath(raw));
            plain_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_plain(&mut out, body, plain_start, cur.pos());
    out
}

/// Attempts to parse a delimited span starting at the current position.
///
/// Matching is non-greedy: the nearest closer wins. Returns `None` if the
/// span isn't closed before end of input. On failure, cursor position is
/// restored.
fn try_parse_delimited<'a>(cur: &mut Cursor<'a>, open: &[u8], close: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(open) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(open.len());

    while !cur.eof() {
        if cur.starts_with(close) {
            break;
        }
        cur.bump();
    }

    if !cur.starts_with(close) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(close.len());

    Some(cur.slice(start, cur.pos()))
}

/// Attempts to parse a single-dollar inline span at the current position.
///
/// The interior must be non-empty and stay on one line. A newline before
/// the closing `$` aborts the match, so a stray dollar in prose can't
/// swallow the rest of the block.
fn try_parse_dollar_inline<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(DOLLAR) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // $
    let inner_start = cur.pos();

    while !cur.eof() {
        if cur.peek() == Some(DOLLAR) || cur.peek() == Some(b'\n') {
            break;
        }
        cur.bump();
    }

    if cur.peek() != Some(DOLLAR) || cur.pos() == inner_start {
        // No same-line closer, or nothing between the dollars
        *cur = saved;
        return None;
    }
    cur.bump(); // closing $

    Some(cur.slice(start, cur.pos()))
}
