// tokenizer.rs - Token boundary supply for free-form capture nodes.
//
// A regex or capture node cannot know where its own match should end: the
// rest of the pattern may still need input. The tokenizer yields candidate
// end offsets one at a time, closest to the start first, and the node tries
// the continuation at each until one succeeds.

use memchr::memchr;

/// Yields candidate end offsets for a free-form sub-expression.
///
/// `next_token_end(input, from)` returns the next valid ending offset
/// strictly greater than `from`, or `None` when no further boundary exists.
/// Returned offsets must be monotonically increasing across repeated calls
/// with increasing `from`, and must fall on UTF-8 character boundaries.
pub trait Tokenizer {
    fn next_token_end(&self, input: &str, from: usize) -> Option<usize>;
}

/// Default boundary scanner.
///
/// Token ends fall on spaces at bracket depth zero and at the end of the
/// input. Double-quoted sections are skipped as a unit, and `(`/`)` and
/// `{`/`}` pairs must balance before a space can end a token, so quoted
/// strings and bracketed sub-expressions are never split.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl Tokenizer for DefaultTokenizer {
    fn next_token_end(&self, input: &str, from: usize) -> Option<usize> {
        let bytes = input.as_bytes();
        if from >= bytes.len() {
            return None;
        }
        let mut i = from;
        // A boundary sits on a space; step past it to reach the next token.
        if bytes[i] == b' ' {
            i += 1;
        }
        let mut depth: i32 = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => match memchr(b'"', &bytes[i + 1..]) {
                    // Land on the closing quote; the surrounding loop steps over it.
                    Some(close) => i += close + 1,
                    // Unterminated quote: the rest of the input is one token.
                    None => return Some(bytes.len()),
                },
                b'(' | b'{' => depth += 1,
                b')' | b'}' => depth -= 1,
                b' ' if depth <= 0 => return Some(i),
                _ => {}
            }
            i += 1;
        }
        Some(bytes.len())
    }
}
