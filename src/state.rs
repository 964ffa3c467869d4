// state.rs - Mutable matching progress and the finalized match result.

use std::ops::Range;

use smallvec::SmallVec;

use crate::flags::ParseFlags;

/// One captured sub-expression placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSlot {
    /// Slot name from the pattern, e.g. `blocks` for `%blocks%`.
    pub name: String,
    /// Byte range of the captured text in the candidate input.
    pub range: Range<usize>,
    /// The captured text itself.
    pub text: String,
}

/// Owned record of one regex-capture hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatchRecord {
    /// Byte range of the regex match in the candidate input.
    pub range: Range<usize>,
    /// The full matched text.
    pub text: String,
    /// Capture groups 1..N of the regex; `None` for groups that did not
    /// participate in the match.
    pub groups: Vec<Option<String>>,
}

impl RegexMatchRecord {
    /// Materialize an owned record from a borrowed regex match, shifting
    /// group offsets by `base` (the substring's start in the full input).
    pub(crate) fn from_captures(base: usize, caps: &regex::Captures<'_>) -> Self {
        let full = caps.get(0).expect("group 0 always participates");
        RegexMatchRecord {
            range: base + full.start()..base + full.end(),
            text: full.as_str().to_string(),
            groups: caps
                .iter()
                .skip(1)
                .map(|g| g.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }
}

/// In-progress matching state.
///
/// The one mutable entity of the engine. Cloning is O(list lengths) and
/// produces fully independent backing storage; branch points (choice,
/// optional, candidate offsets) explore alternatives against a private
/// clone and drop it on failure, leaving siblings untouched.
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Byte offset up to which the candidate input has been consumed.
    pub(crate) offset: usize,
    /// Capture placeholders, in left-to-right order. Append-only along a
    /// single successful path.
    pub(crate) captures: SmallVec<[CaptureSlot; 4]>,
    /// XOR-accumulated mark bitmask.
    pub(crate) mark: u32,
    /// Tags in traversal order.
    pub(crate) tags: SmallVec<[String; 4]>,
    /// Regex-capture records. New records are front-inserted at matcher
    /// success time so outer captures end up before inner ones.
    pub(crate) regex_matches: SmallVec<[RegexMatchRecord; 2]>,
    /// Caller flags; opaque to the engine.
    pub(crate) flags: ParseFlags,
}

impl MatchState {
    /// Fresh state at offset zero with default flags.
    pub fn new() -> Self {
        Self::with_flags(ParseFlags::default())
    }

    /// Fresh state carrying the caller's parse flags.
    pub fn with_flags(flags: ParseFlags) -> Self {
        MatchState {
            offset: 0,
            captures: SmallVec::new(),
            mark: 0,
            tags: SmallVec::new(),
            regex_matches: SmallVec::new(),
            flags,
        }
    }

    /// Byte offset consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Convert into the caller-facing result once a chain reports full
    /// consumption.
    pub(crate) fn finalize(self) -> PatternMatch {
        PatternMatch {
            captures: self.captures.into_vec(),
            mark: self.mark,
            tags: self.tags.into_vec(),
            regex_matches: self.regex_matches.into_vec(),
            flags: self.flags,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        MatchState::new()
    }
}

/// The finalized result of a successful match.
#[derive(Debug, Clone)]
pub struct PatternMatch {
    captures: Vec<CaptureSlot>,
    mark: u32,
    tags: Vec<String>,
    regex_matches: Vec<RegexMatchRecord>,
    flags: ParseFlags,
}

impl PatternMatch {
    /// Capture placeholders in left-to-right pattern order.
    pub fn captures(&self) -> &[CaptureSlot] {
        &self.captures
    }

    /// The cumulative mark bitmask.
    pub fn mark(&self) -> u32 {
        self.mark
    }

    /// Tags in traversal order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Regex-capture records, outer (earlier-declared) first.
    pub fn regex_matches(&self) -> &[RegexMatchRecord] {
        &self.regex_matches
    }

    /// The flags the match was made under.
    pub fn flags(&self) -> ParseFlags {
        self.flags
    }
}
