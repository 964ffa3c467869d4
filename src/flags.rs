// flags.rs - Caller-supplied parse flags carried through matching.

use bitflags::bitflags;

bitflags! {
    /// Flags describing what the surrounding statement parser is willing to
    /// accept inside capture slots.
    ///
    /// The engine itself never interprets these; they ride along in every
    /// state copy untouched and are handed back through the finalized match,
    /// so the caller can resolve captured text under the same rules it was
    /// matched under.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParseFlags: u32 {
        /// Capture slots may be resolved as full expressions.
        const EXPRESSIONS = 1 << 0;
        /// Capture slots may be resolved as literal values.
        const LITERALS = 1 << 1;
    }
}

impl Default for ParseFlags {
    fn default() -> Self {
        ParseFlags::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_everything() {
        let flags = ParseFlags::default();
        assert!(flags.contains(ParseFlags::EXPRESSIONS));
        assert!(flags.contains(ParseFlags::LITERALS));
    }

    #[test]
    fn flags_are_copy() {
        let flags = ParseFlags::LITERALS;
        let copy = flags;
        assert_eq!(flags, copy);
    }
}
