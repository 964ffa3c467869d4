// ast.rs - Compiler-facing description of a pattern tree.
//
// An external pattern-text compiler turns syntax strings such as
// "[the] fuel slot[s][ of %blocks%]" into this nested form once, at
// registration time. This crate never parses pattern text itself;
// `SyntaxPattern::compile` flattens the nested form into the linked arena
// used for matching.

/// One element of a pattern, in the nested shape the compiler produces.
///
/// Sequencing is expressed as `Vec<PatternAst>`; nesting as the element's
/// own payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternAst {
    /// Case-insensitive literal text. Spaces in the literal match softly at
    /// the boundaries of the input.
    Literal(String),
    /// Ordered alternation. The first alternative whose full continuation
    /// succeeds wins; authors order ambiguous alternatives deliberately.
    Choice(Vec<Vec<PatternAst>>),
    /// Transparent structural grouping.
    Group(Vec<PatternAst>),
    /// Optional section. Presence is preferred over absence.
    Optional(Vec<PatternAst>),
    /// Free-form sub-expression matched in full against a regular
    /// expression, e.g. `<\d+>`.
    Regex(String),
    /// Typed capture slot, e.g. `%blocks%`. The engine records the matched
    /// text; resolving it into a typed value is the caller's job.
    Capture(String),
    /// Named tag, appended to the tag list when passed during matching.
    ///
    /// An empty tag requests inference: the compile step adopts the text of
    /// a following bare literal, or distributes fresh tags over the literal
    /// alternatives of a following parenthesized choice.
    Tag(String),
    /// Numeric mark, XORed into the mark bitmask when passed.
    Mark(u32),
}

/// Shorthand for [`PatternAst::Literal`].
pub fn lit(text: &str) -> PatternAst {
    PatternAst::Literal(text.to_string())
}

/// Shorthand for [`PatternAst::Choice`].
pub fn choice(alternatives: Vec<Vec<PatternAst>>) -> PatternAst {
    PatternAst::Choice(alternatives)
}

/// Shorthand for [`PatternAst::Group`].
pub fn group(body: Vec<PatternAst>) -> PatternAst {
    PatternAst::Group(body)
}

/// Shorthand for [`PatternAst::Optional`].
pub fn opt(body: Vec<PatternAst>) -> PatternAst {
    PatternAst::Optional(body)
}

/// Shorthand for [`PatternAst::Regex`].
pub fn regex(pattern: &str) -> PatternAst {
    PatternAst::Regex(pattern.to_string())
}

/// Shorthand for [`PatternAst::Capture`].
pub fn capture(name: &str) -> PatternAst {
    PatternAst::Capture(name.to_string())
}

/// Shorthand for [`PatternAst::Tag`].
pub fn tag(text: &str) -> PatternAst {
    PatternAst::Tag(text.to_string())
}

/// Shorthand for [`PatternAst::Mark`].
pub fn mark(value: u32) -> PatternAst {
    PatternAst::Mark(value)
}
