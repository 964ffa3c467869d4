// node.rs - Arena representation of a compiled pattern chain.
//
// Nodes live in a flat Vec and reference each other by index, which keeps
// the continuation chain free of ownership cycles. Every node carries two
// link fields: `next` is the live chain the matcher follows, `original_next`
// is the chain exactly as the compiler produced it. The two views diverge
// permanently once continuation linking and the tag-inference rewrite have
// run; printing and phrasing enumeration always walk the original view.

/// Index of a node in the pattern arena.
pub type NodeId = usize;

/// One link in the pattern chain.
#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    /// Live continuation used for matching. Rewritten at most once, while
    /// the pattern is being frozen; never afterwards.
    pub next: Option<NodeId>,
    /// Continuation as produced by the compiler. Never rewritten.
    pub original_next: Option<NodeId>,
}

/// The closed set of node kinds.
#[derive(Debug)]
pub enum NodeKind {
    Literal(LiteralNode),
    Choice(ChoiceNode),
    Group(GroupNode),
    Optional(OptionalNode),
    Regex(RegexNode),
    Capture(CaptureNode),
    TagMark(TagMarkNode),
}

/// Case-insensitive literal text with soft space handling.
#[derive(Debug)]
pub struct LiteralNode {
    pub text: String,
}

/// Ordered alternation over sub-chains.
#[derive(Debug)]
pub struct ChoiceNode {
    /// Alternative heads as compiled. Never rewritten; printing and
    /// enumeration use these.
    pub alternatives: Vec<NodeId>,
    /// Alternative heads used for matching. The tag-inference rewrite may
    /// splice a synthesized tag node in front of an entry.
    pub live_alternatives: Vec<NodeId>,
}

/// Transparent wrapper around one sub-chain.
#[derive(Debug)]
pub struct GroupNode {
    pub head: NodeId,
}

/// Optional wrapper around one sub-chain; presence preferred over absence.
#[derive(Debug)]
pub struct OptionalNode {
    pub head: NodeId,
}

/// Free-form sub-expression matched in full against a regular expression.
#[derive(Debug)]
pub struct RegexNode {
    /// The caller's pattern, compiled anchored so a candidate substring
    /// must match in full.
    pub regex: regex::Regex,
    /// The pattern text as written, for printing and diagnostics.
    pub source: String,
}

/// Typed capture slot; records the matched text as a placeholder.
#[derive(Debug)]
pub struct CaptureNode {
    pub name: String,
}

/// Tag and/or mark annotation; consumes no input.
#[derive(Debug)]
pub struct TagMarkNode {
    /// Appended to the tag list when non-empty.
    pub tag: String,
    /// XORed into the mark bitmask. Duplicate application cancels.
    pub mark: u32,
}
