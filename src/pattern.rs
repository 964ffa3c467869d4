// pattern.rs - Compiled syntax patterns: build, freeze, match, print.
//
// A pattern goes through a strict build-then-freeze sequence:
//
//   1. flatten the compiler's nested PatternAst into the arena, wiring
//      sibling links (`next` and `original_next` identical at this point)
//   2. splice nested chain tails into their parents' continuations, so the
//      live chain threads through groups, optionals and choice alternatives
//   3. run the tag-inference rewrite exactly once, on the live view only
//
// After step 3 the pattern is immutable and may be shared freely across
// threads; every match attempt only reads it.

use std::fmt;

use crate::ast::PatternAst;
use crate::diag::DiagnosticSink;
use crate::error::PatternError;
use crate::node::{
    CaptureNode, ChoiceNode, GroupNode, LiteralNode, Node, NodeId, NodeKind, OptionalNode,
    RegexNode, TagMarkNode,
};
use crate::state::{MatchState, PatternMatch};
use crate::tokenizer::{DefaultTokenizer, Tokenizer};

static DEFAULT_TOKENIZER: DefaultTokenizer = DefaultTokenizer;

/// Per-attempt collaborators handed to the matcher alongside the state.
///
/// The context belongs to one match attempt; the diagnostic sink has
/// interior mutability and is deliberately not shared between attempts.
pub struct MatchContext<'a> {
    /// Supplies candidate end offsets for regex and capture nodes.
    pub tokenizer: &'a dyn Tokenizer,
    /// Collects trial diagnostics; see [`DiagnosticSink`].
    pub diagnostics: DiagnosticSink,
}

impl<'a> MatchContext<'a> {
    pub fn new(tokenizer: &'a dyn Tokenizer) -> Self {
        MatchContext {
            tokenizer,
            diagnostics: DiagnosticSink::new(),
        }
    }
}

impl Default for MatchContext<'static> {
    fn default() -> Self {
        MatchContext::new(&DEFAULT_TOKENIZER)
    }
}

/// A compiled, frozen syntax pattern.
///
/// Built once from the external compiler's [`PatternAst`] and thereafter
/// immutable: matching reads shared structure and owns all of its per-attempt
/// state, so one pattern may serve unboundedly many concurrent attempts.
#[derive(Debug)]
pub struct SyntaxPattern {
    arena: Vec<Node>,
    head: NodeId,
}

impl SyntaxPattern {
    /// Flatten, link and freeze a compiled pattern tree.
    ///
    /// Structural defects (empty choice, bad regex, ...) are reported here;
    /// matching itself is total and never errors.
    pub fn compile(elements: Vec<PatternAst>) -> Result<SyntaxPattern, PatternError> {
        if elements.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        let mut arena = Vec::new();
        let head = build_chain(&mut arena, elements)?;
        link_tails(&mut arena, head, None);
        infer_tags(&mut arena);
        Ok(SyntaxPattern { arena, head })
    }

    /// Match `input` with a fresh state and default collaborators.
    pub fn matches(&self, input: &str) -> Option<PatternMatch> {
        let ctx = MatchContext::default();
        self.matches_with(input, &ctx, MatchState::new())
    }

    /// Match `input` with caller-supplied context and initial state.
    ///
    /// Returns `None` on no match; callers try their next registered
    /// pattern. Trial diagnostics accumulate in `ctx.diagnostics`.
    pub fn matches_with(
        &self,
        input: &str,
        ctx: &MatchContext<'_>,
        state: MatchState,
    ) -> Option<PatternMatch> {
        self.match_node(self.head, input, state, ctx)
            .map(MatchState::finalize)
    }

    /// Whether `input` matches, discarding all capture information.
    pub fn is_match(&self, input: &str) -> bool {
        self.matches(input).is_some()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub(crate) fn head(&self) -> NodeId {
        self.head
    }

    /// Render one node in pattern-source syntax, using the original view.
    pub(crate) fn render_node(&self, id: NodeId) -> String {
        match &self.node(id).kind {
            NodeKind::Literal(lit) => lit.text.clone(),
            NodeKind::Choice(choice) => {
                let alternatives: Vec<String> = choice
                    .alternatives
                    .iter()
                    .map(|&alt| self.render_chain(alt))
                    .collect();
                alternatives.join("|")
            }
            NodeKind::Group(group) => format!("({})", self.render_chain(group.head)),
            NodeKind::Optional(optional) => format!("[{}]", self.render_chain(optional.head)),
            NodeKind::Regex(regex) => format!("<{}>", regex.source),
            NodeKind::Capture(capture) => format!("%{}%", capture.name),
            NodeKind::TagMark(tag) => {
                if tag.tag.is_empty() {
                    format!("{}\u{00a6}", tag.mark)
                } else {
                    format!("{}:", tag.tag)
                }
            }
        }
    }

    /// Render a chain in pattern-source syntax by walking `original_next`.
    pub(crate) fn render_chain(&self, head: NodeId) -> String {
        let mut out = String::new();
        let mut cur = Some(head);
        while let Some(id) = cur {
            out.push_str(&self.render_node(id));
            cur = self.node(id).original_next;
        }
        out
    }
}

impl fmt::Display for SyntaxPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_chain(self.head))
    }
}

/// Flatten a sibling sequence into the arena; returns the head.
fn build_chain(arena: &mut Vec<Node>, elements: Vec<PatternAst>) -> Result<NodeId, PatternError> {
    debug_assert!(!elements.is_empty());
    let mut ids = Vec::with_capacity(elements.len());
    for element in elements {
        ids.push(build_node(arena, element)?);
    }
    for pair in ids.windows(2) {
        arena[pair[0]].next = Some(pair[1]);
        arena[pair[0]].original_next = Some(pair[1]);
    }
    Ok(ids[0])
}

fn build_node(arena: &mut Vec<Node>, element: PatternAst) -> Result<NodeId, PatternError> {
    let kind = match element {
        PatternAst::Literal(text) => NodeKind::Literal(LiteralNode { text }),
        PatternAst::Choice(alternatives) => {
            if alternatives.is_empty() {
                return Err(PatternError::EmptyChoice);
            }
            let mut heads = Vec::with_capacity(alternatives.len());
            for alternative in alternatives {
                // A blank alternative is a valid default branch; it compiles
                // to an empty literal that consumes nothing.
                let head = if alternative.is_empty() {
                    push(
                        arena,
                        NodeKind::Literal(LiteralNode {
                            text: String::new(),
                        }),
                    )
                } else {
                    build_chain(arena, alternative)?
                };
                heads.push(head);
            }
            NodeKind::Choice(ChoiceNode {
                live_alternatives: heads.clone(),
                alternatives: heads,
            })
        }
        PatternAst::Group(body) => {
            if body.is_empty() {
                return Err(PatternError::EmptyGroup);
            }
            NodeKind::Group(GroupNode {
                head: build_chain(arena, body)?,
            })
        }
        PatternAst::Optional(body) => {
            if body.is_empty() {
                return Err(PatternError::EmptyOptional);
            }
            NodeKind::Optional(OptionalNode {
                head: build_chain(arena, body)?,
            })
        }
        PatternAst::Regex(source) => {
            // Anchor so a candidate substring must match in full; (?:) keeps
            // the caller's group numbering intact.
            let regex = regex::Regex::new(&format!("^(?:{})$", source)).map_err(|err| {
                PatternError::Regex {
                    pattern: source.clone(),
                    source: err,
                }
            })?;
            NodeKind::Regex(RegexNode { regex, source })
        }
        PatternAst::Capture(name) => {
            if name.trim().is_empty() {
                return Err(PatternError::EmptyCaptureName);
            }
            NodeKind::Capture(CaptureNode { name })
        }
        PatternAst::Tag(tag) => {
            let mark = tag.trim().parse().unwrap_or(0);
            NodeKind::TagMark(TagMarkNode { tag, mark })
        }
        PatternAst::Mark(mark) => NodeKind::TagMark(TagMarkNode {
            tag: String::new(),
            mark,
        }),
    };
    Ok(push(arena, kind))
}

fn push(arena: &mut Vec<Node>, kind: NodeKind) -> NodeId {
    let id = arena.len();
    arena.push(Node {
        kind,
        next: None,
        original_next: None,
    });
    id
}

/// Splice the tail of every nested chain into its parent's continuation.
///
/// Only the live `next` field is touched; `original_next` keeps the nesting
/// structure for printing and enumeration.
fn link_tails(arena: &mut Vec<Node>, head: NodeId, follower: Option<NodeId>) {
    let mut cur = Some(head);
    while let Some(id) = cur {
        let sibling = arena[id].next;
        if sibling.is_none() {
            arena[id].next = follower;
        }
        let continuation = arena[id].next;
        let children: Vec<NodeId> = match &arena[id].kind {
            NodeKind::Choice(choice) => choice.alternatives.clone(),
            NodeKind::Group(group) => vec![group.head],
            NodeKind::Optional(optional) => vec![optional.head],
            _ => Vec::new(),
        };
        for child in children {
            link_tails(arena, child, continuation);
        }
        cur = sibling;
    }
}

/// One-time tag inference, run on the live chain just before freezing.
///
/// An annotation with an empty tag and no explicit mark adopts its label
/// from context: a following bare literal lends its text; a following
/// group or optional wrapping a choice gets a synthesized tag node spliced
/// in front of every non-blank literal alternative, so each branch labels
/// itself with its own wording. An explicit pure mark never has a tag
/// inferred onto it.
fn infer_tags(arena: &mut Vec<Node>) {
    let compiled = arena.len();
    for id in 0..compiled {
        match &arena[id].kind {
            NodeKind::TagMark(tag) if tag.tag.is_empty() && tag.mark == 0 => {}
            _ => continue,
        }
        let Some(next) = arena[id].next else {
            continue;
        };
        match &arena[next].kind {
            NodeKind::Literal(lit) => {
                let text = lit.text.trim().to_string();
                if text.is_empty() {
                    continue;
                }
                if let NodeKind::TagMark(tag) = &mut arena[id].kind {
                    tag.tag = text;
                }
            }
            NodeKind::Group(group) => {
                let head = group.head;
                if matches!(arena[head].kind, NodeKind::Choice(_)) {
                    distribute_tags(arena, head);
                }
            }
            NodeKind::Optional(optional) => {
                let head = optional.head;
                if matches!(arena[head].kind, NodeKind::Choice(_)) {
                    distribute_tags(arena, head);
                }
            }
            _ => {}
        }
    }
}

/// Splice a synthesized tag node before every non-blank literal alternative
/// of `choice_id`, mutating only the live alternative list.
fn distribute_tags(arena: &mut Vec<Node>, choice_id: NodeId) {
    let live = match &arena[choice_id].kind {
        NodeKind::Choice(choice) => choice.live_alternatives.clone(),
        _ => return,
    };
    let mut rewritten = live.clone();
    for (index, &alternative) in live.iter().enumerate() {
        let text = match &arena[alternative].kind {
            NodeKind::Literal(lit) => lit.text.trim().to_string(),
            _ => continue,
        };
        // Blank alternatives stay untagged so a default branch never
        // collides with an inferred empty tag.
        if text.is_empty() {
            continue;
        }
        let synthesized = arena.len();
        arena.push(Node {
            kind: NodeKind::TagMark(TagMarkNode { tag: text, mark: 0 }),
            next: Some(alternative),
            // Never part of the original chain.
            original_next: None,
        });
        rewritten[index] = synthesized;
    }
    if let NodeKind::Choice(choice) = &mut arena[choice_id].kind {
        choice.live_alternatives = rewritten;
    }
}
