// matcher.rs - The recursive backtracking engine.
//
// One function per node kind, all funnelling the remainder of the chain
// through match_next. Branch points (choice alternatives, optional
// presence, candidate end offsets) clone the state, explore depth-first in
// declaration order and commit to the first full-continuation success.

use crate::diag::Quality;
use crate::node::{
    CaptureNode, LiteralNode, Node, NodeId, NodeKind, RegexNode, TagMarkNode,
};
use crate::pattern::{MatchContext, SyntaxPattern};
use crate::state::{CaptureSlot, MatchState, RegexMatchRecord};

impl SyntaxPattern {
    /// Continuation protocol shared by every node kind: the single place
    /// that defines "end of pattern means end of input".
    fn match_next(
        &self,
        node: &Node,
        input: &str,
        state: MatchState,
        ctx: &MatchContext<'_>,
    ) -> Option<MatchState> {
        match node.next {
            None => (state.offset == input.len()).then_some(state),
            Some(next) => self.match_node(next, input, state, ctx),
        }
    }

    pub(crate) fn match_node(
        &self,
        id: NodeId,
        input: &str,
        state: MatchState,
        ctx: &MatchContext<'_>,
    ) -> Option<MatchState> {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Literal(literal) => self.match_literal(node, literal, input, state, ctx),
            NodeKind::Choice(choice) => {
                for &alternative in &choice.live_alternatives {
                    // Each alternative explores a private copy; a failed
                    // branch leaves its siblings' view untouched.
                    if let Some(result) = self.match_node(alternative, input, state.clone(), ctx) {
                        return Some(result);
                    }
                }
                None
            }
            // Fully transparent: the wrapped chain's tail is already wired
            // to this node's follower.
            NodeKind::Group(group) => self.match_node(group.head, input, state, ctx),
            NodeKind::Optional(optional) => {
                // Greedy: presence wins whenever it leads to any success.
                if let Some(result) = self.match_node(optional.head, input, state.clone(), ctx) {
                    return Some(result);
                }
                self.match_next(node, input, state, ctx)
            }
            NodeKind::Regex(regex) => self.match_regex(node, regex, input, state, ctx),
            NodeKind::Capture(capture) => self.match_capture(node, capture, input, state, ctx),
            NodeKind::TagMark(tag) => self.match_tag(node, tag, input, state, ctx),
        }
    }

    /// Case-insensitive literal walk with soft space handling: a pattern
    /// space at the very start or end of the input is skipped, one aligned
    /// with an input space consumes it, and one following an already
    /// consumed input space is skipped. Anything else must match exactly.
    fn match_literal(
        &self,
        node: &Node,
        literal: &LiteralNode,
        input: &str,
        mut state: MatchState,
        ctx: &MatchContext<'_>,
    ) -> Option<MatchState> {
        for pattern_char in literal.text.chars() {
            if pattern_char == ' ' {
                if state.offset == 0 || state.offset == input.len() {
                    continue;
                }
                if input[state.offset..].starts_with(' ') {
                    state.offset += 1;
                    continue;
                }
                if input[..state.offset].ends_with(' ') {
                    continue;
                }
                return None;
            }
            let input_char = input[state.offset..].chars().next()?;
            if !chars_eq_ignore_case(pattern_char, input_char) {
                return None;
            }
            state.offset += input_char.len_utf8();
        }
        self.match_next(node, input, state, ctx)
    }

    /// Try candidate end offsets closest-first; the first whose substring
    /// fully matches the regex and whose continuation succeeds wins. The
    /// record is front-inserted on the way out so outer captures precede
    /// the inner ones collected during recursion.
    fn match_regex(
        &self,
        node: &Node,
        regex: &RegexNode,
        input: &str,
        state: MatchState,
        ctx: &MatchContext<'_>,
    ) -> Option<MatchState> {
        ctx.diagnostics.open_trial();
        let start = state.offset;
        let mut candidate = ctx.tokenizer.next_token_end(input, start);
        while let Some(end) = candidate {
            let text = &input[start..end];
            match regex.regex.captures(text) {
                Some(caps) => {
                    let mut trial = state.clone();
                    trial.offset = end;
                    if let Some(mut result) = self.match_next(node, input, trial, ctx) {
                        result
                            .regex_matches
                            .insert(0, RegexMatchRecord::from_captures(start, &caps));
                        ctx.diagnostics.close_discard();
                        return Some(result);
                    }
                    ctx.diagnostics.note(
                        Quality::Continuation,
                        format!("'{}' matched <{}> but the rest of the pattern did not fit", text, regex.source),
                    );
                }
                None => {
                    ctx.diagnostics.note(
                        Quality::NotAMatch,
                        format!("'{}' does not match <{}>", text, regex.source),
                    );
                }
            }
            candidate = ctx.tokenizer.next_token_end(input, end);
        }
        if start >= input.len() {
            ctx.diagnostics.note(
                Quality::NotAMatch,
                format!("expected <{}> but the input ended", regex.source),
            );
        }
        ctx.diagnostics.close_surface();
        None
    }

    /// Typed capture slot: like the regex node, but any non-blank substring
    /// is a valid placeholder; the continuation decides how far it extends.
    fn match_capture(
        &self,
        node: &Node,
        capture: &CaptureNode,
        input: &str,
        state: MatchState,
        ctx: &MatchContext<'_>,
    ) -> Option<MatchState> {
        ctx.diagnostics.open_trial();
        let start = state.offset;
        let mut candidate = ctx.tokenizer.next_token_end(input, start);
        while let Some(end) = candidate {
            let text = &input[start..end];
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                // The slot records the sub-expression without the
                // surrounding blanks a token boundary can drag in.
                let slot_start = start + (text.len() - text.trim_start().len());
                let mut trial = state.clone();
                trial.offset = end;
                trial.captures.push(CaptureSlot {
                    name: capture.name.clone(),
                    range: slot_start..slot_start + trimmed.len(),
                    text: trimmed.to_string(),
                });
                if let Some(result) = self.match_next(node, input, trial, ctx) {
                    ctx.diagnostics.close_discard();
                    return Some(result);
                }
                ctx.diagnostics.note(
                    Quality::Continuation,
                    format!("'{}' cannot end %{}% here", text, capture.name),
                );
            }
            candidate = ctx.tokenizer.next_token_end(input, end);
        }
        if start >= input.len() {
            ctx.diagnostics.note(
                Quality::NotAMatch,
                format!("expected %{}% but the input ended", capture.name),
            );
        }
        ctx.diagnostics.close_surface();
        None
    }

    fn match_tag(
        &self,
        node: &Node,
        tag: &TagMarkNode,
        input: &str,
        mut state: MatchState,
        ctx: &MatchContext<'_>,
    ) -> Option<MatchState> {
        if !tag.tag.is_empty() {
            state.tags.push(tag.tag.clone());
        }
        state.mark ^= tag.mark;
        self.match_next(node, input, state, ctx)
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{capture, choice, group, lit, mark, opt, regex, tag};

    fn compile(elements: Vec<crate::ast::PatternAst>) -> SyntaxPattern {
        SyntaxPattern::compile(elements).unwrap()
    }

    #[test]
    fn literal_matches_case_insensitively() {
        let pattern = compile(vec![lit("Fuel Slot")]);
        assert!(pattern.is_match("fuel slot"));
        assert!(pattern.is_match("FUEL SLOT"));
        assert!(!pattern.is_match("fuel slots"));
    }

    #[test]
    fn trailing_input_is_never_accepted() {
        let pattern = compile(vec![lit("stop")]);
        assert!(!pattern.is_match("stop now"));
    }

    #[test]
    fn soft_space_skipped_at_input_start() {
        let pattern = compile(vec![lit(" stop")]);
        assert!(pattern.is_match("stop"));
    }

    #[test]
    fn soft_space_skipped_at_input_end() {
        let pattern = compile(vec![lit("stop ")]);
        assert!(pattern.is_match("stop"));
    }

    #[test]
    fn soft_space_stacks_on_consumed_space() {
        // Two pattern spaces against one input space: the second pattern
        // space sees an already-consumed space and is skipped.
        let pattern = compile(vec![lit("a  b")]);
        assert!(pattern.is_match("a b"));
    }

    #[test]
    fn double_input_space_fails_single_pattern_space() {
        let pattern = compile(vec![lit("a b")]);
        assert!(!pattern.is_match("a  b"));
    }

    #[test]
    fn mid_input_space_is_required() {
        let pattern = compile(vec![lit("a b")]);
        assert!(!pattern.is_match("ab"));
    }

    #[test]
    fn empty_literal_consumes_nothing() {
        let pattern = compile(vec![lit("")]);
        assert!(pattern.is_match(""));
        assert!(!pattern.is_match("x"));
    }

    #[test]
    fn choice_first_alternative_wins() {
        let pattern = compile(vec![
            group(vec![choice(vec![
                vec![tag("first"), lit("go")],
                vec![tag("second"), lit("go")],
            ])]),
        ]);
        let result = pattern.matches("go").unwrap();
        assert_eq!(result.tags(), ["first"]);
    }

    #[test]
    fn choice_falls_through_to_later_alternative() {
        let pattern = compile(vec![group(vec![choice(vec![
            vec![lit("walk")],
            vec![lit("run")],
        ])])]);
        assert!(pattern.is_match("run"));
    }

    #[test]
    fn choice_blank_alternative_matches_nothing() {
        let pattern = compile(vec![
            lit("speed"),
            group(vec![choice(vec![vec![lit(" up")], vec![]])]),
        ]);
        assert!(pattern.is_match("speed up"));
        assert!(pattern.is_match("speed"));
    }

    #[test]
    fn optional_prefers_presence() {
        let pattern = compile(vec![opt(vec![mark(1), lit("x")]), opt(vec![lit("x")])]);
        // Both paths consume "x"; the first optional must win the claim.
        let result = pattern.matches("x").unwrap();
        assert_eq!(result.mark(), 1);
    }

    #[test]
    fn optional_falls_back_to_absence() {
        let pattern = compile(vec![opt(vec![lit("the ")]), lit("block")]);
        assert!(pattern.is_match("the block"));
        assert!(pattern.is_match("block"));
    }

    #[test]
    fn group_is_transparent() {
        let pattern = compile(vec![group(vec![lit("a"), group(vec![lit("b")])]), lit("c")]);
        assert!(pattern.is_match("abc"));
    }

    #[test]
    fn regex_consumes_one_token_then_extends() {
        let pattern = compile(vec![regex(r"[a-z ]+"), lit(" end")]);
        let result = pattern.matches("some words end").unwrap();
        assert_eq!(result.regex_matches()[0].text, "some words");
    }

    #[test]
    fn regex_requires_full_substring_match() {
        let pattern = compile(vec![regex(r"\d+")]);
        assert!(pattern.is_match("123"));
        assert!(!pattern.is_match("12x"));
    }

    #[test]
    fn regex_groups_are_recorded() {
        let pattern = compile(vec![regex(r"(\d+),(\d+)")]);
        let result = pattern.matches("3,7").unwrap();
        let record = &result.regex_matches()[0];
        assert_eq!(record.groups, vec![Some("3".to_string()), Some("7".to_string())]);
        assert_eq!(record.range, 0..3);
    }

    #[test]
    fn capture_takes_shortest_workable_substring() {
        let pattern = compile(vec![capture("items"), lit(" here")]);
        let result = pattern.matches("iron ore here").unwrap();
        assert_eq!(result.captures()[0].text, "iron ore");
        assert_eq!(result.captures()[0].range, 0..8);
    }

    #[test]
    fn capture_never_matches_blank() {
        let pattern = compile(vec![lit("give "), capture("item")]);
        assert!(!pattern.is_match("give "));
        assert!(!pattern.is_match("give"));
    }

    #[test]
    fn tag_inference_adopts_following_literal() {
        let pattern = compile(vec![tag(""), lit("sprint")]);
        let result = pattern.matches("sprint").unwrap();
        assert_eq!(result.tags(), ["sprint"]);
    }

    #[test]
    fn tag_inference_labels_choice_branches() {
        let pattern = compile(vec![
            tag(""),
            group(vec![choice(vec![vec![lit("add")], vec![lit("remove")]])]),
            lit(" item"),
        ]);
        assert_eq!(pattern.matches("add item").unwrap().tags(), ["add"]);
        assert_eq!(pattern.matches("remove item").unwrap().tags(), ["remove"]);
    }

    #[test]
    fn tag_inference_skips_blank_branches() {
        let pattern = compile(vec![
            lit("push"),
            tag(""),
            opt(vec![choice(vec![vec![lit(" hard")], vec![]])]),
        ]);
        let result = pattern.matches("push").unwrap();
        assert!(result.tags().is_empty());
        let result = pattern.matches("push hard").unwrap();
        assert_eq!(result.tags(), ["hard"]);
    }

    #[test]
    fn mark_xor_cancels_duplicates() {
        let pattern = compile(vec![mark(6), lit("x"), mark(6)]);
        assert_eq!(pattern.matches("x").unwrap().mark(), 0);
    }

    #[test]
    fn mark_xor_combines_distinct_bits() {
        let pattern = compile(vec![mark(5), lit("x"), mark(3)]);
        assert_eq!(pattern.matches("x").unwrap().mark(), 6);
    }

    #[test]
    fn unicode_literals_match_by_char() {
        let pattern = compile(vec![lit("Über "), capture("what")]);
        let result = pattern.matches("über alles").unwrap();
        assert_eq!(result.captures()[0].text, "alles");
    }
}
