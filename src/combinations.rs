// combinations.rs - Every literal phrasing a pattern can present as.
//
// Used for documentation and example-string generation, never for matching.
// Enumeration walks the original chain (the compiler's view), so it is
// unaffected by continuation splicing and the tag-inference rewrite.

use std::collections::HashSet;

use crate::node::{NodeId, NodeKind};
use crate::pattern::SyntaxPattern;

impl SyntaxPattern {
    /// All phrasings this pattern can realize, in declaration order with
    /// duplicates removed.
    ///
    /// With `clean` set, tag and mark annotations contribute nothing;
    /// otherwise they contribute their rendered form. Regex and capture
    /// elements always contribute their rendered placeholder (`<re>`,
    /// `%name%`), since their actual inputs cannot be enumerated.
    pub fn all_combinations(&self, clean: bool) -> Vec<String> {
        let mut seen = HashSet::new();
        self.chain_combinations(self.head(), clean)
            .into_iter()
            .filter(|phrase| seen.insert(phrase.clone()))
            .collect()
    }

    /// Ordered cross product of each node's local set with the next node's
    /// set, folded left to right along the original chain. The fold must be
    /// left-associative: joining "fuel slot" with an already-joined
    /// `"" + " of ..."` would have lost the separating space.
    fn chain_combinations(&self, head: NodeId, clean: bool) -> Vec<String> {
        let mut acc = self.local_combinations(head, clean);
        let mut cur = self.node(head).original_next;
        while let Some(id) = cur {
            let local = self.local_combinations(id, clean);
            let mut out = Vec::with_capacity(acc.len() * local.len());
            for left in &acc {
                for right in &local {
                    out.push(join_phrases(left, right));
                }
            }
            acc = out;
            cur = self.node(id).original_next;
        }
        acc
    }

    /// The phrasings one node contributes in isolation.
    fn local_combinations(&self, id: NodeId, clean: bool) -> Vec<String> {
        match &self.node(id).kind {
            NodeKind::Literal(literal) => vec![literal.text.clone()],
            NodeKind::Choice(choice) => choice
                .alternatives
                .iter()
                .flat_map(|&alternative| self.chain_combinations(alternative, clean))
                .collect(),
            NodeKind::Group(group) => self.chain_combinations(group.head, clean),
            NodeKind::Optional(optional) => {
                let mut out = self.chain_combinations(optional.head, clean);
                out.push(String::new());
                out
            }
            NodeKind::Regex(_) | NodeKind::Capture(_) => vec![self.render_node(id)],
            NodeKind::TagMark(_) => {
                if clean {
                    vec![String::new()]
                } else {
                    vec![self.render_node(id)]
                }
            }
        }
    }
}

/// Whitespace-aware concatenation: an all-blank left operand contributes
/// nothing and the right operand loses its leading space; a trailing left
/// space collapses against a leading right space.
fn join_phrases(left: &str, right: &str) -> String {
    if left.trim().is_empty() {
        return right.strip_prefix(' ').unwrap_or(right).to_string();
    }
    if left.ends_with(' ') && right.starts_with(' ') {
        let mut out = String::with_capacity(left.len() + right.len() - 1);
        out.push_str(left);
        out.push_str(&right[1..]);
        return out;
    }
    let mut out = String::with_capacity(left.len() + right.len());
    out.push_str(left);
    out.push_str(right);
    out
}
