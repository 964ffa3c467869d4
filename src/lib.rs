//! # Synpat
//!
//! Backtracking matcher for declarative syntax patterns: the runtime engine
//! beneath a scripting system that recognizes user-authored statements such
//! as `"[the] fuel slot[s][ of %blocks%]"` and binds their sub-phrases to
//! typed capture slots.
//!
//! An external compiler turns pattern text into a [`PatternAst`] tree once,
//! at registration time; [`SyntaxPattern::compile`] freezes it into an
//! immutable, shareable chain of continuation-linked nodes. Matching
//! explores alternatives depth-first in declaration order and commits to the
//! first path that consumes the whole input. A failed attempt is `None`,
//! never an error; callers simply try their next registered pattern.
//!
//! ## Quick Start
//!
//! ```rust
//! use synpat::prelude::*;
//! use synpat::ast::{capture, lit, opt};
//!
//! let pattern = SyntaxPattern::compile(vec![
//!     opt(vec![lit("the ")]),
//!     lit("fuel slot"),
//!     opt(vec![lit("s")]),
//!     opt(vec![lit(" of "), capture("blocks")]),
//! ]).unwrap();
//!
//! let result = pattern.matches("fuel slots of the furnace").unwrap();
//! assert_eq!(result.captures()[0].text, "the furnace");
//!
//! assert!(pattern.is_match("fuel slot"));
//! assert!(!pattern.is_match("the slot"));
//! ```
//!
//! Patterns can also report every phrasing they accept, for documentation
//! and example generation:
//!
//! ```rust
//! use synpat::prelude::*;
//! use synpat::ast::{choice, group, lit};
//!
//! let pattern = SyntaxPattern::compile(vec![
//!     group(vec![choice(vec![vec![lit("start")], vec![lit("stop")]])]),
//!     lit(" sprinting"),
//! ]).unwrap();
//! assert_eq!(
//!     pattern.all_combinations(true),
//!     ["start sprinting", "stop sprinting"],
//! );
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ast`] | Compiler-facing nested pattern description |
//! | [`pattern`] | Compile, freeze, match and print patterns |
//! | [`node`] | Arena node types with live/original link duality |
//! | [`matcher`] | The recursive backtracking engine |
//! | [`state`] | Match state and the finalized result |
//! | [`combinations`] | Phrasing enumeration |
//! | [`tokenizer`] | Token boundary supply for free-form captures |
//! | [`diag`] | Trial diagnostics with nested scopes |
//! | [`error`] | Structural pattern errors |
//! | [`flags`] | Caller-supplied parse flags |

pub mod ast;
pub mod combinations;
pub mod diag;
pub mod error;
pub mod flags;
pub mod matcher;
pub mod node;
pub mod pattern;
pub mod prelude;
pub mod state;
pub mod tokenizer;

pub use ast::PatternAst;
pub use error::PatternError;
pub use pattern::{MatchContext, SyntaxPattern};
pub use state::{MatchState, PatternMatch};
