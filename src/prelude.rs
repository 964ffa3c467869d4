// prelude.rs - Convenient re-exports for common usage.
//
//! # Prelude
//!
//! ```
//! use synpat::prelude::*;
//! use synpat::ast::{capture, lit, opt};
//!
//! let pattern = SyntaxPattern::compile(vec![
//!     lit("burn "),
//!     capture("blocks"),
//!     opt(vec![lit(" slowly")]),
//! ]).unwrap();
//! assert!(pattern.is_match("burn the furnace slowly"));
//! ```

pub use crate::ast::PatternAst;
pub use crate::diag::{Diagnostic, DiagnosticSink, Quality};
pub use crate::error::PatternError;
pub use crate::flags::ParseFlags;
pub use crate::pattern::{MatchContext, SyntaxPattern};
pub use crate::state::{CaptureSlot, MatchState, PatternMatch, RegexMatchRecord};
pub use crate::tokenizer::{DefaultTokenizer, Tokenizer};
