// diag.rs - Trial diagnostics for the candidate search in capture nodes.
//
// Regex and capture nodes probe many candidate end offsets, and most probes
// fail for uninteresting reasons. Those messages must stay invisible unless
// the whole node fails, in which case the most specific one is worth
// surfacing. The sink keeps a stack of trial scopes: discard on success,
// surface the best message on total failure.
//
// The sink uses interior mutability so it can be threaded through the
// recursive matcher alongside immutable state copies. It belongs to a single
// match attempt and is never shared across attempts.

use std::cell::RefCell;

/// How specific a diagnostic is. Higher wins when a scope is surfaced;
/// among equals, the later entry wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quality {
    /// Nothing of the expected shape was found.
    NotAMatch,
    /// The right shape, but the content was rejected.
    Rejected,
    /// Content matched locally but the rest of the pattern refused it.
    Continuation,
}

/// One collected message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub quality: Quality,
    pub message: String,
}

/// Append-only diagnostic log with nested trial scopes.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    inner: RefCell<SinkInner>,
}

#[derive(Debug, Default)]
struct SinkInner {
    entries: Vec<Diagnostic>,
    /// Entry-count watermark per open scope.
    scopes: Vec<usize>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        DiagnosticSink::default()
    }

    /// Open a nested trial scope. Everything noted until the matching close
    /// is provisional.
    pub fn open_trial(&self) {
        let mut inner = self.inner.borrow_mut();
        let watermark = inner.entries.len();
        inner.scopes.push(watermark);
    }

    /// Record a provisional message in the current scope (or at the root if
    /// no scope is open).
    pub fn note(&self, quality: Quality, message: impl Into<String>) {
        self.inner.borrow_mut().entries.push(Diagnostic {
            quality,
            message: message.into(),
        });
    }

    /// Close the current scope, dropping everything noted inside it.
    pub fn close_discard(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(watermark) = inner.scopes.pop() {
            inner.entries.truncate(watermark);
        }
    }

    /// Close the current scope, keeping only its best message for the
    /// enclosing scope.
    pub fn close_surface(&self) {
        let mut inner = self.inner.borrow_mut();
        let Some(watermark) = inner.scopes.pop() else {
            return;
        };
        let best = inner.entries[watermark..]
            .iter()
            .enumerate()
            .max_by_key(|(i, d)| (d.quality, *i))
            .map(|(_, d)| d.clone());
        inner.entries.truncate(watermark);
        if let Some(best) = best {
            inner.entries.push(best);
        }
    }

    /// Drain everything surfaced so far. Callers inspect this after a match
    /// attempt fails on every registered pattern.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.inner.borrow_mut().entries)
    }

    /// Whether anything has been surfaced or noted.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}
