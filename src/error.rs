// error.rs - Errors raised while freezing a compiled pattern tree.
//
// Matching itself never fails with an error: "no match" is `None`. The only
// hard errors are structural defects in the tree handed over by the external
// pattern-text compiler, and those are caught once, at compile time.

use std::fmt;

/// A structural defect in a compiled pattern tree.
#[derive(Debug, Clone)]
pub enum PatternError {
    /// A pattern must contain at least one element.
    EmptyPattern,
    /// A choice with no alternatives can never match.
    EmptyChoice,
    /// A group must wrap at least one element.
    EmptyGroup,
    /// An optional section must wrap at least one element.
    EmptyOptional,
    /// Capture slots need a non-blank name.
    EmptyCaptureName,
    /// The regular expression of a regex-capture element failed to compile.
    Regex {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyPattern => write!(f, "pattern contains no elements"),
            PatternError::EmptyChoice => write!(f, "choice has no alternatives"),
            PatternError::EmptyGroup => write!(f, "group wraps no elements"),
            PatternError::EmptyOptional => write!(f, "optional section wraps no elements"),
            PatternError::EmptyCaptureName => write!(f, "capture slot has a blank name"),
            PatternError::Regex { pattern, source } => {
                write!(f, "invalid regex '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Regex { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_pattern() {
        assert_eq!(
            PatternError::EmptyPattern.to_string(),
            "pattern contains no elements"
        );
    }

    #[test]
    fn regex_error_carries_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = PatternError::Regex {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(err.to_string().contains("invalid regex"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(PatternError::EmptyChoice);
        assert_eq!(err.to_string(), "choice has no alternatives");
    }
}
