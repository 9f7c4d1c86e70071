use thiserror::Error;

/// Failure produced by a parser attempt.
///
/// Failures travel as ordinary values: combinators receive and return them,
/// an enclosing branch may recover from any of them, and only
/// [`Grammar::parse`](crate::Grammar::parse) decides a failure is final.
/// Nested causes are wired as error sources, so the standard error chain
/// reads as the path from the outermost combinator down to the literal that
/// actually mismatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expected text was absent at this position
    #[error("expected '{expected}' at offset {position}")]
    LiteralMismatch { expected: String, position: usize },

    /// A sequence part failed; the sequence reports the position its failing
    /// part reported
    #[error("sequence part {part} failed at offset {position}")]
    SequenceMismatch {
        part: usize,
        position: usize,
        #[source]
        cause: Box<ParseError>,
    },

    /// Every alternative of a branch failed; `cause` is the alternative that
    /// progressed furthest
    #[error("all {attempted} alternatives failed at offset {position}, furthest failure at offset {furthest}")]
    BranchExhausted {
        position: usize,
        attempted: usize,
        furthest: usize,
        #[source]
        cause: Option<Box<ParseError>>,
    },

    /// The grammar matched a strict prefix but input remains
    #[error("expected end of input at offset {position}")]
    TrailingInput { position: usize },
}

impl ParseError {
    /// The offset at which this failure was reported
    pub fn position(&self) -> usize {
        match self {
            ParseError::LiteralMismatch { position, .. }
            | ParseError::SequenceMismatch { position, .. }
            | ParseError::BranchExhausted { position, .. }
            | ParseError::TrailingInput { position } => *position,
        }
    }

    /// The deepest offset reached anywhere in the attempt tree behind this
    /// failure
    ///
    /// A branch records the furthest of its alternatives even though it
    /// reports its own starting offset, so callers can point diagnostics at
    /// the most advanced point of the parse rather than the last backtrack
    /// target.
    pub fn furthest_position(&self) -> usize {
        match self {
            ParseError::LiteralMismatch { position, .. }
            | ParseError::TrailingInput { position } => *position,
            ParseError::SequenceMismatch { cause, .. } => cause.furthest_position(),
            ParseError::BranchExhausted { furthest, .. } => *furthest,
        }
    }

    /// The literal text expected at the furthest failure, if the chain ends
    /// in a literal mismatch
    pub fn expected(&self) -> Option<&str> {
        match self {
            ParseError::LiteralMismatch { expected, .. } => Some(expected),
            ParseError::SequenceMismatch { cause, .. } => cause.expected(),
            ParseError::BranchExhausted { cause, .. } => {
                cause.as_deref().and_then(ParseError::expected)
            }
            ParseError::TrailingInput { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_literal_mismatch_display() {
        let error = ParseError::LiteralMismatch {
            expected: "{".into(),
            position: 3,
        };
        assert_eq!(format!("{}", error), "expected '{' at offset 3");
        assert_eq!(error.position(), 3);
        assert_eq!(error.furthest_position(), 3);
        assert_eq!(error.expected(), Some("{"));
    }

    #[test]
    fn test_sequence_mismatch_chains_to_cause() {
        let cause = ParseError::LiteralMismatch {
            expected: ":".into(),
            position: 5,
        };
        let error = ParseError::SequenceMismatch {
            part: 1,
            position: 5,
            cause: Box::new(cause),
        };
        assert_eq!(error.position(), 5);
        assert_eq!(error.furthest_position(), 5);
        assert_eq!(error.expected(), Some(":"));
        // The failing part is reachable through the standard error chain.
        let source = error.source().unwrap();
        assert_eq!(format!("{}", source), "expected ':' at offset 5");
    }

    #[test]
    fn test_branch_exhausted_keeps_furthest() {
        let deepest = ParseError::SequenceMismatch {
            part: 2,
            position: 7,
            cause: Box::new(ParseError::LiteralMismatch {
                expected: "]".into(),
                position: 7,
            }),
        };
        let error = ParseError::BranchExhausted {
            position: 2,
            attempted: 3,
            furthest: 7,
            cause: Some(Box::new(deepest)),
        };
        assert_eq!(error.position(), 2);
        assert_eq!(error.furthest_position(), 7);
        assert_eq!(error.expected(), Some("]"));
    }

    #[test]
    fn test_trailing_input_has_no_expectation() {
        let error = ParseError::TrailingInput { position: 4 };
        assert_eq!(error.position(), 4);
        assert_eq!(error.expected(), None);
    }
}
