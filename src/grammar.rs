use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{Parser, rule};
use crate::tree::Tree;

/// Binds a root parser and exposes the one parsing entry point.
///
/// The root is stored as a lazy rule, so the producer may mention rules
/// defined later in the source, including itself; nothing is built until the
/// first parse. A constructed grammar is immutable and may be shared across
/// threads, each `parse` call carrying its own cursor.
pub struct Grammar {
    root: Parser,
}

impl Grammar {
    /// Create a grammar whose root parser is built by `producer` on first use
    pub fn new(producer: impl Fn() -> Parser + Send + Sync + 'static) -> Self {
        Self {
            root: rule(producer),
        }
    }

    /// Parse `text` from the beginning, requiring the whole input consumed
    ///
    /// A match that stops short of the end of the input is a failure
    /// ([`ParseError::TrailingInput`]), so prefix-only matches are never
    /// accepted silently.
    pub fn parse<'text>(&self, text: &'text str) -> Result<Tree<'text>, ParseError> {
        let (tree, end) = self.root.attempt(Cursor::new(text))?;
        if !end.at_end() {
            return Err(ParseError::TrailingInput {
                position: end.offset(),
            });
        }
        Ok(tree)
    }
}
