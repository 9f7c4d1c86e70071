/// The text and span matched by a literal parser.
///
/// The lexeme borrows directly from the input, so producing a token never
/// copies text. `end - start` always equals `lexeme.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'text> {
    lexeme: &'text str,
    start: usize,
    end: usize,
}

impl<'text> Token<'text> {
    /// Create a token for `lexeme` matched at byte offset `start`
    pub fn new(lexeme: &'text str, start: usize) -> Self {
        Self {
            lexeme,
            start,
            end: start + lexeme.len(),
        }
    }

    /// The matched text
    pub fn lexeme(&self) -> &'text str {
        self.lexeme
    }

    /// Byte offset where the match begins
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the end of the match
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the matched text in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match consumed no input
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_arithmetic() {
        let token = Token::new("abc", 4);
        assert_eq!(token.lexeme(), "abc");
        assert_eq!(token.start(), 4);
        assert_eq!(token.end(), 7);
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_empty_token() {
        let token = Token::new("", 2);
        assert_eq!(token.start(), 2);
        assert_eq!(token.end(), 2);
        assert!(token.is_empty());
    }
}
