use crate::token::Token;
use std::borrow::Cow;

/// A labeled node with ordered children; the uniform result shape produced
/// by every combinator.
///
/// The label identifies which grammar construct produced the node: the rule
/// name for a sequence, the expected text for a literal leaf, or a synthetic
/// name (`"*"`, `"?"`) for anonymous repetition constructs. Child order is
/// grammar declaration order and always meaningful. Leaf nodes additionally
/// carry the [`Token`] they matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<'text> {
    label: Cow<'static, str>,
    children: Vec<Tree<'text>>,
    token: Option<Token<'text>>,
}

impl<'text> Tree<'text> {
    /// Create a leaf node carrying the token a literal matched
    pub fn leaf(label: impl Into<Cow<'static, str>>, token: Token<'text>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            token: Some(token),
        }
    }

    /// Create an interior node from the child trees of a combinator
    pub fn node(label: impl Into<Cow<'static, str>>, children: Vec<Tree<'text>>) -> Self {
        Self {
            label: label.into(),
            children,
            token: None,
        }
    }

    /// The grammar construct this node came from
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Child nodes in grammar declaration order
    pub fn children(&self) -> &[Tree<'text>] {
        &self.children
    }

    /// The matched token, present on leaf nodes only
    pub fn token(&self) -> Option<Token<'text>> {
        self.token
    }

    /// Whether this node is a literal leaf
    pub fn is_leaf(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_carries_token() {
        let tree = Tree::leaf(":", Token::new(":", 3));
        assert_eq!(tree.label(), ":");
        assert!(tree.is_leaf());
        assert!(tree.children().is_empty());
        assert_eq!(tree.token().unwrap().lexeme(), ":");
    }

    #[test]
    fn test_node_keeps_child_order() {
        let tree = Tree::node(
            "PAIR",
            vec![
                Tree::leaf("a", Token::new("a", 0)),
                Tree::leaf("b", Token::new("b", 1)),
            ],
        );
        assert_eq!(tree.label(), "PAIR");
        assert!(!tree.is_leaf());
        assert_eq!(tree.token(), None);
        let labels: Vec<&str> = tree.children().iter().map(Tree::label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }
}
