use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::lazy::LazyRule;
use crate::token::Token;
use crate::tree::Tree;
use std::borrow::Cow;

/// Repetition policy for [`multiplicity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// At most one match
    ZeroToOne,
    /// Any number of matches, taken greedily
    ZeroToN,
}

impl Bounds {
    /// Synthetic tree label for the anonymous repetition node
    fn label(self) -> &'static str {
        match self {
            Bounds::ZeroToOne => "?",
            Bounds::ZeroToN => "*",
        }
    }
}

/// A composable parser over the closed set of grammar primitives.
///
/// Exposes one operation: [`attempt`](Parser::attempt), which either returns
/// a [`Tree`] plus the cursor after the match, or a [`ParseError`]. Failures
/// never consume input: on `Err` the caller's cursor is untouched, so an
/// enclosing branch can retry the next alternative from the same position.
///
/// Parsers are built with the constructor functions [`literal`],
/// [`sequence`], [`branch`], [`multiplicity`] and [`rule`]; the variant set
/// is closed and matched exhaustively, so no parser can bypass the
/// backtracking contract.
#[derive(Debug, Clone)]
pub struct Parser {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    Literal {
        expected: Cow<'static, str>,
    },
    Sequence {
        name: Cow<'static, str>,
        parts: Vec<Parser>,
    },
    /// Non-empty; enforced by the `branch` constructor
    Branch {
        alternatives: Vec<Parser>,
    },
    Multiplicity {
        inner: Box<Parser>,
        bounds: Bounds,
    },
    Reference(LazyRule),
}

impl Parser {
    /// Attempt to parse from the given cursor position
    ///
    /// Returns the tree built from this parser's children and the cursor
    /// after the last consumed byte on success. On failure the input cursor
    /// is still valid at its original position; nothing was consumed.
    pub fn attempt<'text>(
        &self,
        cursor: Cursor<'text>,
    ) -> Result<(Tree<'text>, Cursor<'text>), ParseError> {
        match &self.kind {
            Kind::Literal { expected } => {
                if cursor.rest().starts_with(expected.as_ref()) {
                    let token = Token::new(&cursor.rest()[..expected.len()], cursor.offset());
                    Ok((
                        Tree::leaf(expected.clone(), token),
                        cursor.advance(expected.len()),
                    ))
                } else {
                    Err(ParseError::LiteralMismatch {
                        expected: expected.to_string(),
                        position: cursor.offset(),
                    })
                }
            }

            Kind::Sequence { name, parts } => {
                let mut at = cursor;
                let mut children = Vec::with_capacity(parts.len());
                for (index, part) in parts.iter().enumerate() {
                    match part.attempt(at) {
                        Ok((child, next)) => {
                            children.push(child);
                            at = next;
                        }
                        // All-or-nothing: the partial consumption up to the
                        // failing part never escapes this attempt.
                        Err(cause) => {
                            return Err(ParseError::SequenceMismatch {
                                part: index,
                                position: cause.position(),
                                cause: Box::new(cause),
                            });
                        }
                    }
                }
                Ok((Tree::node(name.clone(), children), at))
            }

            Kind::Branch { alternatives } => {
                let mut deepest: Option<ParseError> = None;
                for alternative in alternatives {
                    // Every alternative starts from the same original cursor.
                    match alternative.attempt(cursor) {
                        Ok(matched) => return Ok(matched),
                        Err(failure) => {
                            // Keep the failure that progressed furthest; the
                            // earliest alternative wins ties.
                            deepest = Some(match deepest.take() {
                                Some(current)
                                    if current.furthest_position()
                                        >= failure.furthest_position() =>
                                {
                                    current
                                }
                                _ => failure,
                            });
                        }
                    }
                }
                let furthest = deepest
                    .as_ref()
                    .map_or(cursor.offset(), |e| e.furthest_position());
                Err(ParseError::BranchExhausted {
                    position: cursor.offset(),
                    attempted: alternatives.len(),
                    furthest,
                    cause: deepest.map(Box::new),
                })
            }

            Kind::Multiplicity { inner, bounds } => {
                let mut at = cursor;
                let mut children = Vec::new();
                loop {
                    match inner.attempt(at) {
                        Ok((child, next)) => {
                            // A zero-width success must end the loop after
                            // this one child, or it would repeat forever.
                            let zero_width = next.offset() == at.offset();
                            children.push(child);
                            at = next;
                            if *bounds == Bounds::ZeroToOne || zero_width {
                                break;
                            }
                        }
                        // Repetition matches zero or more, so the inner
                        // failure is not propagated.
                        Err(_) => break,
                    }
                }
                Ok((Tree::node(bounds.label(), children), at))
            }

            Kind::Reference(reference) => reference.resolve().attempt(cursor),
        }
    }
}

/// Parser that matches `expected` verbatim at the cursor position
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Parser {
    Parser {
        kind: Kind::Literal {
            expected: expected.into(),
        },
    }
}

/// Parser that matches every part in declared order, all-or-nothing
///
/// An empty part list trivially succeeds consuming nothing.
pub fn sequence(name: impl Into<Cow<'static, str>>, parts: Vec<Parser>) -> Parser {
    Parser {
        kind: Kind::Sequence {
            name: name.into(),
            parts,
        },
    }
}

/// Parser that tries alternatives strictly in order and commits to the first
/// success: ordered choice, not longest-match
///
/// # Panics
///
/// Panics if `alternatives` is empty. A branch with nothing to try is a
/// grammar configuration error, not a parse failure.
pub fn branch(alternatives: Vec<Parser>) -> Parser {
    assert!(
        !alternatives.is_empty(),
        "branch requires at least one alternative"
    );
    Parser {
        kind: Kind::Branch { alternatives },
    }
}

/// Parser that repeats `inner` greedily within `bounds`; it cannot fail
///
/// Callers needing "one or more" compose it explicitly: one mandatory
/// application followed by a `ZeroToN` repetition.
pub fn multiplicity(inner: Parser, bounds: Bounds) -> Parser {
    Parser {
        kind: Kind::Multiplicity {
            inner: Box::new(inner),
            bounds,
        },
    }
}

/// Parser that defers construction of its target until first use
///
/// This is the indirection that makes forward, mutual and self reference
/// between grammar rules possible: the producer runs at most once, on the
/// first attempt that reaches it.
pub fn rule(producer: impl Fn() -> Parser + Send + Sync + 'static) -> Parser {
    Parser {
        kind: Kind::Reference(LazyRule::new(producer)),
    }
}
