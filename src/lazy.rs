use crate::parser::Parser;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Deferred construction of a parser, resolved at most once.
///
/// Grammar rules may mention rules defined later, or themselves; storing a
/// zero-argument producer instead of the finished parser keeps construction
/// from recursing. The recursive structure is realized only when control
/// actually flows through the reference during an attempt, and the result is
/// cached for the lifetime of the grammar.
#[derive(Clone)]
pub(crate) struct LazyRule {
    producer: Arc<dyn Fn() -> Parser + Send + Sync>,
    cell: OnceCell<Box<Parser>>,
}

impl LazyRule {
    pub(crate) fn new(producer: impl Fn() -> Parser + Send + Sync + 'static) -> Self {
        Self {
            producer: Arc::new(producer),
            cell: OnceCell::new(),
        }
    }

    /// Resolve the underlying parser, running the producer on first use only.
    ///
    /// The cell serializes concurrent first resolutions, so a grammar shared
    /// across threads publishes each rule exactly once.
    pub(crate) fn resolve(&self) -> &Parser {
        self.cell.get_or_init(|| Box::new((self.producer)()))
    }
}

impl fmt::Debug for LazyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(parser) => f.debug_tuple("LazyRule").field(parser).finish(),
            None => f.write_str("LazyRule(<unresolved>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::literal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_producer_not_run_at_construction() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let rule = LazyRule::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            literal("a")
        });
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        rule.resolve();
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolution_is_cached() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let rule = LazyRule::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            literal("a")
        });
        rule.resolve();
        rule.resolve();
        rule.resolve();
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
