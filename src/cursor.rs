/// Immutable position within an input text.
///
/// A cursor is an `(input, offset)` pair. Parsers never mutate input or
/// position; advancing returns a new cursor value, so a failed attempt has
/// nothing to roll back: the caller still holds the cursor it started with.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'text> {
    source: &'text str,
    offset: usize,
}

impl<'text> Cursor<'text> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'text str) -> Self {
        Self { source, offset: 0 }
    }

    /// The current byte offset into the source
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The full source text this cursor reads from
    pub fn source(&self) -> &'text str {
        self.source
    }

    /// The unconsumed remainder of the source
    pub fn rest(&self) -> &'text str {
        &self.source[self.offset..]
    }

    /// Whether the cursor has consumed the whole source
    pub fn at_end(&self) -> bool {
        self.offset == self.source.len()
    }

    /// Return a cursor advanced by `len` bytes, saturating at the end of the
    /// source
    pub fn advance(self, len: usize) -> Self {
        Self {
            source: self.source,
            offset: (self.offset + len).min(self.source.len()),
        }
    }
}

// Equality is source identity plus offset, not text comparison: two cursors
// over distinct but equal-content inputs are distinct positions.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.source.as_ptr() == other.source.as_ptr()
            && self.source.len() == other.source.len()
            && self.offset == other.offset
    }
}

impl Eq for Cursor<'_> {}
