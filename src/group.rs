use crate::parser::{Bounds, Parser, multiplicity, sequence};

/// Parser for a possibly empty separator-delimited run of `item`
///
/// `group(P, sep)` is `[ P [ sep P ]* ]?`: optionally one `P` followed by
/// zero or more `sep P` pairs. It is derived purely by composing the
/// primitives; the engine has no special support behind it.
///
/// # Examples
/// - items `1|2|3`, separator `,`: `"1,2,3"` yields three item leaves
/// - the empty input yields a group with no items
///
/// # Note
/// - A trailing separator is not consumed; the `sep P` pair containing it
///   fails and the group stops before it
/// - Does not handle whitespace; pad `item` or `separator` explicitly
pub fn group(item: Parser, separator: Parser) -> Parser {
    let more = multiplicity(
        sequence("Sequence", vec![separator, item.clone()]),
        Bounds::ZeroToN,
    );
    multiplicity(sequence("Sequence", vec![item, more]), Bounds::ZeroToOne)
}
