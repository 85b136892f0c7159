/// A single position in the indexed text buffer.
///
/// User text and delimiter tokens live in disjoint variants, so a `#` typed by
/// the user never compares equal to the `#` that opens or closes a delimiter.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub(crate) enum Symbol {
    /// A case-folded character of an added string.
    Char(char),

    /// The `#` that opens and closes a delimiter token.
    Sigil,

    /// One decimal digit of a delimiter's word-id.
    Digit(u8),
}

/// Case-folds a string into the symbols used for both indexing and matching.
///
/// Folding is per character, so one character may expand into several.
pub(crate) fn fold(s: &str) -> impl Iterator<Item = Symbol> + '_ {
    s.chars().flat_map(char::to_lowercase).map(Symbol::Char)
}

/// Produces the delimiter token `#id#` for a word-id.
pub(crate) fn delimiter(id: usize) -> Vec<Symbol> {
    let digits = id.to_string();
    let mut token = Vec::with_capacity(digits.len() + 2);
    token.push(Symbol::Sigil);
    token.extend(digits.bytes().map(|b| Symbol::Digit(b - b'0')));
    token.push(Symbol::Sigil);
    token
}
