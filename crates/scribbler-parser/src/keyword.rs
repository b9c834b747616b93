//! Parsing of single-word tokens shared by the keyword-valued codecs.

use winnow::{Parser, error::ModalResult, token::take_while};

/// Matches one kebab-case word against the tokens of `all`.
///
/// The whole word is consumed before the lookup, so tokens that are
/// prefixes of other tokens (`to-bottom`, `to-bottom-right`) never shadow
/// each other.
pub(crate) fn keyword<T: Copy>(
    input: &mut &str,
    all: &[T],
    token: fn(T) -> &'static str,
) -> ModalResult<T> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-')
        .verify_map(|word: &str| all.iter().copied().find(|value| token(*value) == word))
        .parse_next(input)
}
