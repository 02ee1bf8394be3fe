//! Token run helpers shared by the command and date interpreters.

/// Split `input` on `delimiter`, dropping empty pieces.
///
/// Consecutive delimiters are not collapsed into one; they simply produce
/// empty pieces which are then discarded.
#[must_use]
pub fn split(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return if input.is_empty() {
            Vec::new()
        } else {
            vec![input.to_string()]
        };
    }

    input
        .split(delimiter)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Join tokens back together with `delimiter`.
#[must_use]
pub fn join<S: AsRef<str>>(tokens: &[S], delimiter: &str) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Check whether `token` is one of `set`.
#[must_use]
pub fn contains(set: &[&str], token: &str) -> bool {
    set.iter().any(|candidate| *candidate == token)
}

/// Return a copy of `tokens` with every token in `remove` taken out.
#[must_use]
pub fn remove_all(tokens: &[String], remove: &[&str]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !contains(remove, token))
        .cloned()
        .collect()
}

/// Check whether `token` is a non-empty run of ASCII digits.
#[must_use]
pub fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
