//! Character-class rules for names, record field names, and enum symbols.

use crate::diagnostics::{EMPTY_NAME, INVALID_CHARACTER, INVALID_FIRST_CHARACTER, NamingError};

use super::NAMESPACE_SEPARATOR;

/// `[A-Za-z_]`
#[inline]
pub fn is_valid_first_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// `[A-Za-z0-9_]`
#[inline]
pub fn is_valid_other_char(ch: char) -> bool {
    ch.is_ascii_digit() || is_valid_first_char(ch)
}

/// Checks a local name against the rules, in order: non-empty, legal first character,
/// legal remaining characters. The first violated rule decides the error.
///
/// The candidate is checked whole; a separator is just another illegal character here.
/// Use [`check_qualified_name`] for names that may carry a namespace.
pub fn check_name(candidate: &str) -> Result<(), NamingError> {
    let mut chars = candidate.chars();
    let Some(first) = chars.next() else {
        return Err(NamingError::make(&EMPTY_NAME, &[]));
    };

    if !is_valid_first_char(first) {
        let found = first.to_string();
        return Err(NamingError::make(
            &INVALID_FIRST_CHARACTER,
            &[candidate, &found],
        ));
    }

    if let Some(bad) = chars.find(|ch| !is_valid_other_char(*ch)) {
        let found = bad.to_string();
        return Err(NamingError::make(&INVALID_CHARACTER, &[candidate, &found]));
    }

    Ok(())
}

/// Checks only the local part of a possibly dot-qualified name.
///
/// Anything before the final separator is accepted unvalidated, matching the Java Avro
/// implementation rather than the stricter "dot-separated sequence of names" wording.
pub fn check_qualified_name(candidate: &str) -> Result<(), NamingError> {
    check_name(local_name(candidate))
}

/// The segment after the final separator, or the whole string.
pub fn local_name(candidate: &str) -> &str {
    match candidate.rsplit_once(NAMESPACE_SEPARATOR) {
        Some((_, local)) => local,
        None => candidate,
    }
}

/// The segment before the final separator, or `""`.
pub fn namespace_of(candidate: &str) -> &str {
    match candidate.rsplit_once(NAMESPACE_SEPARATOR) {
        Some((namespace, _)) => namespace,
        None => "",
    }
}

/// True when `candidate` already carries a namespace.
#[inline]
pub fn is_qualified(candidate: &str) -> bool {
    candidate.contains(NAMESPACE_SEPARATOR)
}
