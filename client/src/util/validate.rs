//! Login form schema.
//!
//! Pure checks over [`Credentials`]; the form state decides when their output
//! is shown. The first failing check per field wins.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::login::{Credentials, Field, FieldErrors};

pub const INVALID_EMAIL: &str = "Invalid email";
pub const REQUIRED: &str = "String must contain at least 1 character(s)";

/// Validate every field, returning only the failing ones.
pub fn validate(values: &Credentials) -> FieldErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, values.get(field)).map(|message| (field, message.to_owned())))
        .collect()
}

/// Validate one field value.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Email if !is_email(value) => Some(INVALID_EMAIL),
        Field::Email => None,
        Field::Password if value.is_empty() => Some(REQUIRED),
        Field::Password => None,
    }
}

/// Email shape check.
///
/// Local part: `[A-Za-z0-9_'+\-.]`, no leading dot, last char not `.` or `'`.
/// Domain: labels of `[A-Za-z0-9][A-Za-z0-9-]*` joined by dots, ending in an
/// alphabetic TLD of at least two letters. No `..` anywhere.
pub fn is_email(value: &str) -> bool {
    if value.contains("..") {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    let Some(last) = local.chars().last() else {
        return false;
    };
    !local.starts_with('.')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
        && (last.is_ascii_alphanumeric() || matches!(last, '_' | '+' | '-'))
}

fn is_domain(domain: &str) -> bool {
    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) && labels.split('.').all(is_label)
}

fn is_label(label: &str) -> bool {
    let mut chars = label.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
