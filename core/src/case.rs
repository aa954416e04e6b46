//! Attribute key case conversion.
//!
//! Two pure functions translate keys between the storage convention
//! (snake_case) and the external convention (camelCase). Both operate on
//! ASCII letters, digits and underscores; any other character is copied
//! through unchanged.
//!
//! # Examples
//!
//! ```
//! use casemodel_core::{to_camel_case, to_snake_case};
//!
//! assert_eq!(to_camel_case("last_login_at"), "lastLoginAt");
//! assert_eq!(to_snake_case("lastLoginAt"), "last_login_at");
//! assert_eq!(to_camel_case("id"), "id");
//! ```

/// Converts a snake_case key to camelCase.
///
/// The key is split on `_` and empty segments are dropped, so leading,
/// trailing and doubled underscores vanish. The first segment is lowercased;
/// each following segment gets its first character uppercased and keeps the
/// rest as written.
///
/// # Examples
///
/// ```
/// use casemodel_core::to_camel_case;
///
/// assert_eq!(to_camel_case("first_name"), "firstName");
/// assert_eq!(to_camel_case("_private__field_"), "privateField");
/// assert_eq!(to_camel_case("Created_at"), "createdAt");
/// ```
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());

    for (i, segment) in key.split('_').filter(|s| !s.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&segment.to_ascii_lowercase());
            continue;
        }

        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
        }
        out.extend(chars);
    }

    out
}

/// Converts a camelCase (or mixed) key to snake_case.
///
/// An underscore is inserted wherever an ASCII lowercase letter or digit is
/// immediately followed by an ASCII uppercase letter, then the whole key is
/// ASCII-lowercased. Existing underscores are kept, and no underscore is ever
/// placed before the first character.
///
/// # Examples
///
/// ```
/// use casemodel_core::to_snake_case;
///
/// assert_eq!(to_snake_case("firstName"), "first_name");
/// assert_eq!(to_snake_case("FirstName"), "first_name");
/// assert_eq!(to_snake_case("first_name"), "first_name");
/// assert_eq!(to_snake_case("html5Parser"), "html5_parser");
/// ```
pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for c in key.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }

    out
}
