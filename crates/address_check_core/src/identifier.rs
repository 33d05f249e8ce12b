//! Deterministic construction of remote-lookup identifiers.
//!
//! Every record in the remote data set is addressed by an identifier built
//! from the chain of region keys leading to it, rooted at [`ROOT_IDENTIFIER`]:
//! `data/<country>/<province>/...`. When metadata is wanted in a specific
//! language, the identifier carries a `--<language>` suffix.

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;

/// Identifier of the root record describing the data set itself.
pub const ROOT_IDENTIFIER: &str = "data";

/// Key of the rest-of-world region whose record supplies country-level
/// defaults.
pub const DEFAULT_REGION_KEY: &str = "ZZ";

/// Builds the lookup identifier for the record at the given key chain.
///
/// Keys are joined with `/` under the root namespace; a non-empty `language`
/// appends a `--<language>` suffix. The function is pure: equal inputs always
/// produce equal identifiers.
///
/// # Examples
///
/// ```
/// use address_check_core::identifier::build_identifier;
///
/// assert_eq!(build_identifier(None, &["XX"]), "data/XX");
/// assert_eq!(build_identifier(Some("abc"), &["XX", "ZZ"]), "data/XX/ZZ--abc");
/// ```
pub fn build_identifier(language: Option<&str>, keys: &[&str]) -> String {
    let mut id = format!("{ROOT_IDENTIFIER}/{}", keys.join("/"));

    if let Some(language) = language.filter(|language| !language.is_empty()) {
        id.push_str("--");
        id.push_str(language);
    }

    id
}

/// Identifier of the rest-of-world defaults record.
pub(crate) fn default_region_identifier() -> String {
    build_identifier(None, &[DEFAULT_REGION_KEY])
}
