//! Resolution of free-form region values to canonical keys.
//!
//! Callers rarely supply the canonical key for a region: an address may name
//! a province by its display name, its latin-script name, or its key in any
//! casing. The resolvers here match a candidate against a parent record's
//! child collections and return the canonical key, which is what identifier
//! construction and child lookups require.
//!
//! Matching is an exact, ASCII-case-insensitive comparison. No locale
//! collation or normalization is applied.

use metadata_client::models::{GlobalMetadata, HierarchicalMetadata};

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

/// Resolves a candidate country value against the global record.
///
/// Only the country key collection is consulted, as the global record carries
/// no display names. Returns the canonical key as stored in the collection,
/// or `None` when the candidate is empty, the collection is absent or empty,
/// or nothing matches.
pub fn country_key<'a>(global: &'a GlobalMetadata, candidate: &str) -> Option<&'a str> {
    if candidate.is_empty() {
        return None;
    }

    global
        .countries
        .as_deref()?
        .iter()
        .find(|key| key.eq_ignore_ascii_case(candidate))
        .map(String::as_str)
}

/// Resolves a candidate child-region value against a parent record.
///
/// The candidate is compared against the parent's child keys, then child
/// names, then child latin names; a match in an earlier collection always
/// wins over a match in a later one, and within one collection the first
/// matching index wins. Whatever collection matched, the returned value is
/// the child key at the matched index.
///
/// Returns `None` when the candidate is empty, the parent has no child keys,
/// or no collection contains the candidate.
pub fn child_key<'a, P: HierarchicalMetadata>(parent: &'a P, candidate: &str) -> Option<&'a str> {
    if candidate.is_empty() {
        return None;
    }

    let keys = parent.child_keys()?;
    if keys.is_empty() {
        return None;
    }

    let index = position(Some(keys), candidate)
        .or_else(|| position(parent.child_names(), candidate))
        .or_else(|| position(parent.child_latin_names(), candidate))?;

    keys.get(index).map(String::as_str)
}

/// Index of the first case-insensitive match in the collection, if any.
fn position(collection: Option<&[String]>, candidate: &str) -> Option<usize> {
    collection?
        .iter()
        .position(|entry| entry.eq_ignore_ascii_case(candidate))
}
