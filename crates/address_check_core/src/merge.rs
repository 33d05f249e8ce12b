//! Field-level inheritance of country defaults.
//!
//! The data set publishes a rest-of-world record whose attributes apply to
//! any country that does not override them. Merging is strictly
//! field-by-field: a country keeps every attribute it defines and inherits
//! only the attributes it leaves absent. Identity and child collections are
//! never inherited; a country's children are its own.

use metadata_client::models::CountryMetadata;

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

/// Fills each absent inheritable attribute of `country` from `defaults`.
pub(crate) fn apply_country_defaults(country: &mut CountryMetadata, defaults: &CountryMetadata) {
    fill(&mut country.format, &defaults.format);
    fill(&mut country.latin_format, &defaults.latin_format);
    fill(&mut country.required, &defaults.required);
    fill(&mut country.uppercase, &defaults.uppercase);
    fill(&mut country.state_type, &defaults.state_type);
    fill(&mut country.locality_type, &defaults.locality_type);
    fill(&mut country.sublocality_type, &defaults.sublocality_type);
    fill(&mut country.postal_code_type, &defaults.postal_code_type);
}

fn fill<T: Clone>(target: &mut Option<T>, source: &Option<T>) {
    if target.is_none() {
        *target = source.clone();
    }
}
