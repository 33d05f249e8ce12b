//! Validator that ensures required elements are present in the address.

use std::collections::HashSet;

use metadata_client::models::AddressField;

use crate::address::Address;
use crate::validation::{
    is_blank, AddressFieldError, AddressValidator, MetadataContext, ValidationFailure,
};

#[cfg(test)]
#[path = "required_elements_tests.rs"]
mod tests;

/// Required set contributed by a hierarchy level that declares none.
const LEVEL_DEFAULT: [AddressField; 1] = [AddressField::Country];

/// Flags blank address fields that the region hierarchy declares required.
///
/// The effective required set is the union of the `required` sets declared at
/// the country, province, locality, and sublocality levels. A level without
/// metadata, or without a declared set, contributes only the country field,
/// so the country is always required. Failures are emitted in canonical field
/// order.
#[derive(Debug, Default)]
pub struct RequiredElementsValidator;

impl RequiredElementsValidator {
    /// Creates the validator.
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for RequiredElementsValidator {
    fn validate(&self, address: &Address, context: &MetadataContext) -> Vec<ValidationFailure> {
        let mut required: HashSet<AddressField> = HashSet::from(LEVEL_DEFAULT);

        for declared in [
            context.country.as_ref().map(|c| c.required.as_deref()),
            context.province.as_ref().map(|p| p.required.as_deref()),
            context.locality.as_ref().map(|l| l.required.as_deref()),
            context.sublocality.as_ref().map(|s| s.required.as_deref()),
        ] {
            let level_set = declared.flatten().unwrap_or(&LEVEL_DEFAULT);
            required.extend(level_set.iter().copied());
        }

        AddressField::ALL
            .iter()
            .copied()
            .filter(|field| required.contains(field))
            .filter(|field| is_blank(address.field(*field)))
            .map(|field| ValidationFailure::new(field, AddressFieldError::MissingRequiredField))
            .collect()
    }
}
