//! Validator that checks address values against known region collections.

use metadata_client::models::{AddressField, HierarchicalMetadata};

use crate::address::Address;
use crate::resolver;
use crate::validation::{
    is_blank, AddressFieldError, AddressValidator, MetadataContext, ValidationFailure,
};

#[cfg(test)]
#[path = "region_membership_tests.rs"]
mod tests;

/// Flags region values that do not resolve against their parent level.
///
/// A value is checked only when it is non-blank and the parent level's child
/// collections are available: an address naming a province the country does
/// not list gets `(Province, UnknownValue)`, and so on down the hierarchy.
/// Levels whose parent metadata is absent are skipped: missing data is not
/// evidence of a bad value.
#[derive(Debug, Default)]
pub struct RegionMembershipValidator;

impl RegionMembershipValidator {
    /// Creates the validator.
    pub fn new() -> Self {
        Self
    }
}

impl AddressValidator for RegionMembershipValidator {
    fn validate(&self, address: &Address, context: &MetadataContext) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();

        let country = address.country.as_deref();
        if !is_blank(country) {
            let candidate = country.unwrap_or_default();
            let listed = context
                .global
                .countries
                .as_deref()
                .map_or(false, |countries| !countries.is_empty());

            if listed && resolver::country_key(&context.global, candidate).is_none() {
                failures.push(ValidationFailure::new(
                    AddressField::Country,
                    AddressFieldError::UnknownValue,
                ));
            }
        }

        check_child(
            context.country.as_ref(),
            address.province.as_deref(),
            AddressField::Province,
            &mut failures,
        );
        check_child(
            context.province.as_ref(),
            address.locality.as_deref(),
            AddressField::Locality,
            &mut failures,
        );
        check_child(
            context.locality.as_ref(),
            address.sublocality.as_deref(),
            AddressField::Sublocality,
            &mut failures,
        );

        failures
    }
}

/// Flags `value` when `parent` lists children and none of them match.
fn check_child<P: HierarchicalMetadata>(
    parent: Option<&P>,
    value: Option<&str>,
    field: AddressField,
    failures: &mut Vec<ValidationFailure>,
) {
    let Some(parent) = parent else {
        return;
    };
    if is_blank(value) {
        return;
    }

    let has_children = parent.child_keys().map_or(false, |keys| !keys.is_empty());
    let candidate = value.unwrap_or_default();

    if has_children && resolver::child_key(parent, candidate).is_none() {
        failures.push(ValidationFailure::new(field, AddressFieldError::UnknownValue));
    }
}
