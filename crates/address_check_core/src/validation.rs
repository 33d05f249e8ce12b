//! The validator contract and failure model.
//!
//! Validation is a pipeline of independent rules. Each validator receives the
//! address and the full resolved metadata chain, emits zero or more
//! [`ValidationFailure`]s, and never sees another validator's output. The
//! pipeline concatenates emissions in registration order, preserving each
//! validator's internal ordering, so results are deterministic for a given
//! validator set.

use metadata_client::models::{
    AddressField, CountryMetadata, GlobalMetadata, LocalityMetadata, ProvinceMetadata,
    SublocalityMetadata,
};
use serde::{Deserialize, Serialize};

use crate::address::Address;

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;

/// The kind of problem found with an address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AddressFieldError {
    /// The field is required for the region but blank
    MissingRequiredField,
    /// The field value does not identify a known region
    UnknownValue,
    /// The field value does not match the format the region mandates
    InvalidFormat,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// The address element the failure concerns.
    pub field: AddressField,
    /// What is wrong with the element.
    pub error: AddressFieldError,
}

impl ValidationFailure {
    /// Creates a failure for the given field.
    pub fn new(field: AddressField, error: AddressFieldError) -> Self {
        Self { field, error }
    }
}

/// The resolved metadata chain handed to validators.
///
/// A present `global` is a precondition of validation and is therefore not
/// optional here; every deeper level may legitimately be absent, which simply
/// means fewer region-specific rules apply.
#[derive(Debug, Clone, Default)]
pub struct MetadataContext {
    /// The global record.
    pub global: GlobalMetadata,
    /// The merged country record, when the address country resolved.
    pub country: Option<CountryMetadata>,
    /// The province record, when the address province resolved.
    pub province: Option<ProvinceMetadata>,
    /// The locality record, when the address locality resolved.
    pub locality: Option<LocalityMetadata>,
    /// The sublocality record, when the address sublocality resolved.
    pub sublocality: Option<SublocalityMetadata>,
}

/// A single validation rule.
///
/// Implementations must be stateless across calls; any configuration is fixed
/// at construction. The same validator instance may be invoked concurrently
/// for unrelated addresses.
pub trait AddressValidator: Send + Sync {
    /// Validates the address against the resolved metadata chain.
    fn validate(&self, address: &Address, context: &MetadataContext) -> Vec<ValidationFailure>;
}

/// Runs the validators in order and concatenates their failures.
pub fn run_validators(
    validators: &[Box<dyn AddressValidator>],
    address: &Address,
    context: &MetadataContext,
) -> Vec<ValidationFailure> {
    validators
        .iter()
        .flat_map(|validator| validator.validate(address, context))
        .collect()
}

/// Whether an address value should be treated as not provided.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}
