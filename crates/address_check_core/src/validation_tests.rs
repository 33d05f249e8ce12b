//! Unit tests for the validator contract and pipeline.

use super::*;

/// Validator that emits a fixed failure list.
struct EmitsFixed(Vec<ValidationFailure>);

impl AddressValidator for EmitsFixed {
    fn validate(&self, _address: &Address, _context: &MetadataContext) -> Vec<ValidationFailure> {
        self.0.clone()
    }
}

#[test]
fn test_pipeline_concatenates_in_registration_order() {
    let a = ValidationFailure::new(AddressField::PostalCode, AddressFieldError::InvalidFormat);
    let b = ValidationFailure::new(AddressField::Province, AddressFieldError::UnknownValue);
    let c = ValidationFailure::new(
        AddressField::StreetAddress,
        AddressFieldError::MissingRequiredField,
    );

    let validators: Vec<Box<dyn AddressValidator>> =
        vec![Box::new(EmitsFixed(vec![a, b])), Box::new(EmitsFixed(vec![c]))];

    let failures = run_validators(&validators, &Address::default(), &MetadataContext::default());

    assert_eq!(failures, vec![a, b, c]);
}

#[test]
fn test_empty_pipeline_emits_nothing() {
    let failures = run_validators(&[], &Address::default(), &MetadataContext::default());

    assert!(failures.is_empty());
}

#[test]
fn test_is_blank() {
    assert!(is_blank(None));
    assert!(is_blank(Some("")));
    assert!(is_blank(Some("   \t")));
    assert!(!is_blank(Some("value")));
}

#[test]
fn test_failure_round_trips_through_serde() {
    let failure = ValidationFailure::new(AddressField::Locality, AddressFieldError::UnknownValue);

    let json = serde_json::to_string(&failure).unwrap();
    let back: ValidationFailure = serde_json::from_str(&json).unwrap();

    assert_eq!(back, failure);
}
