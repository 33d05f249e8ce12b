//! Unit tests for the address input shape.

use super::*;

#[test]
fn test_field_returns_the_matching_element() {
    let address = Address {
        country: Some("XX".to_string()),
        province: Some("XA".to_string()),
        locality: Some("Alpha".to_string()),
        sublocality: Some("North".to_string()),
        postal_code: Some("12345".to_string()),
        sorting_code: Some("CEDEX 7".to_string()),
        street_address: Some("1 Main St".to_string()),
        organization: Some("ACME".to_string()),
        name: Some("A. Person".to_string()),
        language: Some("en".to_string()),
    };

    assert_eq!(address.field(AddressField::Country), Some("XX"));
    assert_eq!(address.field(AddressField::Province), Some("XA"));
    assert_eq!(address.field(AddressField::Locality), Some("Alpha"));
    assert_eq!(address.field(AddressField::Sublocality), Some("North"));
    assert_eq!(address.field(AddressField::PostalCode), Some("12345"));
    assert_eq!(address.field(AddressField::SortingCode), Some("CEDEX 7"));
    assert_eq!(address.field(AddressField::StreetAddress), Some("1 Main St"));
    assert_eq!(address.field(AddressField::Organization), Some("ACME"));
    assert_eq!(address.field(AddressField::Name), Some("A. Person"));
}

#[test]
fn test_default_address_has_no_values() {
    let address = Address::default();

    for field in AddressField::ALL {
        assert_eq!(address.field(field), None);
    }
}

#[test]
fn test_round_trips_through_serde() {
    let address = Address {
        country: Some("XX".to_string()),
        postal_code: Some("12345".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_string(&address).unwrap();
    let back: Address = serde_json::from_str(&json).unwrap();

    assert_eq!(back, address);
}
