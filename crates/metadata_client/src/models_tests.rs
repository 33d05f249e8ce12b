//! Unit tests for the metadata record models.

use super::*;

// --- AddressField codes ---

#[test]
fn test_field_codes_round_trip() {
    for field in AddressField::ALL {
        assert_eq!(AddressField::from_code(field.code()), Some(field));
    }
}

#[test]
fn test_from_code_rejects_unknown_codes() {
    assert_eq!(AddressField::from_code('Q'), None);
    assert_eq!(AddressField::from_code('~'), None);
}

// --- Record deserialization ---

#[test]
fn test_country_record_deserializes_wire_forms() {
    let body = r#"{
        "id": "data/XX",
        "fmt": "%N%n%O%n%A%n%C %S %Z",
        "lfmt": "%N%n%O%n%A%n%C %S %Z",
        "require": "ACZ",
        "upper": "CS",
        "sub_keys": "XA~XB~XC",
        "sub_names": "Alpha~Beta~Gamma",
        "sub_lnames": "Alfa~Veta~Ghama",
        "state_name_type": "province",
        "locality_name_type": "city",
        "sublocality_name_type": "suburb",
        "zip_name_type": "postal",
        "languages": "en~fr"
    }"#;

    let country: CountryMetadata = serde_json::from_str(body).unwrap();

    assert_eq!(country.id.as_deref(), Some("data/XX"));
    assert_eq!(
        country.required,
        Some(vec![
            AddressField::StreetAddress,
            AddressField::Locality,
            AddressField::PostalCode,
        ])
    );
    assert_eq!(
        country.uppercase,
        Some(vec![AddressField::Locality, AddressField::Province])
    );
    assert_eq!(
        country.child_keys,
        Some(vec!["XA".to_string(), "XB".to_string(), "XC".to_string()])
    );
    assert_eq!(
        country.child_names,
        Some(vec![
            "Alpha".to_string(),
            "Beta".to_string(),
            "Gamma".to_string()
        ])
    );
    assert_eq!(country.state_type.as_deref(), Some("province"));
    assert_eq!(country.postal_code_type.as_deref(), Some("postal"));
    assert_eq!(
        country.languages,
        Some(vec!["en".to_string(), "fr".to_string()])
    );
}

#[test]
fn test_absent_attributes_deserialize_as_none() {
    let country: CountryMetadata = serde_json::from_str(r#"{"id": "data/XX"}"#).unwrap();

    assert_eq!(country.id.as_deref(), Some("data/XX"));
    assert_eq!(country.format, None);
    assert_eq!(country.required, None);
    assert_eq!(country.child_keys, None);
    assert_eq!(country.languages, None);
}

#[test]
fn test_unknown_field_code_is_a_deserialization_error() {
    let result = serde_json::from_str::<CountryMetadata>(r#"{"id": "data/XX", "require": "AQ"}"#);

    assert!(result.is_err());
}

#[test]
fn test_global_record_deserializes_country_collection() {
    let body = r#"{"id": "data", "countries": "XW~XA~XB"}"#;

    let global: GlobalMetadata = serde_json::from_str(body).unwrap();

    assert_eq!(global.id.as_deref(), Some("data"));
    assert_eq!(
        global.countries,
        Some(vec!["XW".to_string(), "XA".to_string(), "XB".to_string()])
    );
}

// --- Record serialization ---

#[test]
fn test_wire_forms_serialize_back_to_delimited_strings() {
    let country = CountryMetadata {
        id: Some("data/XX".to_string()),
        child_keys: Some(vec!["XA".to_string(), "XB".to_string()]),
        required: Some(vec![AddressField::StreetAddress, AddressField::Locality]),
        ..Default::default()
    };

    let value = serde_json::to_value(&country).unwrap();

    assert_eq!(value["sub_keys"], "XA~XB");
    assert_eq!(value["require"], "AC");
    assert!(value.get("fmt").is_none());
}

// --- Hierarchy traits ---

#[test]
fn test_hierarchical_accessors_expose_parallel_collections() {
    let province = ProvinceMetadata {
        id: Some("data/XX/XA".to_string()),
        child_keys: Some(vec!["L1".to_string()]),
        child_names: Some(vec!["First".to_string()]),
        ..Default::default()
    };

    assert_eq!(province.id(), Some("data/XX/XA"));
    assert_eq!(province.child_keys(), Some(&["L1".to_string()][..]));
    assert_eq!(province.child_names(), Some(&["First".to_string()][..]));
    assert_eq!(province.child_latin_names(), None);
}
