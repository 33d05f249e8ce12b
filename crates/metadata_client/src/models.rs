//! # Models
//!
//! Typed representations of the records served by the remote address metadata
//! service, one per level of the region hierarchy (global, country, province,
//! locality, sublocality).
//!
//! The service stores several multi-value attributes as single delimited
//! strings: child-region collections are tilde-delimited (`"AA~BB~CC"`) and
//! field sets are strings of single-character field codes (`"ACZ"`). The serde
//! helpers in this module translate those wire forms into `Vec`s so consumers
//! never see the encoding.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Identifies a single element of a postal address.
///
/// The discriminants correspond to the single-character codes used by the
/// remote service in its `require` and `upper` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    /// The country or top-level region
    Country,
    /// The state, province, or other first-level administrative area
    Province,
    /// The city or locality
    Locality,
    /// The dependent locality, suburb, or district
    Sublocality,
    /// The postal or zip code
    PostalCode,
    /// The sorting code (e.g. French CEDEX)
    SortingCode,
    /// The street address lines
    StreetAddress,
    /// The organization or company name
    Organization,
    /// The addressee
    Name,
}

impl AddressField {
    /// All fields, in canonical validation order.
    pub const ALL: [AddressField; 9] = [
        AddressField::Country,
        AddressField::Province,
        AddressField::Locality,
        AddressField::Sublocality,
        AddressField::PostalCode,
        AddressField::SortingCode,
        AddressField::StreetAddress,
        AddressField::Organization,
        AddressField::Name,
    ];

    /// Returns the field matching the given wire code, if the code is known.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(AddressField::Country),
            'S' => Some(AddressField::Province),
            'C' => Some(AddressField::Locality),
            'D' => Some(AddressField::Sublocality),
            'Z' => Some(AddressField::PostalCode),
            'X' => Some(AddressField::SortingCode),
            'A' => Some(AddressField::StreetAddress),
            'O' => Some(AddressField::Organization),
            'N' => Some(AddressField::Name),
            _ => None,
        }
    }

    /// Returns the single-character code the remote service uses for the field.
    pub fn code(self) -> char {
        match self {
            AddressField::Country => 'R',
            AddressField::Province => 'S',
            AddressField::Locality => 'C',
            AddressField::Sublocality => 'D',
            AddressField::PostalCode => 'Z',
            AddressField::SortingCode => 'X',
            AddressField::StreetAddress => 'A',
            AddressField::Organization => 'O',
            AddressField::Name => 'N',
        }
    }
}

/// Capabilities shared by every metadata record.
pub trait CommonMetadata {
    /// Canonical identifier of the record.
    ///
    /// An empty or missing identifier means the record does not exist; such
    /// records must never be treated as present data.
    fn id(&self) -> Option<&str>;
}

/// Capabilities of records that carry child-region collections.
///
/// The three collections are parallel: index `i` across keys, names, and
/// latin names refers to the same child region.
pub trait HierarchicalMetadata: CommonMetadata {
    /// Keys of the child regions.
    fn child_keys(&self) -> Option<&[String]>;

    /// Display names of the child regions.
    fn child_names(&self) -> Option<&[String]>;

    /// Latin-script names of the child regions.
    fn child_latin_names(&self) -> Option<&[String]>;
}

/// Top-level metadata describing the data set as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalMetadata {
    /// The canonical identifier of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Keys of the countries for which metadata is available
    #[serde(default, with = "tilde_delimited", skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,

    /// Language codes for which regional data is available
    #[serde(default, with = "tilde_delimited", skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

impl CommonMetadata for GlobalMetadata {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

macro_rules! regional_metadata {
    ($(#[$docs:meta])* $name:ident { $($extra:tt)* }) => {
        $(#[$docs])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// The canonical identifier of the record
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,

            /// Keys of the child regions within this region
            #[serde(
                default,
                rename = "sub_keys",
                with = "tilde_delimited",
                skip_serializing_if = "Option::is_none"
            )]
            pub child_keys: Option<Vec<String>>,

            /// Display names of the child regions, parallel to `child_keys`
            #[serde(
                default,
                rename = "sub_names",
                with = "tilde_delimited",
                skip_serializing_if = "Option::is_none"
            )]
            pub child_names: Option<Vec<String>>,

            /// Latin-script names of the child regions, parallel to `child_keys`
            #[serde(
                default,
                rename = "sub_lnames",
                with = "tilde_delimited",
                skip_serializing_if = "Option::is_none"
            )]
            pub child_latin_names: Option<Vec<String>>,

            /// Address format string for the region
            #[serde(default, rename = "fmt", skip_serializing_if = "Option::is_none")]
            pub format: Option<String>,

            /// Alternate format used when rendering the address in latin script
            #[serde(default, rename = "lfmt", skip_serializing_if = "Option::is_none")]
            pub latin_format: Option<String>,

            /// Address fields that must be present for a valid address
            #[serde(
                default,
                rename = "require",
                with = "field_codes",
                skip_serializing_if = "Option::is_none"
            )]
            pub required: Option<Vec<AddressField>>,

            /// Address fields whose values should be uppercased
            #[serde(
                default,
                rename = "upper",
                with = "field_codes",
                skip_serializing_if = "Option::is_none"
            )]
            pub uppercase: Option<Vec<AddressField>>,

            /// Name used to describe the state/province level in this region
            #[serde(default, rename = "state_name_type", skip_serializing_if = "Option::is_none")]
            pub state_type: Option<String>,

            /// Name used to describe the city/locality level in this region
            #[serde(
                default,
                rename = "locality_name_type",
                skip_serializing_if = "Option::is_none"
            )]
            pub locality_type: Option<String>,

            /// Name used to describe the sublocality level in this region
            #[serde(
                default,
                rename = "sublocality_name_type",
                skip_serializing_if = "Option::is_none"
            )]
            pub sublocality_type: Option<String>,

            /// Name used to describe the postal code in this region
            #[serde(default, rename = "zip_name_type", skip_serializing_if = "Option::is_none")]
            pub postal_code_type: Option<String>,

            $($extra)*
        }

        impl CommonMetadata for $name {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }

        impl HierarchicalMetadata for $name {
            fn child_keys(&self) -> Option<&[String]> {
                self.child_keys.as_deref()
            }

            fn child_names(&self) -> Option<&[String]> {
                self.child_names.as_deref()
            }

            fn child_latin_names(&self) -> Option<&[String]> {
                self.child_latin_names.as_deref()
            }
        }
    };
}

regional_metadata! {
    /// Country-level metadata.
    CountryMetadata {
        /// Languages for which regional data is available.
        ///
        /// The first entry is the default language; identifiers for it carry
        /// no language suffix.
        #[serde(default, with = "tilde_delimited", skip_serializing_if = "Option::is_none")]
        pub languages: Option<Vec<String>>,
    }
}

regional_metadata! {
    /// Province-level (state, administrative area) metadata.
    ProvinceMetadata {}
}

regional_metadata! {
    /// Locality-level (city) metadata.
    LocalityMetadata {}
}

regional_metadata! {
    /// Sublocality-level (suburb, district) metadata.
    SublocalityMetadata {}
}

/// Serde adapter for tilde-delimited string collections.
mod tilde_delimited {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|value| value.split('~').map(str::to_owned).collect()))
    }

    pub fn serialize<S>(value: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(items) => serializer.serialize_str(&items.join("~")),
            None => serializer.serialize_none(),
        }
    }
}

/// Serde adapter for field sets encoded as strings of field codes.
mod field_codes {
    use super::AddressField;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<AddressField>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| {
            value
                .chars()
                .map(|code| {
                    AddressField::from_code(code).ok_or_else(|| {
                        de::Error::custom(format!("unrecognized address field code '{code}'"))
                    })
                })
                .collect()
        })
        .transpose()
    }

    pub fn serialize<S>(value: &Option<Vec<AddressField>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(fields) => {
                serializer.serialize_str(&fields.iter().map(|field| field.code()).collect::<String>())
            }
            None => serializer.serialize_none(),
        }
    }
}
