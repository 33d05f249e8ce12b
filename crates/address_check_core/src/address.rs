//! The address input shape.

use metadata_client::models::AddressField;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;

/// A postal address as supplied by the caller.
///
/// All fields are free-form strings; nothing is normalized or corrected.
/// The core never mutates an address: callers build one, hand it to
/// validation, and receive failures keyed by [`AddressField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The country or top-level region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The state, province, or other first-level administrative area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The city or locality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    /// The dependent locality, suburb, or district
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublocality: Option<String>,

    /// The postal or zip code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// The sorting code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_code: Option<String>,

    /// The street address lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,

    /// The organization or company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// The addressee
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Language the address is written in, as a BCP-47-style code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Address {
    /// Returns the value of the given address element.
    pub fn field(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::Country => self.country.as_deref(),
            AddressField::Province => self.province.as_deref(),
            AddressField::Locality => self.locality.as_deref(),
            AddressField::Sublocality => self.sublocality.as_deref(),
            AddressField::PostalCode => self.postal_code.as_deref(),
            AddressField::SortingCode => self.sorting_code.as_deref(),
            AddressField::StreetAddress => self.street_address.as_deref(),
            AddressField::Organization => self.organization.as_deref(),
            AddressField::Name => self.name.as_deref(),
        }
    }
}
