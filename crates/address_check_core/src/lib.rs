//! # AddressCheck Core
//!
//! This crate provides the core resolution and validation logic for
//! AddressCheck, a library that checks postal addresses against the
//! region-specific rules published by a remote metadata service.
//!
//! ## Overview
//!
//! The metadata service describes the world as a hierarchy of regions
//! (country → province → locality → sublocality), each level a record keyed
//! by an identifier built from the chain of region keys. [`AddressService`]
//! walks that hierarchy for an address:
//!
//! 1. Fetch the global record listing the known countries
//! 2. Resolve each address value to a canonical region key ([`resolver`])
//! 3. Build the next level's identifier from the key chain ([`identifier`])
//! 4. Fetch the level's record, merging country records with the
//!    rest-of-world defaults
//! 5. Hand the assembled metadata chain to the validator pipeline
//!
//! ## Architecture
//!
//! The crate follows a dependency injection pattern for testability:
//! - [`metadata_client::MetadataClient`] supplies records; any implementation
//!   (HTTP, cache, test stub) can back a service
//! - [`validation::AddressValidator`] is the pluggable rule contract;
//!   validators are registered in order at construction and their failures
//!   are concatenated in that order
//!
//! ## Examples
//!
//! ```no_run
//! use address_check_core::{Address, AddressService};
//! use metadata_client::{NullifyingClient, RemoteClientConfig, RemoteMetadataClient};
//!
//! # async fn example() -> Result<(), address_check_core::Error> {
//! let client = NullifyingClient::new(RemoteMetadataClient::new(RemoteClientConfig::default()));
//! let service = AddressService::new(client);
//!
//! let address = Address {
//!     country: Some("CA".to_string()),
//!     province: Some("British Columbia".to_string()),
//!     locality: Some("Vancouver".to_string()),
//!     ..Default::default()
//! };
//!
//! for failure in service.validate(&address).await? {
//!     println!("{:?}: {:?}", failure.field, failure.error);
//! }
//! # Ok(())
//! # }
//! ```

use metadata_client::models::{
    CountryMetadata, GlobalMetadata, HierarchicalMetadata, LocalityMetadata, ProvinceMetadata,
    SublocalityMetadata,
};
use metadata_client::MetadataClient;
use tracing::{debug, instrument};

pub mod address;
pub use address::Address;

pub mod errors;
pub use errors::Error;

pub mod identifier;
pub use identifier::build_identifier;

mod merge;

pub mod resolver;

pub mod validation;
pub use validation::{
    AddressFieldError, AddressValidator, MetadataContext, ValidationFailure,
};

pub mod region_membership;
pub use region_membership::RegionMembershipValidator;

pub mod required_elements;
pub use required_elements::RequiredElementsValidator;

pub use metadata_client::models::AddressField;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// The validators a service registers by default, in pipeline order.
pub fn default_validators() -> Vec<Box<dyn AddressValidator>> {
    vec![
        Box::new(RequiredElementsValidator::new()),
        Box::new(RegionMembershipValidator::new()),
    ]
}

/// Resolves region metadata and validates addresses against it.
///
/// The service is stateless between calls: every operation works from its own
/// arguments and the records it fetches, so concurrent calls never interfere.
pub struct AddressService<C> {
    client: C,
    validators: Vec<Box<dyn AddressValidator>>,
}

impl<C: MetadataClient> AddressService<C> {
    /// Creates a service with the default validator set.
    pub fn new(client: C) -> Self {
        Self::with_validators(client, default_validators())
    }

    /// Creates a service with an explicit, ordered validator set.
    ///
    /// Validators run in the given order during [`validate`](Self::validate),
    /// and their failures are concatenated in that order.
    pub fn with_validators(client: C, validators: Vec<Box<dyn AddressValidator>>) -> Self {
        Self { client, validators }
    }

    /// Returns the global metadata record, when the service has one.
    #[instrument(skip(self))]
    pub async fn global(&self) -> Result<Option<GlobalMetadata>, Error> {
        Ok(self.client.query_global(identifier::ROOT_IDENTIFIER).await?)
    }

    /// Returns metadata for the given country, merged with the rest-of-world
    /// defaults.
    ///
    /// Both the country record and the defaults record are fetched; every
    /// inheritable attribute the country leaves absent is filled from the
    /// defaults. When the country record itself is absent, the result is
    /// `None`; defaults alone never synthesize a country.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`], before any fetch, when `country_key` is
    /// blank.
    #[instrument(skip(self))]
    pub async fn country(
        &self,
        country_key: &str,
        language: Option<&str>,
    ) -> Result<Option<CountryMetadata>, Error> {
        require_key(country_key, "country")?;

        let id = build_identifier(language, &[country_key]);
        let defaults = self
            .client
            .query_country(&identifier::default_region_identifier())
            .await?;
        let mut country = self.client.query_country(&id).await?;

        if let (Some(country), Some(defaults)) = (country.as_mut(), defaults.as_ref()) {
            merge::apply_country_defaults(country, defaults);
        }

        Ok(country)
    }

    /// Returns metadata for the given province, when the service has it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`], before any fetch, when any ancestor key
    /// is blank.
    #[instrument(skip(self))]
    pub async fn province(
        &self,
        country_key: &str,
        province_key: &str,
        language: Option<&str>,
    ) -> Result<Option<ProvinceMetadata>, Error> {
        require_key(country_key, "country")?;
        require_key(province_key, "province")?;

        let id = build_identifier(language, &[country_key, province_key]);
        Ok(self.client.query_province(&id).await?)
    }

    /// Returns metadata for the given locality, when the service has it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`], before any fetch, when any ancestor key
    /// is blank.
    #[instrument(skip(self))]
    pub async fn locality(
        &self,
        country_key: &str,
        province_key: &str,
        locality_key: &str,
        language: Option<&str>,
    ) -> Result<Option<LocalityMetadata>, Error> {
        require_key(country_key, "country")?;
        require_key(province_key, "province")?;
        require_key(locality_key, "locality")?;

        let id = build_identifier(language, &[country_key, province_key, locality_key]);
        Ok(self.client.query_locality(&id).await?)
    }

    /// Returns metadata for the given sublocality, when the service has it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`], before any fetch, when any ancestor key
    /// is blank.
    #[instrument(skip(self))]
    pub async fn sublocality(
        &self,
        country_key: &str,
        province_key: &str,
        locality_key: &str,
        sublocality_key: &str,
        language: Option<&str>,
    ) -> Result<Option<SublocalityMetadata>, Error> {
        require_key(country_key, "country")?;
        require_key(province_key, "province")?;
        require_key(locality_key, "locality")?;
        require_key(sublocality_key, "sublocality")?;

        let id = build_identifier(
            language,
            &[country_key, province_key, locality_key, sublocality_key],
        );
        Ok(self.client.query_sublocality(&id).await?)
    }

    /// Validates the address and returns the failures found, in validator
    /// order.
    ///
    /// The metadata chain is resolved level by level: each address value is
    /// matched against its parent's child collections, and only levels whose
    /// full key chain resolved are fetched. Levels that do not resolve are
    /// handed to the validators as absent, which is a normal condition, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GlobalUnavailable`] when the service has no global
    /// record, since there is nothing to validate against. Client failures
    /// propagate unmodified.
    #[instrument(skip(self, address))]
    pub async fn validate(&self, address: &Address) -> Result<Vec<ValidationFailure>, Error> {
        let global = self.global().await?.ok_or(Error::GlobalUnavailable)?;
        let language = address.language.as_deref();

        let country_key = address
            .country
            .as_deref()
            .and_then(|value| resolver::country_key(&global, value))
            .map(str::to_owned);
        let country = match country_key.as_deref() {
            Some(key) => self.country(key, language).await?,
            None => None,
        };

        let province_key = resolve_child(country.as_ref(), address.province.as_deref());
        let province = match (country_key.as_deref(), province_key.as_deref()) {
            (Some(country_key), Some(key)) => self.province(country_key, key, language).await?,
            _ => None,
        };

        let locality_key = resolve_child(province.as_ref(), address.locality.as_deref());
        let locality = match (
            country_key.as_deref(),
            province_key.as_deref(),
            locality_key.as_deref(),
        ) {
            (Some(country_key), Some(province_key), Some(key)) => {
                self.locality(country_key, province_key, key, language).await?
            }
            _ => None,
        };

        let sublocality_key = resolve_child(locality.as_ref(), address.sublocality.as_deref());
        let sublocality = match (
            country_key.as_deref(),
            province_key.as_deref(),
            locality_key.as_deref(),
            sublocality_key.as_deref(),
        ) {
            (Some(country_key), Some(province_key), Some(locality_key), Some(key)) => {
                self.sublocality(country_key, province_key, locality_key, key, language)
                    .await?
            }
            _ => None,
        };

        let context = MetadataContext {
            global,
            country,
            province,
            locality,
            sublocality,
        };
        let failures = validation::run_validators(&self.validators, address, &context);

        debug!(failure_count = failures.len(), "address validated");
        Ok(failures)
    }
}

/// Resolves a child value against a parent record, when both are present.
fn resolve_child<P: HierarchicalMetadata>(
    parent: Option<&P>,
    value: Option<&str>,
) -> Option<String> {
    let parent = parent?;
    let value = value?;
    resolver::child_key(parent, value).map(str::to_owned)
}

/// Rejects blank region keys before any fetch is issued.
fn require_key(key: &str, level: &str) -> Result<(), Error> {
    if key.trim().is_empty() {
        return Err(Error::missing_key(level));
    }

    Ok(())
}
