//! Crate for retrieving address metadata records from a remote data service.
//!
//! The remote service is a flat key/value store: every record is addressed by
//! an identifier string such as `data/CA` or `data/CA/BC--fr`, and answers
//! with a JSON document describing one level of the region hierarchy. This
//! crate provides the typed record models, the [`MetadataClient`] capability
//! used by consumers to fetch records, an HTTP implementation of that
//! capability, and the [`NullifyingClient`] decorator that folds degenerate
//! responses into proper absence.
//!
//! ## Architecture
//!
//! [`MetadataClient`] is the seam consumers depend on. Implementations can be
//! layered: decorators such as [`NullifyingClient`] wrap any other client, so
//! caching or retry behavior can be composed around the transport without the
//! transport knowing about it.
//!
//! ## Absence
//!
//! "No such record" is not an error. Every query returns
//! `Result<Option<Record>, Error>`: transport and decoding problems surface as
//! [`Error`], while a missing record is simply `None`.

use async_trait::async_trait;

pub mod errors;
pub use errors::Error;

pub mod models;

pub mod nullifying;
pub use nullifying::NullifyingClient;

pub mod remote;
pub use remote::{RemoteClientConfig, RemoteMetadataClient};

use models::{
    CountryMetadata, GlobalMetadata, LocalityMetadata, ProvinceMetadata, SublocalityMetadata,
};

/// Capability for fetching metadata records by identifier.
///
/// Queries are idempotent: issuing the same identifier twice is always safe
/// and has no effect beyond the remote fetch itself. Implementations hold no
/// state on behalf of callers, so concurrent queries for different
/// identifiers never interfere.
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// Fetches the global record at the given identifier.
    async fn query_global(&self, id: &str) -> Result<Option<GlobalMetadata>, Error>;

    /// Fetches a country record at the given identifier.
    async fn query_country(&self, id: &str) -> Result<Option<CountryMetadata>, Error>;

    /// Fetches a province record at the given identifier.
    async fn query_province(&self, id: &str) -> Result<Option<ProvinceMetadata>, Error>;

    /// Fetches a locality record at the given identifier.
    async fn query_locality(&self, id: &str) -> Result<Option<LocalityMetadata>, Error>;

    /// Fetches a sublocality record at the given identifier.
    async fn query_sublocality(&self, id: &str) -> Result<Option<SublocalityMetadata>, Error>;
}
