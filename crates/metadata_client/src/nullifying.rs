//! Decorator that converts degenerate responses into proper absence.
//!
//! The remote service sometimes answers a query with a record whose `id` is
//! empty or missing. Such a payload carries no usable data, and downstream
//! merge logic must never mistake it for a real record. [`NullifyingClient`]
//! wraps any [`MetadataClient`] and collapses those responses to `None`, so
//! consumers only ever see a record that actually exists.

use async_trait::async_trait;

use crate::models::{
    CommonMetadata, CountryMetadata, GlobalMetadata, LocalityMetadata, ProvinceMetadata,
    SublocalityMetadata,
};
use crate::{Error, MetadataClient};

#[cfg(test)]
#[path = "nullifying_tests.rs"]
mod tests;

/// Wraps a [`MetadataClient`] and normalizes records without an identifier
/// to `None`.
///
/// The decorator is independent of any other layering: it can wrap the raw
/// transport directly, or sit on top of a caching or retrying client.
#[derive(Debug)]
pub struct NullifyingClient<C> {
    inner: C,
}

impl<C> NullifyingClient<C> {
    /// Wraps the given client.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

/// Drops records that do not carry a non-empty identifier.
fn nullify<T: CommonMetadata>(record: Option<T>) -> Option<T> {
    record.filter(|record| record.id().is_some_and(|id| !id.is_empty()))
}

#[async_trait]
impl<C: MetadataClient> MetadataClient for NullifyingClient<C> {
    async fn query_global(&self, id: &str) -> Result<Option<GlobalMetadata>, Error> {
        Ok(nullify(self.inner.query_global(id).await?))
    }

    async fn query_country(&self, id: &str) -> Result<Option<CountryMetadata>, Error> {
        Ok(nullify(self.inner.query_country(id).await?))
    }

    async fn query_province(&self, id: &str) -> Result<Option<ProvinceMetadata>, Error> {
        Ok(nullify(self.inner.query_province(id).await?))
    }

    async fn query_locality(&self, id: &str) -> Result<Option<LocalityMetadata>, Error> {
        Ok(nullify(self.inner.query_locality(id).await?))
    }

    async fn query_sublocality(&self, id: &str) -> Result<Option<SublocalityMetadata>, Error> {
        Ok(nullify(self.inner.query_sublocality(id).await?))
    }
}
