//! Catalog aggregation service.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use mockall::automock;

use crate::{
    domain::catalog::{
        errors::CatalogError,
        models::{Origin, Product},
        reference::ProductRef,
    },
    providers::Provider,
};

/// Merged view over both external catalogs.
#[derive(Clone)]
pub struct AggregatedCatalog {
    brazil: Arc<dyn Provider>,
    europe: Arc<dyn Provider>,
}

impl AggregatedCatalog {
    #[must_use]
    pub fn new(brazil: Arc<dyn Provider>, europe: Arc<dyn Provider>) -> Self {
        Self { brazil, europe }
    }

    fn provider_for(&self, origin: Origin) -> &Arc<dyn Provider> {
        match origin {
            Origin::Brazil => &self.brazil,
            Origin::Europe => &self.europe,
        }
    }
}

impl std::fmt::Debug for AggregatedCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregatedCatalog").finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogService for AggregatedCatalog {
    async fn search(&self, term: &str, page: u32, limit: u32) -> Vec<Product> {
        // The requested limit is shared between the two catalogs.
        let per_provider = limit / 2;

        let (mut brazilian, european) = tokio::join!(
            self.brazil.search(term, page, per_provider),
            self.europe.search(term, page, per_provider),
        );

        brazilian.extend(european);
        brazilian
    }

    async fn fetch_one(&self, origin: Origin, id: &str) -> Result<Product, CatalogError> {
        self.provider_for(origin)
            .fetch_one(id)
            .await
            .ok_or(CatalogError::NotFound)
    }

    async fn fetch_many(&self, refs: &[ProductRef]) -> Vec<Product> {
        let ids_for = |origin: Origin| {
            refs.iter()
                .filter(move |reference| reference.origin == origin)
                .map(|reference| reference.id.as_str())
        };

        let brazilian = join_all(ids_for(Origin::Brazil).map(|id| self.brazil.fetch_one(id)));
        let european = join_all(ids_for(Origin::Europe).map(|id| self.europe.fetch_one(id)));

        let (brazilian, european) = tokio::join!(brazilian, european);

        // Unresolved references are dropped, not reported.
        brazilian.into_iter().chain(european).flatten().collect()
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Search both catalogs concurrently, half the limit each, and
    /// concatenate Brazilian results before European ones.
    async fn search(&self, term: &str, page: u32, limit: u32) -> Vec<Product>;

    /// Fetch a single product from the catalog it belongs to.
    async fn fetch_one(&self, origin: Origin, id: &str) -> Result<Product, CatalogError>;

    /// Resolve a batch of composite references, dropping any that do not
    /// resolve. Results come back Brazilian-first, not in input order.
    async fn fetch_many(&self, refs: &[ProductRef]) -> Vec<Product>;
}
