//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, IdentityAuthService, IdentityClient},
    database::{self, Db},
    domain::{
        catalog::{AggregatedCatalog, CatalogService},
        orders::{OrdersService, PgOrdersRepository, PgOrdersService},
    },
    providers::{BrazilianProvider, EuropeanProvider, ProviderConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Explicitly constructed dependency holder; there are no ambient globals.
/// Everything inside is an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build the application context from its external collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn init(
        database_url: &str,
        providers: ProviderConfig,
        identity: IdentityClient,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(database_url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let catalog: Arc<dyn CatalogService> = Arc::new(AggregatedCatalog::new(
            Arc::new(BrazilianProvider::new(&providers)),
            Arc::new(EuropeanProvider::new(&providers)),
        ));

        let repository = Arc::new(PgOrdersRepository::new(db));

        Ok(Self {
            orders: Arc::new(PgOrdersService::new(Arc::clone(&catalog), repository)),
            catalog,
            auth: Arc::new(IdentityAuthService::new(identity)),
        })
    }
}
