//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;

use crate::{
    auth::UserUuid,
    domain::{
        catalog::{CatalogService, ProductRef},
        orders::{
            errors::OrdersServiceError,
            models::{NewOrder, Order, OrderUuid},
            pricing,
            repository::OrdersRepository,
        },
    },
};

#[derive(Clone)]
pub struct PgOrdersService {
    catalog: Arc<dyn CatalogService>,
    repository: Arc<dyn OrdersRepository>,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>, repository: Arc<dyn OrdersRepository>) -> Self {
        Self {
            catalog,
            repository,
        }
    }
}

impl std::fmt::Debug for PgOrdersService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgOrdersService").finish_non_exhaustive()
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError> {
        let refs: Vec<ProductRef> = order
            .items
            .iter()
            .map(|item| item.reference.clone())
            .collect();

        // Unresolved references drop out here; partial fulfillment is
        // allowed.
        let products = self.catalog.fetch_many(&refs).await;

        let priced = pricing::price_items(&products, &order.items);

        let order = Order {
            uuid: OrderUuid::new(),
            user_uuid: user,
            payment: order.payment,
            shipping: order.shipping,
            total: priced.total,
            items: priced.items,
            created_at: Timestamp::now(),
        };

        self.repository.insert_order(&order).await?;

        info!(
            "created order {} for user {user} with {} items, total {}",
            order.uuid,
            order.items.len(),
            order.total,
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Re-price the requested items from authoritative provider data and
    /// persist the order for the given user.
    async fn create_order(
        &self,
        user: UserUuid,
        order: NewOrder,
    ) -> Result<Order, OrdersServiceError>;
}
