//! Orders Repository

use async_trait::async_trait;
use jiff_sqlx::ToSqlx;
use mockall::automock;
use sqlx::query;

use crate::{database::Db, domain::orders::models::Order};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");

/// Order persistence seam. The service is tested against a mock of this.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persist the order and its line items atomically; on any error
    /// nothing is persisted.
    async fn insert_order(&self, order: &Order) -> Result<(), sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgOrdersRepository {
    db: Db,
}

impl PgOrdersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrdersRepository for PgOrdersRepository {
    async fn insert_order(&self, order: &Order) -> Result<(), sqlx::Error> {
        let mut tx = self.db.begin().await?;

        query(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(&order.payment.card_name)
            .bind(&order.payment.card_number)
            .bind(&order.payment.card_expiration)
            .bind(&order.payment.card_cvc)
            .bind(&order.shipping.address)
            .bind(&order.shipping.city)
            .bind(&order.shipping.state)
            .bind(&order.shipping.postal_code)
            .bind(order.total)
            .bind(order.created_at.to_sqlx())
            .execute(&mut *tx)
            .await?;

        for item in &order.items {
            query(CREATE_ORDER_ITEM_SQL)
                .bind(order.uuid.into_uuid())
                .bind(item.origin.as_str())
                .bind(&item.reference)
                .bind(item.unit_price)
                .bind(i64::from(item.quantity))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }
}
