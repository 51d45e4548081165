//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    auth::UserUuid,
    domain::catalog::{Origin, ProductRef},
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Card fields as collected at checkout. Stored verbatim; this layer does
/// not validate or tokenize them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub card_expiration: String,
    pub card_cvc: String,
}

/// Shipping address fields as collected at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// One requested line of a new order. The quantity comes from the client
/// request; prices never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemRequest {
    pub reference: ProductRef,
    pub quantity: u32,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub payment: PaymentDetails,
    pub shipping: ShippingAddress,
    pub items: Vec<OrderItemRequest>,
}

/// A persisted order line with its unit price snapshotted at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub origin: Origin,
    pub reference: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub payment: PaymentDetails,
    pub shipping: ShippingAddress,
    pub total: Decimal,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
}
