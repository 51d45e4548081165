//! Authoritative order pricing.
//!
//! Prices always come from provider data resolved at order-creation time,
//! never from the client.

use rust_decimal::Decimal;

use crate::domain::{
    catalog::{Product, ProductRef},
    orders::models::{OrderItem, OrderItemRequest},
};

/// The priced order lines and their total.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItems {
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

/// Price resolved products against the requested lines.
///
/// Each product is matched to its request line by composite reference; a
/// product with no matching request line is skipped, so nothing the client
/// did not ask for can be charged. The unit price is the product's
/// effective price; the quantity is the requested one.
#[must_use]
pub fn price_items(products: &[Product], requests: &[OrderItemRequest]) -> PricedItems {
    let mut items = Vec::with_capacity(products.len());
    let mut total = Decimal::ZERO;

    for product in products {
        let reference = ProductRef::new(product.origin, product.id.clone());

        let Some(request) = requests.iter().find(|request| request.reference == reference)
        else {
            continue;
        };

        let unit_price = product.effective_price();

        total += unit_price * Decimal::from(request.quantity);

        items.push(OrderItem {
            origin: product.origin,
            reference: reference.to_string(),
            unit_price,
            quantity: request.quantity,
        });
    }

    PricedItems { items, total }
}
