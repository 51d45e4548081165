//! Cart subtotal computation.

use rust_decimal::Decimal;

use crate::domain::{carts::models::CartLine, catalog::Product};

/// Subtotal over cart lines matched to fetched products by composite
/// reference. Each matched line contributes effective price times quantity;
/// unmatched lines contribute zero.
#[must_use]
pub fn subtotal(lines: &[CartLine], products: &[Product]) -> Decimal {
    lines
        .iter()
        .filter_map(|line| {
            let product = products.iter().find(|product| {
                product.origin == line.origin && product.id == line.product_id
            })?;

            Some(product.effective_price() * Decimal::from(line.quantity))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::domain::catalog::Origin;

    use super::*;

    fn make_product(origin: Origin, id: &str, price: u32, discount_price: Option<u32>) -> Product {
        Product {
            id: id.to_string(),
            origin,
            name: String::new(),
            description: String::new(),
            price: Decimal::from(price),
            discount: discount_price.is_some(),
            discount_price: discount_price.map(Decimal::from).unwrap_or_default(),
            gallery: Vec::new(),
            category: None,
            details: BTreeMap::new(),
        }
    }

    fn line(origin: Origin, id: &str, quantity: u32) -> CartLine {
        CartLine {
            quantity,
            ..CartLine::new(id, origin)
        }
    }

    #[test]
    fn matched_lines_sum_discount_aware_prices() {
        // brazil/5 at 10 with no discount, europe/9 at 20 discounted to 15.
        let products = vec![
            make_product(Origin::Brazil, "5", 10, None),
            make_product(Origin::Europe, "9", 20, Some(15)),
        ];

        let lines = vec![line(Origin::Brazil, "5", 2), line(Origin::Europe, "9", 1)];

        assert_eq!(subtotal(&lines, &products), Decimal::from(35));
    }

    #[test]
    fn unmatched_lines_contribute_zero() {
        let products = vec![make_product(Origin::Brazil, "5", 10, None)];

        let lines = vec![line(Origin::Brazil, "5", 1), line(Origin::Europe, "404", 3)];

        assert_eq!(subtotal(&lines, &products), Decimal::from(10));
    }

    #[test]
    fn empty_cart_subtotal_is_zero() {
        assert_eq!(subtotal(&[], &[]), Decimal::ZERO);
    }
}
