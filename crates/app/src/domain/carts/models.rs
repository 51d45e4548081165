//! Cart Models

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Origin, ProductRef};

/// One product in the cart. At most one line exists per (id, origin) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The joined composite reference, computed once when the line is created.
    #[serde(rename = "ref")]
    pub reference: String,

    #[serde(rename = "id")]
    pub product_id: String,

    pub origin: Origin,

    /// Always positive; zero is rejected at the store boundary.
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line for the first add of a product.
    #[must_use]
    pub fn new(product_id: impl Into<String>, origin: Origin) -> Self {
        let product_id = product_id.into();

        Self {
            reference: ProductRef::new(origin, product_id.clone()).to_string(),
            product_id,
            origin,
            quantity: 1,
        }
    }

    #[must_use]
    pub fn matches(&self, product_id: &str, origin: Origin) -> bool {
        self.product_id == product_id && self.origin == origin
    }
}

/// The persisted cart document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub products: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_line_starts_at_quantity_one_with_joined_reference() {
        let line = CartLine::new("5", Origin::Brazil);

        assert_eq!(line.quantity, 1);
        assert_eq!(line.reference, "brazil_5");
    }

    #[test]
    fn state_round_trips_through_json() -> TestResult {
        let state = CartState {
            products: vec![CartLine::new("5", Origin::Brazil), CartLine::new("9", Origin::Europe)],
        };

        let encoded = serde_json::to_string(&state)?;
        let decoded: CartState = serde_json::from_str(&encoded)?;

        assert_eq!(decoded, state, "no line items may be lost in the round trip");

        Ok(())
    }
}
