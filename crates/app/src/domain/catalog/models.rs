//! Catalog Models

use std::{collections::BTreeMap, fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which external catalog a product comes from. Part of product identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Brazil,
    Europe,
}

impl Origin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brazil => "brazil",
            Self::Europe => "europe",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An origin string that names neither catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown origin: {0}")]
pub struct UnknownOrigin(pub String);

impl FromStr for Origin {
    type Err = UnknownOrigin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brazil" => Ok(Self::Brazil),
            "europe" => Ok(Self::Europe),
            other => Err(UnknownOrigin(other.to_string())),
        }
    }
}

/// Canonical product shape, post-normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub origin: Origin,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount: bool,
    /// Only meaningful when `discount` is set.
    pub discount_price: Decimal,
    /// Ordered image URLs; non-empty in well-formed supplier data.
    pub gallery: Vec<String>,
    pub category: Option<String>,
    /// Origin-specific label/text pairs.
    pub details: BTreeMap<String, String>,
}

impl Product {
    /// The price actually charged: the discount price when a discount
    /// applies, else the list price.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        if self.discount {
            self.discount_price
        } else {
            self.price
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(discount: bool) -> Product {
        Product {
            id: "9".to_string(),
            origin: Origin::Europe,
            name: "Lamp".to_string(),
            description: String::new(),
            price: Decimal::from(20),
            discount,
            discount_price: Decimal::from(15),
            gallery: Vec::new(),
            category: None,
            details: BTreeMap::new(),
        }
    }

    #[test]
    fn effective_price_uses_discount_price_when_discounted() {
        assert_eq!(product(true).effective_price(), Decimal::from(15));
    }

    #[test]
    fn effective_price_uses_list_price_otherwise() {
        assert_eq!(product(false).effective_price(), Decimal::from(20));
    }

    #[test]
    fn origin_round_trips_through_strings() {
        for origin in [Origin::Brazil, Origin::Europe] {
            assert_eq!(origin.as_str().parse::<Origin>(), Ok(origin));
        }
    }

    #[test]
    fn origin_rejects_unknown_strings() {
        assert!("asia".parse::<Origin>().is_err(), "asia is not a catalog");
    }

    #[test]
    fn origin_serializes_as_snake_case_string() {
        let json = serde_json::to_string(&Origin::Brazil).unwrap_or_default();

        assert_eq!(json, "\"brazil\"");
    }
}
