//! Get Product Handler

use std::{collections::BTreeMap, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use duomarket_app::domain::catalog::{Origin, Product};

use crate::{extensions::*, products::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The product id within its origin catalog
    pub id: String,

    /// Which catalog the product comes from
    pub origin: String,

    pub name: String,

    pub description: String,

    /// List price, as a decimal string
    pub price: String,

    /// Whether a discount applies
    pub discount: bool,

    /// Discount price, as a decimal string; meaningful only with `discount`
    pub discount_price: String,

    /// Ordered image URLs
    pub gallery: Vec<String>,

    pub category: Option<String>,

    /// Origin-specific label/text pairs
    pub details: BTreeMap<String, String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id,
            origin: product.origin.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            discount: product.discount,
            discount_price: product.discount_price.to_string(),
            gallery: product.gallery,
            category: product.category,
            details: product.details,
        }
    }
}

/// Get Product Handler
///
/// Returns a product from the catalog it belongs to.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "The product"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown origin"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    origin: PathParam<String>,
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let origin: Origin = origin.into_inner().parse().or_400("Unknown origin")?;

    let product = state
        .app
        .catalog
        .fetch_one(origin, &id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
