//! Batch Product Resolution Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use duomarket_app::domain::catalog::ProductRef;

use crate::{extensions::*, products::handlers::search::ProductsResponse, state::State};

/// Batch Resolution Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BatchRequest {
    /// Composite references (`origin_id`) to resolve
    pub refs: Vec<String>,
}

/// Batch Product Resolution Handler
///
/// Resolves composite references across both catalogs. Unparseable and
/// unresolved references are dropped from the response.
#[endpoint(
    tags("products"),
    summary = "Resolve Products",
    responses(
        (status_code = StatusCode::OK, description = "The resolved products"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<BatchRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let refs: Vec<ProductRef> = json
        .into_inner()
        .refs
        .iter()
        .filter_map(|reference| reference.parse().ok())
        .collect();

    let products = state.app.catalog.fetch_many(&refs).await;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
