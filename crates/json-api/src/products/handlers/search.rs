//! Product Search Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::handlers::get::ProductResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The merged list of products, Brazilian results first
    pub products: Vec<ProductResponse>,
}

/// Product Search Handler
///
/// Searches both catalogs and merges the results.
#[endpoint(
    tags("products"),
    summary = "Search Products",
    responses(
        (status_code = StatusCode::OK, description = "Merged search results"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid page or limit"),
    ),
)]
pub(crate) async fn handler(
    term: QueryParam<String, false>,
    page: QueryParam<u32, true>,
    limit: QueryParam<u32, true>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = page.into_inner();
    let limit = limit.into_inner();

    if page == 0 || limit == 0 {
        return Err(StatusError::bad_request().brief("page and limit must be positive"));
    }

    let term = term.into_inner().unwrap_or_default();

    let products = state.app.catalog.search(&term, page, limit).await;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}
