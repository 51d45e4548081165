//! App Router

use salvo::Router;

use crate::{auth, healthcheck, orders, products};

/// Product lookups and the healthcheck are public; only order submission
/// sits behind the bearer middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .push(Router::with_path("search").get(products::handlers::search::handler))
                .push(Router::with_path("batch").post(products::handlers::batch::handler))
                .push(Router::with_path("{origin}/{id}").get(products::handlers::get::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("orders").post(orders::handlers::create::handler)),
        )
}
