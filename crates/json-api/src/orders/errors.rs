//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use duomarket_app::domain::orders::OrdersServiceError;

/// Every order-creation failure collapses into one generic bad request;
/// diagnostics go to the log, never to the caller.
pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::Sql(source) => {
            error!("failed to create order: {source}");
        }
    }

    StatusError::bad_request().brief("Unable to place order")
}
