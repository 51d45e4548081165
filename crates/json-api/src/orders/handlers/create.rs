//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use duomarket_app::domain::orders::{
    NewOrder, OrderItemRequest, PaymentDetails, ShippingAddress,
};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub card_name: String,
    pub card_number: String,
    pub card_expiration: String,
    pub card_cvc: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub items: Vec<OrderItemBody>,
}

/// One requested order line
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemBody {
    /// Composite reference (`origin_id`)
    #[serde(rename = "ref")]
    pub reference: String,

    pub quantity: u32,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            payment: PaymentDetails {
                card_name: request.card_name,
                card_number: request.card_number,
                card_expiration: request.card_expiration,
                card_cvc: request.card_cvc,
            },
            shipping: ShippingAddress {
                address: request.address,
                city: request.city,
                state: request.state,
                postal_code: request.postal_code,
            },
            items: request
                .items
                .into_iter()
                .filter_map(|item| {
                    Some(OrderItemRequest {
                        reference: item.reference.parse().ok()?,
                        quantity: item.quantity,
                    })
                })
                .collect(),
        }
    }
}

/// Order Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// Created order UUID
    pub uuid: Uuid,

    /// Authoritative order total, as a decimal string
    pub total: String,
}

/// Create Order Handler
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unable to place order"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_uuid_or_401()?;

    let request = json.into_inner();

    if request.items.iter().any(|item| item.quantity == 0) {
        return Err(StatusError::bad_request().brief("Unable to place order"));
    }

    let order = state
        .app
        .orders
        .create_order(user, request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse {
        uuid: order.uuid.into(),
        total: order.total.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use duomarket_app::domain::{
        catalog::Origin,
        orders::{MockOrdersService, Order, OrderItem, OrderUuid, OrdersServiceError},
    };

    use crate::test_helpers::{TEST_USER_UUID, orders_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        orders_service(orders, Router::with_path("orders").post(handler))
    }

    fn order_body() -> serde_json::Value {
        json!({
            "card_name": "Ada Lovelace",
            "card_number": "4242424242424242",
            "card_expiration": "12/30",
            "card_cvc": "123",
            "address": "1 Main St",
            "city": "Springfield",
            "state": "SP",
            "postal_code": "12345",
            "items": [
                { "ref": "brazil_5", "quantity": 2 },
                { "ref": "europe_9", "quantity": 1 }
            ]
        })
    }

    fn make_order(uuid: OrderUuid, new: NewOrder) -> Order {
        Order {
            uuid,
            user_uuid: TEST_USER_UUID,
            payment: new.payment,
            shipping: new.shipping,
            total: Decimal::from(35),
            items: vec![OrderItem {
                origin: Origin::Brazil,
                reference: "brazil_5".to_string(),
                unit_price: Decimal::from(10),
                quantity: 2,
            }],
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_create_order_returns_201_with_location() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|user, new| {
                *user == TEST_USER_UUID
                    && new.items.len() == 2
                    && new.payment.card_name == "Ada Lovelace"
            })
            .return_once(move |_, new| Ok(make_order(uuid, new)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&order_body())
            .send(&make_service(orders))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/orders/{uuid}").as_str()));

        let body: OrderCreatedResponse = res.take_json().await?;

        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.total, "35");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_failure_collapses_to_generic_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::post("http://example.com/orders")
            .json(&order_body())
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_zero_quantity_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_create_order().never();

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "card_name": "Ada Lovelace",
                "card_number": "4242424242424242",
                "card_expiration": "12/30",
                "card_cvc": "123",
                "address": "1 Main St",
                "city": "Springfield",
                "state": "SP",
                "postal_code": "12345",
                "items": [{ "ref": "brazil_5", "quantity": 0 }]
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_drops_unparseable_references() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(|_, new| new.items.len() == 1)
            .return_once(|_, new| Ok(make_order(OrderUuid::new(), new)));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "card_name": "Ada Lovelace",
                "card_number": "4242424242424242",
                "card_expiration": "12/30",
                "card_cvc": "123",
                "address": "1 Main St",
                "city": "Springfield",
                "state": "SP",
                "postal_code": "12345",
                "items": [
                    { "ref": "brazil_5", "quantity": 1 },
                    { "ref": "nonsense", "quantity": 1 }
                ]
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }
}
