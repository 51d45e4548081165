//! Test helpers.

use std::{collections::BTreeMap, sync::Arc};

use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use duomarket_app::{
    auth::{MockAuthService, UserUuid},
    context::AppContext,
    domain::{
        catalog::{MockCatalogService, Origin, Product},
        orders::MockOrdersService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_search().never();
    catalog.expect_fetch_one().never();
    catalog.expect_fetch_many().never();

    catalog
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();

    orders
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        orders: Arc::new(strict_orders_mock()),
        auth: Arc::new(strict_auth_mock()),
    }))
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(strict_catalog_mock()),
        orders: Arc::new(orders),
        auth: Arc::new(strict_auth_mock()),
    }))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(strict_catalog_mock()),
        orders: Arc::new(strict_orders_mock()),
        auth: Arc::new(auth),
    }))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_catalog(catalog)))
            .push(route),
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_orders(orders)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn make_product(
    origin: Origin,
    id: &str,
    price: u32,
    discount_price: Option<u32>,
) -> Product {
    Product {
        id: id.to_string(),
        origin,
        name: format!("Product {id}"),
        description: String::new(),
        price: Decimal::from(price),
        discount: discount_price.is_some(),
        discount_price: discount_price.map(Decimal::from).unwrap_or_default(),
        gallery: Vec::new(),
        category: None,
        details: BTreeMap::new(),
    }
}
