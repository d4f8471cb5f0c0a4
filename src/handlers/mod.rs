pub mod orders;
pub mod validation;

use actix_web::web;
use utoipa::OpenApi;

use crate::errors::{ErrorDetail, ErrorResponse};
use orders::{CreateOrderLineRequest, CreateOrderRequest, OrderLineResponse, OrderResponse};

#[derive(OpenApi)]
#[openapi(
    paths(orders::create_order, orders::list_orders, orders::get_order),
    components(schemas(
        CreateOrderRequest,
        CreateOrderLineRequest,
        OrderResponse,
        OrderLineResponse,
        ErrorResponse,
        ErrorDetail
    )),
    tags((name = "orders", description = "Book orders validated against the catalogue"))
)]
pub struct ApiDoc;

/// Registers the `/orders` routes and the JSON body settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(orders::json_config()).service(
        web::scope("/orders")
            .route("", web::post().to(orders::create_order))
            .route("", web::get().to(orders::list_orders))
            .route("/{id}", web::get().to(orders::get_order)),
    );
}
