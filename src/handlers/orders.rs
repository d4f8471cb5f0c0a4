use actix_web::{web, HttpRequest, HttpResponse};
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{Order, OrderLine};
use crate::errors::{ApiError, AppError, ErrorResponse};

use super::validation::validate_order_request;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Fields are optional so that missing values surface as validation details
/// instead of a generic parse failure.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderLineRequest {
    #[schema(example = 1)]
    pub book_id: Option<i64>,
    /// Between 1 and 999.
    #[schema(example = 2)]
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub items: Option<Vec<CreateOrderLineRequest>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub id: i64,
    pub book_id: i64,
    pub quantity: i32,
    #[serde(serialize_with = "serialize_price")]
    #[schema(value_type = f64, example = 19.99)]
    pub captured_unit_price: BigDecimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub items: Vec<OrderLineResponse>,
    /// RFC 3339, UTC.
    pub order_date: String,
}

fn serialize_price<S: Serializer>(price: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    match price.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => Err(serde::ser::Error::custom(format!(
            "price {} out of range",
            price
        ))),
    }
}

fn format_order_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl From<OrderLine> for OrderLineResponse {
    fn from(l: OrderLine) -> Self {
        Self {
            id: l.id,
            book_id: l.book_id,
            quantity: l.quantity,
            captured_unit_price: l.captured_unit_price,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            order_date: format_order_date(&o.order_date),
            items: o.items.into_iter().map(OrderLineResponse::from).collect(),
        }
    }
}

/// Body extractor settings: malformed JSON is answered with the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        AppError::MalformedBody(err.to_string()).at(req).into()
    })
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Validates the body, checks every book against the catalogue (existence and
/// visibility), captures current prices and stores the order with its lines.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed body or field validation failure (ORDER-001, ORDER-002, ORDER_ITEM-001, ORDER_ITEM-002, ORDER_ITEM-010, ORDER_ITEM-011, ORDER_ITEM-012)", body = ErrorResponse),
        (status = 409, description = "Data integrity violation (GENERIC-001 to GENERIC-004)", body = ErrorResponse),
        (status = 422, description = "Book does not exist or is not for sale (BOOK_NOT_FOUND, BOOK_NOT_VISIBLE)", body = ErrorResponse),
        (status = 500, description = "Unexpected error (GENERIC-005)", body = ErrorResponse),
        (status = 503, description = "Catalogue unreachable (GENERIC-006)", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn create_order(
    req: HttpRequest,
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let request =
        validate_order_request(&body).map_err(|details| AppError::Validation(details).at(&req))?;

    let order = service
        .create_order(request)
        .await
        .map_err(|e| AppError::from(e).at(&req))?;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Unexpected error (GENERIC-005)", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn get_order(
    req: HttpRequest,
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let order = service
        .get_order(&path)
        .await
        .map_err(|e| AppError::from(e).at(&req))?;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound.at(&req)),
    }
}

/// GET /orders
///
/// Returns every order with its lines; an empty array when there are none.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders", body = Vec<OrderResponse>),
        (status = 500, description = "Unexpected error (GENERIC-005)", body = ErrorResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    req: HttpRequest,
    service: web::Data<OrderService>,
) -> Result<HttpResponse, ApiError> {
    let orders = service
        .get_orders()
        .await
        .map_err(|e| AppError::from(e).at(&req))?;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn order_response_uses_camel_case_and_numeric_price() {
        let order = Order {
            id: 7,
            order_date: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            items: vec![OrderLine {
                id: 11,
                book_id: 1,
                quantity: 2,
                captured_unit_price: BigDecimal::from_str("19.99").unwrap(),
            }],
        };

        let json = serde_json::to_value(OrderResponse::from(order)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "items": [{ "id": 11, "bookId": 1, "quantity": 2, "capturedUnitPrice": 19.99 }],
                "orderDate": "2024-01-02T03:04:05Z"
            })
        );
    }
}
