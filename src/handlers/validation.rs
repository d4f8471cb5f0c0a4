//! Field-level checks on the incoming order body.
//!
//! Unlike the catalogue checks, these collect every violation before
//! answering, so a client can fix all fields in one round trip.

use crate::domain::order::{OrderLineRequest, OrderRequest};
use crate::errors::ErrorDetail;
use crate::messages::ErrorCode;

use super::orders::CreateOrderRequest;

pub const MAX_QUANTITY: i32 = 999;

pub fn validate_order_request(
    body: &CreateOrderRequest,
) -> Result<OrderRequest, Vec<ErrorDetail>> {
    let Some(items) = body.items.as_ref() else {
        return Err(vec![ErrorDetail::field("items", ErrorCode::ItemsRequired)]);
    };
    if items.is_empty() {
        return Err(vec![
            ErrorDetail::field("items", ErrorCode::ItemsRequired),
            ErrorDetail::field("items", ErrorCode::ItemsMinSize),
        ]);
    }

    let mut errors = Vec::new();
    let mut lines = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let book_field = format!("items[{}].bookId", i);
        let book_id = match item.book_id {
            None => {
                errors.push(ErrorDetail::field(&book_field, ErrorCode::BookIdRequired));
                None
            }
            Some(id) if id < 1 => {
                errors.push(ErrorDetail::field(&book_field, ErrorCode::BookIdPositive));
                None
            }
            Some(id) => Some(id),
        };

        let quantity_field = format!("items[{}].quantity", i);
        let quantity = match item.quantity {
            None => {
                errors.push(ErrorDetail::field(&quantity_field, ErrorCode::QuantityRequired));
                None
            }
            Some(q) if q < 1 => {
                errors.push(ErrorDetail::field(&quantity_field, ErrorCode::QuantityMin));
                None
            }
            Some(q) if q > MAX_QUANTITY => {
                errors.push(ErrorDetail::field(&quantity_field, ErrorCode::QuantityMax));
                None
            }
            Some(q) => Some(q),
        };

        if let (Some(book_id), Some(quantity)) = (book_id, quantity) {
            lines.push(OrderLineRequest { book_id, quantity });
        }
    }

    if errors.is_empty() {
        Ok(OrderRequest { items: lines })
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::orders::CreateOrderLineRequest;

    fn body(items: Option<Vec<(Option<i64>, Option<i32>)>>) -> CreateOrderRequest {
        CreateOrderRequest {
            items: items.map(|items| {
                items
                    .into_iter()
                    .map(|(book_id, quantity)| CreateOrderLineRequest { book_id, quantity })
                    .collect()
            }),
        }
    }

    fn codes(details: &[ErrorDetail]) -> Vec<(&str, &str)> {
        details
            .iter()
            .map(|d| (d.element.as_deref().unwrap_or(""), d.code.as_str()))
            .collect()
    }

    #[test]
    fn valid_body_becomes_order_request() {
        let request = validate_order_request(&body(Some(vec![(Some(1), Some(2)), (Some(5), Some(999))])))
            .expect("body is valid");

        assert_eq!(
            request.items,
            vec![
                OrderLineRequest { book_id: 1, quantity: 2 },
                OrderLineRequest { book_id: 5, quantity: 999 },
            ]
        );
    }

    #[test]
    fn absent_items_is_required_error() {
        let details = validate_order_request(&body(None)).unwrap_err();
        assert_eq!(codes(&details), vec![("items", "ORDER-001")]);
    }

    #[test]
    fn empty_items_reports_both_constraints() {
        let details = validate_order_request(&body(Some(vec![]))).unwrap_err();
        assert_eq!(codes(&details), vec![("items", "ORDER-001"), ("items", "ORDER-002")]);
    }

    #[test]
    fn every_bad_field_is_reported() {
        let details = validate_order_request(&body(Some(vec![
            (None, Some(0)),
            (Some(3), Some(1)),
            (Some(-4), None),
            (Some(2), Some(1000)),
        ])))
        .unwrap_err();

        assert_eq!(
            codes(&details),
            vec![
                ("items[0].bookId", "ORDER_ITEM-001"),
                ("items[0].quantity", "ORDER_ITEM-011"),
                ("items[2].bookId", "ORDER_ITEM-002"),
                ("items[2].quantity", "ORDER_ITEM-010"),
                ("items[3].quantity", "ORDER_ITEM-012"),
            ]
        );
    }
}
