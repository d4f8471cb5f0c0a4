use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// One syntactically valid line of an incoming order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub book_id: i64,
    pub quantity: i32,
}

/// An order request that already passed field validation; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub items: Vec<OrderLineRequest>,
}

/// A validated line with the catalogue price captured at order time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub book_id: i64,
    pub quantity: i32,
    pub captured_unit_price: BigDecimal,
}

/// An order ready to be persisted. The store assigns every identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub lines: Vec<NewOrderLine>,
    pub order_date: DateTime<Utc>,
}

impl NewOrder {
    pub fn build(lines: Vec<NewOrderLine>, now: DateTime<Utc>) -> Self {
        Self {
            lines,
            order_date: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub id: i64,
    pub book_id: i64,
    pub quantity: i32,
    pub captured_unit_price: BigDecimal,
}

/// Persisted aggregate root. Owns its lines; they are stored and removed with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub items: Vec<OrderLine>,
    pub order_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn build_keeps_line_order_and_stamps_given_instant() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap();
        let lines = vec![
            NewOrderLine {
                book_id: 3,
                quantity: 1,
                captured_unit_price: BigDecimal::from_str("5.00").unwrap(),
            },
            NewOrderLine {
                book_id: 1,
                quantity: 4,
                captured_unit_price: BigDecimal::from_str("19.99").unwrap(),
            },
        ];

        let order = NewOrder::build(lines.clone(), now);

        assert_eq!(order.order_date, now);
        assert_eq!(order.lines, lines);
    }
}
