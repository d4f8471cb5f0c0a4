use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{Order, OrderLine};
use crate::schema::{order_lines, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_lines)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderLineRow {
    pub id: i64,
    pub order_id: i64,
    pub book_id: i64,
    pub quantity: i32,
    pub captured_unit_price: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_lines)]
pub struct NewOrderLineRow {
    pub order_id: i64,
    pub book_id: i64,
    pub quantity: i32,
    pub captured_unit_price: BigDecimal,
}

impl OrderRow {
    pub fn into_order(self, lines: Vec<OrderLineRow>) -> Order {
        Order {
            id: self.id,
            order_date: self.order_date,
            items: lines
                .into_iter()
                .map(|l| OrderLine {
                    id: l.id,
                    book_id: l.book_id,
                    quantity: l.quantity,
                    captured_unit_price: l.captured_unit_price,
                })
                .collect(),
        }
    }
}
