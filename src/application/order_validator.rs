//! Business-rule checks applied to each requested line before an order exists.

use bigdecimal::RoundingMode;

use crate::domain::catalogue::CatalogueLookup;
use crate::domain::errors::{BusinessRuleError, DomainError};
use crate::domain::order::{NewOrderLine, OrderLineRequest};
use crate::domain::ports::CatalogueClient;

/// Looks every line up in the catalogue, in request order, and captures its
/// current price.
///
/// Stops at the first line that fails: later lines are never looked up and no
/// partial result is returned.
pub async fn validate_lines(
    catalogue: &dyn CatalogueClient,
    items: &[OrderLineRequest],
) -> Result<Vec<NewOrderLine>, DomainError> {
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let book = match catalogue.lookup(item.book_id).await {
            CatalogueLookup::Found(book) => book,
            CatalogueLookup::NotFound => {
                log::error!("Book with ID {} not found", item.book_id);
                return Err(DomainError::BusinessRule(BusinessRuleError::BookNotFound(
                    item.book_id,
                )));
            }
            CatalogueLookup::Unreachable => {
                return Err(DomainError::CatalogueUnavailable(item.book_id));
            }
        };

        if !book.visible {
            log::error!(
                "Book '{}' (ID: {}) is not visible",
                book.title.as_deref().unwrap_or_default(),
                item.book_id
            );
            return Err(DomainError::BusinessRule(BusinessRuleError::BookNotVisible(
                item.book_id,
            )));
        }

        let captured_unit_price = book.price.with_scale_round(2, RoundingMode::HalfEven);
        log::info!(
            "Added item: book {} quantity {} price {}",
            item.book_id,
            item.quantity,
            captured_unit_price
        );
        lines.push(NewOrderLine {
            book_id: item.book_id,
            quantity: item.quantity,
            captured_unit_price,
        });
    }

    Ok(lines)
}
