//! Static catalogue of error codes and their human-readable descriptions.
//!
//! Descriptions are resolved when the error is constructed; `{0}` in a
//! template is replaced by the single argument passed to [`ErrorCode::describe_with`].

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ItemsRequired,
    ItemsMinSize,
    BookIdRequired,
    BookIdPositive,
    QuantityRequired,
    QuantityMin,
    QuantityMax,
    BookNotFound,
    BookNotVisible,
    DuplicateIdentifier,
    MissingRequiredFields,
    DataIntegrity,
    DuplicateRecord,
    Unexpected,
    CatalogueUnavailable,
}

impl ErrorCode {
    /// Stable code exposed to API clients.
    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::ItemsRequired => "ORDER-001",
            ErrorCode::ItemsMinSize => "ORDER-002",
            ErrorCode::BookIdRequired => "ORDER_ITEM-001",
            ErrorCode::BookIdPositive => "ORDER_ITEM-002",
            ErrorCode::QuantityRequired => "ORDER_ITEM-010",
            ErrorCode::QuantityMin => "ORDER_ITEM-011",
            ErrorCode::QuantityMax => "ORDER_ITEM-012",
            ErrorCode::BookNotFound => "BOOK_NOT_FOUND",
            ErrorCode::BookNotVisible => "BOOK_NOT_VISIBLE",
            ErrorCode::DuplicateIdentifier => "GENERIC-001",
            ErrorCode::MissingRequiredFields => "GENERIC-002",
            ErrorCode::DataIntegrity => "GENERIC-003",
            ErrorCode::DuplicateRecord => "GENERIC-004",
            ErrorCode::Unexpected => "GENERIC-005",
            ErrorCode::CatalogueUnavailable => "GENERIC-006",
        }
    }

    fn template(self) -> &'static str {
        match self {
            ErrorCode::ItemsRequired => "The 'items' parameter is required and cannot be empty",
            ErrorCode::ItemsMinSize => "The order must contain at least one item",
            ErrorCode::BookIdRequired => "The 'bookId' parameter is required",
            ErrorCode::BookIdPositive => "The 'bookId' parameter must be greater than 0",
            ErrorCode::QuantityRequired => "The 'quantity' parameter is required",
            ErrorCode::QuantityMin => "The 'quantity' parameter must be at least 1",
            ErrorCode::QuantityMax => "The 'quantity' parameter cannot exceed 999 units",
            ErrorCode::BookNotFound => "The book with ID {0} does not exist in the catalogue",
            ErrorCode::BookNotVisible => "The book with ID {0} is not available for sale",
            ErrorCode::DuplicateIdentifier => "A record with the same identifier already exists",
            ErrorCode::MissingRequiredFields => "Required fields are missing",
            ErrorCode::DataIntegrity => "Data integrity error",
            ErrorCode::DuplicateRecord => "The record already exists in the system",
            ErrorCode::Unexpected => {
                "An unexpected error has occurred. Please contact the administrator"
            }
            ErrorCode::CatalogueUnavailable => {
                "The book catalogue is temporarily unavailable. Please retry later"
            }
        }
    }

    pub fn describe(self) -> String {
        self.template().to_string()
    }

    pub fn describe_with(self, arg: impl fmt::Display) -> String {
        self.template().replace("{0}", &arg.to_string())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
