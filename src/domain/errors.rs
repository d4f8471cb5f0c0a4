use thiserror::Error;

use crate::messages::ErrorCode;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    BusinessRule(BusinessRuleError),
    #[error("Data integrity violation ({kind:?}): {message}")]
    DataIntegrity {
        kind: IntegrityViolation,
        message: String,
    },
    #[error("Invalid order id: {0}")]
    InvalidId(String),
    #[error("Catalogue unreachable while looking up book {0}")]
    CatalogueUnavailable(i64),
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A request that is well formed but breaks a rule about the books it names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusinessRuleError {
    #[error("Book {0} not found")]
    BookNotFound(i64),
    #[error("Book {0} not visible")]
    BookNotVisible(i64),
}

impl BusinessRuleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BusinessRuleError::BookNotFound(_) => ErrorCode::BookNotFound,
            BusinessRuleError::BookNotVisible(_) => ErrorCode::BookNotVisible,
        }
    }

    pub fn book_id(&self) -> i64 {
        match self {
            BusinessRuleError::BookNotFound(id) | BusinessRuleError::BookNotVisible(id) => *id,
        }
    }

    pub fn description(&self) -> String {
        self.code().describe_with(self.book_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityViolation {
    PrimaryKey,
    NotNull,
    Unique,
    Generic,
}

impl IntegrityViolation {
    /// Classifies a storage failure by the markers present in its message.
    /// Checks run in order, so a duplicate primary key wins over "unique".
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("primary key")
            || message.contains("clave primaria")
            || message.contains("_pkey")
        {
            IntegrityViolation::PrimaryKey
        } else if message.contains("null") {
            IntegrityViolation::NotNull
        } else if message.contains("unique") || message.contains("unicidad") {
            IntegrityViolation::Unique
        } else {
            IntegrityViolation::Generic
        }
    }

    pub fn code(self) -> ErrorCode {
        match self {
            IntegrityViolation::PrimaryKey => ErrorCode::DuplicateIdentifier,
            IntegrityViolation::NotNull => ErrorCode::MissingRequiredFields,
            IntegrityViolation::Unique => ErrorCode::DuplicateRecord,
            IntegrityViolation::Generic => ErrorCode::DataIntegrity,
        }
    }
}

impl DomainError {
    pub fn data_integrity(message: impl Into<String>) -> Self {
        let message = message.into();
        DomainError::DataIntegrity {
            kind: IntegrityViolation::classify(&message),
            message,
        }
    }
}
