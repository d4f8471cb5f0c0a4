//! HTTP client for the remote book catalogue.

use async_trait::async_trait;
use bigdecimal::RoundingMode;
use reqwest::{Client, StatusCode};

use crate::domain::catalogue::{CatalogueBook, CatalogueLookup};
use crate::domain::ports::CatalogueClient;

/// Placeholder replaced by the book id in the configured URL template.
pub const BOOK_ID_PLACEHOLDER: &str = "{id}";

pub struct HttpCatalogueClient {
    client: Client,
    book_url_template: String,
}

impl HttpCatalogueClient {
    /// # Arguments
    /// * `book_url_template` - e.g. "http://catalogue:8088/books/{id}"
    pub fn new(book_url_template: &str) -> Self {
        Self::with_client(Client::new(), book_url_template)
    }

    pub fn with_client(client: Client, book_url_template: &str) -> Self {
        Self {
            client,
            book_url_template: book_url_template.to_string(),
        }
    }

    fn book_url(&self, book_id: i64) -> String {
        self.book_url_template
            .replace(BOOK_ID_PLACEHOLDER, &book_id.to_string())
    }
}

#[async_trait]
impl CatalogueClient for HttpCatalogueClient {
    async fn lookup(&self, book_id: i64) -> CatalogueLookup {
        let url = self.book_url(book_id);
        log::info!("Getting book with ID {}. Request to {}", book_id, url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Transport error: {}, Book with ID {}", e, book_id);
                return CatalogueLookup::Unreachable;
            }
        };

        let status = response.status();
        if status.is_client_error() {
            if status != StatusCode::NOT_FOUND {
                log::error!("Client Error: {}, Book with ID {}", status, book_id);
            }
            return CatalogueLookup::NotFound;
        }
        if !status.is_success() {
            log::error!("Server Error: {}, Book with ID {}", status, book_id);
            return CatalogueLookup::Unreachable;
        }

        match response.json::<CatalogueBook>().await {
            Ok(mut book) => {
                book.price = book.price.with_scale_round(2, RoundingMode::HalfEven);
                CatalogueLookup::Found(book)
            }
            Err(e) => {
                log::error!("Undecodable catalogue response: {}, Book with ID {}", e, book_id);
                CatalogueLookup::Unreachable
            }
        }
    }
}
