use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Deserialize;

/// Snapshot of a catalogue book, valid only at the moment it was fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueBook {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    pub price: BigDecimal,
    /// Books without an explicit flag are not for sale.
    #[serde(default)]
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueLookup {
    Found(CatalogueBook),
    NotFound,
    Unreachable,
}
