// ABOUTME: Sales quotes for the laboratory portal
// ABOUTME: Quote and line-item types, quote-building arithmetic and the seeded catalog

pub mod catalog;
pub mod pricing;
pub mod types;

pub use catalog::{mock_customers, mock_quotes, QuoteCatalog};
pub use pricing::{
    build_quote, calculate_totals, generate_quote_id, line_total, NewQuote, NewQuoteItem,
    QuoteTotals, DEFAULT_VALID_DAYS, TAX_RATE,
};
pub use types::{Customer, ProductQuote, QuoteItem, QuoteStatus};

use thiserror::Error;

/// Quote errors
#[derive(Error, Debug, PartialEq)]
pub enum QuoteError {
    #[error("A quote needs at least one line item")]
    NoItems,
    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),
    #[error("Quote not found: {0}")]
    NotFound(String),
    #[error("Quote {0} already exists")]
    DuplicateId(String),
    #[error("Validation errors: {0}")]
    Validation(#[from] labtrack_core::ValidationErrors),
}

pub type QuoteResult<T> = Result<T, QuoteError>;
