// ABOUTME: Quote arithmetic and quote construction
// ABOUTME: Line totals with percentage discounts, 8% tax, and new quotes stamped from a clock

use chrono::Duration;
use labtrack_core::{require_non_empty, require_positive, Clock, ValidationError, ValidationErrors};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{debug, info};

use crate::types::{Customer, ProductQuote, QuoteItem, QuoteStatus};
use crate::{QuoteError, QuoteResult};

/// Sales tax applied to the discounted subtotal
pub const TAX_RATE: f64 = 0.08;

/// Default validity window for new quotes, in days
pub const DEFAULT_VALID_DAYS: u32 = 30;

/// A line item as entered, before pricing
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuoteItem {
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub quantity: u32,
    /// Percentage; zero means no discount
    pub discount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewQuote {
    pub customer_id: String,
    pub items: Vec<NewQuoteItem>,
    pub notes: Option<String>,
    pub valid_days: u32,
    /// `true` creates the quote as `sent`, otherwise `draft`
    pub send: bool,
    pub created_by: String,
}

/// Money totals for a set of line items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteTotals {
    pub subtotal: f64,
    pub discount_total: Option<f64>,
    pub tax: f64,
    pub total: f64,
}

pub fn line_total(unit_price: f64, quantity: u32, discount: f64) -> f64 {
    quantity as f64 * unit_price * (1.0 - discount / 100.0)
}

/// Sum stored line totals, collect discounts and apply tax.
///
/// The subtotal is the sum of each item's stored `total`, so a hand-edited
/// line total flows through unchanged.
pub fn calculate_totals(items: &[QuoteItem]) -> QuoteTotals {
    let subtotal: f64 = items.iter().map(|item| item.total).sum();
    let discount_total: f64 = items
        .iter()
        .filter_map(|item| {
            item.discount
                .map(|discount| item.unit_price * item.quantity as f64 * discount / 100.0)
        })
        .sum();
    let tax = subtotal * TAX_RATE;

    QuoteTotals {
        subtotal,
        discount_total: (discount_total > 0.0).then_some(discount_total),
        tax,
        total: subtotal + tax,
    }
}

/// `Q` followed by a random number in `1000..=9999`
pub fn generate_quote_id() -> String {
    format!("Q{}", rand::thread_rng().gen_range(1000..10000))
}

fn generate_item_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

fn validate_items(items: &[NewQuoteItem]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for (index, item) in items.iter().enumerate() {
        require_non_empty(&mut errors, &format!("items[{}].name", index), &item.name, "Item name");
        require_positive(
            &mut errors,
            &format!("items[{}].quantity", index),
            item.quantity,
            "Quantity",
        );
        if !item.unit_price.is_finite() || item.unit_price < 0.0 {
            errors.push(ValidationError::new(
                format!("items[{}].unitPrice", index),
                "Unit price must be zero or more",
            ));
        }
        if !(0.0..=100.0).contains(&item.discount) {
            errors.push(ValidationError::new(
                format!("items[{}].discount", index),
                "Discount must be between 0 and 100",
            ));
        }
    }
    errors.into_result()
}

fn price_item(item: NewQuoteItem) -> QuoteItem {
    let total = line_total(item.unit_price, item.quantity, item.discount);
    QuoteItem {
        id: generate_item_id(),
        name: item.name,
        description: item.description,
        unit_price: item.unit_price,
        quantity: item.quantity,
        discount: (item.discount > 0.0).then_some(item.discount),
        total,
    }
}

/// Price `new` for one of `customers` and stamp it with `clock`.
pub fn build_quote(
    new: NewQuote,
    customers: &[Customer],
    clock: &dyn Clock,
) -> QuoteResult<ProductQuote> {
    if new.items.is_empty() {
        return Err(QuoteError::NoItems);
    }
    let customer = customers
        .iter()
        .find(|customer| customer.id == new.customer_id)
        .ok_or_else(|| QuoteError::UnknownCustomer(new.customer_id.clone()))?;
    validate_items(&new.items)?;

    let now = clock.now();
    let valid_until = now
        .checked_add_signed(Duration::days(i64::from(new.valid_days)))
        .ok_or_else(|| {
            ValidationErrors(vec![ValidationError::new(
                "validDays",
                "Validity period is too long",
            )])
        })?;

    let items: Vec<QuoteItem> = new.items.into_iter().map(price_item).collect();
    let totals = calculate_totals(&items);
    let status = if new.send {
        QuoteStatus::Sent
    } else {
        QuoteStatus::Draft
    };

    let quote = ProductQuote {
        id: generate_quote_id(),
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        customer_email: customer.email.clone(),
        items,
        subtotal: totals.subtotal,
        discount_total: totals.discount_total,
        tax: totals.tax,
        total: totals.total,
        status,
        notes: new.notes.filter(|notes| !notes.trim().is_empty()),
        valid_until,
        created_at: now,
        updated_at: now,
        created_by: new.created_by,
    };

    debug!("Priced {} line items for {}", quote.items.len(), quote.customer_id);
    info!("Built quote {} ({}) for {}", quote.id, quote.status, quote.customer_name);
    Ok(quote)
}
