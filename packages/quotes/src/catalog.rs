// ABOUTME: Seeded quote catalog and lookups
// ABOUTME: Five sample quotes, the customer directory used for new quotes, and lookups by id or customer

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use crate::types::{Customer, ProductQuote, QuoteItem, QuoteStatus};
use crate::{QuoteError, QuoteResult};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn line(
    id: &str,
    name: &str,
    description: &str,
    unit_price: f64,
    quantity: u32,
    discount: Option<f64>,
    total: f64,
) -> QuoteItem {
    QuoteItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        unit_price,
        quantity,
        discount,
        total,
    }
}

fn strength_testing() -> QuoteItem {
    line(
        "item-strength",
        "Material Strength Testing",
        "Comprehensive tensile and compression testing for construction materials",
        1200.0,
        1,
        None,
        1200.0,
    )
}

fn chemical_analysis() -> QuoteItem {
    line(
        "item-chemical",
        "Chemical Analysis Package",
        "Full spectrum analysis of material composition",
        850.0,
        2,
        Some(10.0),
        1530.0,
    )
}

fn durability_assessment() -> QuoteItem {
    line(
        "item-durability",
        "Durability Assessment",
        "Environmental exposure and aging simulation tests",
        1500.0,
        1,
        None,
        1500.0,
    )
}

#[allow(clippy::too_many_arguments)]
fn quote(
    id: &str,
    customer: (&str, &str, &str),
    items: Vec<QuoteItem>,
    money: (f64, Option<f64>, f64, f64),
    status: QuoteStatus,
    notes: Option<&str>,
    valid_until: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> ProductQuote {
    let (customer_id, customer_name, customer_email) = customer;
    let (subtotal, discount_total, tax, total) = money;
    ProductQuote {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        customer_name: customer_name.to_string(),
        customer_email: customer_email.to_string(),
        items,
        subtotal,
        discount_total,
        tax,
        total,
        status,
        notes: notes.map(str::to_string),
        valid_until,
        created_at,
        updated_at,
        created_by: "sales-1".to_string(),
    }
}

/// The sample quotes shown to sales. Money fields are stored snapshots and do
/// not all match the 8% tax rule.
pub fn mock_quotes() -> Vec<ProductQuote> {
    const ACME: (&str, &str, &str) = (
        "customer-1",
        "Acme Construction",
        "contact@acmeconstruction.com",
    );

    vec![
        quote(
            "QT-2023-001",
            ACME,
            vec![strength_testing(), chemical_analysis(), durability_assessment()],
            (4230.0, Some(170.0), 406.0, 4466.0),
            QuoteStatus::Sent,
            Some("Quote valid for 30 days. Testing will begin within 5 business days of acceptance."),
            date(2023, 12, 31),
            date(2023, 11, 15),
            date(2023, 11, 15),
        ),
        quote(
            "QT-2023-002",
            (
                "customer-2",
                "BuildRight Materials",
                "procurement@buildright.com",
            ),
            vec![strength_testing(), durability_assessment()],
            (2700.0, None, 270.0, 2970.0),
            QuoteStatus::Accepted,
            None,
            date(2023, 12, 15),
            date(2023, 10, 30),
            date(2023, 11, 2),
        ),
        quote(
            "QT-2023-003",
            ("customer-3", "EcoSustain Products", "lab@ecosustain.org"),
            vec![
                line(
                    "item-eco-compliance",
                    "Environmental Compliance Testing",
                    "Testing for eco-certification standards",
                    2200.0,
                    1,
                    None,
                    2200.0,
                ),
                line(
                    "item-biodegradability",
                    "Biodegradability Analysis",
                    "Complete breakdown and decomposition analysis",
                    1800.0,
                    1,
                    Some(15.0),
                    1530.0,
                ),
            ],
            (3730.0, Some(270.0), 346.0, 3806.0),
            QuoteStatus::Draft,
            Some("Special handling required for organic materials."),
            date(2024, 1, 15),
            date(2023, 11, 10),
            date(2023, 11, 10),
        ),
        quote(
            "QT-2023-004",
            ACME,
            vec![line(
                "item-structural",
                "Structural Integrity Testing",
                "Load-bearing tests for structural components",
                3200.0,
                1,
                None,
                3200.0,
            )],
            (3200.0, None, 320.0, 3520.0),
            QuoteStatus::Viewed,
            None,
            date(2023, 12, 25),
            date(2023, 11, 5),
            date(2023, 11, 7),
        ),
        quote(
            "QT-2023-005",
            (
                "customer-4",
                "Innovative Materials Inc",
                "research@innomaterials.com",
            ),
            vec![
                line(
                    "item-polymer",
                    "Advanced Polymer Testing",
                    "Comprehensive analysis of new polymer formulations",
                    4500.0,
                    1,
                    None,
                    4500.0,
                ),
                line(
                    "item-thermal",
                    "Thermal Stability Assessment",
                    "Temperature resistance and reaction testing",
                    2800.0,
                    1,
                    None,
                    2800.0,
                ),
            ],
            (7300.0, Some(500.0), 680.0, 7480.0),
            QuoteStatus::Expired,
            None,
            date(2023, 10, 31),
            date(2023, 9, 15),
            date(2023, 9, 15),
        ),
    ]
}

/// Customers new quotes can be addressed to
pub fn mock_customers() -> Vec<Customer> {
    [
        ("customer-1", "Casey Customer", "customer@example.com"),
        ("customer-2", "Acme Inc.", "acme@example.com"),
        ("customer-3", "TechCorp", "tech@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
}

/// In-memory quote collection
#[derive(Debug, Clone, Default)]
pub struct QuoteCatalog {
    quotes: Vec<ProductQuote>,
    customers: Vec<Customer>,
}

impl QuoteCatalog {
    pub fn new(quotes: Vec<ProductQuote>, customers: Vec<Customer>) -> Self {
        Self { quotes, customers }
    }

    /// Catalog holding the sample quotes and customers
    pub fn seeded() -> Self {
        Self::new(mock_quotes(), mock_customers())
    }

    pub fn list(&self) -> &[ProductQuote] {
        &self.quotes
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get_quote_by_id(&self, id: &str) -> Option<&ProductQuote> {
        debug!("Looking up quote {}", id);
        self.quotes.iter().find(|quote| quote.id == id)
    }

    pub fn get_quotes_by_customer(&self, customer_id: &str) -> Vec<&ProductQuote> {
        self.quotes
            .iter()
            .filter(|quote| quote.customer_id == customer_id)
            .collect()
    }

    pub fn add(&mut self, quote: ProductQuote) -> QuoteResult<()> {
        if self.get_quote_by_id(&quote.id).is_some() {
            return Err(QuoteError::DuplicateId(quote.id));
        }
        info!("Added quote {} for {}", quote.id, quote.customer_name);
        self.quotes.push(quote);
        Ok(())
    }

    /// Hard lookup for callers that treat a missing quote as an error
    pub fn require(&self, id: &str) -> QuoteResult<&ProductQuote> {
        self.get_quote_by_id(id)
            .ok_or_else(|| QuoteError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{build_quote, NewQuote, NewQuoteItem};
    use chrono::TimeZone;
    use labtrack_core::FixedClock;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_catalog() {
        let catalog = QuoteCatalog::seeded();
        let ids: Vec<&str> = catalog.list().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["QT-2023-001", "QT-2023-002", "QT-2023-003", "QT-2023-004", "QT-2023-005"]
        );
        assert_eq!(catalog.customers().len(), 3);
    }

    #[test]
    fn test_get_quote_by_id() {
        let catalog = QuoteCatalog::seeded();
        let quote = catalog.get_quote_by_id("QT-2023-003").unwrap();

        assert_eq!(quote.status, QuoteStatus::Draft);
        assert_eq!(quote.items.len(), 2);
        assert_eq!(quote.discount_total, Some(270.0));
        assert!(catalog.get_quote_by_id("QT-1999-001").is_none());
        assert_eq!(
            catalog.require("QT-1999-001").unwrap_err(),
            QuoteError::NotFound("QT-1999-001".to_string())
        );
    }

    #[test]
    fn test_get_quotes_by_customer() {
        let catalog = QuoteCatalog::seeded();
        let acme: Vec<&str> = catalog
            .get_quotes_by_customer("customer-1")
            .into_iter()
            .map(|q| q.id.as_str())
            .collect();

        assert_eq!(acme, vec!["QT-2023-001", "QT-2023-004"]);
        assert!(catalog.get_quotes_by_customer("customer-9").is_empty());
    }

    #[test]
    fn test_stored_money_is_not_recomputed() {
        let catalog = QuoteCatalog::seeded();
        let quote = catalog.get_quote_by_id("QT-2023-002").unwrap();

        assert_eq!(quote.tax, 270.0);
        assert_ne!(quote.tax, quote.subtotal * crate::pricing::TAX_RATE);
    }

    #[test]
    fn test_add_built_quote() {
        let mut catalog = QuoteCatalog::seeded();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let new = NewQuote {
            customer_id: "customer-3".to_string(),
            items: vec![NewQuoteItem {
                name: "Drop Test".to_string(),
                description: String::new(),
                unit_price: 400.0,
                quantity: 1,
                discount: 0.0,
            }],
            notes: None,
            valid_days: 14,
            send: false,
            created_by: "sales-1".to_string(),
        };
        let quote = build_quote(new, catalog.customers(), &clock).unwrap();
        let id = quote.id.clone();

        catalog.add(quote.clone()).unwrap();
        assert_eq!(catalog.list().len(), 6);
        assert_eq!(catalog.get_quotes_by_customer("customer-3").len(), 2);
        assert_eq!(catalog.add(quote), Err(QuoteError::DuplicateId(id)));
    }

    #[test]
    fn test_quote_json_layout() {
        let catalog = QuoteCatalog::seeded();
        let value = serde_json::to_value(catalog.get_quote_by_id("QT-2023-002").unwrap()).unwrap();

        assert_eq!(value["customerEmail"], "procurement@buildright.com");
        assert_eq!(value["status"], "accepted");
        assert_eq!(value["validUntil"], "2023-12-15T00:00:00Z");
        assert!(value.get("discountTotal").is_none());
        assert_eq!(value["items"][0]["unitPrice"], 1200.0);
    }
}
