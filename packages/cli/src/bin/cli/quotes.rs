use clap::Subcommand;
use colored::*;
use labtrack_cli::quote_input::parse_quote_item;
use labtrack_cli::render::{format_money, quote_items_table, quotes_table};
use labtrack_core::{format_date, SystemClock};
use labtrack_quotes::{
    build_quote, NewQuote, NewQuoteItem, ProductQuote, QuoteCatalog, QuoteStatus,
    DEFAULT_VALID_DAYS,
};
use labtrack_requests::Role;

#[derive(Subcommand)]
pub enum QuotesCommands {
    /// List quotes
    List {
        /// Only quotes for this customer ID
        #[arg(short, long)]
        customer: Option<String>,
    },
    /// Show quote details
    Show {
        /// Quote ID to show
        id: String,
    },
    /// Price a new quote and print it (quotes are not persisted)
    New {
        /// Customer ID (customer-1, customer-2 or customer-3)
        #[arg(short, long)]
        customer: String,
        /// Line item as "name,unit_price,quantity[,discount]"; repeatable
        #[arg(short, long = "item", value_parser = parse_quote_item, required = true)]
        items: Vec<NewQuoteItem>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, default_value_t = DEFAULT_VALID_DAYS)]
        valid_days: u32,
        /// Mark the quote as sent instead of draft
        #[arg(long)]
        send: bool,
    },
}

pub fn handle_quotes_command(command: QuotesCommands) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = QuoteCatalog::seeded();

    match command {
        QuotesCommands::List { customer } => list_quotes(&catalog, customer.as_deref()),
        QuotesCommands::Show { id } => {
            let quote = catalog.require(&id)?;
            print_quote(quote);
            Ok(())
        }
        QuotesCommands::New {
            customer,
            items,
            notes,
            valid_days,
            send,
        } => {
            let new = NewQuote {
                customer_id: customer,
                items,
                notes,
                valid_days,
                send,
                created_by: Role::Sales.user_id().to_string(),
            };
            let quote = build_quote(new, catalog.customers(), &SystemClock)?;
            println!("{}", format!("Quote {} priced", quote.id).green());
            println!();
            print_quote(&quote);
            Ok(())
        }
    }
}

fn list_quotes(
    catalog: &QuoteCatalog,
    customer: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let quotes: Vec<&ProductQuote> = match customer {
        Some(customer_id) => catalog.get_quotes_by_customer(customer_id),
        None => catalog.list().iter().collect(),
    };

    if quotes.is_empty() {
        println!("{}", "No quotes found".yellow());
        return Ok(());
    }

    println!("{}", "Quotes".blue().bold());
    println!();
    println!("{}", quotes_table(&quotes));
    println!("Total: {} quotes", quotes.len().to_string().cyan());
    Ok(())
}

fn print_quote(quote: &ProductQuote) {
    println!("{}", format!("Quote - {}", quote.id).blue().bold());
    println!();
    println!(
        "{:<15} {} <{}>",
        "Customer:".cyan(),
        quote.customer_name,
        quote.customer_email
    );

    let status_colored = match quote.status {
        QuoteStatus::Accepted => quote.status.to_string().green(),
        QuoteStatus::Rejected | QuoteStatus::Expired => quote.status.to_string().red(),
        QuoteStatus::Draft => quote.status.to_string().dimmed(),
        QuoteStatus::Sent | QuoteStatus::Viewed => quote.status.to_string().yellow(),
    };
    println!("{:<15} {}", "Status:".cyan(), status_colored);
    println!("{:<15} {}", "Created:".cyan(), format_date(&quote.created_at));
    println!("{:<15} {}", "Valid until:".cyan(), format_date(&quote.valid_until));
    println!("{:<15} {}", "Created by:".cyan(), quote.created_by);
    println!();
    println!("{}", quote_items_table(quote));
    println!("{:<15} {}", "Subtotal:".cyan(), format_money(quote.subtotal));
    if let Some(discount) = quote.discount_total {
        println!("{:<15} -{}", "Discounts:".cyan(), format_money(discount));
    }
    println!("{:<15} {}", "Tax:".cyan(), format_money(quote.tax));
    println!("{:<15} {}", "Total:".cyan(), format_money(quote.total).bold());

    if let Some(notes) = &quote.notes {
        println!();
        println!("{:<15} {}", "Notes:".cyan(), notes);
    }
}
