// ABOUTME: Parses quote line items given on the command line
// ABOUTME: Accepts "name,unit_price,quantity[,discount]"

use labtrack_quotes::NewQuoteItem;

/// Parse `name,unit_price,quantity[,discount]` into a line item.
///
/// The name may not contain commas. Discount is a percentage and defaults to 0.
pub fn parse_quote_item(input: &str) -> Result<NewQuoteItem, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(format!(
            "Expected name,unit_price,quantity[,discount] but got '{}'",
            input
        ));
    }

    let unit_price = parts[1]
        .parse::<f64>()
        .map_err(|_| format!("Invalid unit price: {}", parts[1]))?;
    let quantity = parts[2]
        .parse::<u32>()
        .map_err(|_| format!("Invalid quantity: {}", parts[2]))?;
    let discount = match parts.get(3) {
        Some(raw) => raw
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| format!("Invalid discount: {}", raw))?,
        None => 0.0,
    };

    Ok(NewQuoteItem {
        name: parts[0].to_string(),
        description: String::new(),
        unit_price,
        quantity,
        discount,
    })
}
