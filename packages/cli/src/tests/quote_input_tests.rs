use crate::quote_input::parse_quote_item;
use pretty_assertions::assert_eq;

#[test]
fn test_parse_item_without_discount() {
    let item = parse_quote_item("Drop Test, 400, 2").unwrap();

    assert_eq!(item.name, "Drop Test");
    assert_eq!(item.unit_price, 400.0);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.discount, 0.0);
}

#[test]
fn test_parse_item_with_percent_discount() {
    let item = parse_quote_item("Salt Spray,1200.50,1,15%").unwrap();
    assert_eq!(item.unit_price, 1200.5);
    assert_eq!(item.discount, 15.0);
}

#[test]
fn test_parse_item_rejects_bad_input() {
    assert!(parse_quote_item("Only a name").is_err());
    assert!(parse_quote_item("Drop,abc,1").is_err());
    assert!(parse_quote_item("Drop,10,-1").is_err());
    assert!(parse_quote_item("Drop,10,1,lots").is_err());
    assert!(parse_quote_item("a,1,1,1,1").is_err());
}
