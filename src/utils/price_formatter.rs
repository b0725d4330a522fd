/// Price as shown on product cards: `$24`, `$24.5`.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Price with two decimals, as shown on the product detail page.
pub fn format_price_fixed(price: f64) -> String {
    format!("${:.2}", price)
}
