use console::style;
use procure_commerce::{Currency, Product};

use crate::messages;
use crate::output::{decimal_price, Output};

const WIDTHS: [usize; 4] = [28, 10, 12, 24];

/// Product grid as a table. Specials show the list price struck through.
pub fn render_products(output: &Output, products: &[Product], currency: Currency) {
    if output.is_json() {
        output.json(&products);
        return;
    }

    if products.is_empty() {
        output.info(messages::NO_PRODUCTS);
        return;
    }

    output.table_row(&["商品", "単位", "価格", ""], &WIDTHS);
    output.table_rule(&WIDTHS);
    for product in products {
        let effective = decimal_price(product.effective_price, currency);
        let (price, note) = if product.is_special {
            (
                style(effective).red().bold().to_string(),
                format!(
                    "{} {}",
                    style(decimal_price(product.unit_price, currency)).dim().strikethrough(),
                    style(messages::SPECIAL_PRICE).red()
                ),
            )
        } else {
            (decimal_price(product.unit_price, currency), String::new())
        };
        output.table_row(&[&product.name, &product.unit, &price, &note], &WIDTHS);
    }
}

/// One-line label for pickers.
pub fn product_label(product: &Product, currency: Currency) -> String {
    let unit = if product.unit.is_empty() {
        String::new()
    } else {
        format!(" / {}", product.unit)
    };
    if product.is_special {
        format!(
            "{}  {}{} ({} {})",
            product.name,
            decimal_price(product.effective_price, currency),
            unit,
            messages::SPECIAL_PRICE,
            decimal_price(product.unit_price, currency),
        )
    } else {
        format!(
            "{}  {}{}",
            product.name,
            decimal_price(product.unit_price, currency),
            unit
        )
    }
}
