use procure_commerce::{Cart, CartItem, Currency};

use crate::messages;
use crate::output::{price, Output};

const WIDTHS: [usize; 4] = [28, 10, 6, 12];

/// Cart lines, discount, total and the chosen references.
pub fn render_cart(output: &Output, cart: &Cart, currency: Currency) {
    if output.is_json() {
        output.json(&serde_json::json!({
            "cart": cart,
            "total": cart.total(),
        }));
        return;
    }

    output.header(&format!("カート ({})", cart.line_count()));
    if cart.is_empty() {
        output.info(messages::CART_EMPTY);
        return;
    }

    output.table_row(&["商品", "単価", "数量", "小計"], &WIDTHS);
    output.table_rule(&WIDTHS);
    for item in cart.items() {
        output.table_row(
            &[
                item.product_name(),
                &price(item.unit_price(), currency),
                &item.quantity().to_string(),
                &price(item.subtotal(), currency),
            ],
            &WIDTHS,
        );
    }
    output.table_rule(&WIDTHS);

    if !cart.discount_amount().is_zero() {
        output.kv("値引き", &price(cart.discount_amount(), currency));
    }
    output.kv("合計", &price(cart.total(), currency));
    if let Some(farmer) = cart.farmer_company_id() {
        output.kv("農家", farmer.as_str());
    }
    match cart.ship_to_id() {
        Some(ship_to) => output.kv("配送先", ship_to.as_str()),
        None => output.kv("配送先", "-"),
    }
}

/// One-line label for pickers.
pub fn cart_line_label(item: &CartItem, currency: Currency) -> String {
    format!(
        "{} × {}  {}",
        item.product_name(),
        item.quantity(),
        price(item.subtotal(), currency)
    )
}
