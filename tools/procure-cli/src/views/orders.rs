use procure_commerce::{Currency, OrderSummary};

use crate::messages;
use crate::output::{decimal_price, status_badge, Output};

const WIDTHS: [usize; 4] = [12, 12, 12, 12];

/// Order list table. IDs are shortened to eight characters.
pub fn render_orders(output: &Output, orders: &[OrderSummary], currency: Currency) {
    if output.is_json() {
        output.json(&orders);
        return;
    }

    if orders.is_empty() {
        output.info(messages::NO_ORDERS);
        return;
    }

    output.table_row(&["注文ID", "ステータス", "金額", "作成日"], &WIDTHS);
    output.table_rule(&WIDTHS);
    for order in orders {
        output.table_row(
            &[
                &order.id.short(8),
                &status_badge(&order.status),
                &decimal_price(order.total_amount, currency),
                &order.created_date(),
            ],
            &WIDTHS,
        );
    }
    output.info("");
    output.info(&format!("{} 件", orders.len()));
}

/// Opaque order detail: known fields first, then the raw document.
pub fn render_order(output: &Output, order: &serde_json::Value, currency: Currency) {
    if output.is_json() {
        output.json(order);
        return;
    }

    let field = |key: &str| order.get(key).and_then(serde_json::Value::as_str);

    output.header(&format!("注文 {}", field("id").unwrap_or("-")));
    if let Some(status) = field("status") {
        output.kv("ステータス", &status_badge(status));
    }
    if let Some(total) = order.get("totalAmount").and_then(serde_json::Value::as_f64) {
        output.kv("金額", &decimal_price(total, currency));
    }
    if let Some(created) = field("createdAt") {
        output.kv("作成日", created);
    }
    if let Ok(pretty) = serde_json::to_string_pretty(order) {
        output.info("");
        for line in pretty.lines() {
            println!("  {}", line);
        }
    }
}
