//! Order list and status transition commands.

use anyhow::{Context as _, Result};
use procure_commerce::OrderId;
use serde_json::Value;

use super::{OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::messages;
use crate::views;

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(OrdersCommand::List) | None => list_orders(&args, ctx).await,
        Some(OrdersCommand::Show { id }) => show_order(&id, ctx).await,
        Some(OrdersCommand::Confirm { id }) => transition(&id, Transition::Confirm, ctx).await,
        Some(OrdersCommand::Ship { id, body }) => {
            let shipment = parse_shipment(&body)?;
            transition(&id, Transition::Ship(shipment), ctx).await
        }
        Some(OrdersCommand::Complete { id }) => transition(&id, Transition::Complete, ctx).await,
    }
}

async fn list_orders(args: &OrdersArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;

    let spinner = ctx.output.spinner(messages::LOADING);
    let result = api.orders(args.status).await;
    spinner.finish_and_clear();
    let orders = result.context(messages::LOAD_FAILED)?;

    if !ctx.output.is_json() {
        match args.status {
            Some(status) => ctx.output.header(&format!("注文一覧 ({})", status.label())),
            None => ctx.output.header("注文一覧"),
        }
    }
    views::render_orders(&ctx.output, &orders, ctx.currency());
    Ok(())
}

async fn show_order(id: &str, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;

    let spinner = ctx.output.spinner(messages::LOADING);
    let result = api.order(&OrderId::new(id)).await;
    spinner.finish_and_clear();
    let order = result.context(messages::LOAD_FAILED)?;

    views::render_order(&ctx.output, &order, ctx.currency());
    Ok(())
}

enum Transition {
    Confirm,
    Ship(Value),
    Complete,
}

impl Transition {
    fn done_message(&self) -> &'static str {
        match self {
            Transition::Confirm => "注文を確定しました",
            Transition::Ship(_) => "注文を出荷済みにしました",
            Transition::Complete => "注文を完了しました",
        }
    }
}

async fn transition(id: &str, transition: Transition, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let order_id = OrderId::new(id);

    let spinner = ctx.output.spinner(messages::PROCESSING);
    let result = match &transition {
        Transition::Confirm => api.confirm_order(&order_id).await,
        Transition::Ship(shipment) => api.ship_order(&order_id, shipment).await,
        Transition::Complete => api.complete_order(&order_id).await,
    };
    spinner.finish_and_clear();
    let body = result.with_context(|| format!("注文 {} の更新に失敗しました", order_id))?;

    if ctx.output.is_json() {
        ctx.output.json(&body);
    } else {
        ctx.output
            .success(&format!("{}: {}", transition.done_message(), order_id));
    }
    Ok(())
}

/// The `--body` of `orders ship` must be a JSON object.
fn parse_shipment(raw: &str) -> Result<Value> {
    let value: Value =
        serde_json::from_str(raw).context("Shipment body must be valid JSON")?;
    if !value.is_object() {
        anyhow::bail!("Shipment body must be a JSON object");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shipment_object() {
        let value = parse_shipment(r#"{"trackingNumber":"TRK-1"}"#).unwrap();
        assert_eq!(value["trackingNumber"], "TRK-1");
        assert_eq!(parse_shipment("{}").unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_parse_shipment_rejects_non_objects() {
        assert!(parse_shipment("[1,2]").is_err());
        assert!(parse_shipment("not json").is_err());
    }
}
