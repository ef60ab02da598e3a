//! Delivery address commands.

use anyhow::{bail, Context as _, Result};
use procure_commerce::{NewShipTo, ShipToId, ShipToUpdate};

use super::{ShipTosArgs, ShipTosCommand};
use crate::context::Context;
use crate::messages;
use crate::views;

/// Run the ship-tos command.
pub async fn run(args: ShipTosArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(ShipTosCommand::List) | None => list_ship_tos(ctx).await,
        Some(ShipTosCommand::Add {
            label,
            address,
            phone,
        }) => {
            add_ship_to(
                NewShipTo {
                    label,
                    address,
                    phone,
                },
                ctx,
            )
            .await
        }
        Some(ShipTosCommand::Update {
            id,
            label,
            address,
            phone,
        }) => {
            let update = ShipToUpdate {
                label,
                address,
                phone,
            };
            update_ship_to(&id, update, ctx).await
        }
    }
}

async fn list_ship_tos(ctx: &Context) -> Result<()> {
    let api = ctx.api()?;

    let spinner = ctx.output.spinner(messages::LOADING);
    let result = api.ship_tos().await;
    spinner.finish_and_clear();
    let ship_tos = result.context(messages::LOAD_FAILED)?;

    if !ctx.output.is_json() {
        ctx.output.header("配送先");
    }
    views::render_ship_tos(&ctx.output, &ship_tos);
    Ok(())
}

async fn add_ship_to(ship_to: NewShipTo, ctx: &Context) -> Result<()> {
    if ship_to.label.trim().is_empty() || ship_to.address.trim().is_empty() {
        bail!("Label and address must not be empty");
    }

    let api = ctx.api()?;
    let spinner = ctx.output.spinner(messages::PROCESSING);
    let result = api.create_ship_to(&ship_to).await;
    spinner.finish_and_clear();
    let body = result.context("配送先の登録に失敗しました")?;

    if ctx.output.is_json() {
        ctx.output.json(&body);
    } else {
        ctx.output
            .success(&format!("配送先を登録しました: {}", ship_to.label));
    }
    Ok(())
}

async fn update_ship_to(id: &str, update: ShipToUpdate, ctx: &Context) -> Result<()> {
    if update.is_empty() {
        bail!("Nothing to update: pass --label, --address or --phone");
    }

    let api = ctx.api()?;
    let ship_to_id = ShipToId::new(id);
    let spinner = ctx.output.spinner(messages::PROCESSING);
    let result = api.update_ship_to(&ship_to_id, &update).await;
    spinner.finish_and_clear();
    let body = result.context("配送先の更新に失敗しました")?;

    if ctx.output.is_json() {
        ctx.output.json(&body);
    } else {
        ctx.output
            .success(&format!("配送先を更新しました: {}", ship_to_id));
    }
    Ok(())
}
