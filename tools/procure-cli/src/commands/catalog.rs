//! Supplier and product listing commands.

use anyhow::{Context as _, Result};
use procure_commerce::{Farmer, FarmerId};

use super::{CatalogArgs, FarmersArgs};
use crate::context::Context;
use crate::messages;
use crate::views;

/// Run the farmers command.
pub async fn farmers(args: FarmersArgs, ctx: &Context) -> Result<()> {
    let farmers = load_farmers(ctx, args.remote).await?;

    if ctx.output.is_json() {
        ctx.output.json(&farmers);
        return Ok(());
    }

    ctx.output.header("農家");
    if farmers.is_empty() {
        ctx.output.info("農家が登録されていません");
        return Ok(());
    }
    for farmer in &farmers {
        ctx.output.kv(farmer.id.as_str(), &farmer.name);
    }
    Ok(())
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;
    let farmer_id = FarmerId::new(args.farmer);

    let spinner = ctx.output.spinner(messages::LOADING);
    let result = api.products(&farmer_id).await;
    spinner.finish_and_clear();
    let products = result.context(messages::LOAD_FAILED)?;

    if !ctx.output.is_json() {
        ctx.output.header(&format!("商品一覧 ({})", farmer_id));
    }
    views::render_products(&ctx.output, &products, ctx.currency());
    Ok(())
}

/// Suppliers from the config file, or from the service when none are
/// configured or `remote` is set.
pub(crate) async fn load_farmers(ctx: &Context, remote: bool) -> Result<Vec<Farmer>> {
    if !remote && !ctx.config.farmers.is_empty() {
        return Ok(ctx.config.farmers.clone());
    }

    let api = ctx.api()?;
    let spinner = ctx.output.spinner(messages::LOADING);
    let result = api.farmers().await;
    spinner.finish_and_clear();
    result.context(messages::LOAD_FAILED)
}
