//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": ctx.config,
            "baseUrl": ctx.base_url,
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url (resolved)", &ctx.base_url);
    if let Some(ref url) = ctx.config.api.base_url {
        ctx.output.kv("base_url (file)", url);
    }
    ctx.output
        .kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[display]");
    ctx.output.kv("currency", ctx.config.display.currency.code());

    if !ctx.config.farmers.is_empty() {
        ctx.output.info("");
        ctx.output.info("[[farmers]]");
        for farmer in &ctx.config.farmers {
            ctx.output.kv(farmer.id.as_str(), &farmer.name);
        }
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
        }
        None => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "path": null }));
            } else {
                ctx.output.info("No config file found; using defaults.");
                ctx.output.info("Run `procure config init` to create one.");
            }
        }
    }
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.default_config_path();

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}
