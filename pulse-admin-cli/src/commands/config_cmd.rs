use anyhow::Result;
use std::process::Command;

use super::Context;
use crate::config::Config;

pub fn show_config(ctx: &Context) -> Result<()> {
    let config_str = toml::to_string_pretty(&ctx.config)?;

    println!("Current Configuration ({})", ctx.config_path.display());
    println!("────────────────────────────────");
    println!();
    println!("{}", config_str);

    Ok(())
}

pub fn edit_config(ctx: &Context) -> Result<()> {
    let config_file = &ctx.config_path;

    // Ensure config file exists
    if !config_file.exists() {
        Config::default().save_to(config_file)?;
    }

    // Open in default editor
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

    Command::new(editor).arg(config_file).status()?;

    let config = Config::load_from(config_file)?;
    println!("✓ Configuration saved! Gateway: {}", config.api.base_url);

    Ok(())
}

pub fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let config_file = &ctx.config_path;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save_to(config_file)?;

    println!("✓ Configuration initialized at: {}", config_file.display());
    println!();
    println!("You can edit it with: pulse-admin-cli config edit");

    Ok(())
}
