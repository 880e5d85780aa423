//! 컨텍스트 명령어

use crate::config::CliConfig;
use crate::context::RepoContext;

pub fn set(server: Option<String>, global: bool) -> anyhow::Result<()> {
    if global {
        let mut config = CliConfig::load().unwrap_or_default();
        if let Some(s) = server {
            config.default_server = Some(s);
        }
        config.save()?;
        println!("Global config updated.");
        return show();
    }

    let mut ctx = RepoContext::load().unwrap_or_default();
    if let Some(s) = server {
        ctx.server_url = Some(s);
    }

    ctx.save()?;
    println!("Context updated.");
    show()
}

pub fn show() -> anyhow::Result<()> {
    let ctx = RepoContext::load().unwrap_or_default();
    let config = CliConfig::load().unwrap_or_default();

    println!("Current context (.edulab/context.json):");
    println!("  server:   {}", ctx.server_url.as_deref().unwrap_or("(not set)"));
    println!("Global config (~/.edulab/config.json):");
    println!("  server:   {}", config.default_server.as_deref().unwrap_or("(not set)"));
    println!("Effective server: {}", ctx.server_url.unwrap_or_else(|| config.server_url()));

    Ok(())
}

pub fn clear() -> anyhow::Result<()> {
    RepoContext::clear()?;
    println!("Context cleared.");
    Ok(())
}
