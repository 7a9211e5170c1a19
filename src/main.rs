//=========================================================================
// aetheric_boot
//
// Opens a native window and bootstraps a blank first scene.
//
// Usage:
//   aetheric_boot [config.toml]
//
// Log level follows RUST_LOG (default: info).
//
//=========================================================================

use anyhow::Context;
use log::info;

use aetheric_boot::config::BootConfig;
use aetheric_boot::EngineBuilder;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => BootConfig::load(&path).with_context(|| format!("loading {}", path))?,
        None => BootConfig::default(),
    };
    info!("Platform: {}", config.platform_kind());

    EngineBuilder::new()
        .with_config(config)
        .build()
        .run()
        .context("engine terminated with an error")
}
