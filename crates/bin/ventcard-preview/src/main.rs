//! # ventcard-preview
//!
//! Composition root that stands in for a hosting dashboard: it registers
//! the card type, wires a virtual ventilation unit to the status widget,
//! and re-renders the card in the terminal on a fixed tick.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize logging
//! - Register the card type (the host handshake)
//! - Drive the widget with a fresh snapshot per tick
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no card logic belongs here.

mod config;

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use ventcard_adapter_virtual::VirtualUnit;
use ventcard_app::registry;
use ventcard_app::widget::{LAYOUT_SIZE_HINT, StatusWidget};
use ventcard_domain::config::CardConfig;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let descriptor = registry::register();
    tracing::info!(
        type_tag = descriptor.type_tag,
        rows = LAYOUT_SIZE_HINT,
        "card type registered"
    );

    let mut widget = StatusWidget::new();
    widget.configure(CardConfig::new(&config.card.entity))?;

    let mut unit = VirtualUnit::new(&config.card.entity);
    tracing::info!(stem = unit.keys().stem(), "virtual unit ready");

    let mut interval = tokio::time::interval(Duration::from_millis(config.preview.interval_ms));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                unit.tick();
                let snapshot = unit.snapshot();
                widget.apply_snapshot(&snapshot, config.card.language.as_deref())?;
                if let Some(view) = widget.view() {
                    println!("{view}");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
