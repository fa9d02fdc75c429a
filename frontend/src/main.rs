#![recursion_limit = "512"]

mod app;
mod components;

use anyhow::{Context, Result};
use log::warn;
use shared::AppConfig;

/// Reads the configuration baked in at build time, if any.
fn load_config(raw: Option<&str>) -> Result<AppConfig> {
    match raw {
        Some(json) => AppConfig::from_json(json).context("reading PROJMGR_CONFIG"),
        None => Ok(AppConfig::default()),
    }
}

pub fn main() {
    let config = load_config(option_env!("PROJMGR_CONFIG"));
    let level = config.as_ref().map(|c| c.level()).unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = config.unwrap_or_else(|err| {
        warn!("{:#}, using defaults", err);
        AppConfig::default()
    });

    yew::start_app_with_props::<app::App>(app::Props {
        rules: config.rules,
    });
}
