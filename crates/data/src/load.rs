use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use yatzy_core::GameConfig;

pub const RULESET_FILE: &str = "ruleset.json";

/// Loads `ruleset.json` from an assets directory. A missing file falls back
/// to the default ruleset.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(RULESET_FILE);
    if !path.exists() {
        log::warn!("{} not found, using default ruleset", path.display());
        return Ok(GameConfig::default());
    }
    load_game_config_file(&path)
}

pub fn load_game_config_file(path: &Path) -> anyhow::Result<GameConfig> {
    let config: GameConfig = load_json(path)?;
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    log::debug!(
        "loaded ruleset {}: {} categories, {} re-rolls per turn",
        path.display(),
        config.categories.len(),
        config.rerolls_per_turn
    );
    Ok(config)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
