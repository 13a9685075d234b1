//! Docking configuration and the live settings store.
//!
//! The engine never owns settings; a settings collaborator publishes a
//! `DockConfig` snapshot into the [`SettingsStore`] and the engine loads it
//! once per tick. Loads are lock-free so a publish from another thread can
//! never stall the frame.

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Read-only inputs to the docking engine, owned by the settings collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DockConfig {
    /// Master switch; when false the engine does nothing for the tick.
    pub enabled: bool,
    /// Offset of the pink zone relative to the avatar's bottom-center.
    pub snap_zone_offset: Vec2,
    /// Size of the pink zone.
    pub snap_zone_size: Vec2,
    /// User-tunable vertical adjustment applied to the docked position.
    pub vertical_offset: i32,
    /// Avatar visual scale at which no scale compensation applies.
    pub base_scale: f32,
    /// Pixels of vertical compensation per unit of scale below `base_scale`.
    pub base_offset: f32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            snap_zone_offset: Vec2::new(0.0, -5.0),
            snap_zone_size: Vec2::new(100.0, 10.0),
            vertical_offset: 0,
            base_scale: 1.0,
            base_offset: 40.0,
        }
    }
}

/// Lock-free published-snapshot store for [`DockConfig`].
pub struct SettingsStore {
    config: ArcSwap<DockConfig>,
}

impl SettingsStore {
    pub fn new(config: DockConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    pub fn load(&self) -> Arc<DockConfig> {
        self.config.load_full()
    }

    pub fn publish(&self, config: DockConfig) {
        self.config.store(Arc::new(config));
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(DockConfig::default())
    }
}

/// Read a config file if one is given; any failure falls back to defaults.
pub fn load_config(path: Option<&Path>) -> DockConfig {
    let Some(path) = path else {
        return DockConfig::default();
    };
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("Config file {} unreadable, using defaults: {}", path.display(), err);
            return DockConfig::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Config file {} malformed, using defaults: {}", path.display(), err);
            DockConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_tuning() {
        let cfg = DockConfig::default();
        assert!(cfg.enabled);
        assert_eq!(cfg.snap_zone_offset, Vec2::new(0.0, -5.0));
        assert_eq!(cfg.snap_zone_size, Vec2::new(100.0, 10.0));
        assert_eq!(cfg.vertical_offset, 0);
        assert_eq!(cfg.base_scale, 1.0);
        assert_eq!(cfg.base_offset, 40.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: DockConfig = serde_json::from_str(r#"{"verticalOffset": 12}"#).unwrap();
        assert_eq!(cfg.vertical_offset, 12);
        assert_eq!(cfg.snap_zone_size, Vec2::new(100.0, 10.0));
    }

    #[test]
    fn publish_replaces_loaded_snapshot() {
        let store = SettingsStore::default();
        assert!(store.load().enabled);
        let mut cfg = *store.load();
        cfg.enabled = false;
        store.publish(cfg);
        assert!(!store.load().enabled);
    }
}
