use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::item::{CheckedOrder, ReconcilePolicy, WriteMode};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backing file. `~/` expands to the home directory.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub checked: CheckedOrder,
    #[serde(default)]
    pub reconcile: ReconcilePolicy,
    #[serde(default)]
    pub write: WriteMode,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub filter_case_sensitive: bool,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            filter_case_sensitive: false,
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Settings the item store needs, split out of [`Config`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSettings {
    pub order: CheckedOrder,
    pub policy: ReconcilePolicy,
    pub write: WriteMode,
}

impl Config {
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            order: self.checked,
            policy: self.reconcile,
            write: self.write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.file.is_none());
        assert_eq!(config.checked, CheckedOrder::Last);
        assert_eq!(config.reconcile, ReconcilePolicy::Incremental);
        assert_eq!(config.write, WriteMode::Atomic);
        assert!(config.ui.show_key_hints);
        assert!(!config.ui.filter_case_sensitive);
    }

    #[test]
    fn full_config() {
        let config: Config = toml::from_str(
            r##"
file = "~/notes/todo.txt"
checked = "first"
reconcile = "rebuild"
write = "truncate"

[ui]
filter_case_sensitive = true
show_key_hints = false

[ui.colors]
highlight = "#FF0000"
"##,
        )
        .unwrap();
        assert_eq!(config.file.as_deref(), Some("~/notes/todo.txt"));
        let settings = config.store_settings();
        assert_eq!(settings.order, CheckedOrder::First);
        assert_eq!(settings.policy, ReconcilePolicy::Rebuild);
        assert_eq!(settings.write, WriteMode::Truncate);
        assert!(config.ui.filter_case_sensitive);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF0000");
    }
}
