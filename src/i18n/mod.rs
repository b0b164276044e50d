pub use builtin::{BuiltinLocalization, DEFAULT_GREETING, RUSSIAN_GREETING};
pub use table::TableLocalization;

mod builtin;
mod table;

use crate::geo::Country;

use enum_dispatch::enum_dispatch;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(from = "LocalizationConfig")]
#[enum_dispatch]
pub enum Localization {
    Builtin(BuiltinLocalization),
    Table(TableLocalization),
}

impl Default for Localization {
    fn default() -> Self {
        BuiltinLocalization.into()
    }
}

#[enum_dispatch(Localization)]
pub trait LocalizationTrait: Send + Sync {
    /// Greeting for visitors from `country`, never fails.
    fn locale(&self, country: Country) -> &str;
}

#[derive(Deserialize)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
enum LocalizationConfig {
    #[serde(alias = "builtin", alias = "built-in")]
    Builtin,
    #[serde(alias = "table")]
    Table {
        #[serde(default)]
        greetings: HashMap<Country, String>,
        #[serde(default = "LocalizationConfig::default_greeting")]
        default: String,
    },
}

impl LocalizationConfig {
    fn default_greeting() -> String {
        DEFAULT_GREETING.into()
    }
}

impl From<LocalizationConfig> for Localization {
    fn from(value: LocalizationConfig) -> Self {
        match value {
            LocalizationConfig::Builtin => BuiltinLocalization.into(),
            LocalizationConfig::Table { greetings, default } => {
                TableLocalization::new(greetings, default).into()
            }
        }
    }
}
