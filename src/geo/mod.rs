pub use builtin::{BuiltinGeo, MOSCOW_IP, NEW_YORK_IP};
pub use country::Country;
pub use error::GeoError;
pub use location::Location;
pub use table::{PrefixRule, TableGeo};

mod builtin;
mod country;
mod error;
mod location;
mod table;

use enum_dispatch::enum_dispatch;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(from = "GeoConfig")]
#[enum_dispatch]
pub enum Geo {
    Builtin(BuiltinGeo),
    Table(TableGeo),
}

impl Default for Geo {
    fn default() -> Self {
        BuiltinGeo.into()
    }
}

#[enum_dispatch(Geo)]
pub trait GeoTrait: Send + Sync {
    /// Never fails: addresses nobody knows about resolve to [`Location::default`].
    /// The address is matched as a plain string, it is not parsed.
    fn by_ip(&self, ip: &str) -> Location;

    /// There is no coordinates database, so this is a permanent error.
    fn by_coordinates(&self, latitude: f64, longitude: f64) -> Result<Location, GeoError>;
}

#[derive(Deserialize)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
enum GeoConfig {
    #[serde(alias = "builtin", alias = "built-in")]
    Builtin,
    #[serde(alias = "table")]
    Table {
        #[serde(default)]
        rules: Vec<PrefixRule>,
        #[serde(default)]
        default: Location,
    },
}

impl From<GeoConfig> for Geo {
    fn from(value: GeoConfig) -> Self {
        match value {
            GeoConfig::Builtin => BuiltinGeo.into(),
            GeoConfig::Table { rules, default } => TableGeo::new(rules, default).into(),
        }
    }
}
