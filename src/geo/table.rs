use crate::geo::{GeoError, GeoTrait, Location};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixRule {
    pub prefix: String,
    pub location: Location,
}

/// Prefix rules loaded from the config, checked in order, first match wins.
#[derive(Debug, Clone, Default)]
pub struct TableGeo {
    rules: Vec<PrefixRule>,
    default: Location,
}

impl TableGeo {
    pub fn new(rules: Vec<PrefixRule>, default: Location) -> Self {
        Self { rules, default }
    }
}

impl GeoTrait for TableGeo {
    fn by_ip(&self, ip: &str) -> Location {
        self.rules
            .iter()
            .find(|rule| ip.starts_with(rule.prefix.as_str()))
            .map(|rule| &rule.location)
            .unwrap_or(&self.default)
            .clone()
    }

    fn by_coordinates(&self, latitude: f64, longitude: f64) -> Result<Location, GeoError> {
        Err(GeoError::CoordinatesUnsupported {
            latitude,
            longitude,
        })
    }
}
