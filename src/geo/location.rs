use crate::geo::Country;

use serde::Deserialize;

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub city: String,
    pub country: Country,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub house_number: u32,
}

impl Location {
    pub fn new(
        city: impl Into<String>,
        country: Country,
        street: Option<&str>,
        house_number: u32,
    ) -> Self {
        Self {
            city: city.into(),
            country,
            street: street.map(str::to_owned),
            house_number,
        }
    }
}

/// Location reported for addresses no rule knows about: Moscow, without street and house.
impl Default for Location {
    fn default() -> Self {
        Self::new("Moscow", Country::Russia, None, 0)
    }
}
