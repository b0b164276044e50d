use crate::geo::GeoError;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Country {
    Russia,
    Usa,
    Brazil,
    Germany,
}

impl<'a> TryFrom<&'a str> for Country {
    type Error = GeoError;

    fn try_from(s: &'a str) -> Result<Self, GeoError> {
        // Config is case-insensitive, so "Russia", "russia" and "RUSSIA" are all fine
        match s.trim().to_ascii_lowercase().as_str() {
            "russia" => Ok(Self::Russia),
            "usa" => Ok(Self::Usa),
            "united-states" => Ok(Self::Usa),
            "brazil" => Ok(Self::Brazil),
            "germany" => Ok(Self::Germany),
            _ => Err(GeoError::CountryUnknown(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Country {
    type Error = GeoError;

    fn try_from(s: String) -> Result<Self, GeoError> {
        s.as_str().try_into()
    }
}

impl From<Country> for &'static str {
    fn from(country: Country) -> Self {
        match country {
            Country::Russia => "Russia",
            Country::Usa => "USA",
            Country::Brazil => "Brazil",
            Country::Germany => "Germany",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).into())
    }
}
