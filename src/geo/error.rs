use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeoError {
    #[error(r#"country "{0}" is not recognised"#)]
    CountryUnknown(String),
    #[error("lookup by coordinates ({latitude}, {longitude}) is not supported")]
    CoordinatesUnsupported { latitude: f64, longitude: f64 },
}
