use crate::geo::{Country, GeoError, GeoTrait, Location};

pub const MOSCOW_IP: &str = "172.0.32.11";
pub const NEW_YORK_IP: &str = "96.44.183.149";

/// Two hard-coded networks, everything else is the default location.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGeo;

impl GeoTrait for BuiltinGeo {
    fn by_ip(&self, ip: &str) -> Location {
        if ip.starts_with("172.") {
            Location::new("Moscow", Country::Russia, Some("Lenina"), 15)
        } else if ip.starts_with("96.") {
            Location::new("New York", Country::Usa, Some("10th Avenue"), 32)
        } else {
            Location::default()
        }
    }

    fn by_coordinates(&self, latitude: f64, longitude: f64) -> Result<Location, GeoError> {
        Err(GeoError::CoordinatesUnsupported {
            latitude,
            longitude,
        })
    }
}
