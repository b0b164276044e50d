use crate::geo::Geo;
use crate::i18n::Localization;
use crate::sender::IP_ADDRESS_HEADER;

use hyper::HeaderMap;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_host")]
    pub host: SocketAddr,
    #[serde(default = "Config::default_log_level")]
    pub log_level: log::Level,
    #[serde(default = "Config::default_ip_headers")]
    pub ip_headers: Vec<String>,
    #[serde(default = "Config::default_ip_headers_recursive")]
    pub ip_headers_recursive: bool,
    #[serde(default, with = "http_serde::header_map")]
    pub response_headers: HeaderMap,
    #[serde(default)]
    pub geo: Geo,
    #[serde(default)]
    pub localization: Localization,
}

impl Config {
    fn default_host() -> SocketAddr {
        ([127, 0, 0, 1], 8080).into()
    }

    fn default_log_level() -> log::Level {
        log::Level::Info
    }

    fn default_ip_headers() -> Vec<String> {
        vec![IP_ADDRESS_HEADER.into()]
    }

    fn default_ip_headers_recursive() -> bool {
        true
    }
}

pub fn parse_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
    let toml_string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml_string)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Country, GeoTrait, Location};
    use crate::i18n::LocalizationTrait;

    #[test]
    fn empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.host, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.ip_headers, vec![IP_ADDRESS_HEADER.to_string()]);
        assert!(config.ip_headers_recursive);
        assert!(config.response_headers.is_empty());
        assert!(matches!(config.geo, Geo::Builtin(_)));
        assert!(matches!(config.localization, Localization::Builtin(_)));
    }

    #[test]
    fn sample_config() {
        let config: Config = toml::from_str(include_str!("../geogreet.toml")).unwrap();
        assert_eq!(config.host, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(
            config.ip_headers,
            vec!["X-Real-IP".to_string(), "X-Forwarded-For".to_string()]
        );
        assert_eq!(
            config.response_headers.get("cache-control").unwrap(),
            "no-store"
        );
        assert_eq!(
            config.geo.by_ip("10.0.0.1"),
            Location::new("Berlin", Country::Germany, Some("Unter den Linden"), 77)
        );
        assert_eq!(
            config.geo.by_ip("172.0.32.11"),
            Location::new("Moscow", Country::Russia, Some("Lenina"), 15)
        );
        assert_eq!(config.geo.by_ip("8.8.8.8"), Location::default());
        assert_eq!(config.localization.locale(Country::Germany), "Willkommen");
        assert_eq!(config.localization.locale(Country::Brazil), "Welcome");
    }

    #[test]
    fn unknown_field() {
        let result: Result<Config, _> = toml::from_str(r#"geolite2 = "GeoLite2-Country.mmdb""#);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_host() {
        let result: Result<Config, _> = toml::from_str(r#"host = "localhost""#);
        assert!(result.is_err());
    }
}
