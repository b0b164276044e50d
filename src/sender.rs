use crate::geo::GeoTrait;
use crate::header_tools::client_ip;
use crate::i18n::LocalizationTrait;

use hyper::HeaderMap;

pub const IP_ADDRESS_HEADER: &str = "x-real-ip";

/// Greets a client in the language of the country its address belongs to.
pub struct MessageSender<G, L> {
    geo: G,
    localization: L,
    ip_headers: Vec<String>,
    ip_headers_recursive: bool,
}

impl<G: GeoTrait, L: LocalizationTrait> MessageSender<G, L> {
    pub fn new(geo: G, localization: L) -> Self {
        Self {
            geo,
            localization,
            ip_headers: vec![IP_ADDRESS_HEADER.to_owned()],
            ip_headers_recursive: true,
        }
    }

    /// Replaces [`IP_ADDRESS_HEADER`] with a list of headers, checked in order.
    pub fn with_ip_headers(mut self, ip_headers: Vec<String>, recursive: bool) -> Self {
        self.ip_headers = ip_headers;
        self.ip_headers_recursive = recursive;
        self
    }

    /// A request without a usable address header is treated as an empty address,
    /// so it gets the default location.
    pub fn send(&self, headers: &HeaderMap) -> &str {
        let ip = client_ip(headers, &self.ip_headers, self.ip_headers_recursive).unwrap_or("");
        let location = self.geo.by_ip(ip);
        log::debug!(
            "{:?} is located in {}, {}",
            ip,
            location.city,
            location.country
        );
        self.localization.locale(location.country)
    }
}
