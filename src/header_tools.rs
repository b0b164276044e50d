use hyper::HeaderMap;

/// Raw client address from the first of `header_names` present in `headers`.
///
/// `recursive` picks the client-most value (the first one) of a repeated or comma-separated
/// header, otherwise the last one is used. The value is not parsed as an IP address, any UTF-8
/// is passed through.
pub fn client_ip<'a>(
    headers: &'a HeaderMap,
    header_names: &[String],
    recursive: bool,
) -> Option<&'a str> {
    header_names
        .iter()
        .filter_map(|name| {
            let values = headers.get_all(name.as_str());
            let mut it_values = values.iter();
            if recursive {
                it_values.next()
            } else {
                it_values.next_back()
            }
        })
        .next()
        .and_then(|value| {
            let value = std::str::from_utf8(value.as_bytes()).ok()?;
            let mut split = value.split(',');
            if recursive {
                split.next()
            } else {
                split.next_back()
            }
        })
        .map(str::trim)
}
