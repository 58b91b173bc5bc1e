//! Pick the `Link` header values of the final response out of raw header lines.

/// Decodes one raw header line. Bytes that are not UTF-8 (Latin-1 titles and
/// the like) are replaced so the rest of the line still reaches the matcher.
pub(crate) fn header_line(data: &[u8]) -> String {
    String::from_utf8_lossy(data).trim_end().to_string()
}

/// Collects `Link` header values from header lines as delivered by libcurl.
///
/// With redirects followed, libcurl reports the headers of every response in
/// the chain; each status line (`HTTP/...`) starts a new response, so only
/// the values after the last one are kept.
pub(crate) fn link_values(lines: &[String]) -> Vec<String> {
    let mut links = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            links.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("link") {
                let value = value.trim();
                if !value.is_empty() {
                    links.push(value.to_string());
                }
            }
        }
    }

    links
}
