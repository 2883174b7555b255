//! Destination URL validation for incoming create requests.

use url::Url;

/// Returns true iff `input` parses as an absolute URL with scheme `http` or
/// `https` and contains no ASCII control characters.
///
/// The URL is stored exactly as given; it is not normalized. The parser
/// would percent-encode control characters, but the stored string must be
/// usable as a `Location` header verbatim.
pub fn is_valid_http_url(input: &str) -> bool {
    if input.bytes().any(|b| b.is_ascii_control()) {
        return false;
    }

    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
