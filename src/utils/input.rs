/// Trims and lower-cases a country code taken from a request path.
pub fn normalize_country_code(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// True when `code`, once normalized, is exactly two ASCII letters.
pub fn is_valid_alpha2(code: &str) -> bool {
    let code = normalize_country_code(code);
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase())
}

/// Trims an endpoint and leaves exactly one trailing slash; blank stays blank.
pub fn clean_base_url(endpoint: &str) -> String {
    let cleaned = endpoint.trim();
    if cleaned.is_empty() {
        return String::new();
    }
    format!("{}/", cleaned.trim_end_matches('/'))
}
