use uuid::Uuid;

use crate::utils::error::CustomError;

/// Name reported in every JSON envelope
pub fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Parse a path segment into a UUID, rejecting anything malformed
pub fn parse_id(raw: &str, what: &str) -> Result<Uuid, CustomError> {
    Uuid::parse_str(raw).map_err(|_| CustomError::BadRequestError(format!("Invalid {} ID", what)))
}

/// Escape text for use inside HTML element bodies and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
