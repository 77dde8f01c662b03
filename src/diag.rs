//! Request echo for debugging: `/diag` returns the caller's own headers and
//! request target as JSON.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::response::Json;
use crate::Request;

/// What `/diag` reports back to the caller.
///
/// Header names are in canonical `Word-Word` form and serialize in sorted
/// order. Values keep their arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub headers: BTreeMap<String, Vec<String>>,
    pub uri: String,
}

impl DiagnosticReport {
    pub fn from_request(req: &Request) -> Self {
        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in req.headers() {
            headers
                .entry(canonical_header_key(name.as_str()))
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        Self { headers, uri: req.target() }
    }
}

/// `/diag` handler.
pub async fn report(req: Request) -> Json<DiagnosticReport> {
    Json(DiagnosticReport::from_request(&req))
}

/// Canonical MIME form of a header name: `x-forwarded-for` → `X-Forwarded-For`.
///
/// Names holding anything other than token characters are returned unchanged.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_owned();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() };
            upper = c == '-';
            out
        })
        .collect()
}

// RFC 9110 §5.6.2 tchar
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
