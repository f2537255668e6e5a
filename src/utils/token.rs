// ============================================================================
// TOKEN - Client-side JWT expiry check (no signature verification)
// ============================================================================

use base64::{engine::general_purpose, Engine as _};

/// Reads the `exp` claim (seconds since epoch) from a JWT payload
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_f64().map(|exp| exp as i64)
}

/// A token is usable strictly before its `exp`; undecodable tokens count as expired
pub fn token_expired(token: &str, now_secs: i64) -> bool {
    match token_expiry(token) {
        Some(exp) => now_secs >= exp,
        None => true,
    }
}
