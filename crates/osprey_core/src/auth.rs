use crate::error::ResolveError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Extracts the caller's token from an `Authorization` header value.
///
/// Only the `Basic` scheme is accepted. The decoded `user:password` pair is
/// split on the first colon and the password half is the token; the username
/// is discarded without being looked at. Every malformation (missing header,
/// wrong scheme, bad base64, no colon) collapses into the same
/// [`ResolveError::AuthMissing`], so callers cannot tell them apart.
pub fn token_from_header(header: Option<&str>) -> Result<String, ResolveError> {
    let header = header.ok_or(ResolveError::AuthMissing)?;

    let (scheme, payload) = header.split_once(' ').ok_or(ResolveError::AuthMissing)?;
    if scheme != "Basic" {
        return Err(ResolveError::AuthMissing);
    }

    let decoded = BASE64
        .decode(payload)
        .map_err(|_| ResolveError::AuthMissing)?;
    let decoded = String::from_utf8(decoded).map_err(|_| ResolveError::AuthMissing)?;

    let (_user, token) = decoded.split_once(':').ok_or(ResolveError::AuthMissing)?;

    Ok(token.to_string())
}
