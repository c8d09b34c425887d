//! Resolution of the post-issuance redirect target.
//!
//! The original URI is echoed verbatim. There is no allow-list and no
//! same-origin check, so a host that lets callers influence the original URI
//! exposes an open redirect. The only rejection is text that cannot be a
//! header value at all.

use crate::error::{Error, Fault, FaultKind};
use crate::tainted::Tainted;
use crate::verified::Verified;

/// Where the issuer redirects when the original URI is unknown.
pub const DEFAULT_FALLBACK_LOCATION: &str = "/admin/";

/// Picks the `Location` for the redirect.
///
/// Absent or empty original URIs fall back to `fallback`. A URI carrying
/// control characters (CR, LF, NUL, DEL, ...) is a fault: the `Location`
/// header cannot be composed from it.
pub(crate) fn resolve_location(
    original: Option<Tainted<String>>,
    fallback: &'static str,
) -> Result<Verified<String>, Fault> {
    let location = match original {
        Some(uri) if !uri.is_empty() => uri.into_inner(),
        _ => return Ok(Verified::new_unchecked(fallback.to_string())),
    };

    if !is_header_safe(&location) {
        return Err(Fault::new(
            FaultKind::RedirectTarget,
            "original URI contains control characters",
        ));
    }

    Ok(Verified::new_unchecked(location))
}

/// Checks a configured fallback location at start-up.
pub(crate) fn validate_fallback(location: &'static str) -> Result<(), Error> {
    if location.is_empty() {
        return Err(Error::InvalidCookie {
            reason: "fallback location is empty",
        });
    }
    if !is_header_safe(location) {
        return Err(Error::InvalidCookie {
            reason: "fallback location contains control characters",
        });
    }
    Ok(())
}

fn is_header_safe(text: &str) -> bool {
    !text.chars().any(char::is_control)
}
