//! Issuance of the session marker.

use crate::error::{Error, Fault};
use crate::logging::GateLog;
use crate::marker::{CookieAttributes, SessionMarker};
use crate::redirect::{resolve_location, validate_fallback, DEFAULT_FALLBACK_LOCATION};
use crate::request::GateRequest;
use crate::response::{GateResponse, Status};
use crate::verified::Verified;

/// The outcome of issuing a marker for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issuance {
    /// The marker cookie and the redirect target are ready
    Issued {
        /// The full `Set-Cookie` header value
        set_cookie: String,
        /// Where to send the client back to
        location: Verified<String>,
    },
    /// The issuer itself failed
    InternalFault(Fault),
}

impl Issuance {
    /// Returns the status this issuance maps to.
    pub fn status(&self) -> Status {
        match self {
            Issuance::Issued { .. } => Status::Found,
            Issuance::InternalFault(_) => Status::InternalServerError,
        }
    }

    /// Maps the issuance to a response. Does not log.
    pub fn into_response(self) -> GateResponse {
        match self {
            Issuance::Issued {
                set_cookie,
                location,
            } => GateResponse::redirect(set_cookie, location.into_inner()),
            Issuance::InternalFault(_) => GateResponse::new(Status::InternalServerError),
        }
    }
}

/// Sets the session marker and redirects the client back to where it was.
///
/// This performs no authentication of its own. Anyone who can reach the
/// endpoint it is mounted on gets the marker; restricting that endpoint is
/// the host's job.
///
/// # Examples
///
/// ```
/// use admin_gate::web::RequestAdapter;
/// use admin_gate::{SessionIssuer, Status};
///
/// let issuer = SessionIssuer::new();
/// let response = issuer.issue(&RequestAdapter::new().with_original_uri("/admin/reports"));
///
/// assert_eq!(response.status(), Status::Found);
/// assert_eq!(response.location(), Some("/admin/reports"));
/// assert_eq!(
///     response.set_cookie(),
///     Some("ADMIN_OK=1; Path=/; Max-Age=3600; HttpOnly; Secure; SameSite=Lax")
/// );
/// ```
#[derive(Debug)]
pub struct SessionIssuer {
    marker: SessionMarker,
    attributes: CookieAttributes,
    fallback_location: &'static str,
}

impl SessionIssuer {
    /// Creates an issuer for [`SessionMarker::ADMIN`] with
    /// [`CookieAttributes::DEFAULT`], falling back to `/admin/`.
    pub const fn new() -> Self {
        Self {
            marker: SessionMarker::ADMIN,
            attributes: CookieAttributes::DEFAULT,
            fallback_location: DEFAULT_FALLBACK_LOCATION,
        }
    }

    /// Issues a custom marker instead.
    pub fn with_marker(self, marker: SessionMarker) -> Self {
        Self { marker, ..self }
    }

    /// Issues the marker with different cookie attributes.
    pub fn with_attributes(self, attributes: CookieAttributes) -> Self {
        Self { attributes, ..self }
    }

    /// Redirects to `location` when the original URI is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCookie`] if `location` is empty or contains
    /// control characters.
    pub fn with_fallback_location(self, location: &'static str) -> Result<Self, Error> {
        validate_fallback(location)?;
        Ok(Self {
            fallback_location: location,
            ..self
        })
    }

    /// Returns the marker this issuer sets.
    pub fn marker(&self) -> &SessionMarker {
        &self.marker
    }

    /// Builds the issuance without side effects.
    pub fn prepare<R: GateRequest + ?Sized>(&self, request: &R) -> Issuance {
        let original = match request.original_uri() {
            Ok(original) => original,
            Err(fault) => return Issuance::InternalFault(fault),
        };

        match resolve_location(original, self.fallback_location) {
            Ok(location) => Issuance::Issued {
                set_cookie: self.marker.set_cookie(&self.attributes),
                location,
            },
            Err(fault) => Issuance::InternalFault(fault),
        }
    }

    /// Issues the marker and builds the redirect for the host.
    ///
    /// Faults are logged once and answered with `500`.
    pub fn issue<R: GateRequest + ?Sized>(&self, request: &R) -> GateResponse {
        let issuance = self.prepare(request);
        if let Issuance::InternalFault(fault) = &issuance {
            GateLog::ISSUE.fault(fault);
        }
        issuance.into_response()
    }
}

impl Default for SessionIssuer {
    fn default() -> Self {
        Self::new()
    }
}
