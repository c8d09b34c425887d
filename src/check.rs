//! The auth sub-request check.

use crate::cookie::contains_marker;
use crate::error::Fault;
use crate::logging::GateLog;
use crate::marker::SessionMarker;
use crate::request::GateRequest;
use crate::response::{GateResponse, Status};

/// The outcome of checking one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The cookie header carries the marker
    Allow,
    /// The marker is absent, malformed, or there is no cookie header
    Deny,
    /// The checker itself failed
    InternalFault(Fault),
}

impl Verdict {
    /// Returns the status this verdict maps to.
    pub fn status(&self) -> Status {
        match self {
            Verdict::Allow => Status::NoContent,
            Verdict::Deny => Status::Unauthorized,
            Verdict::InternalFault(_) => Status::InternalServerError,
        }
    }

    /// Maps the verdict to a bodiless response. Does not log.
    pub fn into_response(self) -> GateResponse {
        GateResponse::new(self.status())
    }
}

/// Decides whether a request presents the admin session marker.
///
/// Invoked by the host as an auth sub-request: `204` lets the original
/// request through, `401` sends the client off to be issued a marker, `500`
/// means the checker broke. Responses never carry a body.
///
/// # Examples
///
/// ```
/// use admin_gate::web::RequestAdapter;
/// use admin_gate::{AuthChecker, Status};
///
/// static CHECKER: AuthChecker = AuthChecker::new();
///
/// let request = RequestAdapter::new().with_cookie_header("foo=bar; ADMIN_OK=1; baz=qux");
/// assert_eq!(CHECKER.check(&request).status(), Status::NoContent);
///
/// let request = RequestAdapter::new().with_cookie_header("ADMIN_OK=12");
/// assert_eq!(CHECKER.check(&request).status(), Status::Unauthorized);
/// ```
#[derive(Debug)]
pub struct AuthChecker {
    marker: SessionMarker,
}

impl AuthChecker {
    /// Creates a checker for [`SessionMarker::ADMIN`].
    pub const fn new() -> Self {
        Self {
            marker: SessionMarker::ADMIN,
        }
    }

    /// Creates a checker for a custom marker.
    pub const fn with_marker(marker: SessionMarker) -> Self {
        Self { marker }
    }

    /// Returns the marker this checker looks for.
    pub fn marker(&self) -> &SessionMarker {
        &self.marker
    }

    /// Decides the request without side effects.
    ///
    /// A host fault while reading the cookie header becomes
    /// [`Verdict::InternalFault`]; nothing is logged here.
    pub fn evaluate<R: GateRequest + ?Sized>(&self, request: &R) -> Verdict {
        match request.cookie_header() {
            Ok(Some(header)) if !header.is_empty() => {
                if contains_marker(&header, &self.marker) {
                    Verdict::Allow
                } else {
                    Verdict::Deny
                }
            }
            Ok(_) => Verdict::Deny,
            Err(fault) => Verdict::InternalFault(fault),
        }
    }

    /// Checks the request and builds the response for the host.
    ///
    /// Faults are logged once and answered with `500`. Denials are normal
    /// traffic and are not logged.
    pub fn check<R: GateRequest + ?Sized>(&self, request: &R) -> GateResponse {
        let verdict = self.evaluate(request);
        if let Verdict::InternalFault(fault) = &verdict {
            GateLog::CHECK.fault(fault);
        }
        verdict.into_response()
    }
}

impl Default for AuthChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;
    use crate::test_utils::{count_error_events, FailingRequest};
    use crate::web::RequestAdapter;

    fn evaluate(header: Option<&str>) -> Verdict {
        let mut request = RequestAdapter::new();
        if let Some(header) = header {
            request = request.with_cookie_header(header);
        }
        AuthChecker::new().evaluate(&request)
    }

    #[test]
    fn marker_alone_allows() {
        assert_eq!(evaluate(Some("ADMIN_OK=1")), Verdict::Allow);
    }

    #[test]
    fn marker_between_other_pairs_allows() {
        assert_eq!(evaluate(Some("foo=bar; ADMIN_OK=1; baz=qux")), Verdict::Allow);
    }

    #[test]
    fn wrong_value_denies() {
        assert_eq!(evaluate(Some("ADMIN_OK=12")), Verdict::Deny);
    }

    #[test]
    fn missing_or_empty_header_denies() {
        assert_eq!(evaluate(None), Verdict::Deny);
        assert_eq!(evaluate(Some("")), Verdict::Deny);
    }

    #[test]
    fn host_fault_is_internal_fault() {
        let verdict = AuthChecker::new().evaluate(&FailingRequest::cookie());
        match verdict {
            Verdict::InternalFault(fault) => assert_eq!(fault.kind(), FaultKind::HeaderAccess),
            other => panic!("expected a fault, got {:?}", other),
        }
    }

    #[test]
    fn evaluate_never_logs() {
        let (verdict, errors) =
            count_error_events(|| AuthChecker::new().evaluate(&FailingRequest::cookie()));

        assert_eq!(verdict.status(), Status::InternalServerError);
        assert_eq!(errors, 0);
    }

    #[test]
    fn check_logs_fault_once() {
        let (response, errors) =
            count_error_events(|| AuthChecker::new().check(&FailingRequest::cookie()));

        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(response.headers().count(), 0);
        assert_eq!(errors, 1);
    }

    #[test]
    fn check_does_not_log_denials() {
        let request = RequestAdapter::new().with_cookie_header("foo=bar");
        let (response, errors) = count_error_events(|| AuthChecker::new().check(&request));

        assert_eq!(response.status(), Status::Unauthorized);
        assert_eq!(errors, 0);
    }

    #[test]
    fn custom_marker_is_honoured() {
        let marker = SessionMarker::new("OPS_OK", "yes").expect("valid marker");
        let checker = AuthChecker::with_marker(marker);

        let ops = RequestAdapter::new().with_cookie_header("OPS_OK=yes");
        let admin = RequestAdapter::new().with_cookie_header("ADMIN_OK=1");

        assert_eq!(checker.evaluate(&ops), Verdict::Allow);
        assert_eq!(checker.evaluate(&admin), Verdict::Deny);
        assert_eq!(checker.marker().name(), "OPS_OK");
    }

    #[test]
    fn checker_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthChecker>();
    }
}
