use crate::error::Fault;
use crate::tainted::Tainted;

/// The request fields the gate reads from its host.
///
/// This is the whole contract between the gate and whatever router invokes
/// it: the raw cookie header for [`AuthChecker`](crate::AuthChecker) and the
/// original request URI for [`SessionIssuer`](crate::SessionIssuer). Hosts
/// hand values over as [`Tainted`] and report their own read failures as a
/// [`Fault`], which the handlers answer with a 500.
///
/// # Examples
///
/// ```
/// use admin_gate::{AuthChecker, Fault, GateRequest, Status, Tainted};
///
/// struct Subrequest<'a> {
///     cookie: Option<&'a str>,
/// }
///
/// impl GateRequest for Subrequest<'_> {
///     fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
///         Ok(self.cookie.map(|c| Tainted::new(c.to_string())))
///     }
///
///     fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
///         Ok(None)
///     }
/// }
///
/// let checker = AuthChecker::new();
/// let response = checker.check(&Subrequest { cookie: Some("ADMIN_OK=1") });
/// assert_eq!(response.status(), Status::NoContent);
/// ```
pub trait GateRequest {
    /// Returns the raw `Cookie` header text, or `None` if the request has none.
    ///
    /// Hosts that receive several `Cookie` fields should join them with `"; "`.
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault>;

    /// Returns the URI the client originally asked for, or `None` if the host
    /// does not know it.
    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault>;
}

impl<R: GateRequest + ?Sized> GateRequest for &R {
    fn cookie_header(&self) -> Result<Option<Tainted<String>>, Fault> {
        (**self).cookie_header()
    }

    fn original_uri(&self) -> Result<Option<Tainted<String>>, Fault> {
        (**self).original_uri()
    }
}
